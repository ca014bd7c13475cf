use crate::Calculator;
use core_types::{
    CalculatorError, CandidateMetrics, ComparisonInputs, ComparisonResults, PropertyCandidate,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// A stateless calculator that evaluates two properties side by side.
///
/// Both candidates must have a positive price before either is evaluated.
/// Each side is then computed on its own with the simplified cash flow, cap
/// rate and ROI formulas.
#[derive(Debug, Default, Clone, Copy)]
pub struct ComparisonAnalyzer;

impl ComparisonAnalyzer {
    pub fn new() -> Self {
        Self
    }

    fn metrics(candidate: &PropertyCandidate) -> CandidateMetrics {
        let annual_noi = candidate.monthly_rent * dec!(12) - candidate.monthly_expenses * dec!(12);
        let monthly_cash_flow = candidate.monthly_rent - candidate.monthly_expenses;

        CandidateMetrics {
            monthly_cash_flow,
            cap_rate_pct: annual_noi / candidate.price * dec!(100),
            roi_pct: monthly_cash_flow * dec!(12) / candidate.price * dec!(100),
        }
    }
}

impl Calculator for ComparisonAnalyzer {
    type Inputs = ComparisonInputs;
    type Results = ComparisonResults;

    fn evaluate(&self, inputs: &ComparisonInputs) -> Result<ComparisonResults, CalculatorError> {
        if inputs.first.price <= Decimal::ZERO || inputs.second.price <= Decimal::ZERO {
            tracing::debug!(
                first_price = %inputs.first.price,
                second_price = %inputs.second.price,
                "Rejected comparison inputs."
            );
            return Err(CalculatorError::invalid_input(
                "Both property prices must be greater than 0",
            ));
        }

        Ok(ComparisonResults {
            first: Self::metrics(&inputs.first),
            second: Self::metrics(&inputs.second),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates() -> ComparisonInputs {
        ComparisonInputs {
            first: PropertyCandidate {
                name: "Maple St".to_string(),
                price: dec!(150000),
                monthly_rent: dec!(1500),
                monthly_expenses: dec!(400),
            },
            second: PropertyCandidate {
                name: "Oak Ave".to_string(),
                price: dec!(180000),
                monthly_rent: dec!(1700),
                monthly_expenses: dec!(500),
            },
        }
    }

    #[test]
    fn both_sides_are_evaluated_independently() {
        let results = ComparisonAnalyzer::new().evaluate(&candidates()).unwrap();

        assert_eq!(results.first.monthly_cash_flow, dec!(1100));
        assert_eq!(results.first.cap_rate_pct, dec!(8.8));
        assert_eq!(results.first.roi_pct, dec!(8.8));

        assert_eq!(results.second.monthly_cash_flow, dec!(1200));
        assert_eq!(results.second.cap_rate_pct, dec!(8.0));
        assert_eq!(results.second.roi_pct, dec!(8.0));
    }

    #[test]
    fn swapping_candidates_swaps_results() {
        let inputs = candidates();
        let swapped = ComparisonInputs {
            first: inputs.second.clone(),
            second: inputs.first.clone(),
        };
        let analyzer = ComparisonAnalyzer::new();
        let results = analyzer.evaluate(&inputs).unwrap();
        let swapped_results = analyzer.evaluate(&swapped).unwrap();
        assert_eq!(results.first, swapped_results.second);
        assert_eq!(results.second, swapped_results.first);
    }

    #[test]
    fn either_price_missing_fails_the_whole_comparison() {
        let mut first_missing = candidates();
        first_missing.first.price = Decimal::ZERO;
        let mut second_missing = candidates();
        second_missing.second.price = dec!(-5);

        let analyzer = ComparisonAnalyzer::new();
        for inputs in [first_missing, second_missing] {
            assert_eq!(
                analyzer.evaluate(&inputs),
                Err(CalculatorError::InvalidInput(
                    "Both property prices must be greater than 0".to_string()
                ))
            );
        }
    }
}
