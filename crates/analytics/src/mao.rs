use crate::Calculator;
use core_types::{CalculatorError, MaoInputs, MaoResults};
use rust_decimal::Decimal;

/// A stateless calculator for the highest price a wholesaler or flipper can
/// offer and still keep the desired profit.
#[derive(Debug, Default, Clone, Copy)]
pub struct MaoAnalyzer;

impl MaoAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Calculator for MaoAnalyzer {
    type Inputs = MaoInputs;
    type Results = MaoResults;

    fn evaluate(&self, inputs: &MaoInputs) -> Result<MaoResults, CalculatorError> {
        if inputs.after_repair_value <= Decimal::ZERO {
            tracing::debug!(arv = %inputs.after_repair_value, "Rejected MAO inputs.");
            return Err(CalculatorError::invalid_input(
                "After repair value must be greater than 0",
            ));
        }

        let total_costs = inputs.repair_costs
            + inputs.holding_costs
            + inputs.selling_costs
            + inputs.desired_profit;

        // Not clamped at zero: a negative offer means the deal cannot work.
        let maximum_allowable_offer = inputs.after_repair_value - total_costs;

        Ok(MaoResults {
            maximum_allowable_offer,
            total_costs,
            profit: inputs.desired_profit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn deal() -> MaoInputs {
        MaoInputs {
            after_repair_value: dec!(150000),
            repair_costs: dec!(25000),
            desired_profit: dec!(20000),
            holding_costs: dec!(3000),
            selling_costs: dec!(9000),
        }
    }

    #[test]
    fn offer_leaves_room_for_costs_and_profit() {
        let results = MaoAnalyzer::new().evaluate(&deal()).unwrap();
        assert_eq!(results.total_costs, dec!(57000));
        assert_eq!(results.maximum_allowable_offer, dec!(93000));
        assert_eq!(results.profit, dec!(20000));
    }

    #[test]
    fn unworkable_deal_yields_negative_offer() {
        let inputs = MaoInputs {
            repair_costs: dec!(140000),
            ..deal()
        };
        let results = MaoAnalyzer::new().evaluate(&inputs).unwrap();
        assert_eq!(results.maximum_allowable_offer, dec!(-22000));
    }

    #[test]
    fn zero_arv_is_rejected() {
        let inputs = MaoInputs {
            after_repair_value: Decimal::ZERO,
            ..deal()
        };
        assert_eq!(
            MaoAnalyzer::new().evaluate(&inputs),
            Err(CalculatorError::InvalidInput(
                "After repair value must be greater than 0".to_string()
            ))
        );
    }
}
