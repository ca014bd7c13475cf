use crate::amortization::monthly_payment;
use crate::{Calculator, percentage};
use core_types::{CalculatorError, ProjectFinancingResults, ProjectInputs};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// A stateless calculator for value-add projects bought with a loan.
///
/// Unlike `FinancingAnalyzer`, which looks at a stabilized rental, this
/// analyzer totals the full project cost (purchase, rehab, carrying costs,
/// interest over the life of the loan, custom line items and loan fees) and
/// measures the margin against the after-repair value.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProjectFinancingAnalyzer;

impl ProjectFinancingAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Calculator for ProjectFinancingAnalyzer {
    type Inputs = ProjectInputs;
    type Results = ProjectFinancingResults;

    fn evaluate(&self, inputs: &ProjectInputs) -> Result<ProjectFinancingResults, CalculatorError> {
        let property = &inputs.property;
        let loan = &inputs.loan;

        let down_payment = loan.down_payment.amount_for(property.purchase_price);
        let loan_amount = property.purchase_price - down_payment;
        if loan_amount <= Decimal::ZERO {
            tracing::debug!(%loan_amount, "Rejected project inputs.");
            return Err(CalculatorError::invalid_input(
                "Loan amount must be greater than 0",
            ));
        }
        if loan.loan_term_years == 0 {
            return Err(CalculatorError::invalid_input(
                "Loan term must be greater than 0",
            ));
        }

        let number_of_payments = loan
            .loan_term_years
            .checked_mul(12)
            .ok_or_else(|| CalculatorError::Calculation("Loan term is too long".to_string()))?;
        let monthly_rate = loan.interest_rate_pct / dec!(100) / dec!(12);
        let payment = monthly_payment(loan_amount, monthly_rate, number_of_payments)?;

        let total_interest = payment
            .checked_mul(Decimal::from(number_of_payments))
            .map(|total_paid| total_paid - loan_amount)
            .ok_or_else(|| CalculatorError::Calculation("Total interest overflowed".to_string()))?;
        // Points and other fees are part of the project cost.
        let financing_fees = loan_amount * (loan.points_pct / dec!(100)) + loan.other_fees;

        let total_cost = property.purchase_price
            + property.repair_costs
            + property.closing_costs
            + property.holding_costs
            + total_interest
            + property.custom_expenses_total()
            + financing_fees;

        let margin = property.after_repair_value - total_cost;

        Ok(ProjectFinancingResults {
            loan_amount,
            monthly_payment: payment,
            total_interest,
            total_cost,
            cash_on_cash_return_pct: percentage(margin, down_payment),
            roi_pct: percentage(margin, total_cost),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::{DownPayment, ProjectLoanInputs, ProjectPropertyInputs};

    fn interest_free_project() -> ProjectInputs {
        ProjectInputs {
            property: ProjectPropertyInputs {
                purchase_price: dec!(100000),
                after_repair_value: dec!(180000),
                repair_costs: dec!(30000),
                closing_costs: dec!(3000),
                holding_costs: dec!(2000),
                custom_expenses: Vec::new(),
            },
            loan: ProjectLoanInputs {
                down_payment: DownPayment::Percent(dec!(20)),
                interest_rate_pct: Decimal::ZERO,
                loan_term_years: 1,
                points_pct: Decimal::ZERO,
                other_fees: Decimal::ZERO,
            },
        }
    }

    #[test]
    fn interest_free_loan_costs_nothing_extra() {
        let results = ProjectFinancingAnalyzer::new()
            .evaluate(&interest_free_project())
            .unwrap();
        assert_eq!(results.loan_amount, dec!(80000));
        assert_eq!(results.monthly_payment.round_dp(2), dec!(6666.67));
        assert_eq!(results.total_interest.round_dp(8), Decimal::ZERO);
        assert_eq!(results.total_cost.round_dp(8), dec!(135000));
        // 45000 margin over 20000 down and over 135000 total.
        assert_eq!(results.cash_on_cash_return_pct.unwrap().round_dp(2), dec!(225));
        assert_eq!(results.roi_pct.unwrap().round_dp(2), dec!(33.33));
    }

    #[test]
    fn points_fees_and_custom_expenses_raise_total_cost() {
        let mut inputs = interest_free_project();
        inputs.loan.points_pct = dec!(2);
        inputs.loan.other_fees = dec!(500);
        inputs.property.add_custom_expense("Permits", dec!(1200));
        let results = ProjectFinancingAnalyzer::new().evaluate(&inputs).unwrap();
        // 135000 + 1600 points + 500 fees + 1200 permits
        assert_eq!(results.total_cost.round_dp(8), dec!(138300));
    }

    #[test]
    fn interest_accrues_over_the_life_of_the_loan() {
        let mut inputs = interest_free_project();
        inputs.loan.interest_rate_pct = dec!(6);
        inputs.loan.loan_term_years = 30;
        inputs.loan.down_payment = DownPayment::Amount(dec!(25000));
        let results = ProjectFinancingAnalyzer::new().evaluate(&inputs).unwrap();
        assert_eq!(results.loan_amount, dec!(75000));
        assert_eq!(results.monthly_payment.round_dp(2), dec!(449.66));
        assert_eq!(
            results.total_interest,
            results.monthly_payment * dec!(360) - dec!(75000)
        );
        assert!(results.total_interest > dec!(86000));
    }

    #[test]
    fn high_rate_long_term_loan_evaluates() {
        let mut inputs = interest_free_project();
        inputs.property.purchase_price = dec!(1250000);
        inputs.loan.interest_rate_pct = dec!(150);
        inputs.loan.loan_term_years = 40;
        let results = ProjectFinancingAnalyzer::new().evaluate(&inputs).unwrap();
        assert_eq!(results.loan_amount, dec!(1000000));
        assert_eq!(results.monthly_payment.round_dp(2), dec!(125000));
        // 125000 * 480 - 1000000
        assert_eq!(results.total_interest.round_dp(2), dec!(59000000));
    }

    #[test]
    fn fully_paid_purchase_has_no_loan_to_finance() {
        let mut inputs = interest_free_project();
        inputs.loan.down_payment = DownPayment::Percent(dec!(100));
        assert_eq!(
            ProjectFinancingAnalyzer::new().evaluate(&inputs),
            Err(CalculatorError::InvalidInput(
                "Loan amount must be greater than 0".to_string()
            ))
        );
    }

    #[test]
    fn no_money_down_leaves_cash_on_cash_undefined() {
        let mut inputs = interest_free_project();
        inputs.loan.down_payment = DownPayment::Amount(Decimal::ZERO);
        let results = ProjectFinancingAnalyzer::new().evaluate(&inputs).unwrap();
        assert_eq!(results.cash_on_cash_return_pct, None);
        assert!(results.roi_pct.is_some());
    }
}
