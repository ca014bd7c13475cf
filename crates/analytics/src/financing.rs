use crate::amortization::monthly_payment;
use crate::{Calculator, percentage};
use core_types::{
    CalculatorError, FinancingInputs, FinancingResults, PropertyInputs, RentalScenario,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

const MONTHS_PER_YEAR: u32 = 12;

/// A stateless calculator for the acquisition of a rental property with a loan.
#[derive(Debug, Default, Clone, Copy)]
pub struct FinancingAnalyzer;

impl FinancingAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Computes debt service, operating expenses, cash flow and returns.
    ///
    /// # Arguments
    ///
    /// * `property` - The price, rent and operating costs of the property.
    /// * `financing` - The down payment and loan terms.
    ///
    /// # Returns
    ///
    /// The `FinancingResults`, or `CalculatorError::InvalidInput` when the
    /// purchase price is not positive or the loan term is zero.
    pub fn analyze(
        &self,
        property: &PropertyInputs,
        financing: &FinancingInputs,
    ) -> Result<FinancingResults, CalculatorError> {
        // --- 1. Validation ---
        if property.purchase_price <= Decimal::ZERO {
            tracing::debug!(purchase_price = %property.purchase_price, "Rejected financing inputs.");
            return Err(CalculatorError::invalid_input(
                "Purchase price must be greater than 0",
            ));
        }
        if financing.loan_term_years == 0 {
            return Err(CalculatorError::invalid_input(
                "Loan term must be greater than 0",
            ));
        }

        // --- 2. Loan ---
        let down_payment = property.purchase_price * (financing.down_payment_pct / dec!(100));
        let loan_amount = property.purchase_price - down_payment;

        let monthly_rate = financing.interest_rate_pct / dec!(1200);
        let number_of_payments = financing
            .loan_term_years
            .checked_mul(MONTHS_PER_YEAR)
            .ok_or_else(|| CalculatorError::Calculation("Loan term is too long".to_string()))?;

        let monthly_pi = monthly_payment(loan_amount, monthly_rate, number_of_payments)?;

        // --- 3. Operating expenses ---
        // Vacancy and management are both taken from the gross rent, never
        // from each other.
        let vacancy = property.monthly_rent * (property.vacancy_rate_pct / dec!(100));
        let management =
            property.monthly_rent * (property.property_management_rate_pct / dec!(100));

        let monthly_expenses = property.property_tax / dec!(12)
            + property.insurance / dec!(12)
            + property.hoa_fees
            + property.maintenance
            + vacancy
            + management;

        // --- 4. Cash flow and returns ---
        let monthly_cash_flow = property.monthly_rent - monthly_pi - monthly_expenses;
        let total_investment = down_payment + financing.closing_costs;

        let annual_noi = property.monthly_rent * dec!(12) - monthly_expenses * dec!(12);
        let cap_rate_pct = annual_noi / property.purchase_price * dec!(100);
        let cash_on_cash_return_pct = percentage(monthly_cash_flow * dec!(12), total_investment);

        Ok(FinancingResults {
            monthly_principal_and_interest: monthly_pi,
            monthly_expenses,
            monthly_cash_flow,
            cap_rate_pct,
            cash_on_cash_return_pct,
            total_investment,
        })
    }
}

impl Calculator for FinancingAnalyzer {
    type Inputs = RentalScenario;
    type Results = FinancingResults;

    fn evaluate(&self, inputs: &RentalScenario) -> Result<FinancingResults, CalculatorError> {
        self.analyze(&inputs.property, &inputs.financing)
    }
}
