use crate::{Calculator, percentage};
use core_types::{CalculatorError, FlipInputs, FlipResults};
use rust_decimal::Decimal;

/// A stateless calculator for buy, renovate and resell deals.
#[derive(Debug, Default, Clone, Copy)]
pub struct FlipAnalyzer;

impl FlipAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl Calculator for FlipAnalyzer {
    type Inputs = FlipInputs;
    type Results = FlipResults;

    fn evaluate(&self, inputs: &FlipInputs) -> Result<FlipResults, CalculatorError> {
        if inputs.purchase_price <= Decimal::ZERO {
            tracing::debug!(purchase_price = %inputs.purchase_price, "Rejected flip inputs.");
            return Err(CalculatorError::invalid_input(
                "Purchase price must be greater than 0",
            ));
        }

        let total_investment = inputs.purchase_price + inputs.repair_costs + inputs.holding_costs;
        let total_revenue = inputs.selling_price - inputs.selling_costs;
        let profit = total_revenue - total_investment;

        Ok(FlipResults {
            total_investment,
            total_revenue,
            profit,
            roi_pct: percentage(profit, total_investment),
        })
    }
}
