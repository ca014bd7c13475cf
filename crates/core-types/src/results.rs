use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The output of a rental financing evaluation.
///
/// Percentages are expressed on a 0-100 scale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancingResults {
    pub monthly_principal_and_interest: Decimal,
    pub monthly_expenses: Decimal,
    pub monthly_cash_flow: Decimal,
    pub cap_rate_pct: Decimal,
    pub cash_on_cash_return_pct: Option<Decimal>, // None when nothing was invested up front
    pub total_investment: Decimal,
}

impl FinancingResults {
    pub fn annual_cash_flow(&self) -> Decimal {
        self.monthly_cash_flow * Decimal::from(12)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlipResults {
    pub total_investment: Decimal,
    pub total_revenue: Decimal,
    pub profit: Decimal,
    pub roi_pct: Option<Decimal>, // None when total investment is zero
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaoResults {
    /// May be negative: the deal does not work at the desired profit.
    pub maximum_allowable_offer: Decimal,
    pub total_costs: Decimal,
    pub profit: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateMetrics {
    pub monthly_cash_flow: Decimal,
    pub cap_rate_pct: Decimal,
    pub roi_pct: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResults {
    pub first: CandidateMetrics,
    pub second: CandidateMetrics,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectFinancingResults {
    pub loan_amount: Decimal,
    pub monthly_payment: Decimal,
    pub total_interest: Decimal,
    pub total_cost: Decimal,
    pub cash_on_cash_return_pct: Option<Decimal>, // None with no down payment
    pub roi_pct: Option<Decimal>,
}
