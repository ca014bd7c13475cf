use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::DownPayment;

// ==============================================================================
// Rental financing
// ==============================================================================

/// The operating side of a rental property.
///
/// `property_tax` and `insurance` are annual amounts; `hoa_fees` and
/// `maintenance` are monthly. Vacancy and management are percentages of the
/// gross monthly rent (5 means 5%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyInputs {
    pub purchase_price: Decimal,
    pub monthly_rent: Decimal,
    pub property_tax: Decimal,
    pub insurance: Decimal,
    pub hoa_fees: Decimal,
    pub maintenance: Decimal,
    pub vacancy_rate_pct: Decimal,
    pub property_management_rate_pct: Decimal,
}

impl Default for PropertyInputs {
    fn default() -> Self {
        Self {
            purchase_price: Decimal::ZERO,
            monthly_rent: Decimal::ZERO,
            property_tax: Decimal::ZERO,
            insurance: Decimal::ZERO,
            hoa_fees: Decimal::ZERO,
            maintenance: Decimal::ZERO,
            vacancy_rate_pct: dec!(5),
            property_management_rate_pct: Decimal::ZERO,
        }
    }
}

/// The loan terms used to acquire a rental property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancingInputs {
    /// 0 to 100.
    pub down_payment_pct: Decimal,
    pub interest_rate_pct: Decimal,
    pub loan_term_years: u32,
    pub closing_costs: Decimal,
}

impl Default for FinancingInputs {
    fn default() -> Self {
        Self {
            down_payment_pct: dec!(20),
            interest_rate_pct: dec!(5),
            loan_term_years: 30,
            closing_costs: Decimal::ZERO,
        }
    }
}

/// Both halves of a rental financing calculation, edited together by a host.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RentalScenario {
    pub property: PropertyInputs,
    pub financing: FinancingInputs,
}

// ==============================================================================
// Fix and flip
// ==============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlipInputs {
    pub purchase_price: Decimal,
    pub repair_costs: Decimal,
    pub holding_costs: Decimal,
    pub selling_price: Decimal,
    pub selling_costs: Decimal,
}

// ==============================================================================
// Maximum allowable offer
// ==============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaoInputs {
    pub after_repair_value: Decimal,
    pub repair_costs: Decimal,
    pub desired_profit: Decimal,
    pub holding_costs: Decimal,
    pub selling_costs: Decimal,
}

// ==============================================================================
// Side-by-side comparison
// ==============================================================================

/// One of the two properties being compared. Rent and expenses are monthly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertyCandidate {
    pub name: String,
    pub price: Decimal,
    pub monthly_rent: Decimal,
    pub monthly_expenses: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComparisonInputs {
    pub first: PropertyCandidate,
    pub second: PropertyCandidate,
}

// ==============================================================================
// Project financing
// ==============================================================================

/// A named, one-off project expense (permits, staging, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomExpense {
    pub id: Uuid,
    pub name: String,
    pub amount: Decimal,
}

impl CustomExpense {
    pub fn new(name: impl Into<String>, amount: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
        }
    }
}

/// The property side of a value-add project that is bought with a loan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectPropertyInputs {
    pub purchase_price: Decimal,
    pub after_repair_value: Decimal,
    pub repair_costs: Decimal,
    pub closing_costs: Decimal,
    pub holding_costs: Decimal,
    pub custom_expenses: Vec<CustomExpense>,
}

impl ProjectPropertyInputs {
    /// Appends a custom expense and returns its id.
    ///
    /// Returns `None` and leaves the list untouched when `name` is blank.
    pub fn add_custom_expense(&mut self, name: &str, amount: Decimal) -> Option<Uuid> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let expense = CustomExpense::new(name, amount);
        let id = expense.id;
        self.custom_expenses.push(expense);
        Some(id)
    }

    /// Removes the custom expense with the given id. Returns whether one was removed.
    pub fn remove_custom_expense(&mut self, id: Uuid) -> bool {
        let before = self.custom_expenses.len();
        self.custom_expenses.retain(|e| e.id != id);
        self.custom_expenses.len() != before
    }

    pub fn custom_expenses_total(&self) -> Decimal {
        self.custom_expenses.iter().map(|e| e.amount).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectLoanInputs {
    pub down_payment: DownPayment,
    pub interest_rate_pct: Decimal,
    pub loan_term_years: u32,
    /// Origination points as a percentage of the loan amount.
    pub points_pct: Decimal,
    pub other_fees: Decimal,
}

impl Default for ProjectLoanInputs {
    fn default() -> Self {
        Self {
            down_payment: DownPayment::default(),
            interest_rate_pct: Decimal::ZERO,
            loan_term_years: 30,
            points_pct: Decimal::ZERO,
            other_fees: Decimal::ZERO,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectInputs {
    pub property: ProjectPropertyInputs,
    pub loan: ProjectLoanInputs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_calculator_starting_values() {
        let property = PropertyInputs::default();
        assert_eq!(property.purchase_price, Decimal::ZERO);
        assert_eq!(property.vacancy_rate_pct, dec!(5));

        let financing = FinancingInputs::default();
        assert_eq!(financing.down_payment_pct, dec!(20));
        assert_eq!(financing.interest_rate_pct, dec!(5));
        assert_eq!(financing.loan_term_years, 30);
        assert_eq!(financing.closing_costs, Decimal::ZERO);
    }

    #[test]
    fn partial_payload_fills_missing_fields_with_defaults() {
        let property: PropertyInputs =
            serde_json::from_str(r#"{"purchase_price":"250000"}"#).unwrap();
        assert_eq!(property.purchase_price, dec!(250000));
        assert_eq!(property.vacancy_rate_pct, dec!(5));
    }

    #[test]
    fn blank_custom_expense_name_is_ignored() {
        let mut property = ProjectPropertyInputs::default();
        assert!(property.add_custom_expense("   ", dec!(100)).is_none());
        assert!(property.custom_expenses.is_empty());
    }

    #[test]
    fn custom_expenses_can_be_added_and_removed() {
        let mut property = ProjectPropertyInputs::default();
        let permits = property.add_custom_expense("Permits", dec!(1500)).unwrap();
        property.add_custom_expense("Staging", dec!(2500)).unwrap();
        assert_eq!(property.custom_expenses_total(), dec!(4000));

        assert!(property.remove_custom_expense(permits));
        assert!(!property.remove_custom_expense(permits));
        assert_eq!(property.custom_expenses_total(), dec!(2500));
    }
}
