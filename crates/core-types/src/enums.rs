use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Identifies the persistence slot owned by a calculator.
///
/// Each calculator owns its own keys, so saving one never touches another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StorageKey {
    FinancingProperty,
    FinancingTerms,
    Flip,
    Mao,
    Comparison,
}

impl StorageKey {
    /// Every key in use, in the order they are cleared by a global reset.
    pub const ALL: [StorageKey; 5] = [
        StorageKey::FinancingProperty,
        StorageKey::FinancingTerms,
        StorageKey::Flip,
        StorageKey::Mao,
        StorageKey::Comparison,
    ];

    /// Returns the stable string form used by the stores.
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::FinancingProperty => "financing-property",
            StorageKey::FinancingTerms => "financing-terms",
            StorageKey::Flip => "flip",
            StorageKey::Mao => "mao",
            StorageKey::Comparison => "comparison",
        }
    }
}

impl std::fmt::Display for StorageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the down payment of a project loan is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DownPayment {
    /// A percentage of the purchase price (20 means 20%).
    Percent(Decimal),
    /// A fixed cash amount.
    Amount(Decimal),
}

impl DownPayment {
    /// Resolves the down payment to a cash amount for the given purchase price.
    pub fn amount_for(&self, purchase_price: Decimal) -> Decimal {
        match self {
            DownPayment::Percent(pct) => purchase_price * (*pct / dec!(100)),
            DownPayment::Amount(amount) => *amount,
        }
    }
}

impl Default for DownPayment {
    fn default() -> Self {
        DownPayment::Percent(dec!(20))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_keys_are_distinct() {
        let mut names: Vec<&str> = StorageKey::ALL.iter().map(|k| k.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), StorageKey::ALL.len());
    }

    #[test]
    fn storage_key_serializes_as_its_string_form() {
        for key in StorageKey::ALL {
            let json = serde_json::to_string(&key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.as_str()));
        }
    }

    #[test]
    fn down_payment_resolves_percent_and_amount() {
        assert_eq!(DownPayment::Percent(dec!(25)).amount_for(dec!(200000)), dec!(50000));
        assert_eq!(DownPayment::Amount(dec!(12345)).amount_for(dec!(200000)), dec!(12345));
    }
}
