use core_types::{
    ComparisonInputs, FinancingInputs, FlipInputs, MaoInputs, ProjectInputs, PropertyInputs,
    RentalScenario, StorageKey,
};
use storage::PersistenceGateway;

/// Binds an Inputs record to the storage keys of its calculator.
pub trait PersistedInputs: Sized {
    /// The last saved inputs, or `None` when nothing usable was stored.
    fn load(gateway: &PersistenceGateway) -> Option<Self>;

    fn save(&self, gateway: &PersistenceGateway);
}

/// The rental calculator keeps its two halves under separate keys. Each half
/// is restored on its own; a missing half falls back to its defaults.
impl PersistedInputs for RentalScenario {
    fn load(gateway: &PersistenceGateway) -> Option<Self> {
        let property = gateway.load::<PropertyInputs>(StorageKey::FinancingProperty);
        let financing = gateway.load::<FinancingInputs>(StorageKey::FinancingTerms);
        if property.is_none() && financing.is_none() {
            return None;
        }
        Some(RentalScenario {
            property: property.unwrap_or_default(),
            financing: financing.unwrap_or_default(),
        })
    }

    fn save(&self, gateway: &PersistenceGateway) {
        gateway.save(StorageKey::FinancingProperty, &self.property);
        gateway.save(StorageKey::FinancingTerms, &self.financing);
    }
}

impl PersistedInputs for FlipInputs {
    fn load(gateway: &PersistenceGateway) -> Option<Self> {
        gateway.load(StorageKey::Flip)
    }

    fn save(&self, gateway: &PersistenceGateway) {
        gateway.save(StorageKey::Flip, self);
    }
}

impl PersistedInputs for MaoInputs {
    fn load(gateway: &PersistenceGateway) -> Option<Self> {
        gateway.load(StorageKey::Mao)
    }

    fn save(&self, gateway: &PersistenceGateway) {
        gateway.save(StorageKey::Mao, self);
    }
}

impl PersistedInputs for ComparisonInputs {
    fn load(gateway: &PersistenceGateway) -> Option<Self> {
        gateway.load(StorageKey::Comparison)
    }

    fn save(&self, gateway: &PersistenceGateway) {
        gateway.save(StorageKey::Comparison, self);
    }
}

/// Project financing has no storage slot; every session starts from defaults.
impl PersistedInputs for ProjectInputs {
    fn load(_gateway: &PersistenceGateway) -> Option<Self> {
        None
    }

    fn save(&self, _gateway: &PersistenceGateway) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::sync::Arc;
    use storage::{KeyValueStore, MemoryStore};

    #[test]
    fn rental_scenario_uses_both_financing_keys() {
        let store = Arc::new(MemoryStore::new());
        let gateway = PersistenceGateway::new(store.clone());
        RentalScenario::default().save(&gateway);

        assert!(store.contains("financing-property"));
        assert!(store.contains("financing-terms"));
    }

    #[test]
    fn corrupt_terms_fall_back_to_default_terms() {
        let store = Arc::new(MemoryStore::new());
        let gateway = PersistenceGateway::new(store.clone());
        let scenario = RentalScenario {
            property: PropertyInputs {
                purchase_price: dec!(310000),
                ..PropertyInputs::default()
            },
            financing: FinancingInputs {
                loan_term_years: 15,
                ..FinancingInputs::default()
            },
        };
        scenario.save(&gateway);
        store.write("financing-terms", b"{garbage").unwrap();

        let restored = RentalScenario::load(&gateway).unwrap();
        assert_eq!(restored.property, scenario.property);
        assert_eq!(restored.financing, FinancingInputs::default());
    }

    #[test]
    fn nothing_saved_loads_nothing() {
        let gateway = PersistenceGateway::in_memory();
        assert_eq!(RentalScenario::load(&gateway), None);
        assert_eq!(ProjectInputs::load(&gateway), None);
    }
}
