use crate::store::{KeyValueStore, MemoryStore};
use chrono::{DateTime, Utc};
use core_types::StorageKey;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The JSON document written for every key.
#[derive(Serialize)]
struct Envelope<'a, T> {
    saved_at: DateTime<Utc>,
    inputs: &'a T,
}

#[derive(Deserialize)]
struct StoredInputs<T> {
    saved_at: DateTime<Utc>,
    inputs: T,
}

/// Typed, best-effort access to the saved inputs of each calculator.
///
/// None of the methods fail. Absent, unreadable or undecodable payloads all
/// load as `None`, and write failures are logged and dropped.
#[derive(Debug, Clone)]
pub struct PersistenceGateway {
    store: Arc<dyn KeyValueStore>,
}

impl PersistenceGateway {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// A gateway over a fresh `MemoryStore`.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Returns the last inputs saved under `key`, if any could be decoded.
    pub fn load<T: DeserializeOwned>(&self, key: StorageKey) -> Option<T> {
        self.read_stored::<T>(key).map(|stored| stored.inputs)
    }

    /// When the inputs under `key` were last saved.
    pub fn saved_at(&self, key: StorageKey) -> Option<DateTime<Utc>> {
        self.read_stored::<IgnoredAny>(key).map(|stored| stored.saved_at)
    }

    /// Saves `inputs` under `key`. Failures are logged and otherwise ignored.
    pub fn save<T: Serialize>(&self, key: StorageKey, inputs: &T) {
        let envelope = Envelope {
            saved_at: Utc::now(),
            inputs,
        };
        let bytes = match serde_json::to_vec_pretty(&envelope) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!(%key, error = %e, "Failed to encode inputs; not saved.");
                return;
            }
        };

        match self.store.write(key.as_str(), &bytes) {
            Ok(()) => tracing::debug!(%key, "Inputs saved."),
            Err(e) => tracing::warn!(%key, error = %e, "Failed to save inputs."),
        }
    }

    /// Removes the saved inputs of every calculator.
    ///
    /// Only the stored payloads are affected; sessions that are already open
    /// keep their in-memory state.
    pub fn reset_all(&self) {
        for key in StorageKey::ALL {
            if let Err(e) = self.store.remove(key.as_str()) {
                tracing::warn!(%key, error = %e, "Failed to clear saved inputs.");
            }
        }
        tracing::info!("All saved calculator inputs cleared.");
    }

    fn read_stored<T: DeserializeOwned>(&self, key: StorageKey) -> Option<StoredInputs<T>> {
        let bytes = match self.store.read(key.as_str()) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(%key, error = %e, "Failed to read saved inputs; using defaults.");
                return None;
            }
        };

        match serde_json::from_slice::<StoredInputs<T>>(&bytes) {
            Ok(stored) => Some(stored),
            Err(e) => {
                tracing::warn!(%key, error = %e, "Discarding unreadable saved inputs.");
                None
            }
        }
    }
}
