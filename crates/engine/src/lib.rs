//! # Cornerstone Engine
//!
//! The layer a host surface (CLI, desktop shell, web handler) talks to. It
//! owns the mutable state of each open calculator and decides when inputs are
//! restored and saved; the calculators themselves stay pure.
//!
//! ## Public API
//!
//! - `Workbench`: shared entry point holding the persistence gateway. Opens
//!   sessions and performs the global reset.
//! - `CalculatorSession`: one open calculator with its current inputs, last
//!   successful results and last error.
//! - `PersistedInputs`: how each Inputs record maps onto storage keys.

pub mod persistence;
pub mod session;

pub use persistence::PersistedInputs;
pub use session::CalculatorSession;

use analytics::Calculator;
use configuration::StorageSettings;
use std::sync::Arc;
use storage::{FileStore, PersistenceGateway};

/// Opens calculator sessions that share one persistence gateway.
#[derive(Debug, Clone)]
pub struct Workbench {
    gateway: PersistenceGateway,
    autosave: bool,
}

impl Workbench {
    pub fn new(gateway: PersistenceGateway, autosave: bool) -> Self {
        Self { gateway, autosave }
    }

    /// A workbench backed by a `FileStore` in the configured data directory.
    pub fn from_settings(settings: &StorageSettings) -> Self {
        tracing::debug!(data_dir = %settings.data_dir.display(), "Opening file store.");
        let store = FileStore::new(settings.data_dir.clone());
        Self::new(PersistenceGateway::new(Arc::new(store)), settings.autosave)
    }

    /// Opens a session, restoring the calculator's last saved inputs if any.
    pub fn open<C>(&self, calculator: C) -> CalculatorSession<C>
    where
        C: Calculator,
        C::Inputs: PersistedInputs,
    {
        CalculatorSession::open(calculator, self.gateway.clone(), self.autosave)
    }

    /// Clears the saved inputs of every calculator.
    ///
    /// Sessions that are already open keep their current state.
    pub fn reset_all(&self) {
        self.gateway.reset_all();
    }

    pub fn gateway(&self) -> &PersistenceGateway {
        &self.gateway
    }
}
