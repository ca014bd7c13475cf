//! # Cornerstone Storage Crate
//!
//! This crate remembers the last inputs of every calculator between runs.
//!
//! ## Architectural Principles
//!
//! - **Layer 3 Adapter:** Everything that touches the disk lives here. The
//!   calculators never see it; the sessions that own them do.
//! - **Capability, not mechanism:** Callers depend on the `KeyValueStore`
//!   trait. `FileStore` keeps one JSON file per key, `MemoryStore` keeps
//!   everything in process.
//! - **Best effort:** `PersistenceGateway` never returns an error. A payload
//!   that cannot be read is treated as absent and a failed write is logged and
//!   dropped, so a storage problem can never block a calculation.
//!
//! ## Public API
//!
//! - `KeyValueStore`, `FileStore`, `MemoryStore`: raw byte storage by key.
//! - `PersistenceGateway`: typed load/save of inputs keyed by `StorageKey`.
//! - `StorageError`: the errors raised by stores.

// Declare the modules that constitute this crate.
pub mod error;
pub mod gateway;
pub mod store;

// Re-export the key components to create a clean, public-facing API.
pub use error::StorageError;
pub use gateway::PersistenceGateway;
pub use store::{FileStore, KeyValueStore, MemoryStore};
