//! # Cornerstone Core Types
//!
//! The shared vocabulary of the workspace: every Inputs and Results record that
//! flows between a host surface and the calculators, the persistence keys, and
//! the single error type the calculators return.
//!
//! All records are plain values. Inputs are built from their defaults, edited
//! field by field by the host and passed whole into an analyzer; Results are
//! produced fresh by every evaluation.

pub mod enums;
pub mod error;
pub mod inputs;
pub mod results;

// Re-export the core types to provide a clean public API.
pub use enums::{DownPayment, StorageKey};
pub use error::CalculatorError;
pub use inputs::{
    ComparisonInputs, CustomExpense, FinancingInputs, FlipInputs, MaoInputs, ProjectInputs,
    ProjectLoanInputs, ProjectPropertyInputs, PropertyCandidate, PropertyInputs, RentalScenario,
};
pub use results::{
    CandidateMetrics, ComparisonResults, FinancingResults, FlipResults, MaoResults,
    ProjectFinancingResults,
};
