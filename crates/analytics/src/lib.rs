//! # Cornerstone Analytics
//!
//! The calculation engine behind every real-estate calculator: rental
//! financing, fix-and-flip, maximum allowable offer, side-by-side comparison
//! and project financing, plus the amortization math they share.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It has no knowledge of
//!   storage, configuration or any host surface. It depends only on `core-types`.
//! - **Stateless Calculation:** Each analyzer is a stateless calculator. It takes
//!   an Inputs record and produces a fresh Results record or a
//!   `CalculatorError`. The same inputs always produce the same results.
//!
//! ## Public API
//!
//! - `Calculator`: The trait every analyzer implements.
//! - `FinancingAnalyzer`, `FlipAnalyzer`, `MaoAnalyzer`, `ComparisonAnalyzer`,
//!   `ProjectFinancingAnalyzer`: the concrete calculators.
//! - `amortization`: the loan payment formula.

pub mod amortization;
pub mod comparison;
pub mod financing;
pub mod flip;
pub mod mao;
pub mod project;

pub use amortization::monthly_payment;
pub use comparison::ComparisonAnalyzer;
pub use financing::FinancingAnalyzer;
pub use flip::FlipAnalyzer;
pub use mao::MaoAnalyzer;
pub use project::ProjectFinancingAnalyzer;

use core_types::CalculatorError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fmt;

/// The common interface a host uses to drive any calculator.
///
/// `evaluate` either returns a complete Results record or an error; it never
/// produces partial results. `reset` hands back the starting state a host
/// should display after the user clears the calculator.
pub trait Calculator {
    type Inputs: Clone + Default + fmt::Debug;
    type Results: Clone + Default + fmt::Debug;

    fn evaluate(&self, inputs: &Self::Inputs) -> Result<Self::Results, CalculatorError>;

    fn reset(&self) -> (Self::Inputs, Self::Results) {
        (Self::Inputs::default(), Self::Results::default())
    }
}

/// `part / whole * 100`, or `None` when `whole` is zero.
pub(crate) fn percentage(part: Decimal, whole: Decimal) -> Option<Decimal> {
    part.checked_div(whole).map(|ratio| ratio * dec!(100))
}
