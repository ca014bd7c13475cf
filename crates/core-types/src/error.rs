use thiserror::Error;

/// The error returned by every calculator.
///
/// `InvalidInput` is raised when a quantity that must be positive is not.
/// `Calculation` covers arithmetic that cannot be represented, such as a
/// compound factor that overflows `Decimal`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Calculation error: {0}")]
    Calculation(String),
}

impl CalculatorError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CalculatorError::InvalidInput(message.into())
    }
}
