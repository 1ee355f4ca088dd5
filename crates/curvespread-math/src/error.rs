//! Error types for search and interpolation.

use thiserror::Error;

/// A specialized Result type for mathematical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during search and interpolation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Division by zero or a zero-width interval.
    #[error("Division by zero or near-zero value: {value:.2e}")]
    DivisionByZero {
        /// The zero denominator.
        value: f64,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl MathError {
    /// Creates a division by zero error.
    #[must_use]
    pub fn division_by_zero(value: f64) -> Self {
        Self::DivisionByZero { value }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
