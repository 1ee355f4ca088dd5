//! Error types for spread calculations.

use curvespread_core::CoreError;
use curvespread_math::MathError;
use thiserror::Error;

/// Result type for spread operations.
pub type SpreadResult<T> = Result<T, SpreadError>;

/// Errors that can occur during spread calculations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SpreadError {
    /// Search or interpolation failed.
    #[error("Curve error: {0}")]
    Math(#[from] MathError),

    /// A record's term or yield cannot be placed on a curve.
    #[error(transparent)]
    InvalidRecord(#[from] CoreError),

    /// Row category is not recognized and the policy rejects such rows.
    #[error("Unknown category '{category}' for bond '{id}'")]
    UnknownCategory {
        /// Identifier of the offending row.
        id: String,
        /// The unrecognized category tag.
        category: String,
    },

    /// Invalid input for spread calculation.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Reason for the invalid input.
        reason: String,
    },
}

impl SpreadError {
    /// Creates a new unknown category error.
    #[must_use]
    pub fn unknown_category(id: impl Into<String>, category: impl Into<String>) -> Self {
        Self::UnknownCategory {
            id: id.into(),
            category: category.into(),
        }
    }

    /// Creates a new invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
