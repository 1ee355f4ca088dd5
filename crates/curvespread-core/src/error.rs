//! Error types for the core data model.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised by the core data model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// A record's term or yield cannot be placed on a curve.
    #[error("Invalid bond '{id}': {reason}")]
    InvalidRecord {
        /// Identifier of the offending record.
        id: String,
        /// What was wrong with it.
        reason: String,
    },
}

impl CoreError {
    /// Creates an invalid record error.
    #[must_use]
    pub fn invalid_record(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            id: id.into(),
            reason: reason.into(),
        }
    }
}
