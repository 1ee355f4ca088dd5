//! Error types for file ingestion and report output.

use std::path::PathBuf;

use thiserror::Error;

use curvespread_spreads::SpreadError;

/// A specialized Result type for file operations.
pub type FileResult<T> = Result<T, FileError>;

/// Errors raised while reading bond files or writing reports.
#[derive(Debug, Error)]
pub enum FileError {
    /// The input file could not be opened.
    #[error("Cannot open {path}: {source}")]
    Open {
        /// Path that failed.
        path: PathBuf,
        /// Underlying CSV/I/O error.
        #[source]
        source: csv::Error,
    },

    /// Malformed delimited text.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A data row has fewer than the four required columns.
    #[error("Row {row}: missing {column} column")]
    MissingColumn {
        /// 1-based data row number (header excluded).
        row: usize,
        /// Column name.
        column: &'static str,
    },

    /// A numeric text value could not be normalized.
    #[error("Invalid number '{text}': {reason}")]
    InvalidNumber {
        /// Offending text.
        text: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// A field in a data row could not be normalized.
    #[error("Row {row}: invalid {column} '{text}': {reason}")]
    InvalidField {
        /// 1-based data row number (header excluded).
        row: usize,
        /// Column name.
        column: &'static str,
        /// Offending text.
        text: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// Report output failed.
    #[error("Write error: {0}")]
    Write(#[from] std::io::Error),

    /// Building the session failed.
    #[error(transparent)]
    Spread(#[from] SpreadError),
}

impl FileError {
    /// Creates an invalid number error.
    #[must_use]
    pub fn invalid_number(text: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidNumber {
            text: text.into(),
            reason,
        }
    }

    /// Attaches a row and column to an invalid number error.
    ///
    /// Other variants are returned unchanged.
    #[must_use]
    pub fn at(self, row: usize, column: &'static str) -> Self {
        match self {
            Self::InvalidNumber { text, reason } => Self::InvalidField {
                row,
                column,
                text,
                reason,
            },
            other => other,
        }
    }
}
