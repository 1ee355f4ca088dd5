//! CLI error types.

use thiserror::Error;

use curvespread_config::ConfigError;
use curvespread_ext_file::FileError;
use curvespread_spreads::SpreadError;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input file or report output error.
    #[error(transparent)]
    File(#[from] FileError),

    /// Calculation error.
    #[error("Calculation error: {0}")]
    Calculation(#[from] SpreadError),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
