//! Curvespread Configuration Layer
//!
//! This crate provides configuration for loading bond data and rendering
//! spread reports. Configurations are TOML files; every key is optional.
//!
//! # Example
//!
//! ```toml
//! name = "DESK"
//! spread_precision = 2          # decimal places in reports
//! unknown_category = "drop"     # or "reject"
//! corporate_tag = "corporate"
//! government_tag = "government"
//! ```
//!
//! ```rust
//! use curvespread_config::SpreadConfig;
//!
//! // Explicit file, per-user file, or built-in defaults
//! let config = SpreadConfig::load(None).unwrap_or_default();
//! let options = config.partition_options();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod spread;

pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use spread::{default_config_path, SpreadConfig, MAX_SPREAD_PRECISION};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{ConfigError, ConfigResult, Validate};
    pub use crate::spread::SpreadConfig;
}
