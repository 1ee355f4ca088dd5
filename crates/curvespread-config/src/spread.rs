//! Spread calculation configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use curvespread_spreads::{PartitionOptions, UnknownCategoryPolicy};

use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};

/// Largest supported number of decimal places in a rendered spread.
pub const MAX_SPREAD_PRECISION: usize = 10;

/// Configuration for loading bonds and rendering spread reports.
///
/// # Example
///
/// ```rust
/// use curvespread_config::{SpreadConfig, Validate};
///
/// let config = SpreadConfig::from_toml_str(r#"
///     name = "DESK"
///     spread_precision = 3
///     unknown_category = "reject"
/// "#).unwrap();
///
/// assert_eq!(config.spread_precision, 3);
/// assert_eq!(config.government_tag, "government");
/// assert!(config.is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpreadConfig {
    /// Configuration name/identifier.
    pub name: String,

    /// Decimal places of reported spreads.
    pub spread_precision: usize,

    /// Handling of rows that are neither corporate nor government.
    pub unknown_category: UnknownCategoryPolicy,

    /// Category tag for corporate rows.
    pub corporate_tag: String,

    /// Category tag for government rows.
    pub government_tag: String,
}

impl Default for SpreadConfig {
    fn default() -> Self {
        let options = PartitionOptions::default();
        Self {
            name: "DEFAULT".to_string(),
            spread_precision: 2,
            unknown_category: options.unknown_category,
            corporate_tag: options.corporate_tag,
            government_tag: options.government_tag,
        }
    }
}

impl SpreadConfig {
    /// Parses a configuration from TOML text. Missing keys take defaults.
    pub fn from_toml_str(s: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Loads a configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loading configuration");
        Self::from_toml_str(&content)
    }

    /// Resolves the effective configuration.
    ///
    /// An explicit path must exist. Without one, the per-user file from
    /// [`default_config_path`] is used when present, otherwise defaults.
    /// The result is validated either way.
    pub fn load(path: Option<&Path>) -> ConfigResult<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => match default_config_path().filter(|p| p.is_file()) {
                Some(path) => Self::from_file(path)?,
                None => {
                    debug!("using default configuration");
                    Self::default()
                }
            },
        };
        config.validate_or_error()?;
        Ok(config)
    }

    /// Sets the spread precision.
    #[must_use]
    pub fn with_spread_precision(mut self, precision: usize) -> Self {
        self.spread_precision = precision;
        self
    }

    /// Sets the unknown category policy.
    #[must_use]
    pub fn with_unknown_category(mut self, policy: UnknownCategoryPolicy) -> Self {
        self.unknown_category = policy;
        self
    }

    /// Returns the partition options described by this configuration.
    #[must_use]
    pub fn partition_options(&self) -> PartitionOptions {
        PartitionOptions {
            corporate_tag: self.corporate_tag.clone(),
            government_tag: self.government_tag.clone(),
            unknown_category: self.unknown_category,
        }
    }
}

impl Validate for SpreadConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.name.is_empty() {
            errors.push(ValidationError::new("name", "Name cannot be empty"));
        }

        if self.spread_precision > MAX_SPREAD_PRECISION {
            errors.push(ValidationError::with_rule(
                "spread_precision",
                format!("Spread precision must be at most {}", MAX_SPREAD_PRECISION),
                "max_precision",
            ));
        }

        if self.corporate_tag.trim().is_empty() {
            errors.push(ValidationError::new("corporate_tag", "Tag cannot be empty"));
        }

        if self.government_tag.trim().is_empty() {
            errors.push(ValidationError::new("government_tag", "Tag cannot be empty"));
        }

        if self.corporate_tag == self.government_tag {
            errors.push(ValidationError::with_rule(
                "government_tag",
                "Corporate and government tags must differ",
                "distinct_tags",
            ));
        }

        errors
    }
}

/// Returns the per-user configuration file location, if the platform has one.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("curvespread").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = SpreadConfig::default();
        assert_eq!(config.spread_precision, 2);
        assert_eq!(config.unknown_category, UnknownCategoryPolicy::Drop);
        assert_eq!(config.partition_options(), PartitionOptions::default());
        assert!(config.is_valid());
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(SpreadConfig::from_toml_str("").unwrap(), SpreadConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config = SpreadConfig::from_toml_str(
            r#"
            corporate_tag = "corp"
            government_tag = "govt"
            unknown_category = "reject"
            "#,
        )
        .unwrap();

        let options = config.partition_options();
        assert_eq!(options.corporate_tag, "corp");
        assert_eq!(options.government_tag, "govt");
        assert_eq!(options.unknown_category, UnknownCategoryPolicy::Reject);
        assert_eq!(config.spread_precision, 2);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = SpreadConfig::from_toml_str("precision = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Deserialization(_)));
    }

    #[test]
    fn test_bad_policy_rejected() {
        assert!(SpreadConfig::from_toml_str(r#"unknown_category = "ignore""#).is_err());
    }

    #[test]
    fn test_validation() {
        let config = SpreadConfig::default().with_spread_precision(11);
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "spread_precision");
        assert!(matches!(
            config.validate_or_error(),
            Err(ConfigError::Validation { .. })
        ));

        let config = SpreadConfig {
            name: String::new(),
            government_tag: "corporate".to_string(),
            ..SpreadConfig::default()
        };
        assert!(matches!(
            config.validate_or_error(),
            Err(ConfigError::MultipleValidationErrors(ref e)) if e.len() == 2
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name = \"FILE\"\nspread_precision = 4").unwrap();

        let config = SpreadConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.name, "FILE");
        assert_eq!(config.spread_precision, 4);
    }

    #[test]
    fn test_load_validates() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "spread_precision = 42").unwrap();
        assert!(SpreadConfig::load(Some(file.path())).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = SpreadConfig::from_file("/nonexistent/curvespread.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_default_path_shape() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("curvespread/config.toml"));
        }
    }
}
