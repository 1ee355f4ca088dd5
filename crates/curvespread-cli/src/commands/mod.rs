//! CLI command implementations.

pub mod all;
pub mod curve;
pub mod yield_spread;

use std::path::{Path, PathBuf};

use clap::Args;
use tracing::debug;

use curvespread_config::{SpreadConfig, Validate};
use curvespread_ext_file::load_session;
use curvespread_spreads::SpreadSession;

use crate::cli::OutputFormat;
use crate::error::CliResult;

/// Input file argument shared by every report command.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Bond file: header row, then `id,category,term,yield` rows
    pub input: PathBuf,
}

/// Settings resolved once per invocation.
#[derive(Debug, Clone)]
pub struct Context {
    /// Effective configuration.
    pub config: SpreadConfig,
    /// Output format.
    pub format: OutputFormat,
}

impl Context {
    /// Loads the configuration and applies command-line overrides.
    pub fn new(
        config_path: Option<&Path>,
        format: OutputFormat,
        precision: Option<usize>,
    ) -> CliResult<Self> {
        let mut config = SpreadConfig::load(config_path)?;
        if let Some(precision) = precision {
            config = config.with_spread_precision(precision);
            config.validate_or_error()?;
        }
        debug!(config = %config.name, precision = config.spread_precision, "configuration resolved");

        Ok(Self { config, format })
    }

    /// Decimal places of reported spreads.
    pub fn precision(&self) -> usize {
        self.config.spread_precision
    }

    /// Reads the input file into a session.
    pub fn session(&self, args: &InputArgs) -> CliResult<SpreadSession> {
        Ok(load_session(&args.input, &self.config.partition_options())?)
    }
}
