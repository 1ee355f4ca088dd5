//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::InputArgs;

/// Curvespread - Corporate bond spreads against a government curve
#[derive(Parser)]
#[command(name = "curvespread")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (TOML)
    #[arg(short, long, global = true, env = "CURVESPREAD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv", global = true)]
    pub format: OutputFormat,

    /// Decimal places of reported spreads (overrides the configuration)
    #[arg(short, long, global = true)]
    pub precision: Option<usize>,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Spread of each corporate bond to its nearest-term government benchmark
    YieldSpread(InputArgs),

    /// Spread of each corporate bond to the interpolated government curve
    Curve(InputArgs),

    /// Both reports, yield spread first
    All(InputArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain report text: header line then one line per bond
    #[default]
    Csv,
    /// Human-readable table format
    Table,
    /// JSON format
    Json,
}
