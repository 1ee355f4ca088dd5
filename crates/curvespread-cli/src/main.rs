//! Curvespread CLI - Corporate bond spreads against a government curve.
//!
//! # Usage
//!
//! ```bash
//! # Spread to the nearest-term government benchmark
//! curvespread yield-spread bonds.csv
//!
//! # Spread to the interpolated government curve
//! curvespread curve bonds.csv
//!
//! # Both reports as tables with four decimals
//! curvespread --format table --precision 4 all bonds.csv
//! ```

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::Context;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.quiet);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::print_error(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

fn init_logging(quiet: bool) {
    let default = if quiet { "error" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let ctx = Context::new(cli.config.as_deref(), cli.format, cli.precision)?;

    match cli.command {
        Commands::YieldSpread(args) => commands::yield_spread::execute(&args, &ctx)?,
        Commands::Curve(args) => commands::curve::execute(&args, &ctx)?,
        Commands::All(args) => commands::all::execute(&args, &ctx)?,
    }

    Ok(())
}
