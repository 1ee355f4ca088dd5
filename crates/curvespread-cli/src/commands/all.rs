//! All command implementation.
//!
//! Prints the yield spread report followed by the spread-to-curve report.
//! Both are computed before anything is written, so a failure leaves
//! stdout empty.

use std::io::Write;

use crate::cli::OutputFormat;
use crate::commands::{Context, InputArgs};
use crate::error::CliResult;
use crate::output::{print_combined_json, print_spreads_to_curve, print_yield_spreads};

/// Executes the all command.
pub fn execute(args: &InputArgs, ctx: &Context) -> CliResult<()> {
    let session = ctx.session(args)?;
    let yield_spreads = session.yield_spreads()?;
    let curve_spreads = session.spreads_to_curve()?;

    let mut out = std::io::stdout().lock();
    match ctx.format {
        OutputFormat::Json => print_combined_json(&mut out, &yield_spreads, &curve_spreads)?,
        format => {
            print_yield_spreads(&mut out, &yield_spreads, format, ctx.precision())?;
            writeln!(out)?;
            print_spreads_to_curve(&mut out, &curve_spreads, format, ctx.precision())?;
        }
    }
    out.flush()?;
    Ok(())
}
