//! Curve command implementation.
//!
//! Spread of each corporate bond to the government curve, linearly
//! interpolated at the bond's term.

use std::io::Write;

use crate::commands::{Context, InputArgs};
use crate::error::CliResult;
use crate::output::print_spreads_to_curve;

/// Executes the curve command.
pub fn execute(args: &InputArgs, ctx: &Context) -> CliResult<()> {
    let rows = ctx.session(args)?.spreads_to_curve()?;

    let mut out = std::io::stdout().lock();
    print_spreads_to_curve(&mut out, &rows, ctx.format, ctx.precision())?;
    out.flush()?;
    Ok(())
}
