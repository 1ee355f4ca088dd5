//! Yield spread command implementation.
//!
//! Spread of each corporate bond to the government bond nearest in term.

use std::io::Write;

use crate::commands::{Context, InputArgs};
use crate::error::CliResult;
use crate::output::print_yield_spreads;

/// Executes the yield-spread command.
pub fn execute(args: &InputArgs, ctx: &Context) -> CliResult<()> {
    let rows = ctx.session(args)?.yield_spreads()?;

    let mut out = std::io::stdout().lock();
    print_yield_spreads(&mut out, &rows, ctx.format, ctx.precision())?;
    out.flush()?;
    Ok(())
}
