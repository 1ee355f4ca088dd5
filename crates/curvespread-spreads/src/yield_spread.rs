//! Spread to the nearest-term government benchmark.

use serde::{Deserialize, Serialize};

use curvespread_core::{BondRecord, BondSet};

use crate::benchmark;
use crate::error::SpreadResult;

/// One row of the yield spread report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldSpread {
    /// Corporate bond identifier.
    pub bond: String,
    /// Identifier of the nearest-term government bond.
    pub benchmark: String,
    /// Corporate yield minus benchmark yield, in percent.
    pub spread_to_benchmark: f64,
}

/// Calculates the yield spread of a corporate bond.
///
/// Spread = corporate yield - yield of the government bond nearest in term.
/// The interpolation bracket is not used.
pub fn calculate(bond: &BondRecord, government: &BondSet) -> SpreadResult<YieldSpread> {
    let benchmark = benchmark::find(government, bond.term())?.nearest();

    Ok(YieldSpread {
        bond: bond.id().to_string(),
        benchmark: benchmark.id().to_string(),
        spread_to_benchmark: bond.yield_rate() - benchmark.yield_rate(),
    })
}
