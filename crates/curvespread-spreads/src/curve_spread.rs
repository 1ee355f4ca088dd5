//! Spread to the linearly interpolated government curve.

use serde::{Deserialize, Serialize};

use curvespread_core::{BondRecord, BondSet};

use crate::benchmark;
use crate::error::SpreadResult;

/// One row of the spread-to-curve report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveSpread {
    /// Corporate bond identifier.
    pub bond: String,
    /// Corporate yield minus interpolated curve yield, in percent.
    pub spread_to_curve: f64,
}

/// Returns the government curve yield at `term`.
///
/// The line runs through the search bracket for `term`. Outside the curve's
/// range the bracket is clamped to the end pair and the line extrapolates.
pub fn curve_yield(government: &BondSet, term: f64) -> SpreadResult<f64> {
    let segment = benchmark::find(government, term)?.segment()?;
    Ok(segment.evaluate(term))
}

/// Calculates the spread of a corporate bond to the government curve.
///
/// Spread = corporate yield - curve yield at the corporate bond's term.
pub fn calculate(bond: &BondRecord, government: &BondSet) -> SpreadResult<CurveSpread> {
    let curve = curve_yield(government, bond.term())?;

    Ok(CurveSpread {
        bond: bond.id().to_string(),
        spread_to_curve: bond.yield_rate() - curve,
    })
}
