//! Calculation sessions over one loaded dataset.

use tracing::debug;

use curvespread_core::{BondCategory, BondRecord, BondSet, CoreResult};

use crate::benchmark::{self, BenchmarkMatch};
use crate::curve_spread::{self, CurveSpread};
use crate::error::SpreadResult;
use crate::partition::{partition, PartitionOptions, RawBondRow};
use crate::yield_spread::{self, YieldSpread};

/// An immutable pair of term-sorted corporate and government sets.
///
/// A session is built once per data load and never mutated afterwards.
/// Report methods take `&self`, so one session can serve any number of
/// concurrent readers.
///
/// # Example
///
/// ```rust
/// use curvespread_spreads::{PartitionOptions, RawBondRow, SpreadSession};
///
/// let rows = vec![
///     RawBondRow::new("C1", "corporate", 1.3, 3.3),
///     RawBondRow::new("G1", "government", 0.9, 1.7),
///     RawBondRow::new("G2", "government", 2.3, 2.3),
/// ];
///
/// let session = SpreadSession::from_rows(rows, &PartitionOptions::default()).unwrap();
/// let report = session.yield_spreads().unwrap();
/// assert_eq!(report[0].benchmark, "G1");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpreadSession {
    corporate: BondSet,
    government: BondSet,
}

impl SpreadSession {
    /// Creates a session from two already-built sets.
    ///
    /// # Errors
    ///
    /// Returns `SpreadError::InvalidRecord` for the first record whose term is
    /// not finite and positive or whose yield is not finite.
    pub fn new(corporate: BondSet, government: BondSet) -> SpreadResult<Self> {
        for record in corporate.iter().chain(government.iter()) {
            record.validate()?;
        }
        Ok(Self::assemble(corporate, government))
    }

    /// Partitions raw rows by category, sorts both partitions by term and
    /// freezes them into a session.
    ///
    /// # Errors
    ///
    /// Fails when the partition policy rejects an unknown category or when a
    /// recognized row has an invalid term or yield.
    pub fn from_rows<I>(rows: I, options: &PartitionOptions) -> SpreadResult<Self>
    where
        I: IntoIterator<Item = RawBondRow>,
    {
        let parts = partition(rows, options)?;
        Ok(Self::assemble(
            BondSet::new(parts.corporate),
            BondSet::new(parts.government),
        ))
    }

    /// Builds a session from typed records.
    ///
    /// # Errors
    ///
    /// Returns `SpreadError::InvalidRecord` for the first record whose term is
    /// not finite and positive or whose yield is not finite.
    pub fn from_records<I>(records: I) -> SpreadResult<Self>
    where
        I: IntoIterator<Item = BondRecord>,
    {
        let (corporate, government): (Vec<_>, Vec<_>) = records
            .into_iter()
            .map(|r| r.validate().map(|()| r))
            .collect::<CoreResult<Vec<_>>>()?
            .into_iter()
            .partition(|r| r.category() == BondCategory::Corporate);
        Ok(Self::assemble(BondSet::new(corporate), BondSet::new(government)))
    }

    // Records must already be validated.
    fn assemble(corporate: BondSet, government: BondSet) -> Self {
        debug!(
            corporate = corporate.len(),
            government = government.len(),
            "spread session built"
        );
        Self {
            corporate,
            government,
        }
    }

    /// Returns the corporate set, ascending by term.
    #[must_use]
    pub fn corporate(&self) -> &BondSet {
        &self.corporate
    }

    /// Returns the government set, ascending by term.
    #[must_use]
    pub fn government(&self) -> &BondSet {
        &self.government
    }

    /// Looks up the government benchmark for a term.
    pub fn benchmark(&self, term: f64) -> SpreadResult<BenchmarkMatch<'_>> {
        benchmark::find(&self.government, term)
    }

    /// Returns the interpolated government yield at a term.
    pub fn curve_yield(&self, term: f64) -> SpreadResult<f64> {
        curve_spread::curve_yield(&self.government, term)
    }

    /// Spread of every corporate bond to its nearest-term benchmark.
    ///
    /// Rows follow the corporate set's term order.
    ///
    /// # Errors
    ///
    /// Fails when there are corporate bonds but no government bonds.
    pub fn yield_spreads(&self) -> SpreadResult<Vec<YieldSpread>> {
        let rows = self
            .corporate
            .iter()
            .map(|bond| yield_spread::calculate(bond, &self.government))
            .collect::<SpreadResult<Vec<_>>>()?;
        debug!(rows = rows.len(), "yield spread report computed");
        Ok(rows)
    }

    /// Spread of every corporate bond to the interpolated government curve.
    ///
    /// Rows follow the corporate set's term order.
    ///
    /// # Errors
    ///
    /// Fails when there are corporate bonds but no government bonds, or when
    /// a bracket spans two government bonds with the same term.
    pub fn spreads_to_curve(&self) -> SpreadResult<Vec<CurveSpread>> {
        let rows = self
            .corporate
            .iter()
            .map(|bond| curve_spread::calculate(bond, &self.government))
            .collect::<SpreadResult<Vec<_>>>()?;
        debug!(rows = rows.len(), "spread to curve report computed");
        Ok(rows)
    }
}
