//! Term-sorted, frozen sequences of bond records.

use std::ops::Index;
use std::slice;

use serde::Serialize;

use super::BondRecord;

/// An ordered sequence of bond records, ascending by term.
///
/// The set is sorted exactly once, when it is built, with a stable sort:
/// records that share a term keep their input order. It exposes no mutating
/// operations afterwards, so it can be shared freely between readers.
///
/// # Example
///
/// ```rust
/// use curvespread_core::{BondCategory, BondRecord, BondSet};
///
/// let set = BondSet::new(vec![
///     BondRecord::new("G3", BondCategory::Government, 3.6, 4.5),
///     BondRecord::new("G1", BondCategory::Government, 0.9, 1.7),
///     BondRecord::new("G2", BondCategory::Government, 2.3, 2.3),
/// ]);
///
/// let ids: Vec<&str> = set.iter().map(BondRecord::id).collect();
/// assert_eq!(ids, ["G1", "G2", "G3"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BondSet {
    records: Vec<BondRecord>,
}

impl BondSet {
    /// Builds a set, sorting the records ascending by term.
    #[must_use]
    pub fn new(mut records: Vec<BondRecord>) -> Self {
        records.sort_by(|a, b| a.term().total_cmp(&b.term()));
        Self { records }
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the set holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the record at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&BondRecord> {
        self.records.get(index)
    }

    /// Returns the shortest-term record.
    #[must_use]
    pub fn first(&self) -> Option<&BondRecord> {
        self.records.first()
    }

    /// Returns the longest-term record.
    #[must_use]
    pub fn last(&self) -> Option<&BondRecord> {
        self.records.last()
    }

    /// Returns the records as a slice, in term order.
    #[must_use]
    pub fn as_slice(&self) -> &[BondRecord] {
        &self.records
    }

    /// Iterates over the records in term order.
    pub fn iter(&self) -> slice::Iter<'_, BondRecord> {
        self.records.iter()
    }

    /// Returns the terms in ascending order.
    #[must_use]
    pub fn terms(&self) -> Vec<f64> {
        self.records.iter().map(BondRecord::term).collect()
    }
}

impl Index<usize> for BondSet {
    type Output = BondRecord;

    fn index(&self, index: usize) -> &Self::Output {
        &self.records[index]
    }
}

impl AsRef<[BondRecord]> for BondSet {
    fn as_ref(&self) -> &[BondRecord] {
        &self.records
    }
}

impl<'a> IntoIterator for &'a BondSet {
    type Item = &'a BondRecord;
    type IntoIter = slice::Iter<'a, BondRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<BondRecord> for BondSet {
    fn from_iter<I: IntoIterator<Item = BondRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
