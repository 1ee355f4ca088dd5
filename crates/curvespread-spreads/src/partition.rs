//! Splitting raw rows into corporate and government records.
//!
//! Rows whose category tag matches neither configured tag are dropped by
//! default. That keeps mixed files usable, but it also hides typos in the
//! category column, so the behavior is selectable through
//! [`UnknownCategoryPolicy`].

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use curvespread_core::{BondCategory, BondRecord};

use crate::error::{SpreadError, SpreadResult};

/// A bond row with numeric term and yield but an unchecked category tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawBondRow {
    /// Bond identifier.
    pub id: String,
    /// Category tag as found in the source.
    pub category: String,
    /// Years to maturity.
    pub term: f64,
    /// Yield in percent.
    pub yield_rate: f64,
}

impl RawBondRow {
    /// Creates a new raw row.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        category: impl Into<String>,
        term: f64,
        yield_rate: f64,
    ) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            term,
            yield_rate,
        }
    }
}

/// What to do with rows whose category is not recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownCategoryPolicy {
    /// Silently exclude the row from both partitions.
    #[default]
    Drop,
    /// Fail the whole load.
    Reject,
}

/// Options controlling how rows are partitioned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionOptions {
    /// Tag identifying corporate rows.
    pub corporate_tag: String,
    /// Tag identifying government rows.
    pub government_tag: String,
    /// Handling of unrecognized tags.
    pub unknown_category: UnknownCategoryPolicy,
}

impl Default for PartitionOptions {
    fn default() -> Self {
        Self {
            corporate_tag: BondCategory::Corporate.as_str().to_string(),
            government_tag: BondCategory::Government.as_str().to_string(),
            unknown_category: UnknownCategoryPolicy::Drop,
        }
    }
}

impl PartitionOptions {
    /// Sets the unknown category policy.
    #[must_use]
    pub fn with_unknown_category(mut self, policy: UnknownCategoryPolicy) -> Self {
        self.unknown_category = policy;
        self
    }

    /// Maps a tag to a category, if it matches one of the configured tags.
    #[must_use]
    pub fn classify(&self, tag: &str) -> Option<BondCategory> {
        if tag == self.corporate_tag {
            Some(BondCategory::Corporate)
        } else if tag == self.government_tag {
            Some(BondCategory::Government)
        } else {
            None
        }
    }
}

/// The two partitions produced from one load, in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partitioned {
    /// Corporate records.
    pub corporate: Vec<BondRecord>,
    /// Government records.
    pub government: Vec<BondRecord>,
    /// Number of rows dropped for an unrecognized category.
    pub dropped: usize,
}

/// Stable-partitions rows by category tag.
///
/// Every recognized row lands in exactly one partition and relative order is
/// preserved within each partition.
///
/// # Errors
///
/// Returns `SpreadError::UnknownCategory` for the first unrecognized row when
/// the policy is [`UnknownCategoryPolicy::Reject`], and
/// `SpreadError::InvalidRecord` for the first recognized row whose term is not
/// finite and positive or whose yield is not finite. Dropped rows are not
/// checked.
pub fn partition<I>(rows: I, options: &PartitionOptions) -> SpreadResult<Partitioned>
where
    I: IntoIterator<Item = RawBondRow>,
{
    let mut out = Partitioned::default();

    for row in rows {
        let Some(category) = options.classify(&row.category) else {
            match options.unknown_category {
                UnknownCategoryPolicy::Drop => {
                    debug!(id = %row.id, category = %row.category, "dropping row with unknown category");
                    out.dropped += 1;
                    continue;
                }
                UnknownCategoryPolicy::Reject => {
                    return Err(SpreadError::unknown_category(row.id, row.category));
                }
            }
        };

        let record = BondRecord::try_new(row.id, category, row.term, row.yield_rate)?;
        match category {
            BondCategory::Corporate => out.corporate.push(record),
            BondCategory::Government => out.government.push(record),
        }
    }

    if out.dropped > 0 {
        warn!(dropped = out.dropped, "rows with unknown category were excluded");
    }

    Ok(out)
}
