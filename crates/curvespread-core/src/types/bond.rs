//! Bond records and categories.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// The two bond categories a record can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BondCategory {
    /// Corporate bond, the subject of a spread calculation.
    Corporate,
    /// Government bond, a point on the benchmark curve.
    Government,
}

impl BondCategory {
    /// Returns the canonical lowercase tag.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Corporate => "corporate",
            Self::Government => "government",
        }
    }
}

impl fmt::Display for BondCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single bond observation: identifier, category, term and yield.
///
/// Records are immutable once built. Uniqueness of `id` is not enforced.
/// [`BondRecord::new`] does not check its inputs; use [`BondRecord::try_new`]
/// or [`BondRecord::validate`] before placing a record on a curve.
///
/// # Example
///
/// ```rust
/// use curvespread_core::{BondCategory, BondRecord};
///
/// let bond = BondRecord::new("C1", BondCategory::Corporate, 1.3, 3.3);
/// assert_eq!(bond.id(), "C1");
/// assert_eq!(bond.term(), 1.3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondRecord {
    id: String,
    category: BondCategory,
    /// Years to maturity.
    term: f64,
    /// Yield in percent.
    yield_rate: f64,
}

impl BondRecord {
    /// Creates a new record.
    #[must_use]
    pub fn new(id: impl Into<String>, category: BondCategory, term: f64, yield_rate: f64) -> Self {
        Self {
            id: id.into(),
            category,
            term,
            yield_rate,
        }
    }

    /// Creates a new record, rejecting values that cannot sit on a curve.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidRecord` unless the term is finite and
    /// positive and the yield is finite.
    pub fn try_new(
        id: impl Into<String>,
        category: BondCategory,
        term: f64,
        yield_rate: f64,
    ) -> CoreResult<Self> {
        let record = Self::new(id, category, term, yield_rate);
        record.validate()?;
        Ok(record)
    }

    /// Checks that the term is finite and positive and the yield is finite.
    ///
    /// A NaN term sorts after every real term and wins nearest-term
    /// comparisons, so it must not reach a search.
    pub fn validate(&self) -> CoreResult<()> {
        if !self.term.is_finite() || self.term <= 0.0 {
            return Err(CoreError::invalid_record(
                &self.id,
                format!("term must be finite and positive, got {}", self.term),
            ));
        }
        if !self.yield_rate.is_finite() {
            return Err(CoreError::invalid_record(
                &self.id,
                format!("yield must be finite, got {}", self.yield_rate),
            ));
        }
        Ok(())
    }

    /// Returns the identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the category.
    #[must_use]
    pub fn category(&self) -> BondCategory {
        self.category
    }

    /// Returns the term in years.
    #[must_use]
    pub fn term(&self) -> f64 {
        self.term
    }

    /// Returns the yield in percent.
    #[must_use]
    pub fn yield_rate(&self) -> f64 {
        self.yield_rate
    }

    /// Returns the (term, yield) point on the curve.
    #[must_use]
    pub fn point(&self) -> (f64, f64) {
        (self.term, self.yield_rate)
    }

    /// Returns true for corporate bonds.
    #[must_use]
    pub fn is_corporate(&self) -> bool {
        self.category == BondCategory::Corporate
    }

    /// Returns true for government bonds.
    #[must_use]
    pub fn is_government(&self) -> bool {
        self.category == BondCategory::Government
    }
}
