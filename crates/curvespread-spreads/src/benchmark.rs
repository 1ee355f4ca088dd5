//! Benchmark lookup on the government curve.

use curvespread_core::{BondRecord, BondSet};
use curvespread_math::interpolation::LineSegment;
use curvespread_math::search::{nearest_bracket_by, Bracket};

use crate::error::{SpreadError, SpreadResult};

/// The outcome of searching a government set for a term.
///
/// Holds the nearest-term benchmark together with the adjacent pair used to
/// interpolate the curve at that term.
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkMatch<'a> {
    set: &'a BondSet,
    bracket: Bracket,
}

impl<'a> BenchmarkMatch<'a> {
    /// Returns the nearest-term record.
    #[must_use]
    pub fn nearest(&self) -> &'a BondRecord {
        &self.set[self.bracket.nearest]
    }

    /// Returns the raw bracket indices.
    #[must_use]
    pub fn bracket(&self) -> Bracket {
        self.bracket
    }

    /// Returns the lower bracket index.
    #[must_use]
    pub fn left_index(&self) -> usize {
        self.bracket.left
    }

    /// Returns the upper bracket index.
    #[must_use]
    pub fn right_index(&self) -> usize {
        self.bracket.right
    }

    /// Returns the two bracket records, lower first.
    ///
    /// Both are the same record on a single-point curve.
    #[must_use]
    pub fn endpoints(&self) -> (&'a BondRecord, &'a BondRecord) {
        (&self.set[self.bracket.left], &self.set[self.bracket.right])
    }

    /// Builds the curve segment through the bracket.
    ///
    /// A single-point curve yields a flat segment.
    ///
    /// # Errors
    ///
    /// Returns a division by zero error when both bracket records share a term.
    pub fn segment(&self) -> SpreadResult<LineSegment> {
        let (left, right) = self.endpoints();
        if self.bracket.is_degenerate() {
            return Ok(LineSegment::flat(left.point()));
        }
        Ok(LineSegment::through(left.point(), right.point())?)
    }
}

/// Searches a term-sorted government set for `term`.
///
/// An empty set is reported here, before the search runs, so callers match on
/// `SpreadError::InvalidInput` for a missing curve. The
/// `SpreadError::Math(MathError::InvalidInput)` variant is only produced for a
/// non-finite term.
///
/// # Errors
///
/// Returns `SpreadError::InvalidInput` if the set is empty, and a wrapped
/// math error if the term is not finite.
pub fn find(set: &BondSet, term: f64) -> SpreadResult<BenchmarkMatch<'_>> {
    if set.is_empty() {
        return Err(SpreadError::invalid_input("government curve has no bonds"));
    }
    let bracket = nearest_bracket_by(set.as_slice(), term, BondRecord::term)?;
    Ok(BenchmarkMatch { set, bracket })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use curvespread_core::BondCategory;
    use curvespread_math::MathError;

    fn curve() -> BondSet {
        BondSet::new(vec![
            BondRecord::new("G1", BondCategory::Government, 0.9, 1.7),
            BondRecord::new("G2", BondCategory::Government, 2.3, 2.3),
            BondRecord::new("G3", BondCategory::Government, 3.6, 4.5),
        ])
    }

    #[test]
    fn test_exact_match() {
        let set = curve();
        let m = find(&set, 2.3).unwrap();
        assert_eq!(m.nearest().id(), "G2");
        assert_eq!(m.nearest().yield_rate(), 2.3);
        assert_eq!((m.left_index(), m.right_index()), (0, 1));
    }

    #[test]
    fn test_below_range() {
        let set = curve();
        let m = find(&set, 0.8).unwrap();
        assert_eq!(m.nearest().point(), (0.9, 1.7));
        assert_eq!((m.left_index(), m.right_index()), (0, 1));
    }

    #[test]
    fn test_above_range() {
        let set = curve();
        let m = find(&set, 3.8).unwrap();
        assert_eq!(m.nearest().point(), (3.6, 4.5));
        assert_eq!((m.left_index(), m.right_index()), (1, 2));

        let (left, right) = m.endpoints();
        assert_eq!((left.id(), right.id()), ("G2", "G3"));
    }

    #[test]
    fn test_segment_through_bracket() {
        let set = curve();
        let segment = find(&set, 1.3).unwrap().segment().unwrap();
        assert_relative_eq!(segment.evaluate(0.9), 1.7, epsilon = 1e-12);
        assert_relative_eq!(segment.evaluate(2.3), 2.3, epsilon = 1e-12);
    }

    #[test]
    fn test_single_point_curve_is_flat() {
        let set = BondSet::new(vec![BondRecord::new("G1", BondCategory::Government, 5.0, 3.0)]);
        let m = find(&set, 10.0).unwrap();
        assert!(m.bracket().is_degenerate());
        assert_eq!(m.segment().unwrap().evaluate(10.0), 3.0);
    }

    #[test]
    fn test_empty_curve() {
        let set = BondSet::default();
        assert!(matches!(find(&set, 1.0), Err(SpreadError::InvalidInput { .. })));
        // Non-finite terms on an empty set still report the missing curve
        assert!(matches!(find(&set, f64::NAN), Err(SpreadError::InvalidInput { .. })));
    }

    #[test]
    fn test_non_finite_term() {
        let set = curve();
        assert!(matches!(
            find(&set, f64::NAN),
            Err(SpreadError::Math(MathError::InvalidInput { .. }))
        ));
    }

    #[test]
    fn test_equal_term_bracket() {
        let set = BondSet::new(vec![
            BondRecord::new("G1", BondCategory::Government, 2.0, 1.0),
            BondRecord::new("G2", BondCategory::Government, 2.0, 1.5),
        ]);
        let err = find(&set, 3.0).unwrap().segment().unwrap_err();
        assert!(matches!(err, SpreadError::Math(MathError::DivisionByZero { .. })));
    }
}
