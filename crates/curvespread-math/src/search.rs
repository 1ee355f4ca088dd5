//! Nearest-bracket binary search over a sorted axis.
//!
//! A single query answers two questions at once: which point lies closest to
//! the target, and which adjacent pair of points should be used to interpolate
//! at the target. Both answers come from one `O(log n)` binary search.
//!
//! # Bracket conventions
//!
//! | Target | Nearest | Bracket |
//! |--------|---------|---------|
//! | below the first point | first | `(0, 1)` |
//! | above the last point | last | `(n-2, n-1)` |
//! | equal to point `i` | `i` (first occurrence) | `(i-1, i)`, or `(0, 1)` when `i == 0` |
//! | between `i` and `i+1` | closer of the two, ties to `i+1` | `(i, i+1)` |
//! | single-point axis | `0` | `(0, 0)` (degenerate) |
//!
//! The exact-match rule anchors the bracket on the left side of the matched
//! point. Interpolation downstream depends on which pair is returned, so the
//! table above is a fixed convention.

use tracing::trace;

use crate::error::{MathError, MathResult};

/// Result of a nearest-bracket search: three indices into the searched slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bracket {
    /// Index of the point closest to the target.
    pub nearest: usize,
    /// Lower index of the interpolation pair.
    pub left: usize,
    /// Upper index of the interpolation pair.
    pub right: usize,
}

impl Bracket {
    /// Creates a bracket from its three indices.
    #[must_use]
    pub const fn new(nearest: usize, left: usize, right: usize) -> Self {
        Self {
            nearest,
            left,
            right,
        }
    }

    /// Returns true when both bracket indices point at the same element.
    ///
    /// Only happens for single-point axes.
    #[must_use]
    pub const fn is_degenerate(&self) -> bool {
        self.left == self.right
    }
}

/// Searches a sorted slice of terms.
///
/// # Example
///
/// ```rust
/// use curvespread_math::search::{nearest_bracket, Bracket};
///
/// let terms = [0.9, 2.3, 3.6];
///
/// // 2.1 is closer to 2.3 than to 0.9
/// assert_eq!(nearest_bracket(&terms, 2.1).unwrap(), Bracket::new(1, 0, 1));
/// // Exact match anchors the bracket to the left
/// assert_eq!(nearest_bracket(&terms, 2.3).unwrap(), Bracket::new(1, 0, 1));
/// ```
pub fn nearest_bracket(sorted: &[f64], target: f64) -> MathResult<Bracket> {
    nearest_bracket_by(sorted, target, |x| *x)
}

/// Searches a slice sorted ascending by `key`.
///
/// The slice is never mutated. The result for an unsorted slice is
/// unspecified but always holds in-bounds indices.
///
/// # Errors
///
/// Returns `MathError::InvalidInput` if the slice is empty or the target is
/// not finite.
#[allow(clippy::float_cmp)]
pub fn nearest_bracket_by<T, F>(sorted: &[T], target: f64, key: F) -> MathResult<Bracket>
where
    F: Fn(&T) -> f64,
{
    if sorted.is_empty() {
        return Err(MathError::invalid_input("cannot search an empty sequence"));
    }
    if !target.is_finite() {
        return Err(MathError::invalid_input(format!(
            "search target must be finite, got {}",
            target
        )));
    }

    let last = sorted.len() - 1;
    if last == 0 {
        return Ok(Bracket::new(0, 0, 0));
    }

    if target < key(&sorted[0]) {
        return Ok(Bracket::new(0, 0, 1));
    }
    if target > key(&sorted[last]) {
        return Ok(Bracket::new(last, last - 1, last));
    }

    // First index whose key is not below the target
    let idx = sorted.partition_point(|item| key(item) < target).min(last);

    if key(&sorted[idx]) == target {
        let left = idx.saturating_sub(1);
        trace!(term = target, index = idx, "exact term match");
        return Ok(Bracket::new(idx, left, left + 1));
    }

    let hi = idx.max(1);
    let lo = hi - 1;
    let nearest = if (key(&sorted[lo]) - target).abs() < (target - key(&sorted[hi])).abs() {
        lo
    } else {
        hi
    };

    trace!(term = target, lo, hi, nearest, "bracketed term");
    Ok(Bracket::new(nearest, lo, hi))
}
