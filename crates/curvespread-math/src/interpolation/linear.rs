//! Two-point linear interpolation.

use crate::error::{MathError, MathResult};

/// A straight line `y = slope * x + intercept` derived from two curve points.
///
/// Segments are ephemeral: they are rebuilt for every query and never stored
/// alongside the curve. Evaluation is unbounded, so a segment built from a
/// clamped bracket extrapolates past its endpoints.
///
/// # Example
///
/// ```rust
/// use curvespread_math::interpolation::LineSegment;
///
/// let line = LineSegment::through((2.0, 8.0), (-1.0, -1.0)).unwrap();
/// assert_eq!(line.slope(), 3.0);
/// assert_eq!(line.intercept(), 2.0);
/// assert_eq!(line.evaluate(1.0), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    slope: f64,
    intercept: f64,
}

impl LineSegment {
    /// Derives the line through two points.
    ///
    /// Point order does not matter for the line itself; the intercept is
    /// anchored on the second point.
    ///
    /// # Errors
    ///
    /// Returns `MathError::DivisionByZero` if both points share an x value.
    #[allow(clippy::float_cmp)]
    pub fn through(p0: (f64, f64), p1: (f64, f64)) -> MathResult<Self> {
        let (x0, y0) = p0;
        let (x1, y1) = p1;

        let dx = x1 - x0;
        if dx == 0.0 {
            return Err(MathError::division_by_zero(dx));
        }

        let slope = (y1 - y0) / dx;
        let intercept = y1 - slope * x1;

        Ok(Self { slope, intercept })
    }

    /// A horizontal line through a single point.
    ///
    /// Used when the curve has only one point to interpolate from.
    #[must_use]
    pub fn flat(point: (f64, f64)) -> Self {
        Self {
            slope: 0.0,
            intercept: point.1,
        }
    }

    /// Returns the slope.
    #[must_use]
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Returns the y-intercept.
    #[must_use]
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Evaluates the line at `x`.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        evaluate(self.slope, self.intercept, x)
    }
}

/// Returns the `(slope, intercept)` of the line through two points.
///
/// # Errors
///
/// Returns `MathError::DivisionByZero` if both points share an x value.
pub fn line_from_two_points(p0: (f64, f64), p1: (f64, f64)) -> MathResult<(f64, f64)> {
    LineSegment::through(p0, p1).map(|line| (line.slope, line.intercept))
}

/// Evaluates `slope * x + intercept`.
#[must_use]
pub fn evaluate(slope: f64, intercept: f64, x: f64) -> f64 {
    slope * x + intercept
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_line_from_two_points() {
        let (m, b) = line_from_two_points((2.0, 8.0), (-1.0, -1.0)).unwrap();
        assert_relative_eq!(m, 3.0, epsilon = 1e-12);
        assert_relative_eq!(b, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_curve_segment() {
        let line = LineSegment::through((0.9, 1.7), (2.3, 2.3)).unwrap();

        assert_relative_eq!(line.slope(), 0.6 / 1.4, epsilon = 1e-12);
        assert_relative_eq!(line.evaluate(0.9), 1.7, epsilon = 1e-12);
        assert_relative_eq!(line.evaluate(2.3), 2.3, epsilon = 1e-12);
        assert_relative_eq!(line.evaluate(1.6), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_extrapolation_is_unbounded() {
        let line = LineSegment::through((0.0, 0.0), (1.0, 2.0)).unwrap();
        assert_relative_eq!(line.evaluate(-1.0), -2.0, epsilon = 1e-12);
        assert_relative_eq!(line.evaluate(10.0), 20.0, epsilon = 1e-12);
    }

    #[test]
    fn test_equal_x_is_division_by_zero() {
        let err = LineSegment::through((2.0, 1.0), (2.0, 3.0)).unwrap_err();
        assert!(matches!(err, MathError::DivisionByZero { .. }));
        assert!(line_from_two_points((2.0, 1.0), (2.0, 1.0)).is_err());
    }

    #[test]
    fn test_flat_segment() {
        let line = LineSegment::flat((3.0, 4.5));
        assert_eq!(line.slope(), 0.0);
        assert_eq!(line.evaluate(0.1), 4.5);
        assert_eq!(line.evaluate(30.0), 4.5);
    }

    #[test]
    fn test_free_evaluate() {
        assert_eq!(evaluate(3.0, 2.0, 4.0), 14.0);
    }

    proptest! {
        #[test]
        fn prop_line_passes_through_both_points(
            x0 in -50.0f64..50.0,
            dx in 0.01f64..50.0,
            y0 in -20.0f64..20.0,
            y1 in -20.0f64..20.0,
        ) {
            let x1 = x0 + dx;
            let (m, b) = line_from_two_points((x0, y0), (x1, y1)).unwrap();
            prop_assert!((evaluate(m, b, x0) - y0).abs() < 1e-9);
            prop_assert!((evaluate(m, b, x1) - y1).abs() < 1e-9);
        }
    }
}
