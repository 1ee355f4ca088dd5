//! Interpolation methods for government yield curves.
//!
//! The curve between two adjacent benchmark points is a straight line.
//! [`LineSegment`] derives that line from two points and evaluates it
//! anywhere on the real line, including outside the two points.

mod linear;

pub use linear::{evaluate, line_from_two_points, LineSegment};
