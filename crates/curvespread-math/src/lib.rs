//! # Curvespread Math
//!
//! Numerical building blocks for the Curvespread relative value library.
//!
//! This crate provides:
//!
//! - **Search**: Nearest-bracket binary search over a term-sorted axis
//! - **Interpolation**: Two-point line segments evaluated at arbitrary terms
//!
//! ## Design Philosophy
//!
//! - **Pure Functions**: Inputs are borrowed and never mutated
//! - **Explicit Failure**: Empty inputs and zero-width segments are errors, not panics

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod interpolation;
pub mod search;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::interpolation::{evaluate, line_from_two_points, LineSegment};
    pub use crate::search::{nearest_bracket, nearest_bracket_by, Bracket};
}

pub use error::{MathError, MathResult};
