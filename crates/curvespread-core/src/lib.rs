//! # Curvespread Core
//!
//! Core types for the Curvespread relative value library.
//!
//! This crate provides the data model shared by every other crate:
//!
//! - **Types**: [`BondRecord`], [`BondCategory`] and the term-sorted [`BondSet`]
//! - **Errors**: [`CoreError`] for records that cannot sit on a curve
//!
//! ## Design Philosophy
//!
//! - **Immutable Records**: a record never changes after construction
//! - **Sorted Once**: a `BondSet` is ordered by term when built and frozen afterwards
//!
//! ## Example
//!
//! ```rust
//! use curvespread_core::prelude::*;
//!
//! let set = BondSet::new(vec![
//!     BondRecord::new("G2", BondCategory::Government, 2.3, 2.3),
//!     BondRecord::new("G1", BondCategory::Government, 0.9, 1.7),
//! ]);
//!
//! assert_eq!(set.first().map(BondRecord::id), Some("G1"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{BondCategory, BondRecord, BondSet};
}

pub use error::{CoreError, CoreResult};
pub use types::{BondCategory, BondRecord, BondSet};
