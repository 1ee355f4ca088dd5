//! # Curvespread Spreads
//!
//! Relative value of corporate bonds against a government benchmark curve.
//!
//! This crate provides two spread measures:
//!
//! - **Yield spread**: Corporate yield over the government bond nearest in term
//! - **Spread to curve**: Corporate yield over the government curve, linearly
//!   interpolated at the corporate bond's exact term
//!
//! Both are computed from a [`SpreadSession`], which partitions raw rows by
//! category and sorts each partition by term once per load.
//!
//! ## Example
//!
//! ```rust
//! use curvespread_spreads::{PartitionOptions, RawBondRow, SpreadSession};
//!
//! let rows = vec![
//!     RawBondRow::new("C1", "corporate", 1.3, 3.3),
//!     RawBondRow::new("C2", "corporate", 2.0, 3.8),
//!     RawBondRow::new("G1", "government", 0.9, 1.7),
//!     RawBondRow::new("G2", "government", 2.3, 2.3),
//!     RawBondRow::new("G3", "government", 3.6, 4.5),
//! ];
//!
//! let session = SpreadSession::from_rows(rows, &PartitionOptions::default())?;
//!
//! for row in session.yield_spreads()? {
//!     println!("{} vs {}: {:.2}%", row.bond, row.benchmark, row.spread_to_benchmark);
//! }
//! for row in session.spreads_to_curve()? {
//!     println!("{}: {:.2}%", row.bond, row.spread_to_curve);
//! }
//! # Ok::<(), curvespread_spreads::SpreadError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod benchmark;
pub mod curve_spread;
pub mod error;
pub mod partition;
pub mod session;
pub mod yield_spread;

pub use benchmark::BenchmarkMatch;
pub use curve_spread::CurveSpread;
pub use error::{SpreadError, SpreadResult};
pub use partition::{partition, PartitionOptions, Partitioned, RawBondRow, UnknownCategoryPolicy};
pub use session::SpreadSession;
pub use yield_spread::YieldSpread;
