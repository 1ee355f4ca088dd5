//! # Curvespread Ext File
//!
//! File-based input and text output for the Curvespread relative value library.
//!
//! This crate provides:
//! - CSV ingestion of `id, category, term, yield` rows
//! - Normalization of human-formatted values such as `"30 years"` and `"1.5%"`
//! - Rendering of the yield spread and spread-to-curve reports
//!
//! ## Example
//!
//! ```rust
//! use curvespread_ext_file::{read_rows, render_yield_spreads, DEFAULT_PRECISION};
//! use curvespread_spreads::{PartitionOptions, SpreadSession};
//!
//! let data = "\
//! bond,type,term,yield
//! C1,corporate,1.3 years,3.30%
//! G1,government,0.9 years,1.70%
//! G2,government,2.3 years,2.30%
//! ";
//!
//! let rows = read_rows(data.as_bytes())?;
//! let session = SpreadSession::from_rows(rows, &PartitionOptions::default())?;
//! let report = render_yield_spreads(&session.yield_spreads()?, DEFAULT_PRECISION);
//!
//! assert_eq!(report, "bond,benchmark,spread_to_benchmark\nC1,G1,1.60%\n");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

mod error;
mod loader;
mod normalize;
mod report;

pub use error::{FileError, FileResult};
pub use loader::{load_rows, load_session, read_rows};
pub use normalize::{normalize_term, normalize_yield};
pub use report::{
    render_spreads_to_curve, render_yield_spreads, write_spreads_to_curve, write_yield_spreads,
    CURVE_SPREAD_HEADER, DEFAULT_PRECISION, YIELD_SPREAD_HEADER,
};
