//! Domain types for corporate and government bond records.

mod bond;
mod bond_set;

pub use bond::{BondCategory, BondRecord};
pub use bond_set::BondSet;
