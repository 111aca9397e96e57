//! Reading name lists and writing coded tables.
//!
//! [`traits::TaxonFile`] is the format-neutral interface; [`delimited`] holds
//! the comma/newline implementation and [`paths`] derives output locations.

pub mod delimited;
pub mod paths;
pub mod traits;
