//! Plain data types shared by the loader, generator and writer.

pub mod record;
pub mod table;
