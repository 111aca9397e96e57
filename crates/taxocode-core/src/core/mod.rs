//! # Core Module
//!
//! Stateless building blocks: the record types that flow through a run and
//! the file I/O that loads name pairs and writes coded tables.
//!
//! - **Data Model** ([`models`]) - Pairs, codes, encoded records and summaries
//! - **File I/O** ([`io`]) - Delimited input/output and output path derivation

pub mod io;
pub mod models;
