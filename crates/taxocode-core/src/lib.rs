//! # Taxocode Core Library
//!
//! Derives short, uppercase identifying codes for (genus, species) name pairs
//! and writes them back out alongside the original names.
//!
//! ## Layout
//!
//! - **[`core`]: The Foundation.** Stateless data models (`TaxonPair`,
//!   `CodeTable`) and the delimited-file I/O that loads and writes them.
//!
//! - **[`engine`]: The Logic Core.** The code generator with its collision
//!   resolution, run configuration, progress reporting and error types.
//!
//! - **[`workflows`]: The Public API.** Ties `core` and `engine` together into
//!   a single load, generate, write run.

pub mod core;
pub mod engine;
pub mod workflows;
