//! # Engine Module
//!
//! The stateful part of a run: configuration for where data comes from and
//! goes to, the code generator itself, progress reporting and the error types
//! each stage can produce.
//!
//! - **Configuration** ([`config`]) - Resolved input and output locations
//! - **Code Generation** ([`generator`]) - Candidate construction and collision resolution
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events
//! - **Error Handling** ([`error`]) - Encoding and workflow errors

pub mod config;
pub mod error;
pub mod generator;
pub mod progress;
