//! # Workflows Module
//!
//! High-level entry points that run a complete job. [`encode`] loads a name
//! list, generates codes and writes the coded table in one call.

pub mod encode;
