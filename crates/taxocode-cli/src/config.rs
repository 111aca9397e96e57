//! Layered configuration: CLI flags over `--set` values over the TOML file
//! over built-in defaults.

mod builder;
mod defaults;
mod file;

pub use builder::{build_config, resolve_input_arg};
