//! CLI module
//!
//! Command-line host for the export stage.
//!
//! # Commands
//!
//! - `schema` - Print the configuration schema
//! - `validate` - Check a config file
//! - `export` - Feed slices from a file (one JSON array per line) through the stage

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
