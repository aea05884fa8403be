//! Configuration module
//!
//! The export stage is configured once, before the first slice, from a flat
//! mapping of options.
//!
//! # Overview
//!
//! The config module provides:
//! - `ExportConfig` - Validated, immutable stage configuration
//! - `schema()` - Declarative description of every option and its default
//! - Loaders for JSON and YAML, with validation

mod parser;
mod schema;
mod types;

pub use parser::load_config;
pub use schema::{schema, schema_json, PropertyKind, SchemaEntry};
pub use types::ExportConfig;

#[cfg(test)]
mod tests;
