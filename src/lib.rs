// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::struct_excessive_bools)]

//! # File Exporter
//!
//! An export stage that renders slices of records to text files on disk.
//!
//! ## Features
//!
//! - **Formats**: CSV with any delimiter, TSV, JSON lines, raw text lines
//! - **Field Projection**: Configured field list, or the keys of each slice's first record
//! - **Headers**: Written once per physical file
//! - **File Layout**: One file per worker, or one numbered file per slice
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use file_exporter::{ExportConfig, ExportFormat, FileExporter, Result};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ExportConfig::new("./out")
//!         .with_format(ExportFormat::Csv)
//!         .with_fields(["name", "age"])
//!         .with_header(true);
//!
//!     let mut exporter = FileExporter::new(config, Some("worker-1")).await?;
//!     exporter
//!         .process_slice(&[json!({"name": "Alice", "age": 30})])
//!         .await?;
//!     exporter.shutdown().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//!   slice ──▶ FileExporter ──▶ FileTarget::resolve ──▶ {path}/{prefix}_{worker}[.{n}]
//!                  │
//!                  ├──▶ format::render(slice, config, header_written) ──▶ text
//!                  │
//!                  └──▶ RecordSink::append(target, text) ──▶ file
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the exporter
pub mod error;

/// Common types and type aliases
pub mod types;

/// Export configuration, schema and loaders
pub mod config;

/// Slice rendering (CSV, TSV, JSON lines, text)
pub mod format;

/// Output files and header state
pub mod sink;

/// The export stage
pub mod exporter;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::{load_config, ExportConfig};
pub use error::{Error, Result};
pub use exporter::{ExportStats, FileExporter, SliceReport};
pub use sink::{FileSink, FileTarget, RecordSink};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
