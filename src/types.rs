//! Common types used throughout the file exporter
//!
//! This module contains shared type definitions, type aliases,
//! and utility types used across multiple modules.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type. Key order is insertion order.
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// A single record: a keyed object, or a bare string in text mode
pub type Record = JsonValue;

/// One delivered unit of work
pub type Slice = Vec<Record>;

/// Placeholder used in file names when the host supplies no worker name
pub const UNKNOWN_WORKER: &str = "undefined";

// ============================================================================
// Export Format
// ============================================================================

/// Text format a slice is rendered into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Delimited values using the configured delimiter
    Csv,
    /// Delimited values, always tab separated
    Tsv,
    /// One compact JSON object per line
    #[default]
    Json,
    /// One bare string per line
    Text,
}

impl ExportFormat {
    /// All formats, in schema order
    pub const ALL: [ExportFormat; 4] = [
        ExportFormat::Csv,
        ExportFormat::Tsv,
        ExportFormat::Json,
        ExportFormat::Text,
    ];

    /// Lowercase name as accepted in configuration
    pub fn as_str(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
            ExportFormat::Text => "text",
        }
    }

    /// Whether the format writes delimited rows
    pub fn is_delimited(self) -> bool {
        matches!(self, ExportFormat::Csv | ExportFormat::Tsv)
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
