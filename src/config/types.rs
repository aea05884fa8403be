//! Export configuration types
//!
//! `RawExportConfig` mirrors the flat mapping a host supplies, with every key
//! optional. `ExportConfig` is the validated, immutable form the stage runs on.

use crate::types::ExportFormat;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ============================================================================
// Defaults
// ============================================================================

pub(crate) const DEFAULT_FILE_PREFIX: &str = "export";
pub(crate) const DEFAULT_DELIMITER: &str = ",";
pub(crate) const TAB: &str = "\t";

fn default_file_prefix() -> String {
    DEFAULT_FILE_PREFIX.to_string()
}

fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_string()
}

// ============================================================================
// Raw Config (as supplied by the host)
// ============================================================================

/// Export configuration before the required keys are checked.
///
/// Unknown keys are ignored so a host can pass its whole operation mapping.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RawExportConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,

    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,

    #[serde(default)]
    pub fields: Vec<String>,

    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    #[serde(default)]
    pub format: ExportFormat,

    #[serde(default)]
    pub file_per_slice: bool,

    #[serde(default)]
    pub include_header: bool,
}

// ============================================================================
// Export Config
// ============================================================================

/// Validated configuration for one export stage
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportConfig {
    /// Existing directory the output files are written into
    pub path: PathBuf,

    /// File name prefix, joined to the worker name with `_`
    pub file_prefix: String,

    /// Fields to project, in order. Empty projects the first record's keys.
    pub fields: Vec<String>,

    /// Delimiter for `csv` output
    pub delimiter: String,

    /// Output format
    pub format: ExportFormat,

    /// Write every slice to its own numbered file
    pub file_per_slice: bool,

    /// Write a header row at the top of each delimited file
    pub include_header: bool,
}

impl ExportConfig {
    /// Create a config with defaults for everything except the output directory
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file_prefix: default_file_prefix(),
            fields: Vec::new(),
            delimiter: default_delimiter(),
            format: ExportFormat::default(),
            file_per_slice: false,
            include_header: false,
        }
    }

    /// Set the file prefix
    #[must_use]
    pub fn with_file_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.file_prefix = prefix.into();
        self
    }

    /// Set the projected fields
    #[must_use]
    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Set the delimiter
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Set the output format
    #[must_use]
    pub fn with_format(mut self, format: ExportFormat) -> Self {
        self.format = format;
        self
    }

    /// Enable or disable one file per slice
    #[must_use]
    pub fn with_file_per_slice(mut self, enabled: bool) -> Self {
        self.file_per_slice = enabled;
        self
    }

    /// Enable or disable the header row
    #[must_use]
    pub fn with_header(mut self, enabled: bool) -> Self {
        self.include_header = enabled;
        self
    }

    /// Output directory
    pub fn output_dir(&self) -> &Path {
        &self.path
    }

    /// Delimiter actually written between values. `tsv` always uses a tab.
    pub fn effective_delimiter(&self) -> &str {
        match self.format {
            ExportFormat::Tsv => TAB,
            _ => &self.delimiter,
        }
    }

    /// Whether a header row is written for this format
    pub fn writes_header(&self) -> bool {
        self.include_header && self.format.is_delimited()
    }
}

impl RawExportConfig {
    /// Attach the required directory, returning `None` when it was not supplied
    pub(crate) fn into_config(self) -> Option<ExportConfig> {
        Some(ExportConfig {
            path: self.path?,
            file_prefix: self.file_prefix,
            fields: self.fields,
            delimiter: self.delimiter,
            format: self.format,
            file_per_slice: self.file_per_slice,
            include_header: self.include_header,
        })
    }
}
