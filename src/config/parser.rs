//! Export config loading and validation
//!
//! Accepts the flat mapping a host supplies (as JSON, YAML or an already parsed
//! value) and turns it into a validated `ExportConfig`.

use super::types::{ExportConfig, RawExportConfig};
use crate::error::{Error, Result};
use crate::types::JsonValue;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

impl ExportConfig {
    /// Build a validated config from a flat JSON mapping
    pub fn from_value(value: JsonValue) -> Result<Self> {
        if !value.is_object() {
            return Err(Error::config(
                "Export config must be a mapping of option names to values",
            ));
        }

        let raw: RawExportConfig = serde_json::from_value(value)
            .map_err(|e| Error::config(format!("Invalid export config: {e}")))?;

        let config = raw
            .into_config()
            .ok_or_else(|| Error::missing_field("path"))?;

        config.validate()?;
        Ok(config)
    }

    /// Build a validated config from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: JsonValue = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Build a validated config from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let value: JsonValue = serde_yaml::from_str(yaml)?;
        Self::from_value(value)
    }

    /// Check values that deserialization alone cannot reject
    pub fn validate(&self) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            return Err(Error::invalid_value("path", "must not be empty"));
        }

        if self.file_prefix.is_empty() {
            return Err(Error::invalid_value("file_prefix", "must not be empty"));
        }

        if self.delimiter.is_empty() {
            return Err(Error::invalid_value("delimiter", "must not be empty"));
        }

        let mut seen = HashSet::new();
        for field in &self.fields {
            if field.is_empty() {
                return Err(Error::invalid_value("fields", "field names must not be empty"));
            }
            if !seen.insert(field.as_str()) {
                return Err(Error::invalid_value(
                    "fields",
                    format!("duplicate field '{field}'"),
                ));
            }
        }

        Ok(())
    }
}

/// Load an export config file. `.json` files are parsed as JSON, anything else as YAML.
pub fn load_config(path: impl AsRef<Path>) -> Result<ExportConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        Error::config(format!(
            "Failed to read config file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        ExportConfig::from_json_str(&content)
    } else {
        ExportConfig::from_yaml_str(&content)
    }
}
