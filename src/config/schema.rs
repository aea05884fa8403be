//! Declarative schema of the export configuration
//!
//! Hosts use this to render help, build forms, or check defaults without
//! constructing a stage.

use super::types::{DEFAULT_DELIMITER, DEFAULT_FILE_PREFIX};
use crate::types::{ExportFormat, JsonObject, JsonValue};
use serde::Serialize;
use serde_json::json;

/// Value type of a configuration key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyKind {
    String,
    Boolean,
    StringList,
    Enum,
}

/// One configuration key
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaEntry {
    /// Key name in the flat configuration mapping
    pub name: &'static str,

    /// Human-readable description
    pub doc: &'static str,

    /// Value type
    #[serde(rename = "type")]
    pub kind: PropertyKind,

    /// Default value, `null` when the key is required
    pub default: JsonValue,

    /// Whether the key must be supplied
    pub required: bool,

    /// Accepted values for enum keys
    #[serde(rename = "enum", skip_serializing_if = "Vec::is_empty")]
    pub allowed_values: Vec<&'static str>,
}

/// Schema of every key `ExportConfig` accepts, in declaration order
pub fn schema() -> Vec<SchemaEntry> {
    vec![
        SchemaEntry {
            name: "path",
            doc: "Existing directory the export files are written into",
            kind: PropertyKind::String,
            default: JsonValue::Null,
            required: true,
            allowed_values: Vec::new(),
        },
        SchemaEntry {
            name: "file_prefix",
            doc: "Prefix of every export file name, followed by _<worker>",
            kind: PropertyKind::String,
            default: json!(DEFAULT_FILE_PREFIX),
            required: false,
            allowed_values: Vec::new(),
        },
        SchemaEntry {
            name: "fields",
            doc: "Ordered fields to export. Empty exports the keys of the first record in each slice",
            kind: PropertyKind::StringList,
            default: json!([]),
            required: false,
            allowed_values: Vec::new(),
        },
        SchemaEntry {
            name: "delimiter",
            doc: "Delimiter between values in csv output",
            kind: PropertyKind::String,
            default: json!(DEFAULT_DELIMITER),
            required: false,
            allowed_values: Vec::new(),
        },
        SchemaEntry {
            name: "format",
            doc: "Output format. tsv forces a tab delimiter",
            kind: PropertyKind::Enum,
            default: json!(ExportFormat::default().as_str()),
            required: false,
            allowed_values: ExportFormat::ALL.iter().map(|f| f.as_str()).collect(),
        },
        SchemaEntry {
            name: "file_per_slice",
            doc: "Write each slice to its own file suffixed with the slice index",
            kind: PropertyKind::Boolean,
            default: json!(false),
            required: false,
            allowed_values: Vec::new(),
        },
        SchemaEntry {
            name: "include_header",
            doc: "Write a header row once at the top of each csv/tsv file",
            kind: PropertyKind::Boolean,
            default: json!(false),
            required: false,
            allowed_values: Vec::new(),
        },
    ]
}

/// Schema as a JSON object keyed by property name
pub fn schema_json() -> JsonValue {
    let mut map = JsonObject::new();
    for entry in schema() {
        let mut value = json!(entry);
        if let Some(obj) = value.as_object_mut() {
            obj.remove("name");
        }
        map.insert(entry.name.to_string(), value);
    }
    JsonValue::Object(map)
}
