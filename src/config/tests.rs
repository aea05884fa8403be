//! Tests for config module

use super::*;
use crate::error::Error;
use crate::types::ExportFormat;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::path::Path;
use tempfile::tempdir;

// ============================================================================
// Schema Tests
// ============================================================================

#[test]
fn test_schema_defaults() {
    let schema = schema_json();
    assert_eq!(schema["path"]["default"], json!(null));
    assert_eq!(schema["file_prefix"]["default"], json!("export"));
    assert_eq!(schema["fields"]["default"], json!([]));
    assert_eq!(schema["delimiter"]["default"], json!(","));
    assert_eq!(schema["format"]["default"], json!("json"));
    assert_eq!(schema["file_per_slice"]["default"], json!(false));
    assert_eq!(schema["include_header"]["default"], json!(false));
}

#[test]
fn test_schema_order_and_required() {
    let entries = schema();
    let names: Vec<&str> = entries.iter().map(|e| e.name).collect();
    assert_eq!(
        names,
        vec![
            "path",
            "file_prefix",
            "fields",
            "delimiter",
            "format",
            "file_per_slice",
            "include_header"
        ]
    );

    let required: Vec<&str> = entries
        .iter()
        .filter(|e| e.required)
        .map(|e| e.name)
        .collect();
    assert_eq!(required, vec!["path"]);
}

#[test]
fn test_schema_format_enum() {
    let schema = schema_json();
    assert_eq!(schema["format"]["type"], json!("enum"));
    assert_eq!(schema["format"]["enum"], json!(["csv", "tsv", "json", "text"]));
    assert!(schema["delimiter"].get("enum").is_none());
}

#[test]
fn test_schema_defaults_match_config_defaults() {
    let config = ExportConfig::from_value(json!({"path": "/tmp"})).unwrap();
    let schema = schema_json();

    assert_eq!(schema["file_prefix"]["default"], json!(config.file_prefix));
    assert_eq!(schema["fields"]["default"], json!(config.fields));
    assert_eq!(schema["delimiter"]["default"], json!(config.delimiter));
    assert_eq!(schema["format"]["default"], json!(config.format));
    assert_eq!(schema["file_per_slice"]["default"], json!(config.file_per_slice));
    assert_eq!(schema["include_header"]["default"], json!(config.include_header));
}

// ============================================================================
// Parsing Tests
// ============================================================================

#[test]
fn test_from_value_defaults() {
    let config = ExportConfig::from_value(json!({"path": "/data/out"})).unwrap();
    assert_eq!(config, ExportConfig::new("/data/out"));
    assert_eq!(config.output_dir(), Path::new("/data/out"));
    assert_eq!(config.format, ExportFormat::Json);
}

#[test]
fn test_from_value_all_fields() {
    let config = ExportConfig::from_value(json!({
        "_op": "file_exporter",
        "path": "/data/out",
        "file_prefix": "test",
        "fields": ["field3", "field1"],
        "delimiter": "^",
        "format": "csv",
        "file_per_slice": true,
        "include_header": true
    }))
    .unwrap();

    let expected = ExportConfig::new("/data/out")
        .with_file_prefix("test")
        .with_fields(["field3", "field1"])
        .with_delimiter("^")
        .with_format(ExportFormat::Csv)
        .with_file_per_slice(true)
        .with_header(true);
    assert_eq!(config, expected);
}

#[test]
fn test_missing_path() {
    let err = ExportConfig::from_value(json!({"format": "csv"})).unwrap_err();
    assert!(matches!(err, Error::MissingConfigField { ref field } if field == "path"));
    assert!(err.is_config());
}

#[test]
fn test_null_path() {
    let err = ExportConfig::from_value(json!({"path": null})).unwrap_err();
    assert!(matches!(err, Error::MissingConfigField { .. }));
}

#[test]
fn test_unknown_format() {
    let err = ExportConfig::from_value(json!({"path": "/tmp", "format": "xml"})).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
    assert!(err.to_string().contains("xml"));
}

#[test]
fn test_wrong_types() {
    let cases = [
        json!({"path": "/tmp", "file_per_slice": "yes"}),
        json!({"path": "/tmp", "include_header": 1}),
        json!({"path": "/tmp", "fields": "field1"}),
        json!({"path": "/tmp", "fields": [1, 2]}),
        json!({"path": "/tmp", "delimiter": 9}),
        json!({"path": 42}),
    ];

    for case in cases {
        let err = ExportConfig::from_value(case.clone()).unwrap_err();
        assert!(err.is_config(), "expected config error for {case}");
    }
}

#[test]
fn test_not_a_mapping() {
    let err = ExportConfig::from_value(json!(["path", "/tmp"])).unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}

// ============================================================================
// Validation Tests
// ============================================================================

#[test]
fn test_validate_empty_values() {
    let cases = [
        (json!({"path": ""}), "path"),
        (json!({"path": "/tmp", "file_prefix": ""}), "file_prefix"),
        (json!({"path": "/tmp", "delimiter": ""}), "delimiter"),
        (json!({"path": "/tmp", "fields": ["a", ""]}), "fields"),
    ];

    for (case, expected_field) in cases {
        let err = ExportConfig::from_value(case).unwrap_err();
        match err {
            Error::InvalidConfigValue { field, .. } => assert_eq!(field, expected_field),
            other => panic!("Expected InvalidConfigValue, got {other:?}"),
        }
    }
}

#[test]
fn test_validate_duplicate_fields() {
    let err = ExportConfig::from_value(json!({"path": "/tmp", "fields": ["a", "b", "a"]}))
        .unwrap_err();
    assert!(err.to_string().contains("duplicate field 'a'"));
}

#[test]
fn test_multi_character_delimiter() {
    let config = ExportConfig::from_value(json!({"path": "/tmp", "delimiter": "||"})).unwrap();
    assert_eq!(config.effective_delimiter(), "||");
}

#[test]
fn test_tsv_forces_tab() {
    let config = ExportConfig::new("/tmp")
        .with_format(ExportFormat::Tsv)
        .with_delimiter("^");
    assert_eq!(config.effective_delimiter(), "\t");

    let config = config.with_format(ExportFormat::Csv);
    assert_eq!(config.effective_delimiter(), "^");
}

#[test]
fn test_writes_header_only_for_delimited() {
    let config = ExportConfig::new("/tmp").with_header(true);
    assert!(!config.writes_header());
    assert!(config.clone().with_format(ExportFormat::Csv).writes_header());
    assert!(config.clone().with_format(ExportFormat::Tsv).writes_header());
    assert!(!config.with_format(ExportFormat::Text).writes_header());
}

// ============================================================================
// Loader Tests
// ============================================================================

#[test]
fn test_from_yaml_str() {
    let yaml = r#"
path: ./out
file_prefix: test
format: tsv
fields:
  - field3
  - field1
include_header: true
"#;
    let config = ExportConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.path, Path::new("./out"));
    assert_eq!(config.format, ExportFormat::Tsv);
    assert_eq!(config.fields, vec!["field3", "field1"]);
    assert!(config.include_header);
    assert!(!config.file_per_slice);
}

#[test]
fn test_from_yaml_str_invalid() {
    let err = ExportConfig::from_yaml_str("path: [unclosed").unwrap_err();
    assert!(matches!(err, Error::YamlParse(_)));
}

#[test]
fn test_from_json_str_invalid() {
    let err = ExportConfig::from_json_str("{\"path\": ").unwrap_err();
    assert!(matches!(err, Error::JsonParse(_)));
}

#[test]
fn test_load_config_by_extension() {
    let dir = tempdir().unwrap();

    let json_path = dir.path().join("export.json");
    std::fs::write(&json_path, r#"{"path": "/data", "format": "csv"}"#).unwrap();
    let config = load_config(&json_path).unwrap();
    assert_eq!(config.format, ExportFormat::Csv);

    let yaml_path = dir.path().join("export.yaml");
    std::fs::write(&yaml_path, "path: /data\nformat: text\n").unwrap();
    let config = load_config(&yaml_path).unwrap();
    assert_eq!(config.format, ExportFormat::Text);
}

#[test]
fn test_load_config_missing_file() {
    let dir = tempdir().unwrap();
    let err = load_config(dir.path().join("nope.yaml")).unwrap_err();
    assert!(err.is_config());
    assert!(err.to_string().contains("Failed to read config file"));
}
