//! CSV/TSV rendering
//!
//! Strings are always quoted, numbers and booleans never are, and nulls or
//! missing fields leave an empty cell. Every row ends with `\n`.

use super::projection::as_object;
use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue, Record};

/// Render records as delimited rows into `out`, preceded by a header row when asked
pub(crate) fn render_delimited(
    records: &[Record],
    fields: &[&str],
    delimiter: &str,
    header: bool,
    out: &mut String,
) -> Result<()> {
    if header {
        push_header(fields, delimiter, out);
    }

    for (index, record) in records.iter().enumerate() {
        let obj = as_object(record, index)?;
        push_row(obj, fields, delimiter, index, out)?;
    }

    Ok(())
}

fn push_header(fields: &[&str], delimiter: &str, out: &mut String) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push_str(delimiter);
        }
        push_quoted(field, out);
    }
    out.push('\n');
}

fn push_row(
    obj: &JsonObject,
    fields: &[&str],
    delimiter: &str,
    index: usize,
    out: &mut String,
) -> Result<()> {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push_str(delimiter);
        }
        push_value(obj.get(*field), index, out)?;
    }
    out.push('\n');
    Ok(())
}

/// Append one cell
fn push_value(value: Option<&JsonValue>, index: usize, out: &mut String) -> Result<()> {
    match value {
        None | Some(JsonValue::Null) => {}
        Some(JsonValue::Bool(b)) => out.push_str(if *b { "true" } else { "false" }),
        // serde_json's form: an integral float keeps its `.0`
        Some(JsonValue::Number(n)) => out.push_str(&n.to_string()),
        Some(JsonValue::String(s)) => push_quoted(s, out),
        Some(nested @ (JsonValue::Array(_) | JsonValue::Object(_))) => {
            let json = serde_json::to_string(nested)
                .map_err(|e| Error::serialization(index, e.to_string()))?;
            push_quoted(&json, out);
        }
    }
    Ok(())
}

/// Wrap in double quotes, doubling any embedded quote
fn push_quoted(value: &str, out: &mut String) {
    out.push('"');
    for c in value.chars() {
        if c == '"' {
            out.push('"');
        }
        out.push(c);
    }
    out.push('"');
}

/// Render a single cell value
#[cfg(test)]
pub(crate) fn render_cell(value: Option<&JsonValue>) -> Result<String> {
    let mut out = String::new();
    push_value(value, 0, &mut out)?;
    Ok(out)
}
