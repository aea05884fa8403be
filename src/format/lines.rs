//! Line formats: JSON lines and raw text

use super::projection::{as_object, kind_of};
use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue, Record};

/// Render each record as one compact JSON object per line, keeping only `fields`
pub(crate) fn render_json(records: &[Record], fields: &[&str], out: &mut String) -> Result<()> {
    for (index, record) in records.iter().enumerate() {
        let obj = as_object(record, index)?;

        let mut projected = JsonObject::new();
        for field in fields {
            if let Some(value) = obj.get(*field) {
                projected.insert((*field).to_string(), value.clone());
            }
        }

        let line = serde_json::to_string(&JsonValue::Object(projected))
            .map_err(|e| Error::serialization(index, e.to_string()))?;
        out.push_str(&line);
        out.push('\n');
    }
    Ok(())
}

/// Write each record's string verbatim, one per line
pub(crate) fn render_text(records: &[Record], out: &mut String) -> Result<()> {
    for (index, record) in records.iter().enumerate() {
        let JsonValue::String(text) = record else {
            return Err(Error::serialization(
                index,
                format!("text format expects a string, found {}", kind_of(record)),
            ));
        };
        out.push_str(text);
        out.push('\n');
    }
    Ok(())
}
