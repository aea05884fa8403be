//! Field projection
//!
//! Works out which fields a slice is rendered with and checks that each record
//! has the shape the format needs.

use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue, Record};

/// Ordered field names a slice is rendered with.
///
/// Configured fields win. Otherwise the keys of the first record, in the order
/// they were received. The result borrows from its inputs and lives for a
/// single render.
pub fn projected_fields<'a>(records: &'a [Record], configured: &'a [String]) -> Result<Vec<&'a str>> {
    if !configured.is_empty() {
        return Ok(configured.iter().map(String::as_str).collect());
    }

    match records.first() {
        None => Ok(Vec::new()),
        Some(first) => Ok(as_object(first, 0)?.keys().map(String::as_str).collect()),
    }
}

/// Borrow a record as an object, or fail with the record's position
pub(crate) fn as_object(record: &Record, index: usize) -> Result<&JsonObject> {
    record.as_object().ok_or_else(|| {
        Error::serialization(
            index,
            format!("expected an object, found {}", kind_of(record)),
        )
    })
}

/// Short name of a JSON value's type for error messages
pub(crate) fn kind_of(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}
