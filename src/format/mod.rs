//! Format module
//!
//! Renders a slice of records into the text appended to an export file.
//!
//! # Overview
//!
//! Rendering is pure: the only state it depends on is whether the target file
//! already has a header, which the caller passes in and gets back. A slice is
//! rendered completely in memory, so a record that cannot be serialized fails
//! the slice before anything reaches disk.
//!
//! | format | rows                              | header | fields |
//! |--------|-----------------------------------|--------|--------|
//! | csv    | delimiter from config             | yes    | yes    |
//! | tsv    | tab                               | yes    | yes    |
//! | json   | one compact object per line       | no     | yes    |
//! | text   | the record string per line        | no     | no     |

mod delimited;
mod lines;
mod projection;

pub use projection::projected_fields;

use crate::config::ExportConfig;
use crate::error::Result;
use crate::types::{ExportFormat, Record};

/// Text produced for one slice
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    /// Bytes to append to the target file
    pub text: String,
    /// Whether `text` starts with a header row
    pub wrote_header: bool,
    /// Number of records rendered
    pub records: usize,
}

impl Rendered {
    /// Whether nothing is to be appended
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Render a slice.
///
/// `header_written` is the header state of the file the text is going to. A
/// header is only emitted for csv/tsv with `include_header`, when the file has
/// none yet and the slice has at least one record.
pub fn render(records: &[Record], config: &ExportConfig, header_written: bool) -> Result<Rendered> {
    if records.is_empty() {
        return Ok(Rendered::default());
    }

    let mut text = String::new();
    let mut wrote_header = false;

    match config.format {
        ExportFormat::Csv | ExportFormat::Tsv => {
            let fields = projected_fields(records, &config.fields)?;
            wrote_header = config.writes_header() && !header_written;
            delimited::render_delimited(
                records,
                &fields,
                config.effective_delimiter(),
                wrote_header,
                &mut text,
            )?;
        }
        ExportFormat::Json => {
            let fields = projected_fields(records, &config.fields)?;
            lines::render_json(records, &fields, &mut text)?;
        }
        ExportFormat::Text => lines::render_text(records, &mut text)?,
    }

    Ok(Rendered {
        text,
        wrote_header,
        records: records.len(),
    })
}
