//! JSON rendering for export documents.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::Document;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with 2-space indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a document to JSON.
///
/// Non-ASCII text is written as-is, not as `\u` escapes.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc),
        JsonFormat::Compact => serde_json::to_string(doc),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

/// Write a document as UTF-8 JSON to `path`, creating or truncating it.
///
/// I/O failures come back as [`Error::Io`] with the original error kind.
pub fn write_json<P: AsRef<Path>>(doc: &Document, path: P, format: JsonFormat) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);

    let result = match format {
        JsonFormat::Pretty => serde_json::to_writer_pretty(&mut writer, doc),
        JsonFormat::Compact => serde_json::to_writer(&mut writer, doc),
    };
    result.map_err(|e| {
        if e.is_io() {
            Error::Io(e.into())
        } else {
            Error::Render(format!("JSON serialization error: {}", e))
        }
    })?;

    writer.flush()?;
    log::debug!("Wrote {} to {}", doc.source(), path.display());
    Ok(())
}
