//! # unhwp
//!
//! Text and pipe-table extraction for HWP (Hangul Word Processor) documents.
//!
//! Decoding the HWP binary is delegated to an external decoder (`hwp5txt` by
//! default). This crate takes the decoded text from there: it normalizes it,
//! finds pipe-delimited tables such as `| Name | Age |`, and exports either
//! result as a JSON document.
//!
//! ## Quick Start
//!
//! ```no_run
//! use unhwp::Unhwp;
//!
//! fn main() -> unhwp::Result<()> {
//!     let result = Unhwp::new().normalized().open("report.hwp")?;
//!
//!     println!("{}", result.to_text());
//!     result.export_tables("tables.json")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! - **Normalizer**: NBSP to space, universal newlines, trailing whitespace
//!   removed ([`normalize_text`])
//! - **Table extraction**: maximal blocks of pipe rows ([`extract_tables`])
//! - **Export**: `{"source", "length_chars", "text"}` or
//!   `{"source", "table_count", "tables"}` JSON ([`Document`])
//!
//! Normalization and table extraction never fail; only decoding and writing
//! return errors.

pub mod decode;
pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use decode::{DecoderRegistry, Hwp5TxtDecoder, PlainTextDecoder, TextDecoder};
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_hwp, HwpFormat};
pub use error::{Error, Result};
pub use model::{Document, Payload, Row, Table};
pub use parser::{extract_tables, TableDetector};
pub use render::{
    normalize as normalize_text, write_json, JsonFormat, NormalizeOptions, Normalizer,
    RenderOptions,
};

use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Extract raw text from a document using the default decoders.
///
/// # Example
///
/// ```no_run
/// let text = unhwp::extract_text("report.hwp").unwrap();
/// println!("{}", text);
/// ```
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    DecoderRegistry::with_defaults().decode(path.as_ref())
}

/// Extract text, normalize it, and write it as a text JSON document.
///
/// # Example
///
/// ```no_run
/// unhwp::export_to_json("report.hwp", "report.json").unwrap();
/// ```
pub fn export_to_json<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<()> {
    Unhwp::new().open(input)?.export_json(output)
}

/// Extract pipe tables and write them as a table JSON document.
pub fn export_tables_to_json<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<()> {
    Unhwp::new().open(input)?.export_tables(output)
}

/// Builder that configures the extraction pipeline.
///
/// # Example
///
/// ```no_run
/// use unhwp::{JsonFormat, Unhwp};
///
/// let result = Unhwp::new()
///     .with_hwp5txt("/opt/pyhwp/bin/hwp5txt")
///     .normalized()
///     .with_nfc()
///     .with_json_format(JsonFormat::Compact)
///     .open("report.hwp")?;
/// println!("{} tables", result.tables().len());
/// # Ok::<(), unhwp::Error>(())
/// ```
pub struct Unhwp {
    registry: DecoderRegistry,
    render_options: RenderOptions,
}

impl Unhwp {
    /// Create a new builder with the default decoders.
    pub fn new() -> Self {
        Self {
            registry: DecoderRegistry::with_defaults(),
            render_options: RenderOptions::default(),
        }
    }

    /// Normalize plain text output and table input.
    pub fn normalized(mut self) -> Self {
        self.render_options.normalize = true;
        self
    }

    /// Compose text to Unicode NFC whenever it is normalized.
    pub fn with_nfc(mut self) -> Self {
        self.render_options.normalize_options.unicode_nfc = true;
        self
    }

    /// Set the JSON format for exports.
    pub fn with_json_format(mut self, format: JsonFormat) -> Self {
        self.render_options = self.render_options.with_json_format(format);
        self
    }

    /// Write compact JSON.
    pub fn compact(self) -> Self {
        self.with_json_format(JsonFormat::Compact)
    }

    /// Replace all render options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Register a decoder, replacing any decoder for the same extensions.
    pub fn with_decoder(mut self, decoder: Arc<dyn TextDecoder>) -> Self {
        self.registry.register(decoder);
        self
    }

    /// Run HWP files through the given `hwp5txt` program.
    pub fn with_hwp5txt(self, program: impl Into<PathBuf>) -> Self {
        self.with_decoder(Arc::new(Hwp5TxtDecoder::with_program(program)))
    }

    /// Decode a document and return a result wrapper.
    ///
    /// The source identifier is the path as given.
    pub fn open<P: AsRef<Path>>(self, path: P) -> Result<UnhwpResult> {
        let path = path.as_ref();
        let raw_text = self.registry.decode(path)?;
        log::debug!(
            "Decoded {} ({} chars)",
            path.display(),
            raw_text.chars().count()
        );
        Ok(self.from_text(path.to_string_lossy(), raw_text))
    }

    /// Wrap text that was already decoded elsewhere.
    pub fn from_text(self, source: impl Into<String>, raw_text: impl Into<String>) -> UnhwpResult {
        UnhwpResult {
            source: source.into(),
            raw_text: raw_text.into(),
            render_options: self.render_options,
        }
    }
}

impl Default for Unhwp {
    fn default() -> Self {
        Self::new()
    }
}

/// Decoded document text plus the options to render it with.
pub struct UnhwpResult {
    source: String,
    raw_text: String,
    render_options: RenderOptions,
}

impl UnhwpResult {
    /// Source identifier (the input path).
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Text exactly as the decoder produced it.
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// Text for plain output: normalized if configured, raw otherwise.
    pub fn to_text(&self) -> String {
        render::to_text(&self.raw_text, &self.render_options)
    }

    /// Normalized text, regardless of the `normalized` setting.
    pub fn normalized_text(&self) -> String {
        Normalizer::new(self.render_options.normalize_options).process(&self.raw_text)
    }

    /// Pipe tables found in the raw text.
    ///
    /// Cells keep interior characters as decoded; the normalize setting
    /// only affects [`to_text`](Self::to_text).
    pub fn tables(&self) -> Vec<Table> {
        extract_tables(&self.raw_text)
    }

    /// Full-text document built from the normalized text.
    pub fn text_document(&self) -> Document {
        Document::text(self.source.as_str(), self.normalized_text())
    }

    /// Table document.
    pub fn tables_document(&self) -> Document {
        Document::tables(self.source.as_str(), self.tables())
    }

    /// Serialize a document with the configured JSON format.
    pub fn to_json(&self, doc: &Document) -> Result<String> {
        render::to_json(doc, self.render_options.json_format)
    }

    /// Write a document to `path` with the configured JSON format.
    pub fn write_json<P: AsRef<Path>>(&self, doc: &Document, path: P) -> Result<()> {
        write_json(doc, path, self.render_options.json_format)
    }

    /// Write the full-text document to `path`.
    pub fn export_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.write_json(&self.text_document(), path)
    }

    /// Write the table document to `path`.
    pub fn export_tables<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.write_json(&self.tables_document(), path)
    }
}
