//! Decoder for text that was already extracted from a document.

use crate::error::Result;
use std::path::Path;

use super::TextDecoder;

const BOM: char = '\u{FEFF}';

/// Reads UTF-8 text files as-is.
#[derive(Debug, Clone, Default)]
pub struct PlainTextDecoder {
    _private: (),
}

impl PlainTextDecoder {
    /// Create a new plain text decoder.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl TextDecoder for PlainTextDecoder {
    fn supported_extensions(&self) -> &[&str] {
        &["txt", "text"]
    }

    fn name(&self) -> &str {
        "text"
    }

    fn decode(&self, path: &Path) -> Result<String> {
        let text = std::fs::read_to_string(path)?;
        Ok(match text.strip_prefix(BOM) {
            Some(stripped) => stripped.to_string(),
            None => text,
        })
    }
}
