//! Text normalization for decoded HWP text.
//!
//! Normalized text has every NBSP replaced by a regular space, lines split on
//! `\n`, `\r\n`, or `\r` and rejoined with `\n`, no trailing whitespace on any
//! line, and no blank lines at the end. Applying it twice changes nothing.

use unicode_normalization::UnicodeNormalization;

use crate::parser::split_lines;

const NBSP: char = '\u{00A0}';

/// Options for text normalization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Compose text to Unicode NFC (recombines decomposed Hangul jamo)
    pub unicode_nfc: bool,
}

impl NormalizeOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable NFC composition.
    pub fn with_nfc(mut self, enabled: bool) -> Self {
        self.unicode_nfc = enabled;
        self
    }
}

/// Text normalizer.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    options: NormalizeOptions,
}

impl Normalizer {
    /// Create a normalizer with the given options.
    pub fn new(options: NormalizeOptions) -> Self {
        Self { options }
    }

    /// Normalize `text`.
    pub fn process(&self, text: &str) -> String {
        let mut result = text.replace(NBSP, " ");

        if self.options.unicode_nfc {
            result = result.nfc().collect();
        }

        let mut lines: Vec<&str> = split_lines(&result).map(str::trim_end).collect();
        while lines.last().is_some_and(|line| line.is_empty()) {
            lines.pop();
        }

        lines.join("\n")
    }
}

/// Normalize text with default options.
///
/// # Example
///
/// ```
/// let text = unhwp::normalize_text("a\u{a0}b  \r\n  c\t\r\n");
/// assert_eq!(text, "a b\n  c");
/// ```
pub fn normalize(text: &str) -> String {
    Normalizer::default().process(text)
}
