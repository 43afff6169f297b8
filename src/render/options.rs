//! Rendering options and configuration.

use super::{JsonFormat, NormalizeOptions};

/// Options for rendering extracted text and export documents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Normalize plain text output (raw decoder text otherwise)
    pub normalize: bool,

    /// Normalization settings, also used by the full-text JSON export,
    /// which is always normalized
    pub normalize_options: NormalizeOptions,

    /// JSON layout for exported documents
    pub json_format: JsonFormat,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable normalization of plain text output.
    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Set the normalization settings.
    pub fn with_normalize_options(mut self, options: NormalizeOptions) -> Self {
        self.normalize_options = options;
        self
    }

    /// Set the JSON format.
    pub fn with_json_format(mut self, format: JsonFormat) -> Self {
        self.json_format = format;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = RenderOptions::default();
        assert!(!options.normalize);
        assert!(!options.normalize_options.unicode_nfc);
        assert_eq!(options.json_format, JsonFormat::Pretty);
    }

    #[test]
    fn test_builder() {
        let options = RenderOptions::new()
            .with_normalize(true)
            .with_normalize_options(NormalizeOptions::new().with_nfc(true))
            .with_json_format(JsonFormat::Compact);
        assert!(options.normalize);
        assert!(options.normalize_options.unicode_nfc);
        assert_eq!(options.json_format, JsonFormat::Compact);
    }
}
