//! Text decoders that turn document files into raw text.
//!
//! Decoding HWP binaries is delegated to external tools; everything
//! downstream only ever sees the decoded string. Decoders are registered per
//! file extension in a [`DecoderRegistry`].
//!
//! # Example
//!
//! ```no_run
//! use unhwp::decode::{DecoderRegistry, Hwp5TxtDecoder};
//! use std::sync::Arc;
//! use std::path::Path;
//!
//! fn main() -> unhwp::Result<()> {
//!     let mut registry = DecoderRegistry::new();
//!     registry.register(Arc::new(Hwp5TxtDecoder::with_program("/opt/pyhwp/bin/hwp5txt")));
//!
//!     let text = registry.decode(Path::new("report.hwp"))?;
//!     println!("{}", text);
//!     Ok(())
//! }
//! ```

mod hwp5txt;
mod plain;

pub use hwp5txt::Hwp5TxtDecoder;
pub use plain::PlainTextDecoder;

use crate::detect::{detect_format_from_path, HwpFormat};
use crate::error::{Error, Result};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Trait for text decoders.
///
/// Implement this trait to plug in another way of decoding documents.
pub trait TextDecoder: Send + Sync {
    /// Get the supported file extensions for this decoder.
    ///
    /// Extensions should be lowercase without the leading dot (e.g., `["hwp"]`).
    fn supported_extensions(&self) -> &[&str];

    /// Get the name of this decoder.
    fn name(&self) -> &str;

    /// Decode the file at `path` into text.
    fn decode(&self, path: &Path) -> Result<String>;

    /// Check if this decoder supports the given extension.
    fn supports_extension(&self, ext: &str) -> bool {
        let ext_lower = ext.to_lowercase();
        self.supported_extensions().iter().any(|e| *e == ext_lower)
    }
}

/// Registry for text decoders.
///
/// Maps file extensions to decoders. Files whose extension is missing or
/// unregistered are sniffed, and HWP 5 files go to the decoder named `hwp`.
pub struct DecoderRegistry {
    decoders: HashMap<String, Arc<dyn TextDecoder>>,
    by_name: HashMap<String, Arc<dyn TextDecoder>>,
}

impl DecoderRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            decoders: HashMap::new(),
            by_name: HashMap::new(),
        }
    }

    /// Create a registry with the default decoders (hwp5txt, plain text).
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(Hwp5TxtDecoder::new()));
        registry.register(Arc::new(PlainTextDecoder::new()));
        registry
    }

    /// Register a decoder for all its supported extensions.
    ///
    /// A later registration replaces an earlier one for the same extension.
    pub fn register(&mut self, decoder: Arc<dyn TextDecoder>) {
        for ext in decoder.supported_extensions() {
            self.decoders.insert(ext.to_lowercase(), decoder.clone());
        }
        self.by_name.insert(decoder.name().to_lowercase(), decoder);
    }

    /// Get a decoder by file extension.
    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn TextDecoder>> {
        self.decoders.get(&ext.to_lowercase()).cloned()
    }

    /// Get a decoder by name.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn TextDecoder>> {
        self.by_name.get(&name.to_lowercase()).cloned()
    }

    /// Check if an extension is supported.
    pub fn supports(&self, ext: &str) -> bool {
        self.decoders.contains_key(&ext.to_lowercase())
    }

    /// Get all supported extensions.
    pub fn supported_extensions(&self) -> Vec<&str> {
        self.decoders.keys().map(|s| s.as_str()).collect()
    }

    /// Decode a file using the appropriate decoder.
    pub fn decode(&self, path: &Path) -> Result<String> {
        let decoder = match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if self.supports(ext) => self.get_by_extension(ext),
            _ => self.sniff(path)?,
        };

        let decoder = decoder.ok_or_else(|| {
            Error::UnsupportedFormat(format!("no decoder for {}", path.display()))
        })?;

        log::debug!("Decoding {} with {}", path.display(), decoder.name());
        decoder.decode(path)
    }

    fn sniff(&self, path: &Path) -> Result<Option<Arc<dyn TextDecoder>>> {
        match detect_format_from_path(path)? {
            HwpFormat::Hwp5 => Ok(self.get_by_name("hwp")),
            other => Err(Error::UnsupportedFormat(other.to_string())),
        }
    }
}

impl Default for DecoderRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
