//! Error types for unhwp library.

use std::io;
use thiserror::Error;

/// Result type alias for unhwp operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while decoding and exporting HWP content.
///
/// Normalization and table extraction never fail; every variant here comes
/// from decoding the input document or writing the output document.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file format is not recognized as an HWP document.
    #[error("Unknown file format: not a recognized HWP document")]
    UnknownFormat,

    /// The document is recognized but no decoder handles it.
    #[error("Unsupported document format: {0}")]
    UnsupportedFormat(String),

    /// The external decoder program could not be located.
    #[error("Decoder program not found: {0}")]
    DecoderNotFound(String),

    /// The decoder ran but failed to produce text.
    #[error("HWP decoding error: {0}")]
    Decode(String),

    /// Decoder output was not valid text.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Error during rendering (JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}
