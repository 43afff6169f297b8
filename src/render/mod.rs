//! Rendering module for normalized text and JSON export documents.

mod json;
mod normalize;
mod options;
mod text;

pub use json::{to_json, write_json, JsonFormat};
pub use normalize::{normalize, NormalizeOptions, Normalizer};
pub use options::RenderOptions;
pub use text::to_text;
