//! Plain text rendering.

use super::{Normalizer, RenderOptions};

/// Render decoder text for output, normalizing it if configured.
pub fn to_text(raw: &str, options: &RenderOptions) -> String {
    if options.normalize {
        Normalizer::new(options.normalize_options).process(raw)
    } else {
        raw.to_string()
    }
}
