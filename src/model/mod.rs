//! Document model types for extracted HWP content.
//!
//! Every value here is built once per export and never mutated afterwards.

mod document;
mod table;

pub use document::{Document, Payload};
pub use table::{Row, Table};
