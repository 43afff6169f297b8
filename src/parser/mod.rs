//! Line-oriented text parsing.

mod lines;
mod table_detector;

pub use lines::{split_lines, Lines};
pub use table_detector::{extract_tables, TableDetector};
