//! Pipe-table detection over plain text.
//!
//! A pipe row is a line whose trimmed form starts and ends with `|`, such as
//! `| Name | Age |`. Consecutive pipe rows form one table; any other line
//! (including a blank one) closes the table in progress.
//!
//! Degenerate lines follow one rule: the trimmed line must be at least two
//! characters long with `|` at both ends. A lone `|` is not a row, `||` is a
//! row with one empty cell, and `|||` is a row with two empty cells.

use regex::Regex;

use crate::model::{Row, Table};

use super::lines::split_lines;

/// Matches a line that begins and ends with `|`, ignoring surrounding whitespace.
const PIPE_ROW_PATTERN: &str = r"^\s*\|.*\|\s*$";

/// Groups pipe-delimited lines into tables.
#[derive(Debug, Clone)]
pub struct TableDetector {
    pipe_row: Regex,
}

impl TableDetector {
    /// Create a new table detector.
    pub fn new() -> Self {
        Self {
            pipe_row: Regex::new(PIPE_ROW_PATTERN).expect("pipe-row pattern is valid"),
        }
    }

    /// Check whether a single line is a pipe row.
    pub fn is_pipe_row(&self, line: &str) -> bool {
        self.pipe_row.is_match(line)
    }

    /// Parse a pipe row into trimmed cells.
    ///
    /// Exactly one `|` is removed from each end before splitting, so
    /// `| a | b |` yields `["a", "b"]` and `||` yields `[""]`.
    pub fn parse_row(&self, line: &str) -> Row {
        let trimmed = line.trim();
        let inner = trimmed.strip_prefix('|').unwrap_or(trimmed);
        let inner = inner.strip_suffix('|').unwrap_or(inner);

        inner
            .split('|')
            .map(|cell| cell.trim().to_string())
            .collect::<Vec<_>>()
            .into()
    }

    /// Scan `text` and return every maximal block of pipe rows as a table.
    pub fn detect(&self, text: &str) -> Vec<Table> {
        let mut tables = Vec::new();
        let mut current: Vec<Row> = Vec::new();

        for line in split_lines(text).map(str::trim_end) {
            if self.is_pipe_row(line) {
                current.push(self.parse_row(line));
            } else if let Some(table) = Table::new(std::mem::take(&mut current)) {
                tables.push(table);
            }
        }

        if let Some(table) = Table::new(current) {
            tables.push(table);
        }

        log::debug!("Detected {} pipe tables", tables.len());
        tables
    }
}

impl Default for TableDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract pipe tables from text.
///
/// Never fails: text without pipe rows simply yields no tables.
///
/// # Example
///
/// ```
/// let tables = unhwp::extract_tables("| Name | Age |\n| Bob | 30 |");
/// assert_eq!(tables.len(), 1);
/// assert_eq!(tables[0].rows()[1].cells(), ["Bob", "30"]);
/// ```
pub fn extract_tables(text: &str) -> Vec<Table> {
    TableDetector::new().detect(text)
}
