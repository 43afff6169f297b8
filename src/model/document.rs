//! Document-level types.

use super::Table;
use serde::Serialize;

/// Content carried by a [`Document`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// Full (normalized) document text
    Text(String),
    /// Pipe tables found in the document text
    Tables(Vec<Table>),
}

/// An export document: source identifier, a metric derived from the payload,
/// and the payload itself.
///
/// Serializes with keys in that order:
/// `{"source", "length_chars", "text"}` or `{"source", "table_count", "tables"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Document {
    /// Full-text export.
    Text {
        /// Source identifier (input path)
        source: String,
        /// Number of characters in `text`
        length_chars: usize,
        /// Document text
        text: String,
    },
    /// Table export.
    Tables {
        /// Source identifier (input path)
        source: String,
        /// Number of tables in `tables`
        table_count: usize,
        /// Extracted tables
        tables: Vec<Table>,
    },
}

impl Document {
    /// Build a document, deriving the metric from the payload.
    pub fn new(source: impl Into<String>, payload: Payload) -> Self {
        let source = source.into();
        match payload {
            Payload::Text(text) => Document::Text {
                source,
                length_chars: text.chars().count(),
                text,
            },
            Payload::Tables(tables) => Document::Tables {
                source,
                table_count: tables.len(),
                tables,
            },
        }
    }

    /// Build a full-text document.
    pub fn text(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(source, Payload::Text(text.into()))
    }

    /// Build a table document.
    pub fn tables(source: impl Into<String>, tables: Vec<Table>) -> Self {
        Self::new(source, Payload::Tables(tables))
    }

    /// Source identifier.
    pub fn source(&self) -> &str {
        match self {
            Document::Text { source, .. } | Document::Tables { source, .. } => source,
        }
    }

    /// Character count for text documents, table count for table documents.
    pub fn metric(&self) -> usize {
        match self {
            Document::Text { length_chars, .. } => *length_chars,
            Document::Tables { table_count, .. } => *table_count,
        }
    }

    /// Check if this is a full-text document.
    pub fn is_text(&self) -> bool {
        matches!(self, Document::Text { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Row;

    #[test]
    fn test_text_metric_counts_chars() {
        let doc = Document::text("a.hwp", "café");
        assert_eq!(doc.metric(), 4);
        assert_eq!(doc.source(), "a.hwp");
        assert!(doc.is_text());
    }

    #[test]
    fn test_hangul_metric_counts_chars() {
        let doc = Document::text("a.hwp", "한글 문서");
        assert_eq!(doc.metric(), 5);
    }

    #[test]
    fn test_tables_metric_counts_tables() {
        let tables = vec![
            Table::new(vec![Row::from_strings(["a"])]).unwrap(),
            Table::new(vec![Row::from_strings(["b"])]).unwrap(),
        ];
        let doc = Document::tables("a.hwp", tables);
        assert_eq!(doc.metric(), 2);
        assert!(!doc.is_text());
    }

    #[test]
    fn test_key_order() {
        let json = serde_json::to_string(&Document::text("s", "t")).unwrap();
        assert_eq!(json, r#"{"source":"s","length_chars":1,"text":"t"}"#);

        let json = serde_json::to_string(&Document::tables("s", Vec::new())).unwrap();
        assert_eq!(json, r#"{"source":"s","table_count":0,"tables":[]}"#);
    }
}
