//! Integration tests for normalization, table extraction, and export.

use proptest::prelude::*;
use unhwp::{extract_tables, normalize_text, Document, JsonFormat, Table, Unhwp};

const NBSP: char = '\u{a0}';

fn cells(tables: &[Table]) -> Vec<Vec<Vec<String>>> {
    tables
        .iter()
        .map(|t| t.rows().iter().map(|r| r.cells().to_vec()).collect())
        .collect()
}

fn render_row(row: &[String]) -> String {
    format!("| {} |", row.join(" | "))
}

#[test]
fn test_two_tables_separated_by_text() {
    let tables = extract_tables("| Name | Age |\n| Bob | 30 |\nSome text\n| X | Y |");
    assert_eq!(
        cells(&tables),
        vec![
            vec![vec!["Name", "Age"], vec!["Bob", "30"]],
            vec![vec!["X", "Y"]],
        ]
    );
}

#[test]
fn test_empty_input() {
    assert!(extract_tables("").is_empty());
    assert_eq!(normalize_text(""), "");
}

#[test]
fn test_nbsp_with_trailing_spaces() {
    let normalized = normalize_text("금액\u{a0}합계\u{a0}   \n다음 줄");
    assert_eq!(normalized, "금액 합계\n다음 줄");
    assert!(!normalized.contains('\u{a0}'));
}

#[test]
fn test_text_export_counts_chars() {
    let doc = Document::text("doc.hwp", normalize_text("café"));
    let json = unhwp::render::to_json(&doc, JsonFormat::Pretty).unwrap();

    assert!(json.contains("\"length_chars\": 4"));
    assert!(json.contains("\"text\": \"café\""));
}

#[test]
fn test_single_pipe_is_not_a_row() {
    assert!(extract_tables("|").is_empty());
    assert!(extract_tables("  |  \n|").is_empty());
}

#[test]
fn test_row_cell_count() {
    let tables = extract_tables("| a | b | c |");
    assert_eq!(tables[0].rows()[0].cells(), ["a", "b", "c"]);
}

#[test]
fn test_lone_cr_is_a_line_boundary() {
    assert_eq!(normalize_text("a  \rb"), "a\nb");
    assert_eq!(extract_tables("| a |\r| b |")[0].row_count(), 2);
    assert_eq!(extract_tables("| a |\rtext\r| b |").len(), 2);
}

#[test]
fn test_tables_from_normalized_and_raw_agree() {
    let raw = "intro\u{a0}\r\n| 가 | 나 |  \r\n|\u{a0}다 | 라 |\r\n\r\noutro\r\n";
    assert_eq!(extract_tables(raw), extract_tables(&normalize_text(raw)));
}

#[test]
fn test_tables_keep_interior_nbsp_when_normalized() {
    let raw = "| a\u{a0}b | c |\n";

    let plain = Unhwp::new().from_text("s", raw);
    let normalized = Unhwp::new().normalized().from_text("s", raw);

    assert_eq!(normalized.to_text(), "| a b | c |");
    assert_eq!(plain.tables(), normalized.tables());
    assert_eq!(normalized.tables()[0].rows()[0].cells(), ["a\u{a0}b", "c"]);
}

proptest! {
    #[test]
    fn prop_normalize_idempotent(s in any::<String>()) {
        let once = normalize_text(&s);
        prop_assert_eq!(normalize_text(&once), once);
    }

    #[test]
    fn prop_normalize_idempotent_on_line_soup(s in "[ a|\t\r\n\u{a0}]{0,40}") {
        let once = normalize_text(&s);
        prop_assert_eq!(normalize_text(&once), once);
    }

    #[test]
    fn prop_normalized_lines_have_no_trailing_whitespace(s in any::<String>()) {
        let normalized = normalize_text(&s);
        prop_assert!(!normalized.contains('\r'));
        prop_assert!(!normalized.contains(NBSP), "NBSP left in normalized output");
        for line in normalized.split('\n') {
            prop_assert_eq!(line, line.trim_end());
        }
    }

    #[test]
    fn prop_extract_tables_total(s in any::<String>()) {
        for table in extract_tables(&s) {
            prop_assert!(table.row_count() > 0);
        }
    }

    #[test]
    fn prop_text_without_pipes_has_no_tables(s in "[^|]{0,80}") {
        prop_assert!(extract_tables(&s).is_empty());
    }

    #[test]
    fn prop_separator_splits_and_contiguity_merges(
        first in prop::collection::vec(prop::collection::vec("[a-z0-9]{1,6}", 1..4), 1..4),
        second in prop::collection::vec(prop::collection::vec("[a-z0-9]{1,6}", 1..4), 1..4),
    ) {
        let first_lines: Vec<String> = first.iter().map(|r| render_row(r)).collect();
        let second_lines: Vec<String> = second.iter().map(|r| render_row(r)).collect();

        let separated = format!(
            "{}\nnot a table row\n{}",
            first_lines.join("\n"),
            second_lines.join("\n")
        );
        let tables = extract_tables(&separated);
        prop_assert_eq!(tables.len(), 2);
        prop_assert_eq!(&cells(&tables)[0], &first);
        prop_assert_eq!(&cells(&tables)[1], &second);

        let merged = format!("{}\n{}", first_lines.join("\n"), second_lines.join("\n"));
        let tables = extract_tables(&merged);
        prop_assert_eq!(tables.len(), 1);
        let mut all_rows = first.clone();
        all_rows.extend(second.iter().cloned());
        prop_assert_eq!(&cells(&tables)[0], &all_rows);
    }
}
