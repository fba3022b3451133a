use std::path::Path;

use super::*;
use crate::language::FileKind;

fn source(text: &str) -> SourceFile {
    SourceFile::from_text(Path::new("water.cpp"), FileKind::Source, text)
}

#[test]
fn line_at_limit_passes_and_one_over_fails() {
    let text = format!("{}\n{}\n", "a".repeat(120), "b".repeat(121));
    let violations = LineLengthRule::new(120).check(&source(&text));

    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].line, 2);
    assert_eq!(violations[0].severity, Severity::Advisory);
    assert_eq!(violations[0].rule_id, "1.3");
}

#[test]
fn line_width_counts_characters_not_bytes() {
    let text = "é".repeat(120);
    assert!(LineLengthRule::new(120).check(&source(&text)).is_empty());
}

#[test]
fn blank_run_reports_once_per_run() {
    let text = "int a;\n\n\n\n\n\nint b;\n";
    let violations = BlankRunRule::new(2).check(&source(text));

    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].line, 4);
}

#[test]
fn blank_run_resets_on_non_blank_line() {
    let text = "int a;\n\n\nint b;\n\n\nint c;\n";
    assert!(BlankRunRule::new(2).check(&source(text)).is_empty());
}

#[test]
fn whitespace_only_lines_count_as_blank() {
    let text = "int a;\n \n\t\n  \nint b;\n";
    let violations = BlankRunRule::new(2).check(&source(text));

    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].line, 4);
}

#[test]
fn separate_runs_are_reported_separately() {
    let text = "a\n\n\n\nb\n\n\n\nc\n";
    let lines: Vec<usize> = BlankRunRule::new(2)
        .check(&source(text))
        .iter()
        .map(|v| v.line)
        .collect();

    assert_eq!(lines, vec![4, 8]);
}

#[test]
fn trailing_space_and_tab_are_reported() {
    let text = "int a; \nint b;\t\nint c;\n";
    let lines: Vec<usize> = TrailingWhitespaceRule
        .check(&source(text))
        .iter()
        .map(|v| v.line)
        .collect();

    assert_eq!(lines, vec![1, 2]);
}
