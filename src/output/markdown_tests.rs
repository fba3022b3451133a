use std::path::{Path, PathBuf};

use super::*;
use crate::checker::{FileOutcome, Severity, Violation};
use crate::waiver::WaiverIndex;

fn report_with(violations: Vec<Violation>) -> Report {
    Report::aggregate(
        vec![FileOutcome {
            path: PathBuf::from("aqua.ino"),
            candidates: violations,
            waivers: WaiverIndex::default(),
        }],
        |_| true,
    )
}

#[test]
fn clean_report_says_so() {
    let output = MarkdownFormatter::new().format(&report_with(Vec::new())).unwrap();

    assert_eq!(
        output,
        "Checked 1 files | BLOCKER=0 STRONG=0 ADVISORY=0\n\nNo violations found.\n"
    );
}

#[test]
fn violations_render_as_table_rows() {
    let report = report_with(vec![Violation::new(
        Path::new("aqua.ino"),
        9,
        "3.2",
        Severity::Blocker,
        "entry point 'loop' contains control flow; delegate to a module",
    )]);

    let table = MarkdownFormatter::new().table(&report);

    assert_eq!(
        table,
        "| Severity | Rule | File | Line | Message |\n\
         |---|---|---|---:|---|\n\
         | BLOCKER | 3.2 | `aqua.ino` | 9 | entry point 'loop' contains control flow; delegate to a module |"
    );
}

#[test]
fn pipes_in_messages_are_escaped() {
    let report = report_with(vec![Violation::new(
        Path::new("aqua.ino"),
        1,
        "5.4",
        Severity::Strong,
        "a | b",
    )]);

    assert!(MarkdownFormatter::new().table(&report).contains("a \\| b"));
}

#[test]
fn format_is_summary_blank_line_table() {
    let report = report_with(vec![Violation::new(
        Path::new("aqua.ino"),
        2,
        "8.2",
        Severity::Advisory,
        "trailing whitespace",
    )]);

    let output = MarkdownFormatter::new().format(&report).unwrap();
    let mut parts = output.splitn(2, "\n\n");

    assert_eq!(
        parts.next(),
        Some("Checked 1 files | BLOCKER=0 STRONG=0 ADVISORY=1")
    );
    assert!(parts.next().unwrap().starts_with("| Severity |"));
    assert!(output.ends_with("|\n"));
}
