use std::path::{Path, PathBuf};

use super::*;
use crate::checker::{FileOutcome, Violation};
use crate::waiver::WaiverIndex;

fn report(violations: Vec<Violation>, waiver_lines: &[&str]) -> Report {
    Report::aggregate(
        vec![FileOutcome {
            path: PathBuf::from("src/pump.cpp"),
            candidates: violations,
            waivers: WaiverIndex::build(waiver_lines),
        }],
        |_| true,
    )
}

fn violation(line: usize, rule_id: &str, severity: Severity, message: &str) -> Violation {
    Violation::new(Path::new("src/pump.cpp"), line, rule_id, severity, message)
}

#[test]
fn one_line_per_violation_then_summary() {
    let report = report(
        vec![
            violation(12, "5.1", Severity::Blocker, "raw memory management 'new'"),
            violation(3, "8.2", Severity::Advisory, "trailing whitespace"),
        ],
        &[],
    );

    let output = TextFormatter::new(ColorMode::Never).format(&report).unwrap();

    assert_eq!(
        output,
        "src/pump.cpp:3: ADVISORY 8.2: trailing whitespace\n\
         src/pump.cpp:12: BLOCKER 5.1: raw memory management 'new'\n\
         Checked 1 files | BLOCKER=1 STRONG=0 ADVISORY=1\n"
    );
}

#[test]
fn clean_report_prints_only_summary() {
    let output = TextFormatter::new(ColorMode::Never)
        .format(&report(Vec::new(), &[]))
        .unwrap();

    assert_eq!(output, "Checked 1 files | BLOCKER=0 STRONG=0 ADVISORY=0\n");
}

#[test]
fn waived_count_is_shown_when_non_zero() {
    let report = report(
        vec![violation(2, "5.4", Severity::Strong, "C-style cast")],
        &["// GUIDELINE-WAIVER: 5.4 register access"],
    );

    let output = TextFormatter::new(ColorMode::Never).format(&report).unwrap();

    assert!(output.ends_with("(waived: 1)\n"));
}

#[test]
fn colors_wrap_severity_only() {
    let report = report(vec![violation(1, "5.1", Severity::Blocker, "m")], &[]);

    let output = TextFormatter::new(ColorMode::Always).format(&report).unwrap();

    assert!(output.contains("\x1b[31mBLOCKER\x1b[0m 5.1: m"));
}

#[test]
fn paths_are_shown_relative_to_project_root() {
    let report = Report::aggregate(
        vec![FileOutcome {
            path: PathBuf::from("/work/aqua/src/pump.cpp"),
            candidates: vec![Violation::new(
                Path::new("/work/aqua/src/pump.cpp"),
                1,
                "8.2",
                Severity::Advisory,
                "trailing whitespace",
            )],
            waivers: WaiverIndex::default(),
        }],
        |_| true,
    );

    let output = TextFormatter::new(ColorMode::Never)
        .with_project_root(Some(PathBuf::from("/work/aqua")))
        .format(&report)
        .unwrap();

    assert!(output.starts_with("src/pump.cpp:1: "));
}
