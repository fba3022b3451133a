use serde::Serialize;

use crate::checker::{Report, Severity, Violation};
use crate::error::Result;

use super::OutputFormatter;
use super::path::normalize_separators;

pub struct JsonFormatter {
    fail_on: Vec<Severity>,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    violations: Vec<JsonViolation<'a>>,
}

#[derive(Serialize)]
struct Summary {
    files_scanned: usize,
    waived: usize,
    blocker: usize,
    strong: usize,
    advisory: usize,
    failed: bool,
}

#[derive(Serialize)]
struct JsonViolation<'a> {
    file: String,
    line: usize,
    rule_id: &'a str,
    severity: Severity,
    message: &'a str,
}

impl JsonFormatter {
    /// `fail_on` decides the `summary.failed` verdict.
    #[must_use]
    pub fn new(fail_on: &[Severity]) -> Self {
        Self {
            fail_on: fail_on.to_vec(),
        }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new(&Severity::default_fail_on())
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                files_scanned: report.files_scanned,
                waived: report.waived,
                blocker: report.counts.blocker,
                strong: report.counts.strong,
                advisory: report.counts.advisory,
                failed: report.should_fail(&self.fail_on),
            },
            violations: report.violations.iter().map(convert_violation).collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_violation(violation: &Violation) -> JsonViolation<'_> {
    JsonViolation {
        file: normalize_separators(&violation.file.to_string_lossy()),
        line: violation.line,
        rule_id: &violation.rule_id,
        severity: violation.severity,
        message: &violation.message,
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
