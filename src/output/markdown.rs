use std::fmt::Write;
use std::path::PathBuf;

use crate::checker::Report;
use crate::error::Result;

use super::OutputFormatter;
use super::path::display_path;

/// Summary line followed by a violation table. The same body is written to
/// `--report` files.
pub struct MarkdownFormatter {
    project_root: Option<PathBuf>,
}

impl MarkdownFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self { project_root: None }
    }

    #[must_use]
    pub fn with_project_root(mut self, root: Option<PathBuf>) -> Self {
        self.project_root = root;
        self
    }

    /// The violation table alone, or `No violations found.`.
    #[must_use]
    pub fn table(&self, report: &Report) -> String {
        if report.is_clean() {
            return "No violations found.".to_string();
        }

        let mut output = String::new();
        writeln!(output, "| Severity | Rule | File | Line | Message |").ok();
        write!(output, "|---|---|---|---:|---|").ok();
        for violation in &report.violations {
            write!(
                output,
                "\n| {} | {} | `{}` | {} | {} |",
                violation.severity,
                violation.rule_id,
                display_path(&violation.file, self.project_root.as_deref()),
                violation.line,
                escape_cell(&violation.message)
            )
            .ok();
        }
        output
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Pipes would split the table cell.
fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

impl OutputFormatter for MarkdownFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        Ok(format!(
            "{}\n\n{}\n",
            report.summary_line(),
            self.table(report)
        ))
    }
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
