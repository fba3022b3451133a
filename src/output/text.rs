use std::fmt::Write;
use std::path::PathBuf;

use crate::checker::{Report, Severity};
use crate::error::Result;

use super::OutputFormatter;
use super::path::display_path;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    Always,
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RESET: &str = "\x1b[0m";
}

/// `path:line: SEVERITY rule: message` lines followed by a summary.
pub struct TextFormatter {
    use_colors: bool,
    project_root: Option<PathBuf>,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            project_root: None,
        }
    }

    #[must_use]
    pub fn with_project_root(mut self, root: Option<PathBuf>) -> Self {
        self.project_root = root;
        self
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, severity: Severity) -> String {
        if !self.use_colors {
            return severity.to_string();
        }
        let color = match severity {
            Severity::Blocker => ansi::RED,
            Severity::Strong => ansi::YELLOW,
            Severity::Advisory => ansi::CYAN,
        };
        format!("{color}{severity}{}", ansi::RESET)
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut output = String::new();

        for violation in &report.violations {
            writeln!(
                output,
                "{}:{}: {} {}: {}",
                display_path(&violation.file, self.project_root.as_deref()),
                violation.line,
                self.colorize(violation.severity),
                violation.rule_id,
                violation.message
            )
            .ok();
        }

        output.push_str(&report.summary_line());
        if report.waived > 0 {
            write!(output, " (waived: {})", report.waived).ok();
        }
        output.push('\n');

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
