use crate::checker::{Severity, Violation};
use crate::source::SourceFile;

use super::Rule;

/// 1.3: lines wider than the configured width.
pub struct LineLengthRule {
    max_width: usize,
}

impl LineLengthRule {
    pub const ID: &'static str = "1.3";

    #[must_use]
    pub const fn new(max_width: usize) -> Self {
        Self { max_width }
    }
}

impl Rule for LineLengthRule {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn severity(&self) -> Severity {
        Severity::Advisory
    }

    fn description(&self) -> &'static str {
        "line exceeds the maximum width"
    }

    fn check(&self, file: &SourceFile) -> Vec<Violation> {
        file.numbered_lines()
            .filter_map(|(number, line)| {
                let width = line.chars().count();
                (width > self.max_width).then(|| {
                    Violation::new(
                        &file.path,
                        number,
                        Self::ID,
                        Severity::Advisory,
                        format!("line exceeds {} characters ({width})", self.max_width),
                    )
                })
            })
            .collect()
    }
}

/// 1.4: runs of blank lines longer than allowed. Reported once per run.
pub struct BlankRunRule {
    max_run: usize,
}

impl BlankRunRule {
    pub const ID: &'static str = "1.4";

    #[must_use]
    pub const fn new(max_run: usize) -> Self {
        Self { max_run }
    }
}

impl Rule for BlankRunRule {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn severity(&self) -> Severity {
        Severity::Advisory
    }

    fn description(&self) -> &'static str {
        "too many consecutive blank lines"
    }

    fn check(&self, file: &SourceFile) -> Vec<Violation> {
        let mut violations = Vec::new();
        let mut run = 0usize;

        for (number, line) in file.numbered_lines() {
            if !line.trim().is_empty() {
                run = 0;
                continue;
            }
            run += 1;
            if run == self.max_run + 1 {
                violations.push(Violation::new(
                    &file.path,
                    number,
                    Self::ID,
                    Severity::Advisory,
                    format!("more than {} consecutive blank lines", self.max_run),
                ));
            }
        }

        violations
    }
}

/// 8.2: trailing spaces or tabs.
pub struct TrailingWhitespaceRule;

impl TrailingWhitespaceRule {
    pub const ID: &'static str = "8.2";
}

impl Rule for TrailingWhitespaceRule {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn severity(&self) -> Severity {
        Severity::Advisory
    }

    fn description(&self) -> &'static str {
        "trailing whitespace"
    }

    fn check(&self, file: &SourceFile) -> Vec<Violation> {
        file.numbered_lines()
            .filter(|(_, line)| line.ends_with([' ', '\t']))
            .map(|(number, _)| {
                Violation::new(
                    &file.path,
                    number,
                    Self::ID,
                    Severity::Advisory,
                    "trailing whitespace",
                )
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
