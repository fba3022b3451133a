use std::sync::LazyLock;

use regex::Regex;

use crate::checker::{Severity, Violation};
use crate::source::SourceFile;

use super::Rule;

static BOOL_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bbool\b").expect("Invalid regex"));

/// Pick the scaled severity for `count` against a two-level threshold.
const fn scaled(count: usize, strong: usize, blocker: usize) -> Option<(Severity, usize)> {
    if count > blocker {
        Some((Severity::Blocker, blocker))
    } else if count > strong {
        Some((Severity::Strong, strong))
    } else {
        None
    }
}

/// 2.1: file length, reported at line 1.
pub struct FileLengthRule {
    strong: usize,
    blocker: usize,
}

impl FileLengthRule {
    pub const ID: &'static str = "2.1";

    #[must_use]
    pub const fn new(strong: usize, blocker: usize) -> Self {
        Self { strong, blocker }
    }
}

impl Rule for FileLengthRule {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn severity(&self) -> Severity {
        Severity::Blocker
    }

    fn description(&self) -> &'static str {
        "file is too long"
    }

    fn check(&self, file: &SourceFile) -> Vec<Violation> {
        let count = file.line_count();
        scaled(count, self.strong, self.blocker)
            .map(|(severity, limit)| {
                Violation::new(
                    &file.path,
                    1,
                    Self::ID,
                    severity,
                    format!("file has {count} lines (limit {limit})"),
                )
            })
            .into_iter()
            .collect()
    }
}

/// 2.2: function body length, reported at the span start.
pub struct FunctionLengthRule {
    strong: usize,
    blocker: usize,
}

impl FunctionLengthRule {
    pub const ID: &'static str = "2.2";

    #[must_use]
    pub const fn new(strong: usize, blocker: usize) -> Self {
        Self { strong, blocker }
    }
}

impl Rule for FunctionLengthRule {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn severity(&self) -> Severity {
        Severity::Blocker
    }

    fn description(&self) -> &'static str {
        "function is too long"
    }

    fn check(&self, file: &SourceFile) -> Vec<Violation> {
        file.spans
            .iter()
            .filter_map(|span| {
                let count = span.line_count();
                scaled(count, self.strong, self.blocker).map(|(severity, limit)| {
                    Violation::new(
                        &file.path,
                        span.start_line,
                        Self::ID,
                        severity,
                        format!(
                            "function '{}' is {count} lines (limit {limit})",
                            span.name().unwrap_or("?")
                        ),
                    )
                })
            })
            .collect()
    }
}

/// 2.3: functions taking several `bool` parameters.
pub struct BoolParamsRule {
    max_bools: usize,
}

impl BoolParamsRule {
    pub const ID: &'static str = "2.3";

    #[must_use]
    pub const fn new(max_bools: usize) -> Self {
        Self { max_bools }
    }
}

impl Rule for BoolParamsRule {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn severity(&self) -> Severity {
        Severity::Strong
    }

    fn description(&self) -> &'static str {
        "too many bool parameters"
    }

    fn check(&self, file: &SourceFile) -> Vec<Violation> {
        file.spans
            .iter()
            .filter_map(|span| {
                let params = span.parameter_text()?;
                let count = BOOL_TOKEN.find_iter(params).count();
                (count > self.max_bools).then(|| {
                    Violation::new(
                        &file.path,
                        span.start_line,
                        Self::ID,
                        Severity::Strong,
                        format!(
                            "function '{}' takes {count} bool parameters; use an enum or options struct",
                            span.name().unwrap_or("?")
                        ),
                    )
                })
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "size_tests.rs"]
mod tests;
