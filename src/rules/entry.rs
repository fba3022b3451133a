use std::sync::LazyLock;

use regex::Regex;

use crate::analyzer::FunctionSpan;
use crate::checker::{Severity, Violation};
use crate::language::FileKind;
use crate::source::SourceFile;

use super::Rule;

static CONTROL_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:if|for|while|switch|do)\b").expect("Invalid regex"));

fn is_entry_point(span: &FunctionSpan, entry_points: &[String]) -> bool {
    span.name()
        .is_some_and(|name| entry_points.iter().any(|entry| entry == name))
}

/// 3.1: entry files may only define the reserved entry points.
pub struct EntryFunctionRule {
    entry_points: Vec<String>,
}

impl EntryFunctionRule {
    pub const ID: &'static str = "3.1";

    #[must_use]
    pub const fn new(entry_points: Vec<String>) -> Self {
        Self { entry_points }
    }
}

impl Rule for EntryFunctionRule {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn severity(&self) -> Severity {
        Severity::Blocker
    }

    fn description(&self) -> &'static str {
        "entry file defines a non-entry function"
    }

    fn applies_to(&self, kind: FileKind) -> bool {
        kind == FileKind::Entry
    }

    fn check(&self, file: &SourceFile) -> Vec<Violation> {
        file.spans
            .iter()
            .filter(|span| !is_entry_point(span, &self.entry_points))
            .map(|span| {
                Violation::new(
                    &file.path,
                    span.start_line,
                    Self::ID,
                    Severity::Blocker,
                    format!(
                        "function '{}' does not belong in the entry file; move it to a module",
                        span.name().unwrap_or("?")
                    ),
                )
            })
            .collect()
    }
}

/// 3.2: entry points must delegate, not branch or loop.
pub struct EntryLogicRule {
    entry_points: Vec<String>,
}

impl EntryLogicRule {
    pub const ID: &'static str = "3.2";

    #[must_use]
    pub const fn new(entry_points: Vec<String>) -> Self {
        Self { entry_points }
    }
}

/// First line of the body (text after the opening brace) that holds a
/// control keyword.
fn first_control_line(file: &SourceFile, span: &FunctionSpan) -> Option<usize> {
    let mut in_body = false;

    for number in span.start_line..=span.end_line {
        let line = file.line(number);
        let body = if in_body {
            line
        } else if let Some(open) = line.find('{') {
            in_body = true;
            &line[open + 1..]
        } else {
            continue;
        };

        if CONTROL_KEYWORD.is_match(body) {
            return Some(number);
        }
    }

    None
}

impl Rule for EntryLogicRule {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn severity(&self) -> Severity {
        Severity::Blocker
    }

    fn description(&self) -> &'static str {
        "entry point contains control flow"
    }

    fn applies_to(&self, kind: FileKind) -> bool {
        kind == FileKind::Entry
    }

    fn check(&self, file: &SourceFile) -> Vec<Violation> {
        file.spans
            .iter()
            .filter(|span| is_entry_point(span, &self.entry_points))
            .filter_map(|span| {
                let line = first_control_line(file, span)?;
                Some(Violation::new(
                    &file.path,
                    line,
                    Self::ID,
                    Severity::Blocker,
                    format!(
                        "entry point '{}' contains control flow; delegate to a module",
                        span.name().unwrap_or("?")
                    ),
                ))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "entry_tests.rs"]
mod tests;
