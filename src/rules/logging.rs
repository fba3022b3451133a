use std::sync::LazyLock;

use regex::Regex;

use crate::checker::{Severity, Violation};
use crate::error::Result;
use crate::source::SourceFile;

use super::{Rule, word_alternation};

static STRING_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""((?:[^"\\]|\\.)*)""#).expect("Invalid regex"));

static LOCATION_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[A-Za-z][A-Za-z0-9_]*\]").expect("Invalid regex"));

static ERROR_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bERR_[A-Z0-9_]+\b").expect("Invalid regex"));

static KEY_VALUE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Za-z_]\w*=").expect("Invalid regex"));

/// 6.1: error-log messages need a location tag, a stable error id and at
/// least one `key=value` field.
///
/// A call may span several lines; the statement is reassembled from the call
/// up to the first `;` outside a string literal and reported once, at its
/// first line.
pub struct LogFormatRule {
    call: Option<Regex>,
}

impl LogFormatRule {
    pub const ID: &'static str = "6.1";

    /// # Errors
    /// Returns an error if the call names cannot be compiled into a pattern.
    pub fn new(log_calls: &[String]) -> Result<Self> {
        Ok(Self {
            call: word_alternation(log_calls, r"\s*\(")?,
        })
    }
}

/// Whether `text` holds a `;` outside string literals.
fn has_terminator(text: &str) -> bool {
    STRING_LITERAL.replace_all(text, "\"\"").contains(';')
}

/// Parts of the required message format absent from `message`.
fn missing_parts(message: &str) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if !LOCATION_TAG.is_match(message) {
        missing.push("location tag [TAG]");
    }
    if !ERROR_ID.is_match(message) {
        missing.push("error id ERR_*");
    }
    if !KEY_VALUE.is_match(message) {
        missing.push("key=value field");
    }
    missing
}

impl Rule for LogFormatRule {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn severity(&self) -> Severity {
        Severity::Strong
    }

    fn description(&self) -> &'static str {
        "error log message is missing required fields"
    }

    fn check(&self, file: &SourceFile) -> Vec<Violation> {
        let Some(call) = &self.call else {
            return Vec::new();
        };

        let mut violations = Vec::new();
        let mut index = 0;

        while index < file.lines.len() {
            let line = &file.lines[index];
            let Some(found) = call.find(line) else {
                index += 1;
                continue;
            };

            let first = index;
            let mut statement = line[found.start()..].to_string();
            let mut terminated = has_terminator(&statement);
            while !terminated && index + 1 < file.lines.len() {
                index += 1;
                let next = file.lines[index].trim();
                terminated = has_terminator(next);
                statement.push(' ');
                statement.push_str(next);
            }

            let message: String = STRING_LITERAL
                .captures_iter(&statement)
                .filter_map(|caps| caps.get(1))
                .map(|m| m.as_str())
                .collect();

            let missing = missing_parts(&message);
            if !missing.is_empty() {
                violations.push(Violation::new(
                    &file.path,
                    first + 1,
                    Self::ID,
                    Severity::Strong,
                    format!(
                        "'{}' message missing {}",
                        found.as_str().trim_end_matches('(').trim_end(),
                        missing.join(", ")
                    ),
                ));
            }

            index += 1;
        }

        violations
    }
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
