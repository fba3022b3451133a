use std::sync::LazyLock;

use regex::Regex;

use crate::checker::{Severity, Violation};
use crate::error::Result;
use crate::source::SourceFile;

use super::{Rule, word_alternation};

static CAST_EXPRESSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\([^)]+\)\s*[A-Za-z_][\w\->\[\]\.]*").expect("Invalid regex")
});

static NAMED_CAST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:static_cast|reinterpret_cast|const_cast|dynamic_cast)\s*<")
        .expect("Invalid regex")
});

/// 5.1: manual memory management tokens.
pub struct RawMemoryRule {
    pattern: Option<Regex>,
}

impl RawMemoryRule {
    pub const ID: &'static str = "5.1";

    /// # Errors
    /// Returns an error if the tokens cannot be compiled into a pattern.
    pub fn new(tokens: &[String]) -> Result<Self> {
        Ok(Self {
            pattern: word_alternation(tokens, r"\b")?,
        })
    }
}

impl Rule for RawMemoryRule {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn severity(&self) -> Severity {
        Severity::Blocker
    }

    fn description(&self) -> &'static str {
        "raw memory management"
    }

    fn check(&self, file: &SourceFile) -> Vec<Violation> {
        let Some(pattern) = &self.pattern else {
            return Vec::new();
        };

        file.numbered_lines()
            .filter_map(|(number, line)| {
                pattern.find(line).map(|token| {
                    Violation::new(
                        &file.path,
                        number,
                        Self::ID,
                        Severity::Blocker,
                        format!(
                            "raw memory management '{}'; use RAII or static storage",
                            token.as_str()
                        ),
                    )
                })
            })
            .collect()
    }
}

/// 5.4: C-style casts such as `(uint8_t)value`.
///
/// Heuristic: a parenthesised expression directly followed by an identifier.
/// Lines that already use a named cast and preprocessor lines are skipped.
pub struct CStyleCastRule;

impl CStyleCastRule {
    pub const ID: &'static str = "5.4";

    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for CStyleCastRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for CStyleCastRule {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn severity(&self) -> Severity {
        Severity::Strong
    }

    fn description(&self) -> &'static str {
        "C-style cast"
    }

    fn check(&self, file: &SourceFile) -> Vec<Violation> {
        file.numbered_lines()
            .filter(|(_, line)| {
                !line.trim_start().starts_with('#')
                    && !NAMED_CAST.is_match(line)
                    && CAST_EXPRESSION.is_match(line)
            })
            .map(|(number, _)| {
                Violation::new(
                    &file.path,
                    number,
                    Self::ID,
                    Severity::Strong,
                    "C-style cast; use static_cast or another named cast",
                )
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
