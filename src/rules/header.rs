use std::sync::LazyLock;

use regex::Regex;

use crate::checker::{Severity, Violation};
use crate::language::FileKind;
use crate::source::SourceFile;

use super::Rule;

static INCLUDE_DIRECTIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*#\s*include\b").expect("Invalid regex"));

static USING_NAMESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\busing\s+namespace\b").expect("Invalid regex"));

/// 4.1: headers must open with the configured guard directive.
pub struct HeaderGuardRule {
    guard: String,
}

impl HeaderGuardRule {
    pub const ID: &'static str = "4.1";

    #[must_use]
    pub fn new(guard: &str) -> Self {
        Self {
            guard: guard.trim().to_string(),
        }
    }
}

/// First line with code on it, skipping blank lines and comments.
///
/// Returns the code portion of that line, trimmed. A line that closes a
/// block comment and then carries code yields the text after `*/`.
fn first_code_line(lines: &[String]) -> Option<&str> {
    let mut in_block = false;

    for line in lines {
        let mut rest = line.trim();
        loop {
            if in_block {
                match rest.find("*/") {
                    Some(end) => {
                        in_block = false;
                        rest = rest[end + 2..].trim_start();
                    }
                    None => break,
                }
            } else if let Some(after) = rest.strip_prefix("/*") {
                in_block = true;
                rest = after;
            } else if rest.is_empty() || rest.starts_with("//") {
                break;
            } else {
                return Some(rest.trim_end());
            }
        }
    }

    None
}

impl Rule for HeaderGuardRule {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn severity(&self) -> Severity {
        Severity::Blocker
    }

    fn description(&self) -> &'static str {
        "header does not start with the guard directive"
    }

    fn applies_to(&self, kind: FileKind) -> bool {
        kind == FileKind::Header
    }

    fn check(&self, file: &SourceFile) -> Vec<Violation> {
        if first_code_line(&file.lines) == Some(self.guard.as_str()) {
            return Vec::new();
        }
        vec![Violation::new(
            &file.path,
            1,
            Self::ID,
            Severity::Blocker,
            format!("header must start with '{}'", self.guard),
        )]
    }
}

/// 4.2: headers pulling in too many includes. Reported once, at the first
/// include over the limit.
pub struct IncludeCountRule {
    max_includes: usize,
}

impl IncludeCountRule {
    pub const ID: &'static str = "4.2";

    #[must_use]
    pub const fn new(max_includes: usize) -> Self {
        Self { max_includes }
    }
}

impl Rule for IncludeCountRule {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn severity(&self) -> Severity {
        Severity::Blocker
    }

    fn description(&self) -> &'static str {
        "header has too many includes"
    }

    fn applies_to(&self, kind: FileKind) -> bool {
        kind == FileKind::Header
    }

    fn check(&self, file: &SourceFile) -> Vec<Violation> {
        let total = file
            .lines
            .iter()
            .filter(|line| INCLUDE_DIRECTIVE.is_match(line))
            .count();

        file.numbered_lines()
            .filter(|(_, line)| INCLUDE_DIRECTIVE.is_match(line))
            .nth(self.max_includes)
            .map(|(number, _)| {
                Violation::new(
                    &file.path,
                    number,
                    Self::ID,
                    Severity::Blocker,
                    format!(
                        "header has {total} includes (limit {}); forward-declare instead",
                        self.max_includes
                    ),
                )
            })
            .into_iter()
            .collect()
    }
}

/// 4.4: `using namespace` leaks into every includer.
pub struct UsingNamespaceRule;

impl UsingNamespaceRule {
    pub const ID: &'static str = "4.4";

    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for UsingNamespaceRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for UsingNamespaceRule {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn severity(&self) -> Severity {
        Severity::Strong
    }

    fn description(&self) -> &'static str {
        "using namespace in a header"
    }

    fn applies_to(&self, kind: FileKind) -> bool {
        kind == FileKind::Header
    }

    fn check(&self, file: &SourceFile) -> Vec<Violation> {
        file.numbered_lines()
            .filter(|(_, line)| USING_NAMESPACE.is_match(line))
            .map(|(number, _)| {
                Violation::new(
                    &file.path,
                    number,
                    Self::ID,
                    Severity::Strong,
                    "'using namespace' in a header",
                )
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "header_tests.rs"]
mod tests;
