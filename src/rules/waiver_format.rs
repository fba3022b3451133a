use std::sync::LazyLock;

use regex::Regex;

use crate::checker::{Severity, Violation};
use crate::source::SourceFile;
use crate::waiver::WAIVER_MARKER;

use super::Rule;

static WELL_FORMED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"GUIDELINE-WAIVER:\s*\d+\.\d+\s+\S").expect("Invalid regex")
});

static WAIVER_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)waiver").expect("Invalid regex"));

/// Comment text on `line`, if any. A `*` opens a block-comment
/// continuation only when followed by whitespace, `/` or the line end, so
/// `*ptr = 0;` is code.
fn comment_text(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    if let Some(rest) = trimmed.strip_prefix('*')
        && (rest.is_empty() || rest.starts_with(char::is_whitespace) || rest.starts_with('/'))
    {
        return Some(trimmed);
    }
    match (line.find("//"), line.find("/*")) {
        (Some(a), Some(b)) => Some(&line[a.min(b)..]),
        (Some(at), None) | (None, Some(at)) => Some(&line[at..]),
        (None, None) => None,
    }
}

/// WAIVER-PREFIX: waiver markers that do not follow
/// `GUIDELINE-WAIVER: <rule-id> <reason>`, and comments that talk about a
/// waiver without using the marker at all.
///
/// Never waivable, so a broken marker cannot hide itself.
pub struct WaiverFormatRule;

impl WaiverFormatRule {
    pub const ID: &'static str = "WAIVER-PREFIX";

    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for WaiverFormatRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for WaiverFormatRule {
    fn id(&self) -> &'static str {
        Self::ID
    }

    fn severity(&self) -> Severity {
        Severity::Strong
    }

    fn description(&self) -> &'static str {
        "malformed waiver comment"
    }

    fn waivable(&self) -> bool {
        false
    }

    fn check(&self, file: &SourceFile) -> Vec<Violation> {
        file.numbered_lines()
            .filter_map(|(number, line)| {
                let markers = line.matches(WAIVER_MARKER).count();
                let malformed = if markers > 0 {
                    markers > WELL_FORMED.find_iter(line).count()
                } else {
                    comment_text(line).is_some_and(|comment| WAIVER_WORD.is_match(comment))
                };
                if !malformed {
                    return None;
                }

                let message = if markers > 0 {
                    "malformed waiver; expected 'GUIDELINE-WAIVER: <rule-id> <reason>'"
                } else {
                    "waiver mentioned without the 'GUIDELINE-WAIVER:' marker"
                };
                Some(Violation::new(
                    &file.path,
                    number,
                    Self::ID,
                    Severity::Strong,
                    message,
                ))
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "waiver_format_tests.rs"]
mod tests;
