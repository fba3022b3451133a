//! Inline waiver markers.
//!
//! A waiver is a comment of the form
//! ```text
//! // GUIDELINE-WAIVER: 5.4 register access needs the raw cast
//! ```
//! It silences one rule on its own line and on the two lines below it.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use indexmap::IndexSet;
use regex::Regex;

/// Marker token that introduces a waiver.
pub const WAIVER_MARKER: &str = "GUIDELINE-WAIVER";

/// How many lines above a violation a waiver may sit.
pub const WAIVER_WINDOW: usize = 2;

static WAIVER_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"GUIDELINE-WAIVER:\s*(\d+\.\d+)").expect("Invalid regex"));

/// Waived rule ids keyed by the line the marker sits on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WaiverIndex {
    entries: BTreeMap<usize, IndexSet<String>>,
}

impl WaiverIndex {
    #[must_use]
    pub fn build<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut entries: BTreeMap<usize, IndexSet<String>> = BTreeMap::new();

        for (i, line) in lines.iter().enumerate() {
            for caps in WAIVER_ENTRY.captures_iter(line.as_ref()) {
                if let Some(rule_id) = caps.get(1) {
                    entries
                        .entry(i + 1)
                        .or_default()
                        .insert(rule_id.as_str().to_string());
                }
            }
        }

        Self { entries }
    }

    /// Rule ids anchored exactly at `line`.
    #[must_use]
    pub fn rules_at(&self, line: usize) -> Option<&IndexSet<String>> {
        self.entries.get(&line)
    }

    /// Whether `rule_id` is waived for a violation at `line`, i.e. anchored
    /// anywhere in `[line - 2, line]`.
    #[must_use]
    pub fn is_waived(&self, line: usize, rule_id: &str) -> bool {
        if line == 0 {
            return false;
        }
        let from = line.saturating_sub(WAIVER_WINDOW).max(1);
        (from..=line).any(|anchor| {
            self.rules_at(anchor)
                .is_some_and(|rules| rules.contains(rule_id))
        })
    }

    /// Number of lines carrying at least one waiver.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "waiver_tests.rs"]
mod tests;
