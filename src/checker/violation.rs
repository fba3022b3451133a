use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How strongly a guideline must be followed.
///
/// Variants are declared from least to most strict so the derived `Ord`
/// gives `Blocker > Strong > Advisory`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Informational, never gates by default.
    #[serde(alias = "advisory", alias = "Advisory")]
    Advisory,
    /// Should fix, gates by default.
    #[serde(alias = "strong", alias = "Strong")]
    Strong,
    /// Must fix.
    #[serde(alias = "blocker", alias = "Blocker")]
    Blocker,
}

impl Severity {
    pub const ALL: [Self; 3] = [Self::Blocker, Self::Strong, Self::Advisory];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blocker => "BLOCKER",
            Self::Strong => "STRONG",
            Self::Advisory => "ADVISORY",
        }
    }

    /// Severities that fail the gate when no override is configured.
    #[must_use]
    pub fn default_fail_on() -> Vec<Self> {
        vec![Self::Blocker, Self::Strong]
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BLOCKER" => Ok(Self::Blocker),
            "STRONG" => Ok(Self::Strong),
            "ADVISORY" => Ok(Self::Advisory),
            _ => Err(format!(
                "Unknown severity: {s} (expected BLOCKER, STRONG or ADVISORY)"
            )),
        }
    }
}

/// A single guideline violation.
///
/// Field order defines the derived ordering: file, line, rule id, then
/// severity and message as tie-breakers so sorting is total.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Violation {
    pub file: PathBuf,
    /// 1-based line number.
    pub line: usize,
    pub rule_id: String,
    pub severity: Severity,
    pub message: String,
}

impl Violation {
    #[must_use]
    pub fn new(
        file: &Path,
        line: usize,
        rule_id: &str,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            file: file.to_path_buf(),
            line,
            rule_id: rule_id.to_string(),
            severity,
            message: message.into(),
        }
    }
}

#[cfg(test)]
#[path = "violation_tests.rs"]
mod tests;
