use serde::Serialize;
use tracing::debug;

use super::{FileOutcome, Severity, Violation};

/// Violation totals per severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeverityCounts {
    pub blocker: usize,
    pub strong: usize,
    pub advisory: usize,
}

impl SeverityCounts {
    pub const fn increment(&mut self, severity: Severity) {
        match severity {
            Severity::Blocker => self.blocker += 1,
            Severity::Strong => self.strong += 1,
            Severity::Advisory => self.advisory += 1,
        }
    }

    #[must_use]
    pub const fn get(&self, severity: Severity) -> usize {
        match severity {
            Severity::Blocker => self.blocker,
            Severity::Strong => self.strong,
            Severity::Advisory => self.advisory,
        }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.blocker + self.strong + self.advisory
    }
}

/// Aggregated result of one run over a set of files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Surviving violations sorted by (file, line, rule id).
    pub violations: Vec<Violation>,
    pub counts: SeverityCounts,
    pub files_scanned: usize,
    /// Candidates suppressed by an inline waiver.
    pub waived: usize,
}

impl Report {
    /// Apply each file's waivers to its candidates and merge the survivors.
    ///
    /// Output order depends only on the violations themselves, never on the
    /// order outcomes arrive in.
    pub fn aggregate<I, F>(outcomes: I, is_waivable: F) -> Self
    where
        I: IntoIterator<Item = FileOutcome>,
        F: Fn(&str) -> bool,
    {
        let mut report = Self::default();

        for outcome in outcomes {
            report.files_scanned += 1;
            for violation in outcome.candidates {
                if is_waivable(&violation.rule_id)
                    && outcome.waivers.is_waived(violation.line, &violation.rule_id)
                {
                    debug!(
                        path = %outcome.path.display(),
                        line = violation.line,
                        rule_id = %violation.rule_id,
                        "Waived"
                    );
                    report.waived += 1;
                    continue;
                }
                report.counts.increment(violation.severity);
                report.violations.push(violation);
            }
        }

        report.violations.sort();
        report
    }

    /// The gate verdict: fails iff a surviving violation has a severity in
    /// `fail_on`.
    #[must_use]
    pub fn should_fail(&self, fail_on: &[Severity]) -> bool {
        fail_on
            .iter()
            .any(|severity| self.counts.get(*severity) > 0)
    }

    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.counts.total() == 0
    }

    /// One-line summary, e.g. `Checked 3 files | BLOCKER=1 STRONG=0 ADVISORY=2`.
    #[must_use]
    pub fn summary_line(&self) -> String {
        format!(
            "Checked {} files | BLOCKER={} STRONG={} ADVISORY={}",
            self.files_scanned, self.counts.blocker, self.counts.strong, self.counts.advisory
        )
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
