mod report;
mod violation;

pub use report::{Report, SeverityCounts};
pub use violation::{Severity, Violation};

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::Config;
use crate::error::Result;
use crate::language::LanguageRegistry;
use crate::rules::RuleSet;
use crate::source::SourceFile;
use crate::waiver::WaiverIndex;

/// Candidates and waivers for one file, before suppression.
#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub candidates: Vec<Violation>,
    pub waivers: WaiverIndex,
}

/// Runs the configured rules over files and aggregates the result.
pub struct GuidelineChecker {
    registry: LanguageRegistry,
    rules: RuleSet,
}

impl GuidelineChecker {
    /// # Errors
    /// Returns an error if a configured rule token cannot be compiled.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            registry: LanguageRegistry::from_scan_config(&config.scan),
            rules: RuleSet::from_config(config)?,
        })
    }

    #[must_use]
    pub const fn registry(&self) -> &LanguageRegistry {
        &self.registry
    }

    /// Evaluate every applicable rule against an already-loaded file.
    #[must_use]
    pub fn check_source(&self, file: &SourceFile) -> FileOutcome {
        let candidates = self.rules.evaluate(file);
        let waivers = WaiverIndex::build(file.lines.as_slice());
        debug!(
            path = %file.path.display(),
            candidates = candidates.len(),
            waiver_lines = waivers.len(),
            spans = file.spans.len(),
            "Checked file"
        );
        FileOutcome {
            path: file.path.clone(),
            candidates,
            waivers,
        }
    }

    /// Read and check one file. Files with an unrecognized extension are
    /// skipped (`Ok(None)`).
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    pub fn check_file(&self, path: &Path) -> Result<Option<FileOutcome>> {
        let Some(kind) = self.registry.kind_of(path) else {
            debug!(path = %path.display(), "Skipping unrecognized file");
            return Ok(None);
        };
        let file = SourceFile::read(path, kind)?;
        Ok(Some(self.check_source(&file)))
    }

    /// Check `paths` in parallel and aggregate into a deterministic report.
    ///
    /// # Errors
    /// Fails on the first file that cannot be read.
    pub fn check_files(&self, paths: &[PathBuf]) -> Result<Report> {
        let outcomes: Vec<Option<FileOutcome>> = paths
            .par_iter()
            .map(|path| self.check_file(path))
            .collect::<Result<_>>()?;

        let report = Report::aggregate(outcomes.into_iter().flatten(), |rule_id| {
            self.rules.is_waivable(rule_id)
        });
        info!(
            files = report.files_scanned,
            violations = report.violations.len(),
            waived = report.waived,
            "Check complete"
        );
        Ok(report)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
