use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{GuardError, Result};
use crate::language::LanguageRegistry;
use crate::output::normalize_for_matching;

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Accepts files on the extension allow-list that no exclude glob matches.
pub struct GlobFilter {
    registry: LanguageRegistry,
    exclude_patterns: GlobSet,
}

impl GlobFilter {
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(registry: LanguageRegistry, exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| GuardError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_patterns = builder.build().map_err(|e| GuardError::InvalidPattern {
            pattern: "combined patterns".to_string(),
            source: e,
        })?;

        Ok(Self {
            registry,
            exclude_patterns,
        })
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.exclude_patterns.is_match(normalize_for_matching(path))
    }
}

impl FileFilter for GlobFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.registry.is_recognized(path) && !self.is_excluded(path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
