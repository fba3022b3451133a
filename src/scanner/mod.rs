mod filter;

pub use filter::{FileFilter, GlobFilter};

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::Result;

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }

    fn scan_impl(&self, root: &Path) -> Vec<PathBuf> {
        WalkDir::new(root)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(|e| e.path().to_path_buf())
            .filter(|p| self.filter.should_include(p))
            .collect()
    }

    /// Turn candidate paths into the sorted, de-duplicated set of files to
    /// check.
    ///
    /// Directories are walked; plain candidates must exist, be regular files
    /// and pass the filter. Missing paths are dropped without error.
    ///
    /// # Errors
    /// Returns an error if a directory cannot be scanned.
    pub fn collect_files(&self, candidates: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut files = BTreeSet::new();

        for candidate in candidates {
            if candidate.is_dir() {
                files.extend(self.scan(candidate)?);
            } else if !candidate.is_file() {
                debug!(path = %candidate.display(), "Skipping missing or non-regular path");
            } else if self.filter.should_include(candidate) {
                files.insert(candidate.clone());
            } else {
                debug!(path = %candidate.display(), "Skipping filtered path");
            }
        }

        Ok(files.into_iter().collect())
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        Ok(self.scan_impl(root))
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
