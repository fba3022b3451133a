use std::collections::HashMap;
use std::path::Path;

use serde::Serialize;

use crate::config::ScanConfig;

/// Role a file plays for the guideline rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// Header files: guard, include and `using namespace` discipline apply.
    Header,
    /// Ordinary translation units.
    Source,
    /// Sketch entry files that may only hold the reserved entry points.
    Entry,
}

pub const DEFAULT_SOURCE_EXTENSIONS: &[&str] = &["c", "cc", "cpp", "cxx"];
pub const DEFAULT_HEADER_EXTENSIONS: &[&str] = &["h", "hpp", "hh"];
pub const DEFAULT_ENTRY_EXTENSION: &str = "ino";

/// Maps file extensions to their [`FileKind`].
///
/// Extensions are stored lowercase without a leading dot and matched
/// case-insensitively.
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    extension_map: HashMap<String, FileKind>,
}

impl LanguageRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            extension_map: HashMap::new(),
        }
    }

    pub fn register(&mut self, ext: &str, kind: FileKind) {
        self.extension_map.insert(normalize_extension(ext), kind);
    }

    /// Build a registry from the `[scan]` section of the configuration.
    ///
    /// Every allow-listed extension is registered; header and entry
    /// extensions take their dedicated kinds, everything else is `Source`.
    #[must_use]
    pub fn from_scan_config(scan: &ScanConfig) -> Self {
        let headers: Vec<String> = scan
            .header_extensions
            .iter()
            .map(|e| normalize_extension(e))
            .collect();
        let entry = normalize_extension(&scan.entry_extension);

        let mut registry = Self::new();
        for ext in &scan.extensions {
            let ext = normalize_extension(ext);
            let kind = if headers.contains(&ext) {
                FileKind::Header
            } else if ext == entry {
                FileKind::Entry
            } else {
                FileKind::Source
            };
            registry.register(&ext, kind);
        }
        registry
    }

    #[must_use]
    pub fn get_by_extension(&self, ext: &str) -> Option<FileKind> {
        self.extension_map.get(&normalize_extension(ext)).copied()
    }

    /// Classify a path by its extension. `None` means the file is not on the
    /// allow-list and must not be scanned.
    #[must_use]
    pub fn kind_of(&self, path: &Path) -> Option<FileKind> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| self.get_by_extension(ext))
    }

    #[must_use]
    pub fn is_recognized(&self, path: &Path) -> bool {
        self.kind_of(path).is_some()
    }

    /// Registered extensions in sorted order.
    #[must_use]
    pub fn extensions(&self) -> Vec<&str> {
        let mut exts: Vec<&str> = self.extension_map.keys().map(String::as_str).collect();
        exts.sort_unstable();
        exts
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        let mut registry = Self::new();
        for ext in DEFAULT_SOURCE_EXTENSIONS {
            registry.register(ext, FileKind::Source);
        }
        for ext in DEFAULT_HEADER_EXTENSIONS {
            registry.register(ext, FileKind::Header);
        }
        registry.register(DEFAULT_ENTRY_EXTENSION, FileKind::Entry);
        registry
    }
}

fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_lowercase()
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
