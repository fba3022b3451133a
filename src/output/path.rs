//! Path display and matching helpers shared by formatters and the scanner.

use std::path::{Path, PathBuf};

/// Format a path for display, relative to `project_root` when it is a child
/// of it, always with forward slashes. An empty relative path becomes `"."`.
#[must_use]
pub fn display_path(path: &Path, project_root: Option<&Path>) -> String {
    let relative = project_root
        .and_then(|root| path.strip_prefix(root).ok())
        .unwrap_or(path);

    let result = normalize_separators(&relative.to_string_lossy());
    if result.is_empty() {
        ".".to_string()
    } else {
        result
    }
}

#[must_use]
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Strip a leading `./` and use forward slashes, so exclude globs like
/// `vendor/**` match whether a path was given as `vendor/x.h` or `./vendor/x.h`.
///
/// `.` itself normalizes to an empty path.
#[must_use]
pub fn normalize_for_matching(path: &Path) -> PathBuf {
    let text = path.to_string_lossy();
    let stripped = text
        .strip_prefix("./")
        .or_else(|| text.strip_prefix(".\\"))
        .unwrap_or(&text);

    if stripped.is_empty() || stripped == "." {
        return PathBuf::new();
    }
    PathBuf::from(normalize_separators(stripped))
}
