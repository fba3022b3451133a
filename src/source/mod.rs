mod reader;

pub use reader::{decode_latin1, read_lines, split_lines};

use std::path::{Path, PathBuf};

use crate::analyzer::{FunctionSpan, FunctionSpans};
use crate::error::Result;
use crate::language::FileKind;

/// A loaded file together with everything the rules evaluate against.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub kind: FileKind,
    pub lines: Vec<String>,
    pub spans: Vec<FunctionSpan>,
}

impl SourceFile {
    /// Build from already-split lines; function spans are detected here.
    #[must_use]
    pub fn new(path: &Path, kind: FileKind, lines: Vec<String>) -> Self {
        let spans = FunctionSpans::new(lines.as_slice()).collect();
        Self {
            path: path.to_path_buf(),
            kind,
            lines,
            spans,
        }
    }

    /// Convenience for tests and callers holding the whole text.
    #[must_use]
    pub fn from_text(path: &Path, kind: FileKind, text: &str) -> Self {
        Self::new(path, kind, split_lines(text))
    }

    /// # Errors
    /// Returns an error if the file cannot be read.
    pub fn read(path: &Path, kind: FileKind) -> Result<Self> {
        Ok(Self::new(path, kind, read_lines(path)?))
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Lines paired with their 1-based numbers.
    pub fn numbered_lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.lines
            .iter()
            .enumerate()
            .map(|(i, line)| (i + 1, line.as_str()))
    }

    /// Text of 1-based line `number`, or `""` when out of range.
    #[must_use]
    pub fn line(&self, number: usize) -> &str {
        number
            .checked_sub(1)
            .and_then(|i| self.lines.get(i))
            .map_or("", String::as_str)
    }
}
