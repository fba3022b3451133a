use std::path::Path;

use tracing::debug;

use crate::error::{GuardError, Result};

/// Read a file as newline-stripped lines.
///
/// Content is decoded as UTF-8 and, failing that, as Latin-1 so any byte
/// sequence yields lines. Tabs and trailing whitespace are preserved.
///
/// # Errors
/// Returns `GuardError::FileRead` if the file cannot be read.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let bytes = std::fs::read(path).map_err(|source| GuardError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            debug!(path = %path.display(), "not valid UTF-8, decoding as Latin-1");
            decode_latin1(err.as_bytes())
        }
    };

    Ok(split_lines(&text))
}

/// Map each byte to the code point of the same value.
#[must_use]
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Split on `\n` and `\r\n`; a trailing terminator does not produce an
/// extra empty line.
#[must_use]
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(String::from).collect()
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
