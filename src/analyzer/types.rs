use serde::Serialize;

/// An inferred top-level function body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionSpan {
    /// Line where the signature starts (1-indexed)
    pub start_line: usize,
    /// Line holding the closing brace (1-indexed, inclusive)
    pub end_line: usize,
    /// Trimmed declaration lines joined with single spaces, up to and
    /// including the line with the opening body brace.
    pub signature: String,
}

impl FunctionSpan {
    #[must_use]
    pub fn new(start_line: usize, end_line: usize, signature: impl Into<String>) -> Self {
        debug_assert!(start_line <= end_line);
        Self {
            start_line,
            end_line,
            signature: signature.into(),
        }
    }

    /// Number of lines from signature start to closing brace.
    #[must_use]
    pub const fn line_count(&self) -> usize {
        self.end_line - self.start_line + 1
    }

    /// Text inside the first balanced pair of parentheses.
    ///
    /// An unbalanced signature yields everything after the first `(`.
    #[must_use]
    pub fn parameter_text(&self) -> Option<&str> {
        let open = self.signature.find('(')?;
        let rest = &self.signature[open + 1..];

        let mut depth = 1usize;
        for (i, ch) in rest.char_indices() {
            match ch {
                '(' => depth += 1,
                ')' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(&rest[..i]);
                    }
                }
                _ => {}
            }
        }
        Some(rest)
    }

    /// Identifier immediately before the first `(`, without any `Class::`
    /// qualification.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        let open = self.signature.find('(')?;
        let before = self.signature[..open].trim_end();
        let start = before
            .char_indices()
            .rev()
            .take_while(|(_, c)| c.is_ascii_alphanumeric() || *c == '_')
            .last()
            .map(|(i, _)| i)?;
        Some(&before[start..])
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
