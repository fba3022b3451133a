use std::iter::Enumerate;
use std::slice::Iter;
use std::sync::LazyLock;

use regex::Regex;

use super::types::FunctionSpan;

static CONTROL_CONSTRUCT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:if|for|while|switch|catch)\s*\(").expect("Invalid regex")
});

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    Idle,
    AccumulatingSignature { start: usize, signature: String },
    InsideBody { start: usize, signature: String },
}

/// Lazy detector of top-level function bodies.
///
/// A brace-depth state machine, not a parser: braces inside string
/// literals and comments are counted like any other, so a stray `{` or `}`
/// in a literal shifts depth for the rest of the file. Bodies opened while
/// already inside a body are never reported, so spans do not nest.
///
/// A pending signature keeps absorbing lines until one holds `{`, so a
/// file-scope prototype becomes part of the next function's signature.
pub struct FunctionSpans<'a, S> {
    lines: Enumerate<Iter<'a, S>>,
    machine: SpanMachine,
}

impl<'a, S: AsRef<str>> FunctionSpans<'a, S> {
    #[must_use]
    pub fn new(lines: &'a [S]) -> Self {
        Self {
            lines: lines.iter().enumerate(),
            machine: SpanMachine::default(),
        }
    }
}

#[derive(Debug)]
struct SpanMachine {
    state: State,
    depth: usize,
}

impl Default for SpanMachine {
    fn default() -> Self {
        Self {
            state: State::Idle,
            depth: 0,
        }
    }
}

impl SpanMachine {
    fn step(&mut self, number: usize, line: &str) -> Option<FunctionSpan> {
        let trimmed = line.trim();

        self.state = match std::mem::replace(&mut self.state, State::Idle) {
            State::Idle if self.depth == 0 && starts_signature(line) => {
                State::AccumulatingSignature {
                    start: number,
                    signature: trimmed.to_string(),
                }
            }
            State::AccumulatingSignature {
                start,
                mut signature,
            } => {
                if !trimmed.is_empty() {
                    signature.push(' ');
                    signature.push_str(trimmed);
                }
                State::AccumulatingSignature { start, signature }
            }
            other => other,
        };

        self.state = match std::mem::replace(&mut self.state, State::Idle) {
            State::AccumulatingSignature { start, signature } if line.contains('{') => {
                if CONTROL_CONSTRUCT.is_match(&signature) {
                    State::Idle
                } else {
                    State::InsideBody { start, signature }
                }
            }
            other => other,
        };

        self.depth = next_depth(self.depth, line);

        if self.depth == 0
            && matches!(self.state, State::InsideBody { .. })
            && let State::InsideBody { start, signature } =
                std::mem::replace(&mut self.state, State::Idle)
        {
            return Some(FunctionSpan::new(start, number, signature));
        }
        None
    }
}

impl<S: AsRef<str>> Iterator for FunctionSpans<'_, S> {
    type Item = FunctionSpan;

    fn next(&mut self) -> Option<Self::Item> {
        for (i, line) in self.lines.by_ref() {
            if let Some(span) = self.machine.step(i + 1, line.as_ref()) {
                return Some(span);
            }
        }
        None
    }
}

fn starts_signature(line: &str) -> bool {
    line.contains('(') && !line.trim_start().starts_with('#')
}

fn next_depth(depth: usize, line: &str) -> usize {
    let opens = line.matches('{').count();
    let closes = line.matches('}').count();
    (depth + opens).saturating_sub(closes)
}

#[cfg(test)]
#[path = "span_tests.rs"]
mod tests;
