mod entry;
mod header;
mod layout;
mod logging;
mod memory;
mod size;
mod waiver_format;

pub use entry::{EntryFunctionRule, EntryLogicRule};
pub use header::{HeaderGuardRule, IncludeCountRule, UsingNamespaceRule};
pub use layout::{BlankRunRule, LineLengthRule, TrailingWhitespaceRule};
pub use logging::LogFormatRule;
pub use memory::{CStyleCastRule, RawMemoryRule};
pub use size::{BoolParamsRule, FileLengthRule, FunctionLengthRule};
pub use waiver_format::WaiverFormatRule;

use regex::Regex;
use serde::Serialize;
use tracing::warn;

use crate::checker::{Severity, Violation};
use crate::config::Config;
use crate::error::{GuardError, Result};
use crate::language::FileKind;
use crate::source::SourceFile;

/// A single guideline check.
///
/// Rules are stateless: `check` only reads the file it is given and returns
/// its own candidates, so rules can run in any order or in parallel.
pub trait Rule: Send + Sync {
    /// Dotted guideline id, e.g. `"5.4"`.
    fn id(&self) -> &'static str;

    /// Strictest severity the rule can report.
    fn severity(&self) -> Severity;

    fn description(&self) -> &'static str;

    /// Whether an inline waiver may suppress this rule.
    fn waivable(&self) -> bool {
        true
    }

    fn applies_to(&self, _kind: FileKind) -> bool {
        true
    }

    fn check(&self, file: &SourceFile) -> Vec<Violation>;
}

/// Static description of a rule, for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleInfo {
    pub id: &'static str,
    pub severity: Severity,
    pub description: &'static str,
    pub waivable: bool,
}

/// The configured collection of enabled rules.
pub struct RuleSet {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleSet {
    /// Build every rule from configuration, dropping `rules.disabled` ids.
    ///
    /// # Errors
    /// Returns an error if a configured token cannot be compiled into a
    /// pattern.
    pub fn from_config(config: &Config) -> Result<Self> {
        let limits = &config.limits;
        let settings = &config.rules;

        let all: Vec<Box<dyn Rule>> = vec![
            Box::new(LineLengthRule::new(limits.max_line_width)),
            Box::new(BlankRunRule::new(limits.max_blank_run)),
            Box::new(TrailingWhitespaceRule),
            Box::new(FileLengthRule::new(
                limits.file_lines_strong,
                limits.file_lines_blocker,
            )),
            Box::new(FunctionLengthRule::new(
                limits.function_lines_strong,
                limits.function_lines_blocker,
            )),
            Box::new(BoolParamsRule::new(limits.max_bool_params)),
            Box::new(EntryFunctionRule::new(settings.entry_points.clone())),
            Box::new(EntryLogicRule::new(settings.entry_points.clone())),
            Box::new(HeaderGuardRule::new(&settings.header_guard)),
            Box::new(IncludeCountRule::new(limits.max_header_includes)),
            Box::new(UsingNamespaceRule::new()),
            Box::new(RawMemoryRule::new(&settings.memory_tokens)?),
            Box::new(CStyleCastRule::new()),
            Box::new(LogFormatRule::new(&settings.log_calls)?),
            Box::new(WaiverFormatRule::new()),
        ];

        for id in &settings.disabled {
            if !all.iter().any(|rule| rule.id() == id) {
                warn!(rule_id = %id, "rules.disabled names an unknown rule");
            }
        }

        let rules = all
            .into_iter()
            .filter(|rule| !settings.disabled.iter().any(|id| id == rule.id()))
            .collect();

        Ok(Self { rules })
    }

    /// Run every applicable rule against `file`.
    #[must_use]
    pub fn evaluate(&self, file: &SourceFile) -> Vec<Violation> {
        self.rules
            .iter()
            .filter(|rule| rule.applies_to(file.kind))
            .flat_map(|rule| rule.check(file))
            .collect()
    }

    /// Unknown ids are treated as waivable.
    #[must_use]
    pub fn is_waivable(&self, rule_id: &str) -> bool {
        self.rules
            .iter()
            .find(|rule| rule.id() == rule_id)
            .is_none_or(|rule| rule.waivable())
    }

    #[must_use]
    pub fn infos(&self) -> Vec<RuleInfo> {
        self.rules
            .iter()
            .map(|rule| RuleInfo {
                id: rule.id(),
                severity: rule.severity(),
                description: rule.description(),
                waivable: rule.waivable(),
            })
            .collect()
    }
}

/// Compile `\b(?:tok1|tok2|...)` with every token escaped; `suffix` is
/// appended verbatim. An empty token list yields `None`.
fn word_alternation(tokens: &[String], suffix: &str) -> Result<Option<Regex>> {
    if tokens.is_empty() {
        return Ok(None);
    }
    let alternatives: Vec<String> = tokens.iter().map(|t| regex::escape(t.trim())).collect();
    let pattern = format!(r"\b(?:{}){suffix}", alternatives.join("|"));
    Regex::new(&pattern)
        .map(Some)
        .map_err(|source| GuardError::InvalidRegex { pattern, source })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
