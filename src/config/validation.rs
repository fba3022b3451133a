//! Configuration semantic validation.
//!
//! Runs after parsing: threshold ordering, non-empty token lists and glob
//! syntax.

use globset::Glob;

use crate::config::Config;
use crate::{GuardError, Result};

/// Validates semantic correctness of a configuration.
///
/// # Errors
/// Returns an error if a STRONG threshold is not below its BLOCKER
/// counterpart, a required string is empty, or an exclude glob is invalid.
pub fn validate_config_semantics(config: &Config) -> Result<()> {
    validate_limits(config)?;
    validate_rules(config)?;
    validate_scan(config)?;
    Ok(())
}

fn validate_limits(config: &Config) -> Result<()> {
    let limits = &config.limits;

    if limits.file_lines_strong >= limits.file_lines_blocker {
        return Err(GuardError::Config(format!(
            "limits.file_lines_strong ({}) must be less than limits.file_lines_blocker ({})",
            limits.file_lines_strong, limits.file_lines_blocker
        )));
    }

    if limits.function_lines_strong >= limits.function_lines_blocker {
        return Err(GuardError::Config(format!(
            "limits.function_lines_strong ({}) must be less than limits.function_lines_blocker ({})",
            limits.function_lines_strong, limits.function_lines_blocker
        )));
    }

    if limits.max_line_width == 0 {
        return Err(GuardError::Config(
            "limits.max_line_width must be greater than 0".to_string(),
        ));
    }
    Ok(())
}

fn validate_rules(config: &Config) -> Result<()> {
    if config.rules.header_guard.trim().is_empty() {
        return Err(GuardError::Config(
            "rules.header_guard must not be empty".to_string(),
        ));
    }

    for (field, tokens) in [
        ("rules.memory_tokens", &config.rules.memory_tokens),
        ("rules.log_calls", &config.rules.log_calls),
        ("rules.entry_points", &config.rules.entry_points),
    ] {
        if let Some(i) = tokens.iter().position(|t| t.trim().is_empty()) {
            return Err(GuardError::Config(format!(
                "{field}[{i}] must not be empty"
            )));
        }
    }
    Ok(())
}

fn validate_scan(config: &Config) -> Result<()> {
    if config.scan.extensions.is_empty() {
        return Err(GuardError::Config(
            "scan.extensions must list at least one extension".to_string(),
        ));
    }

    for pattern in &config.scan.exclude {
        Glob::new(pattern).map_err(|source| GuardError::InvalidPattern {
            pattern: pattern.clone(),
            source,
        })?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
