use std::fmt::Write;

use crate::cli::{Cli, RulesArgs};
use crate::output::OutputFormat;
use crate::rules::{RuleInfo, RuleSet};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::context::{load_config, print_error};

#[must_use]
pub fn run_rules(args: &RulesArgs, cli: &Cli) -> i32 {
    match run_rules_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Print the enabled rules.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded.
pub fn run_rules_impl(args: &RulesArgs, cli: &Cli) -> Result<()> {
    let config = load_config(args.config.as_deref(), cli.no_config)?;
    let infos = RuleSet::from_config(&config)?.infos();

    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&infos)? + "\n",
        OutputFormat::Text | OutputFormat::Markdown => format_rules_text(&infos),
    };
    print!("{output}");
    Ok(())
}

#[must_use]
pub fn format_rules_text(infos: &[RuleInfo]) -> String {
    let width = infos.iter().map(|i| i.id.len()).max().unwrap_or(0);
    let mut output = String::new();
    for info in infos {
        let note = if info.waivable { "" } else { " (not waivable)" };
        writeln!(
            output,
            "{:<width$}  {:<8}  {}{note}",
            info.id, info.severity, info.description
        )
        .ok();
    }
    output
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
