use std::fs;

use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, GuardError, Result};

use super::context::print_error;

#[must_use]
pub fn run_init(args: &crate::cli::InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Initializes a new configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &crate::cli::InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(GuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r##"# guideline-guard configuration file
version = "1"

[scan]
# File extensions to check (case-insensitive)
extensions = ["ino", "c", "cc", "cpp", "cxx", "h", "hpp", "hh"]
header_extensions = ["h", "hpp", "hh"]
# Extension of the sketch entry file (only setup/loop allowed there)
entry_extension = "ino"
# Exclude patterns (glob syntax)
exclude = [
    "lib/**",
    "**/.pio/**",
]

[limits]
max_line_width = 120
max_blank_run = 2
file_lines_strong = 500
file_lines_blocker = 800
function_lines_strong = 30
function_lines_blocker = 40
max_bool_params = 1
max_header_includes = 8

[rules]
header_guard = "#pragma once"
memory_tokens = ["new", "delete", "malloc", "free"]
log_calls = ["LOG_ERROR", "logError"]
entry_points = ["setup", "loop"]
# Rule ids to skip entirely, e.g. ["1.3", "8.2"]
disabled = []

[gate]
# Severities that fail the run: BLOCKER, STRONG, ADVISORY
fail_on = ["BLOCKER", "STRONG"]
"##
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
