use std::error::Error as _;
use std::fmt::Write;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::cli::ColorChoice;
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::GuardError;
use crate::output::ColorMode;

pub(crate) const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Load `config_path`, or the local config file when none is given.
/// `no_config` skips the filesystem entirely.
///
/// # Errors
/// Returns an error if the configuration file cannot be loaded.
pub(crate) fn load_config(config_path: Option<&Path>, no_config: bool) -> crate::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Write `content` to `path`, creating parent directories as needed.
///
/// # Errors
/// Returns an error if the directories or the file cannot be written.
pub(crate) fn write_file(path: &Path, content: &str) -> crate::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

/// Print `error` and its source chain to stderr.
pub(crate) fn print_error(error: &GuardError) {
    debug!(kind = error.error_type(), "command failed");
    eprintln!("{}", error_message(error));
}

fn error_message(error: &GuardError) -> String {
    let mut message = format!("Error: {error}");
    let mut source = error.source();
    while let Some(cause) = source {
        write!(message, "\n  caused by: {cause}").ok();
        source = cause.source();
    }
    message
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
