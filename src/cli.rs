use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::checker::Severity;
use crate::config::LOCAL_CONFIG_NAME;
use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "guideline-guard")]
#[command(author, version, about = "Guideline guard - check C/C++/Arduino sources against coding guidelines")]
#[command(long_about = "Checks source files against layout, size, header, memory, logging and \
    waiver guidelines, and gates commits on violation severity.\n\n\
    Exit codes:\n  \
    0 - No violation with a failing severity\n  \
    1 - Violations with a failing severity found\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check files against the guidelines
    Check(CheckArgs),

    /// List the available rules
    Rules(RulesArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Files or directories to check (default: files tracked by git)
    pub paths: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Only check changed files: staged ones, else unstaged edits against HEAD
    #[arg(long)]
    pub changed_only: bool,

    /// Severities that fail the run (overrides config `gate.fail_on`)
    #[arg(long, num_args = 1.., value_delimiter = ',')]
    pub fail_on: Option<Vec<Severity>>,

    /// Output format [possible values: text, json, markdown]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Also write a markdown report to this file
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,
}

#[derive(Parser, Debug)]
pub struct RulesArgs {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = LOCAL_CONFIG_NAME)]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
