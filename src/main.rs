use clap::Parser;
use tracing_subscriber::EnvFilter;

use guideline_guard::cli::{Cli, Commands};
use guideline_guard::commands::{run_check, run_init, run_rules};

/// Default log level for the given `-v` count; `RUST_LOG` takes precedence.
const fn default_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Rules(args) => run_rules(args, &cli),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
