use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::checker::{GuidelineChecker, Report};
use crate::cli::{CheckArgs, Cli};
use crate::config::Config;
use crate::git::{GitRepo, RepoFiles};
use crate::output::{
    JsonFormatter, MarkdownFormatter, OutputFormat, OutputFormatter, TextFormatter,
};
use crate::scanner::{DirectoryScanner, GlobFilter};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_THRESHOLD_EXCEEDED, Result};

use super::context::{color_choice_to_mode, load_config, print_error, write_file};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_check_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Select files, check them, print the report and return the exit code.
///
/// # Errors
/// Returns an error for configuration problems, git failures while listing
/// files, or a selected file that cannot be read.
pub fn run_check_impl(args: &CheckArgs, cli: &Cli) -> Result<i32> {
    let mut config = load_config(args.config.as_deref(), cli.no_config)?;
    apply_cli_overrides(&mut config, args);

    let checker = GuidelineChecker::new(&config)?;
    let filter = GlobFilter::new(checker.registry().clone(), &config.scan.exclude)?;
    let scanner = DirectoryScanner::new(filter);

    let cwd = std::env::current_dir()?;
    let candidates = select_candidates(args, &cwd)?;
    let files = scanner.collect_files(&candidates)?;
    info!(candidates = candidates.len(), files = files.len(), "Selected files");

    let report = checker.check_files(&files)?;

    let output = format_report(args.format, &report, &config, cli, &cwd)?;
    if !cli.quiet {
        print!("{output}");
    }

    if let Some(path) = &args.report {
        let body = MarkdownFormatter::new()
            .with_project_root(Some(cwd.clone()))
            .format(&report)?;
        write_file(path, &body)?;
        debug!(path = %path.display(), "Wrote report");
    }

    Ok(exit_code(&report, &config))
}

fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) {
    if let Some(fail_on) = &args.fail_on {
        config.gate.fail_on.clone_from(fail_on);
    }
    config.scan.exclude.extend(args.exclude.iter().cloned());
}

/// Explicit paths win, then changed files (staged, else modified in the work
/// tree), then every tracked file.
fn select_candidates(args: &CheckArgs, cwd: &Path) -> Result<Vec<PathBuf>> {
    if !args.paths.is_empty() {
        return Ok(args.paths.clone());
    }
    let repo = GitRepo::discover(cwd)?;
    candidates_from_repo(&repo, args.changed_only, cwd)
}

fn candidates_from_repo(
    repo: &dyn RepoFiles,
    changed_only: bool,
    cwd: &Path,
) -> Result<Vec<PathBuf>> {
    let files = if changed_only {
        let staged = repo.staged_files()?;
        if staged.is_empty() {
            debug!("Nothing staged; using work-tree changes against HEAD");
            repo.modified_files()?
        } else {
            staged
        }
    } else {
        repo.tracked_files()?
    };
    Ok(files
        .into_iter()
        .map(|path| relative_to(path, cwd))
        .collect())
}

/// Strip `base` so exclude globs and output see repository-relative paths.
fn relative_to(path: PathBuf, base: &Path) -> PathBuf {
    path.strip_prefix(base).map(Path::to_path_buf).unwrap_or(path)
}

fn format_report(
    format: OutputFormat,
    report: &Report,
    config: &Config,
    cli: &Cli,
    cwd: &Path,
) -> Result<String> {
    let root = Some(cwd.to_path_buf());
    match format {
        OutputFormat::Text => TextFormatter::new(color_choice_to_mode(cli.color))
            .with_project_root(root)
            .format(report),
        OutputFormat::Json => JsonFormatter::new(&config.gate.fail_on).format(report),
        OutputFormat::Markdown => MarkdownFormatter::new()
            .with_project_root(root)
            .format(report),
    }
}

fn exit_code(report: &Report, config: &Config) -> i32 {
    if report.should_fail(&config.gate.fail_on) {
        EXIT_THRESHOLD_EXCEEDED
    } else {
        EXIT_SUCCESS
    }
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
