use std::path::{Path, PathBuf};

use clap::Parser;

use super::*;
use crate::checker::{FileOutcome, Severity, Violation};
use crate::waiver::WaiverIndex;

#[derive(Default)]
struct FakeRepo {
    tracked: Vec<PathBuf>,
    staged: Vec<PathBuf>,
    modified: Vec<PathBuf>,
}

impl RepoFiles for FakeRepo {
    fn tracked_files(&self) -> Result<Vec<PathBuf>> {
        Ok(self.tracked.clone())
    }

    fn staged_files(&self) -> Result<Vec<PathBuf>> {
        Ok(self.staged.clone())
    }

    fn modified_files(&self) -> Result<Vec<PathBuf>> {
        Ok(self.modified.clone())
    }
}

fn check_args(argv: &[&str]) -> CheckArgs {
    let mut full = vec!["guideline-guard", "check"];
    full.extend_from_slice(argv);
    match Cli::parse_from(full).command {
        crate::cli::Commands::Check(args) => args,
        _ => panic!("Expected Check command"),
    }
}

fn report_with(severity: Severity) -> Report {
    Report::aggregate(
        vec![FileOutcome {
            path: PathBuf::from("a.cpp"),
            candidates: vec![Violation::new(Path::new("a.cpp"), 1, "x.y", severity, "m")],
            waivers: WaiverIndex::default(),
        }],
        |_| true,
    )
}

#[test]
fn explicit_paths_take_precedence() {
    let args = check_args(&["--changed-only", "src/pump.cpp"]);
    let candidates = select_candidates(&args, Path::new("/nowhere")).unwrap();

    assert_eq!(candidates, vec![PathBuf::from("src/pump.cpp")]);
}

#[test]
fn changed_only_uses_staged_files() {
    let repo = FakeRepo {
        tracked: vec![PathBuf::from("/repo/a.cpp"), PathBuf::from("/repo/b.cpp")],
        staged: vec![PathBuf::from("/repo/b.cpp")],
        modified: vec![PathBuf::from("/repo/a.cpp")],
    };

    let staged = candidates_from_repo(&repo, true, Path::new("/repo")).unwrap();
    let tracked = candidates_from_repo(&repo, false, Path::new("/repo")).unwrap();

    assert_eq!(staged, vec![PathBuf::from("b.cpp")]);
    assert_eq!(tracked, vec![PathBuf::from("a.cpp"), PathBuf::from("b.cpp")]);
}

#[test]
fn changed_only_falls_back_to_work_tree_changes() {
    let repo = FakeRepo {
        tracked: vec![PathBuf::from("/repo/a.cpp"), PathBuf::from("/repo/b.cpp")],
        modified: vec![PathBuf::from("/repo/a.cpp")],
        ..FakeRepo::default()
    };

    let files = candidates_from_repo(&repo, true, Path::new("/repo")).unwrap();

    assert_eq!(files, vec![PathBuf::from("a.cpp")]);
}

#[test]
fn repo_paths_outside_cwd_stay_absolute() {
    let repo = FakeRepo {
        tracked: vec![PathBuf::from("/repo/lib/io.cpp")],
        ..FakeRepo::default()
    };

    let files = candidates_from_repo(&repo, false, Path::new("/repo/src")).unwrap();

    assert_eq!(files, vec![PathBuf::from("/repo/lib/io.cpp")]);
}

#[test]
fn cli_overrides_gate_and_extend_excludes() {
    let mut config = Config::default();
    config.scan.exclude = vec!["lib/**".to_string()];
    let args = check_args(&["--fail-on", "BLOCKER", "-x", "gen/**"]);

    apply_cli_overrides(&mut config, &args);

    assert_eq!(config.gate.fail_on, vec![Severity::Blocker]);
    assert_eq!(
        config.scan.exclude,
        vec!["lib/**".to_string(), "gen/**".to_string()]
    );
}

#[test]
fn without_fail_on_config_gate_is_kept() {
    let mut config = Config::default();
    apply_cli_overrides(&mut config, &check_args(&[]));

    assert_eq!(config.gate.fail_on, Severity::default_fail_on());
}

#[test]
fn exit_code_follows_gate() {
    let config = Config::default();

    assert_eq!(exit_code(&report_with(Severity::Strong), &config), EXIT_THRESHOLD_EXCEEDED);
    assert_eq!(exit_code(&report_with(Severity::Advisory), &config), EXIT_SUCCESS);
    assert_eq!(exit_code(&Report::default(), &config), EXIT_SUCCESS);
}
