use std::path::PathBuf;

use clap::CommandFactory;

use super::*;

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn cli_check_defaults() {
    let cli = Cli::parse_from(["guideline-guard", "check"]);
    match cli.command {
        Commands::Check(args) => {
            assert!(args.paths.is_empty());
            assert!(!args.changed_only);
            assert!(args.fail_on.is_none());
            assert_eq!(args.format, OutputFormat::Text);
            assert!(args.report.is_none());
        }
        _ => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_with_paths() {
    let cli = Cli::parse_from(["guideline-guard", "check", "src", "aqua.ino"]);
    match cli.command {
        Commands::Check(args) => {
            assert_eq!(
                args.paths,
                vec![PathBuf::from("src"), PathBuf::from("aqua.ino")]
            );
        }
        _ => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_fail_on_accepts_lists() {
    let cli = Cli::parse_from(["guideline-guard", "check", "--fail-on", "blocker,ADVISORY"]);
    match cli.command {
        Commands::Check(args) => {
            assert_eq!(
                args.fail_on,
                Some(vec![Severity::Blocker, Severity::Advisory])
            );
        }
        _ => panic!("Expected Check command"),
    }
}

#[test]
fn cli_check_fail_on_rejects_unknown_severity() {
    let result = Cli::try_parse_from(["guideline-guard", "check", "--fail-on", "CRITICAL"]);
    assert!(result.is_err());
}

#[test]
fn cli_check_options() {
    let cli = Cli::parse_from([
        "guideline-guard",
        "check",
        "--changed-only",
        "-f",
        "md",
        "--report",
        "out/report.md",
        "-x",
        "lib/**",
        "-c",
        "custom.toml",
    ]);
    match cli.command {
        Commands::Check(args) => {
            assert!(args.changed_only);
            assert_eq!(args.format, OutputFormat::Markdown);
            assert_eq!(args.report, Some(PathBuf::from("out/report.md")));
            assert_eq!(args.exclude, vec!["lib/**".to_string()]);
            assert_eq!(args.config, Some(PathBuf::from("custom.toml")));
        }
        _ => panic!("Expected Check command"),
    }
}

#[test]
fn cli_global_flags() {
    let cli = Cli::parse_from(["guideline-guard", "-vv", "--color", "never", "rules"]);

    assert_eq!(cli.verbose, 2);
    assert!(matches!(cli.color, ColorChoice::Never));
    assert!(matches!(cli.command, Commands::Rules(_)));
}

#[test]
fn cli_init_default_output() {
    let cli = Cli::parse_from(["guideline-guard", "init"]);
    match cli.command {
        Commands::Init(args) => {
            assert_eq!(args.output, PathBuf::from(".guideline-guard.toml"));
            assert!(!args.force);
        }
        _ => panic!("Expected Init command"),
    }
}
