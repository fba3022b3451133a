use std::path::PathBuf;

use super::*;

#[test]
fn error_display_config() {
    let err = GuardError::Config("invalid threshold".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid threshold");
}

#[test]
fn error_display_file_read() {
    let err = GuardError::FileRead {
        path: PathBuf::from("pumps.cpp"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
    };
    assert!(err.to_string().contains("pumps.cpp"));
}

#[test]
fn error_display_git() {
    let err = GuardError::Git("Failed to open git index".to_string());
    assert_eq!(err.to_string(), "Git error: Failed to open git index");
}

#[test]
fn error_display_invalid_regex() {
    let source = regex::Regex::new("(").unwrap_err();
    let err = GuardError::InvalidRegex {
        pattern: "(".to_string(),
        source,
    };
    assert_eq!(err.to_string(), "Invalid regex pattern: (");
}

#[test]
fn error_type_returns_correct_type() {
    assert_eq!(GuardError::Config("test".to_string()).error_type(), "Config");
    assert_eq!(GuardError::Git("test".to_string()).error_type(), "Git");
}

#[test]
fn io_error_converts_via_from() {
    let io = std::io::Error::other("boom");
    let err: GuardError = io.into();
    assert_eq!(err.error_type(), "Io");
}
