use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Invalid regex pattern: {pattern}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Git error: {0}")]
    Git(String),
}

impl GuardError {
    /// Short, stable name of the error variant.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::InvalidPattern { .. } => "InvalidPattern",
            Self::InvalidRegex { .. } => "InvalidRegex",
            Self::Io(_) => "Io",
            Self::TomlParse(_) => "TomlParse",
            Self::JsonSerialize(_) => "JsonSerialize",
            Self::Git(_) => "Git",
        }
    }
}

pub type Result<T> = std::result::Result<T, GuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
