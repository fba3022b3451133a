use serde::{Deserialize, Serialize};

use crate::checker::Severity;
use crate::language::{
    DEFAULT_ENTRY_EXTENSION, DEFAULT_HEADER_EXTENSIONS, DEFAULT_SOURCE_EXTENSIONS,
};

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

/// Root configuration loaded from `.guideline-guard.toml`.
///
/// Every section has defaults, so an empty file is a valid configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Config format version. Absent means current.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(default)]
    pub limits: LimitsConfig,

    #[serde(default)]
    pub rules: RulesConfig,

    #[serde(default)]
    pub gate: GateConfig,
}

/// Which files are eligible for scanning and how they are classified.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanConfig {
    /// Allow-list of extensions (without the leading dot).
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Extensions treated as headers.
    #[serde(default = "default_header_extensions")]
    pub header_extensions: Vec<String>,

    /// Extension of sketch entry files.
    #[serde(default = "default_entry_extension")]
    pub entry_extension: String,

    /// Glob patterns of files to skip.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            header_extensions: default_header_extensions(),
            entry_extension: default_entry_extension(),
            exclude: Vec::new(),
        }
    }
}

/// Numeric thresholds used by the size and layout rules.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LimitsConfig {
    #[serde(default = "default_max_line_width")]
    pub max_line_width: usize,

    /// Longest allowed run of consecutive blank lines.
    #[serde(default = "default_max_blank_run")]
    pub max_blank_run: usize,

    #[serde(default = "default_file_lines_strong")]
    pub file_lines_strong: usize,

    #[serde(default = "default_file_lines_blocker")]
    pub file_lines_blocker: usize,

    #[serde(default = "default_function_lines_strong")]
    pub function_lines_strong: usize,

    #[serde(default = "default_function_lines_blocker")]
    pub function_lines_blocker: usize,

    /// Most `bool` parameters a function may take.
    #[serde(default = "default_max_bool_params")]
    pub max_bool_params: usize,

    #[serde(default = "default_max_header_includes")]
    pub max_header_includes: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_line_width: default_max_line_width(),
            max_blank_run: default_max_blank_run(),
            file_lines_strong: default_file_lines_strong(),
            file_lines_blocker: default_file_lines_blocker(),
            function_lines_strong: default_function_lines_strong(),
            function_lines_blocker: default_function_lines_blocker(),
            max_bool_params: default_max_bool_params(),
            max_header_includes: default_max_header_includes(),
        }
    }
}

/// Token lists and switches for individual rules.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RulesConfig {
    /// Exact directive a header must open with.
    #[serde(default = "default_header_guard")]
    pub header_guard: String,

    /// Banned memory-management identifiers.
    #[serde(default = "default_memory_tokens")]
    pub memory_tokens: Vec<String>,

    /// Error-logging calls whose message format is checked.
    #[serde(default = "default_log_calls")]
    pub log_calls: Vec<String>,

    /// Functions an entry file may define.
    #[serde(default = "default_entry_points")]
    pub entry_points: Vec<String>,

    /// Rule ids that are not evaluated at all.
    #[serde(default)]
    pub disabled: Vec<String>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            header_guard: default_header_guard(),
            memory_tokens: default_memory_tokens(),
            log_calls: default_log_calls(),
            entry_points: default_entry_points(),
            disabled: Vec::new(),
        }
    }
}

/// Pass/fail policy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GateConfig {
    #[serde(default = "Severity::default_fail_on")]
    pub fail_on: Vec<Severity>,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            fail_on: Severity::default_fail_on(),
        }
    }
}

fn default_extensions() -> Vec<String> {
    std::iter::once(&DEFAULT_ENTRY_EXTENSION)
        .chain(DEFAULT_SOURCE_EXTENSIONS)
        .chain(DEFAULT_HEADER_EXTENSIONS)
        .map(|s| (*s).to_string())
        .collect()
}

fn default_header_extensions() -> Vec<String> {
    DEFAULT_HEADER_EXTENSIONS
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}

fn default_entry_extension() -> String {
    DEFAULT_ENTRY_EXTENSION.to_string()
}

const fn default_max_line_width() -> usize {
    120
}

const fn default_max_blank_run() -> usize {
    2
}

const fn default_file_lines_strong() -> usize {
    500
}

const fn default_file_lines_blocker() -> usize {
    800
}

const fn default_function_lines_strong() -> usize {
    30
}

const fn default_function_lines_blocker() -> usize {
    40
}

const fn default_max_bool_params() -> usize {
    1
}

const fn default_max_header_includes() -> usize {
    8
}

fn default_header_guard() -> String {
    "#pragma once".to_string()
}

fn default_memory_tokens() -> Vec<String> {
    ["new", "delete", "malloc", "free"]
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}

fn default_log_calls() -> Vec<String> {
    ["LOG_ERROR", "logError"]
        .iter()
        .map(|s| (*s).to_string())
        .collect()
}

fn default_entry_points() -> Vec<String> {
    ["setup", "loop"].iter().map(|s| (*s).to_string()).collect()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
