mod json;
mod markdown;
mod path;
mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use path::{display_path, normalize_for_matching, normalize_separators};
pub use text::{ColorMode, TextFormatter};

use crate::checker::Report;
use crate::error::Result;

/// Trait for rendering a check report into an output format.
pub trait OutputFormatter {
    /// Format the report into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &Report) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
