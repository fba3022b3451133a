pub mod analyzer;
pub mod checker;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod git;
pub mod language;
pub mod output;
pub mod rules;
pub mod scanner;
pub mod source;
pub mod waiver;

pub use error::{GuardError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_THRESHOLD_EXCEEDED: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
