use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{GuardError, Result};

use super::Config;
use super::model::CONFIG_VERSION;
use super::validation::validate_config_semantics;

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default location.
    ///
    /// # Errors
    /// Returns an error if the config file cannot be read, parsed or validated.
    fn load(&self) -> Result<Config>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, parsed or validated.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

pub const LOCAL_CONFIG_NAME: &str = ".guideline-guard.toml";

fn validate_config_version(config: &Config) -> Result<()> {
    match &config.version {
        None => Ok(()),
        Some(v) if v == CONFIG_VERSION => Ok(()),
        Some(v) => Err(GuardError::Config(format!(
            "Unsupported config version '{v}'. Only version '{CONFIG_VERSION}' is supported."
        ))),
    }
}

/// Trait for filesystem operations (for testability).
pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    fn exists(&self, path: &Path) -> bool;

    /// Get the current working directory.
    ///
    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    fn current_dir(&self) -> std::io::Result<PathBuf>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }
}

/// Loads configuration from the filesystem.
///
/// Looks for `.guideline-guard.toml` in the current directory and falls
/// back to `Config::default()` when it is absent.
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn local_config_path(&self) -> Option<PathBuf> {
        self.fs
            .current_dir()
            .ok()
            .map(|dir| dir.join(LOCAL_CONFIG_NAME))
    }

    fn parse_config(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content)?;
        validate_config_version(&config)?;
        validate_config_semantics(&config)?;
        Ok(config)
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<Config> {
        match self.local_config_path() {
            Some(path) if self.fs.exists(&path) => self.load_from_path(&path),
            _ => {
                debug!("no {LOCAL_CONFIG_NAME} found, using defaults");
                Ok(Config::default())
            }
        }
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        debug!(path = %path.display(), "loading configuration");
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| GuardError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        Self::parse_config(&content)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
