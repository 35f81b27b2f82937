//! Configuration management for the file shell
//!
//! Settings are read once at startup from `config.toml` with environment
//! overrides (prefix `FILEX`). A missing config file is not an error for an
//! interactive tool; the shell falls back to defaults. A file that exists
//! but does not parse, or carries invalid values, fails startup.

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

/// Shell configuration loaded during startup
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ShellConfig {
    /// Directory the shell starts in, resolved against the process
    /// working directory
    pub start_dir: String,

    /// Maximum recursion depth for file search
    pub max_search_depth: usize,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            start_dir: ".".to_string(),
            max_search_depth: 64,
        }
    }
}

impl ShellConfig {
    /// Load configuration from config.toml with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific file name with environment overrides
    ///
    /// A missing file yields the defaults via `required(false)`; a file
    /// that is present but broken propagates its error.
    pub fn load_from(name: &str) -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(name).required(false))
            .add_source(Environment::with_prefix("FILEX"))
            .build()?;

        let config: ShellConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the start directory as a PathBuf
    pub fn start_dir_path(&self) -> PathBuf {
        PathBuf::from(&self.start_dir)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.start_dir.is_empty() {
            return Err(config::ConfigError::Message(
                "start_dir cannot be empty".into(),
            ));
        }

        if self.max_search_depth == 0 {
            return Err(config::ConfigError::Message(
                "max_search_depth must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}
