//! Shell session state
//!
//! The session owns the single piece of mutable shell state: the current
//! working directory, kept canonical at all times.

use std::path::{Path, PathBuf};

use crate::config::ShellConfig;
use crate::error::NavigateError;

/// State of one interactive shell session
#[derive(Debug)]
pub struct ShellSession {
    current_dir: PathBuf,
    config: ShellConfig,
}

impl ShellSession {
    /// Creates a session rooted at the configured start directory
    pub fn new(config: ShellConfig) -> Result<Self, NavigateError> {
        let start = config.start_dir_path();
        let current_dir = start.canonicalize().map_err(|e| {
            NavigateError::CanonicalizeFailed(start.display().to_string(), e)
        })?;

        if !current_dir.is_dir() {
            return Err(NavigateError::NotADirectory(
                current_dir.display().to_string(),
            ));
        }

        Ok(Self {
            current_dir,
            config,
        })
    }

    /// The current working directory (always canonical)
    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    /// Replaces the current directory with an already-canonical path
    pub fn set_current_dir(&mut self, dir: PathBuf) {
        self.current_dir = dir;
    }

    /// Joins a user-entered name onto the current directory
    pub fn resolve(&self, name: &str) -> PathBuf {
        self.current_dir.join(name)
    }

    pub fn max_search_depth(&self) -> usize {
        self.config.max_search_depth
    }
}
