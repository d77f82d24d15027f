//! Configuration for mazegraph
//!
//! Read from `--config <path>`, or from `mazegraph.toml` in the working
//! directory when that file exists. Command-line flags take precedence.

pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{GraphError, Result};

pub use types::{AppConfig, MazeConfig, CONFIG_FILE_NAME};

impl AppConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: AppConfig =
            toml::from_str(&content).map_err(|e| GraphError::invalid_document(path, e))?;

        if config.maze.default_weight <= 0 {
            tracing::warn!(
                default_weight = config.maze.default_weight,
                "maze.default_weight is not positive; mazes relying on it will fail to build"
            );
        }

        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GraphError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Resolve the configuration for a run.
    ///
    /// An explicit path must exist. Otherwise `mazegraph.toml` in `dir` is
    /// used if present, and the defaults if not.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "using discovered config");
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }
}
