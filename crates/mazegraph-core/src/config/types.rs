//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::format::OutputFormat;
use crate::maze::grid::DEFAULT_MOVE_WEIGHT;

/// File looked up in the working directory when no `--config` is given
pub const CONFIG_FILE_NAME: &str = "mazegraph.toml";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Output format used when `--format` is not given
    #[serde(default)]
    pub format: OutputFormat,

    /// Log level used when neither `--log-level` nor `--verbose` is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,

    /// Maze loading defaults
    #[serde(default)]
    pub maze: MazeConfig,
}

/// Defaults applied while loading maze documents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MazeConfig {
    /// Weight of a move when the maze document sets no `default_weight`
    #[serde(default = "default_move_weight")]
    pub default_weight: i64,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            default_weight: default_move_weight(),
        }
    }
}

fn default_move_weight() -> i64 {
    DEFAULT_MOVE_WEIGHT
}
