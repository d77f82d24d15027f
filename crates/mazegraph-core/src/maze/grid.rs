//! A concrete maze backed by wall and weight tables
//!
//! Mazes are described in TOML:
//!
//! ```toml
//! width = 3
//! height = 2
//! default_weight = 1
//!
//! [[walls]]
//! x = 0
//! y = 0
//! side = "right"
//!
//! [[weights]]
//! x = 1
//! y = 1
//! direction = "up"
//! weight = 5
//! ```

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Direction, Juncture, Maze};
use crate::error::{GraphError, Result};

/// Weight used when neither the document nor the configuration sets one
pub const DEFAULT_MOVE_WEIGHT: i64 = 1;

/// Largest `width * height` a maze may have
pub const MAX_JUNCTURES: usize = 1_000_000;

/// On-disk description of a [`GridMaze`]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MazeDocument {
    pub width: usize,
    pub height: usize,

    /// Weight of any move without an explicit entry in `weights`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_weight: Option<i64>,

    #[serde(default)]
    pub walls: Vec<WallSpec>,

    #[serde(default)]
    pub weights: Vec<WeightSpec>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallSpec {
    pub x: usize,
    pub y: usize,
    pub side: Direction,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightSpec {
    pub x: usize,
    pub y: usize,
    pub direction: Direction,
    pub weight: i64,
}

/// Rectangular maze with symmetric walls and per-move weights.
#[derive(Debug, Clone)]
pub struct GridMaze {
    width: usize,
    height: usize,
    default_weight: i64,
    walls: HashSet<(Juncture, Direction)>,
    weights: HashMap<(Juncture, Direction), i64>,
}

impl GridMaze {
    /// A maze with no walls where every move costs `default_weight`.
    ///
    /// # Errors
    /// `InvalidValue` if either dimension is zero or the grid has more than
    /// [`MAX_JUNCTURES`] junctures.
    pub fn open(width: usize, height: usize, default_weight: i64) -> Result<Self> {
        if width == 0 || height == 0 {
            crate::bail_invalid!("maze dimensions", format!("{}x{}", width, height));
        }
        if width
            .checked_mul(height)
            .map_or(true, |junctures| junctures > MAX_JUNCTURES)
        {
            crate::bail_invalid!(
                &format!("maze dimensions (at most {} junctures)", MAX_JUNCTURES),
                format!("{}x{}", width, height)
            );
        }
        Ok(Self {
            width,
            height,
            default_weight,
            walls: HashSet::new(),
            weights: HashMap::new(),
        })
    }

    /// Build a maze from its document. `fallback_weight` applies when the
    /// document has no `default_weight`.
    pub fn from_document(document: MazeDocument, fallback_weight: i64) -> Result<Self> {
        let default_weight = document.default_weight.unwrap_or(fallback_weight);
        let mut maze = Self::open(document.width, document.height, default_weight)?;

        for wall in document.walls {
            maze.add_wall(Juncture::new(wall.x, wall.y), wall.side)?;
        }
        for entry in document.weights {
            maze.set_weight(Juncture::new(entry.x, entry.y), entry.direction, entry.weight)?;
        }
        Ok(maze)
    }

    /// Load a maze document from a TOML file.
    pub fn load(path: &Path, fallback_weight: i64) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let document: MazeDocument = toml::from_str(&content)
            .map_err(|e| GraphError::invalid_document(path, e))?;
        Self::from_document(document, fallback_weight)
            .map_err(|e| GraphError::invalid_document(path, e))
    }

    /// Place a wall on one side of `juncture`. The adjacent juncture, if
    /// any, gets the matching wall on its opposite side.
    pub fn add_wall(&mut self, juncture: Juncture, side: Direction) -> Result<()> {
        self.ensure_inside(&juncture)?;
        self.walls.insert((juncture, side));
        if let Some(neighbor) = juncture.step(side, self.width, self.height) {
            self.walls.insert((neighbor, side.opposite()));
        }
        Ok(())
    }

    /// Override the weight of moving from `juncture` toward `direction`.
    pub fn set_weight(&mut self, juncture: Juncture, direction: Direction, weight: i64) -> Result<()> {
        self.ensure_inside(&juncture)?;
        self.weights.insert((juncture, direction), weight);
        Ok(())
    }

    pub fn default_weight(&self) -> i64 {
        self.default_weight
    }

    fn ensure_inside(&self, juncture: &Juncture) -> Result<()> {
        if juncture.x < self.width && juncture.y < self.height {
            Ok(())
        } else {
            Err(GraphError::invalid_value(
                &format!("juncture for a {}x{} maze", self.width, self.height),
                juncture,
            ))
        }
    }
}

impl Maze for GridMaze {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn is_wall(&self, juncture: &Juncture, direction: Direction) -> bool {
        self.walls.contains(&(*juncture, direction))
    }

    fn weight(&self, juncture: &Juncture, direction: Direction) -> i64 {
        self.weights
            .get(&(*juncture, direction))
            .copied()
            .unwrap_or(self.default_weight)
    }
}
