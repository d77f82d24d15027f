//! Maze to graph conversion
//!
//! A maze is a rectangular grid of junctures with `(0, 0)` in the upper-left
//! corner. Adjacent junctures not separated by a wall become a pair of
//! directed edges, each weighted by the maze.

pub mod grid;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::graph::WeightedGraph;

pub use grid::{GridMaze, MazeDocument};

/// A cell of the maze grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Juncture {
    pub x: usize,
    pub y: usize,
}

impl Juncture {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The adjacent juncture in `direction`, if it lies inside a
    /// `width` x `height` grid.
    pub fn step(&self, direction: Direction, width: usize, height: usize) -> Option<Juncture> {
        let (x, y) = (self.x, self.y);
        match direction {
            Direction::Left if x > 0 => Some(Juncture::new(x - 1, y)),
            Direction::Up if y > 0 => Some(Juncture::new(x, y - 1)),
            Direction::Right if x + 1 < width => Some(Juncture::new(x + 1, y)),
            Direction::Down if y + 1 < height => Some(Juncture::new(x, y + 1)),
            _ => None,
        }
    }
}

impl fmt::Display for Juncture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for Juncture {
    type Err = GraphError;

    /// Parses `"x,y"`, allowing whitespace around either coordinate.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || GraphError::invalid_value("juncture (expected x,y)", s);
        let (x, y) = s.split_once(',').ok_or_else(invalid)?;
        let x = x.trim().parse().map_err(|_| invalid())?;
        let y = y.trim().parse().map_err(|_| invalid())?;
        Ok(Juncture::new(x, y))
    }
}

/// A side of a juncture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
        }
    }
}

/// Read access to a rectangular maze.
pub trait Maze {
    fn width(&self) -> usize;

    fn height(&self) -> usize;

    /// Whether a wall blocks movement from `juncture` toward `direction`.
    fn is_wall(&self, juncture: &Juncture, direction: Direction) -> bool;

    /// Weight of moving from `juncture` toward `direction`.
    fn weight(&self, juncture: &Juncture, direction: Direction) -> i64;
}

/// Builds a graph with one vertex per juncture and one directed edge per
/// open move between adjacent junctures.
///
/// # Errors
/// `InvalidWeight` if the maze reports a non-positive weight for an open move.
#[tracing::instrument(skip(maze), fields(width = maze.width(), height = maze.height()))]
pub fn build_maze_graph<M: Maze + ?Sized>(maze: &M) -> Result<WeightedGraph<Juncture>> {
    let (width, height) = (maze.width(), maze.height());
    let mut graph = WeightedGraph::new();

    for x in 0..width {
        for y in 0..height {
            graph.add_vertex(Juncture::new(x, y))?;
        }
    }

    for x in 0..width {
        for y in 0..height {
            let current = Juncture::new(x, y);
            for direction in Direction::ALL {
                let Some(next) = current.step(direction, width, height) else {
                    continue;
                };
                if maze.is_wall(&current, direction) {
                    continue;
                }
                graph.add_edge(&current, &next, maze.weight(&current, direction))?;
            }
        }
    }

    tracing::debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "maze graph built"
    );
    Ok(graph)
}
