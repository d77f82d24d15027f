//! Loading graphs from `--graph` or `--maze`

use std::path::Path;

use mazegraph_core::config::AppConfig;
use mazegraph_core::document::GraphDocument;
use mazegraph_core::error::Result;
use mazegraph_core::graph::WeightedGraph;
use mazegraph_core::maze::{build_maze_graph, GridMaze, Juncture};

use crate::cli::SourceArgs;

/// A graph loaded from one of the supported documents
#[derive(Debug)]
pub enum LoadedGraph {
    /// Vertices named by strings
    Named(WeightedGraph<String>),
    /// Vertices are maze junctures
    Maze(WeightedGraph<Juncture>),
}

impl LoadedGraph {
    pub fn kind(&self) -> &'static str {
        match self {
            LoadedGraph::Named(_) => "graph",
            LoadedGraph::Maze(_) => "maze",
        }
    }

    pub fn vertex_count(&self) -> usize {
        match self {
            LoadedGraph::Named(graph) => graph.vertex_count(),
            LoadedGraph::Maze(graph) => graph.vertex_count(),
        }
    }

    pub fn edge_count(&self) -> usize {
        match self {
            LoadedGraph::Named(graph) => graph.edge_count(),
            LoadedGraph::Maze(graph) => graph.edge_count(),
        }
    }
}

/// Load the graph selected by `source`.
pub fn load(source: &SourceArgs, config: &AppConfig) -> Result<LoadedGraph> {
    match (&source.graph, &source.maze) {
        (Some(path), None) => load_graph_document(path).map(LoadedGraph::Named),
        (None, Some(path)) => load_maze_document(path, config).map(LoadedGraph::Maze),
        _ => mazegraph_core::bail_usage!("exactly one of --graph or --maze is required"),
    }
}

fn load_graph_document(path: &Path) -> Result<WeightedGraph<String>> {
    GraphDocument::load(path)?.into_graph()
}

fn load_maze_document(path: &Path, config: &AppConfig) -> Result<WeightedGraph<Juncture>> {
    let maze = GridMaze::load(path, config.maze.default_weight)?;
    build_maze_graph(&maze)
}
