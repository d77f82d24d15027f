//! Mazegraph Core Library
//!
//! Weighted directed graphs with observable BFS, DFS and Dijkstra, plus the
//! maze adapter, input documents and ambient setup shared by the CLI.

pub mod config;
pub mod document;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
pub mod maze;
