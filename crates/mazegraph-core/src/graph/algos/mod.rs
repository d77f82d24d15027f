//! Graph algorithm implementations
//!
//! - `traversal`: breadth-first and depth-first search toward an end vertex
//! - `dijkstra`: exhaustive single-source shortest path

pub mod dijkstra;
pub mod traversal;

pub use dijkstra::HeapEntry;
pub use traversal::Frontier;
