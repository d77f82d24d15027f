//! Weighted directed graph and the algorithms that run over it
//!
//! - `store`: adjacency storage and edge validation
//! - `observer`: progress notifications fired by the algorithms
//! - `algos`: BFS/DFS traversal and Dijkstra shortest path

pub mod algos;
pub mod observer;
pub mod store;

use std::fmt::Debug;
use std::hash::Hash;

pub use observer::{AlgorithmEvent, EventRecorder, GraphAlgorithmObserver, ObserverRegistry, TracingObserver};
pub use store::{Cost, Weight, WeightedGraph, INFINITE_COST};

/// Bound shared by every vertex type a graph can hold.
///
/// `Ord` is what makes neighbor expansion and Dijkstra tie-breaks
/// deterministic across runs.
pub trait Vertex: Clone + Eq + Hash + Ord + Debug {}

impl<T: Clone + Eq + Hash + Ord + Debug> Vertex for T {}
