//! Adjacency-map storage for a weighted directed graph

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::error::{GraphError, Result};
use crate::graph::observer::{GraphAlgorithmObserver, ObserverRegistry};
use crate::graph::Vertex;

/// Weight of a single directed edge. Always strictly positive.
pub type Weight = u32;

/// Accumulated path cost.
pub type Cost = u64;

/// Cost of a vertex that cannot be reached from the start vertex.
pub const INFINITE_COST: Cost = Cost::MAX;

/// A directed graph whose edges carry positive integer weights.
///
/// Vertices are unique. Every edge endpoint must be added as a vertex before
/// the edge is. The graph also owns the observers notified by `run_bfs`,
/// `run_dfs` and `run_dijkstra`; those algorithms borrow the graph immutably.
///
/// | Operation | Complexity |
/// |-----------|------------|
/// | `add_vertex` | O(1) average |
/// | `add_edge` | O(1) average |
/// | `get_weight` | O(1) average |
/// | `neighbors` | O(d log d) for out-degree d |
pub struct WeightedGraph<V> {
    vertices: HashMap<V, HashMap<V, Weight>>,
    pub(crate) observers: ObserverRegistry<V>,
}

impl<V: Vertex> WeightedGraph<V> {
    /// Creates an empty graph with no vertices, edges or observers.
    pub fn new() -> Self {
        Self {
            vertices: HashMap::new(),
            observers: ObserverRegistry::new(),
        }
    }

    /// Registers an observer for subsequent algorithm runs.
    ///
    /// Registering the same `Rc` twice has no further effect.
    pub fn add_observer(&mut self, observer: Rc<dyn GraphAlgorithmObserver<V>>) {
        if !self.observers.register(observer) {
            tracing::debug!("observer already registered");
        }
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Adds a vertex with no outgoing edges.
    ///
    /// # Errors
    /// `DuplicateVertex` if the vertex is already present; the graph is unchanged.
    pub fn add_vertex(&mut self, vertex: V) -> Result<()> {
        match self.vertices.entry(vertex) {
            Entry::Occupied(existing) => Err(GraphError::duplicate_vertex(existing.key())),
            Entry::Vacant(slot) => {
                tracing::trace!(vertex = ?slot.key(), "add_vertex");
                slot.insert(HashMap::new());
                Ok(())
            }
        }
    }

    /// Returns `true` if the vertex has been added.
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.vertices.contains_key(vertex)
    }

    /// Adds the directed edge `from -> to`, replacing any previous weight.
    ///
    /// # Errors
    /// - `UnknownVertex` if `from` or `to` is absent (checked in that order)
    /// - `InvalidWeight` if `weight` is not a positive integer that fits [`Weight`]
    pub fn add_edge(&mut self, from: &V, to: &V, weight: i64) -> Result<()> {
        self.ensure_vertex(from)?;
        self.ensure_vertex(to)?;
        let weight = Weight::try_from(weight)
            .ok()
            .filter(|w| *w > 0)
            .ok_or(GraphError::InvalidWeight { weight })?;
        let edges = self
            .vertices
            .get_mut(from)
            .ok_or_else(|| GraphError::unknown_vertex(from))?;

        if let Some(previous) = edges.insert(to.clone(), weight) {
            tracing::trace!(?from, ?to, previous, weight, "edge weight replaced");
        }
        Ok(())
    }

    /// Returns the weight of `from -> to`, or `None` if there is no such edge.
    ///
    /// # Errors
    /// `UnknownVertex` if either vertex is absent.
    pub fn get_weight(&self, from: &V, to: &V) -> Result<Option<Weight>> {
        let edges = self.out_edges(from)?;
        self.ensure_vertex(to)?;
        Ok(edges.get(to).copied())
    }

    /// Outgoing edges of `vertex`, ordered by neighbor.
    ///
    /// # Errors
    /// `UnknownVertex` if the vertex is absent.
    pub fn neighbors(&self, vertex: &V) -> Result<Vec<(&V, Weight)>> {
        let mut neighbors: Vec<(&V, Weight)> = self
            .out_edges(vertex)?
            .iter()
            .map(|(neighbor, weight)| (neighbor, *weight))
            .collect();
        neighbors.sort_unstable_by(|a, b| a.0.cmp(b.0));
        Ok(neighbors)
    }

    /// Iterates over every vertex in unspecified order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.vertices.keys()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub(crate) fn ensure_vertex(&self, vertex: &V) -> Result<()> {
        if self.contains_vertex(vertex) {
            Ok(())
        } else {
            Err(GraphError::unknown_vertex(vertex))
        }
    }

    fn out_edges(&self, vertex: &V) -> Result<&HashMap<V, Weight>> {
        self.vertices
            .get(vertex)
            .ok_or_else(|| GraphError::unknown_vertex(vertex))
    }
}

impl<V: Vertex> Default for WeightedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> fmt::Debug for WeightedGraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeightedGraph")
            .field("vertices", &self.vertex_count())
            .field("edges", &self.edge_count())
            .field("observers", &self.observers.len())
            .finish()
    }
}
