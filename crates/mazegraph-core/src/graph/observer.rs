//! Progress notifications for graph algorithms
//!
//! Algorithms call every registered observer synchronously, in registration
//! order, before moving on. Each callback has a no-op default so an observer
//! only implements the events it cares about.

use std::cell::RefCell;
use std::fmt::{self, Debug};
use std::rc::Rc;

use serde::{Serialize, Serializer};

use crate::graph::store::{Cost, INFINITE_COST};

/// Listener for the lifecycle events of BFS, DFS and Dijkstra.
pub trait GraphAlgorithmObserver<V> {
    /// Fired once before BFS visits anything.
    fn notify_bfs_has_begun(&self) {}

    /// Fired once before DFS visits anything.
    fn notify_dfs_has_begun(&self) {}

    /// Fired once before Dijkstra finishes anything.
    fn notify_dijkstra_has_begun(&self) {}

    /// Fired once per vertex as BFS or DFS marks it visited.
    fn notify_visit(&self, _vertex: &V) {}

    /// Fired once, right after BFS or DFS visits the end vertex.
    fn notify_search_is_over(&self) {}

    /// Fired once per vertex as Dijkstra finishes it. `cost` is
    /// [`INFINITE_COST`] for vertices unreachable from the start.
    fn notify_dijkstra_vertex_finished(&self, _vertex: &V, _cost: Cost) {}

    /// Fired once after every vertex is finished, with the start-to-end path.
    fn notify_dijkstra_is_over(&self, _path: &[V]) {}
}

/// The set of observers a graph notifies.
///
/// Membership is by `Rc` identity, so registering the same observer twice
/// keeps a single entry.
pub struct ObserverRegistry<V> {
    observers: Vec<Rc<dyn GraphAlgorithmObserver<V>>>,
}

impl<V> ObserverRegistry<V> {
    pub fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    /// Adds an observer. Returns `false` if it was already registered.
    pub fn register(&mut self, observer: Rc<dyn GraphAlgorithmObserver<V>>) -> bool {
        if self
            .observers
            .iter()
            .any(|existing| Rc::ptr_eq(existing, &observer))
        {
            return false;
        }
        self.observers.push(observer);
        true
    }

    /// Delivers one event to every observer.
    pub fn notify(&self, mut event: impl FnMut(&dyn GraphAlgorithmObserver<V>)) {
        for observer in &self.observers {
            event(observer.as_ref());
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl<V> Default for ObserverRegistry<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Debug for ObserverRegistry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("len", &self.observers.len())
            .finish()
    }
}

/// A single observed callback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AlgorithmEvent<V> {
    BfsBegun,
    DfsBegun,
    DijkstraBegun,
    Visit {
        vertex: V,
    },
    SearchOver,
    VertexFinished {
        vertex: V,
        /// Serialized as `null` when unreachable
        #[serde(serialize_with = "serialize_cost")]
        cost: Cost,
    },
    DijkstraOver {
        path: Vec<V>,
    },
}

fn serialize_cost<S: Serializer>(cost: &Cost, serializer: S) -> Result<S::Ok, S::Error> {
    if *cost == INFINITE_COST {
        serializer.serialize_none()
    } else {
        serializer.serialize_u64(*cost)
    }
}

/// Observer that keeps every event it receives, in order.
pub struct EventRecorder<V> {
    events: RefCell<Vec<AlgorithmEvent<V>>>,
}

impl<V: Clone> EventRecorder<V> {
    pub fn new() -> Self {
        Self {
            events: RefCell::new(Vec::new()),
        }
    }

    /// Snapshot of the recorded events.
    pub fn events(&self) -> Vec<AlgorithmEvent<V>> {
        self.events.borrow().clone()
    }

    /// Forget everything recorded so far.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    /// Vertices reported by `notify_visit`, in visit order.
    pub fn visited(&self) -> Vec<V> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                AlgorithmEvent::Visit { vertex } => Some(vertex.clone()),
                _ => None,
            })
            .collect()
    }

    /// Vertices reported by Dijkstra as finished, with their costs.
    pub fn finished(&self) -> Vec<(V, Cost)> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                AlgorithmEvent::VertexFinished { vertex, cost } => Some((vertex.clone(), *cost)),
                _ => None,
            })
            .collect()
    }

    /// The last path reported by Dijkstra.
    pub fn path(&self) -> Option<Vec<V>> {
        self.events.borrow().iter().rev().find_map(|event| match event {
            AlgorithmEvent::DijkstraOver { path } => Some(path.clone()),
            _ => None,
        })
    }

    /// Number of times `notify_search_is_over` fired.
    pub fn search_over_count(&self) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|event| matches!(event, AlgorithmEvent::SearchOver))
            .count()
    }

    pub fn search_completed(&self) -> bool {
        self.search_over_count() > 0
    }

    fn record(&self, event: AlgorithmEvent<V>) {
        self.events.borrow_mut().push(event);
    }
}

impl<V: Clone> Default for EventRecorder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> GraphAlgorithmObserver<V> for EventRecorder<V> {
    fn notify_bfs_has_begun(&self) {
        self.record(AlgorithmEvent::BfsBegun);
    }

    fn notify_dfs_has_begun(&self) {
        self.record(AlgorithmEvent::DfsBegun);
    }

    fn notify_dijkstra_has_begun(&self) {
        self.record(AlgorithmEvent::DijkstraBegun);
    }

    fn notify_visit(&self, vertex: &V) {
        self.record(AlgorithmEvent::Visit {
            vertex: vertex.clone(),
        });
    }

    fn notify_search_is_over(&self) {
        self.record(AlgorithmEvent::SearchOver);
    }

    fn notify_dijkstra_vertex_finished(&self, vertex: &V, cost: Cost) {
        self.record(AlgorithmEvent::VertexFinished {
            vertex: vertex.clone(),
            cost,
        });
    }

    fn notify_dijkstra_is_over(&self, path: &[V]) {
        self.record(AlgorithmEvent::DijkstraOver {
            path: path.to_vec(),
        });
    }
}

/// Observer that forwards every event to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl<V: Debug> GraphAlgorithmObserver<V> for TracingObserver {
    fn notify_bfs_has_begun(&self) {
        tracing::debug!(algorithm = "bfs", "algorithm_begun");
    }

    fn notify_dfs_has_begun(&self) {
        tracing::debug!(algorithm = "dfs", "algorithm_begun");
    }

    fn notify_dijkstra_has_begun(&self) {
        tracing::debug!(algorithm = "dijkstra", "algorithm_begun");
    }

    fn notify_visit(&self, vertex: &V) {
        tracing::trace!(?vertex, "visit");
    }

    fn notify_search_is_over(&self) {
        tracing::debug!("search_is_over");
    }

    fn notify_dijkstra_vertex_finished(&self, vertex: &V, cost: Cost) {
        if cost == INFINITE_COST {
            tracing::trace!(?vertex, "vertex_finished_unreachable");
        } else {
            tracing::trace!(?vertex, cost, "vertex_finished");
        }
    }

    fn notify_dijkstra_is_over(&self, path: &[V]) {
        tracing::debug!(hops = path.len().saturating_sub(1), ?path, "dijkstra_is_over");
    }
}
