use crate::error::{GraphError, Result};
use crate::graph::store::{Cost, Weight, INFINITE_COST};
use crate::graph::{Vertex, WeightedGraph};
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};

/// Min-heap entry: ordered by tentative cost, then by vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeapEntry<V> {
    pub cost: Cost,
    pub vertex: V,
}

impl<V: Ord> PartialOrd for HeapEntry<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V: Ord> Ord for HeapEntry<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// Cost of reaching a neighbor through a finished vertex.
///
/// Saturates at [`INFINITE_COST`] instead of wrapping.
pub(crate) fn relaxed_cost(cost: Cost, weight: Weight) -> Cost {
    cost.saturating_add(Cost::from(weight))
}

/// State tracked during a single Dijkstra run
struct DijkstraState<'g, V> {
    graph: &'g WeightedGraph<V>,
    cost: HashMap<V, Cost>,
    previous: HashMap<V, V>,
    finished: HashSet<V>,
    heap: BinaryHeap<Reverse<HeapEntry<V>>>,
    /// Filled once the heap drains, highest vertex first
    unreached: Option<Vec<V>>,
}

impl<'g, V: Vertex> DijkstraState<'g, V> {
    fn new(graph: &'g WeightedGraph<V>, start: &V) -> Self {
        let mut cost: HashMap<V, Cost> = graph
            .vertices()
            .map(|vertex| (vertex.clone(), INFINITE_COST))
            .collect();
        cost.insert(start.clone(), 0);

        let mut heap = BinaryHeap::new();
        heap.push(Reverse(HeapEntry {
            cost: 0,
            vertex: start.clone(),
        }));

        Self {
            graph,
            cost,
            previous: HashMap::new(),
            finished: HashSet::with_capacity(graph.vertex_count()),
            heap,
            unreached: None,
        }
    }

    fn cost_of(&self, vertex: &V) -> Cost {
        self.cost.get(vertex).copied().unwrap_or(INFINITE_COST)
    }

    /// The unfinished vertex with the lowest `(cost, vertex)`.
    ///
    /// Vertices never pushed on the heap are unreachable; they come out last,
    /// in ascending order, at `INFINITE_COST`.
    fn next_unfinished(&mut self) -> Option<(V, Cost)> {
        while let Some(Reverse(HeapEntry { cost, vertex })) = self.heap.pop() {
            // Stale entry: finished already, or superseded by a cheaper push
            if self.finished.contains(&vertex) || cost > self.cost_of(&vertex) {
                continue;
            }
            return Some((vertex, cost));
        }

        let finished = &self.finished;
        let graph = self.graph;
        let unreached = self.unreached.get_or_insert_with(|| {
            let mut rest: Vec<V> = graph
                .vertices()
                .filter(|vertex| !finished.contains(*vertex))
                .cloned()
                .collect();
            rest.sort_unstable_by(|a, b| b.cmp(a));
            rest
        });
        unreached.pop().map(|vertex| (vertex, INFINITE_COST))
    }

    fn relax(&mut self, from: &V, from_cost: Cost) -> Result<()> {
        let graph = self.graph;
        for (neighbor, weight) in graph.neighbors(from)? {
            if self.finished.contains(neighbor) {
                continue;
            }
            let candidate = relaxed_cost(from_cost, weight);
            if candidate < self.cost_of(neighbor) {
                self.cost.insert(neighbor.clone(), candidate);
                self.previous.insert(neighbor.clone(), from.clone());
                self.heap.push(Reverse(HeapEntry {
                    cost: candidate,
                    vertex: neighbor.clone(),
                }));
            }
        }
        Ok(())
    }

    /// Walk predecessors back from `end`, returning the path start-first.
    fn path_to(&self, start: &V, end: &V) -> Result<Vec<V>> {
        if self.cost_of(end) == INFINITE_COST {
            return Err(GraphError::path_not_found(start, end));
        }

        let mut path = vec![end.clone()];
        let mut current = end;
        while let Some(prev) = self.previous.get(current) {
            path.push(prev.clone());
            current = prev;
        }
        path.reverse();
        Ok(path)
    }
}

impl<V: Vertex> WeightedGraph<V> {
    /// Dijkstra's shortest path from `start`, reported for `end`.
    ///
    /// Every vertex in the graph is finished, even after `end` is: observers
    /// get `notify_dijkstra_has_begun`, one `notify_dijkstra_vertex_finished`
    /// per vertex (in finishing order, with `INFINITE_COST` for unreachable
    /// ones), then `notify_dijkstra_is_over` with the path from `start` to
    /// `end` inclusive. Ties between equally cheap vertices go to the lowest
    /// vertex.
    ///
    /// # Errors
    /// - `UnknownVertex` if `start` or `end` is not in the graph, before any
    ///   notification
    /// - `PathNotFound` if `end` is unreachable; every vertex has still been
    ///   finished and notified, but `notify_dijkstra_is_over` is not fired
    #[tracing::instrument(skip(self), level = "debug")]
    pub fn run_dijkstra(&self, start: &V, end: &V) -> Result<()> {
        self.ensure_vertex(start)?;
        self.ensure_vertex(end)?;
        self.observers.notify(|o| o.notify_dijkstra_has_begun());

        let mut state = DijkstraState::new(self, start);
        while let Some((vertex, cost)) = state.next_unfinished() {
            state.finished.insert(vertex.clone());
            self.observers
                .notify(|o| o.notify_dijkstra_vertex_finished(&vertex, cost));

            if cost != INFINITE_COST {
                state.relax(&vertex, cost)?;
            }
        }

        let path = state.path_to(start, end)?;
        tracing::debug!(
            finished = state.finished.len(),
            cost = state.cost_of(end),
            hops = path.len() - 1,
            "shortest path found"
        );
        self.observers.notify(|o| o.notify_dijkstra_is_over(&path));
        Ok(())
    }
}

#[cfg(test)]
mod tests;
