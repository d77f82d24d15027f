use crate::error::Result;
use crate::graph::{Vertex, WeightedGraph};
use std::collections::{HashSet, VecDeque};

/// Order in which discovered vertices are processed.
///
/// BFS uses a FIFO queue and DFS a LIFO stack; the rest of the search loop
/// is shared.
pub trait Frontier<V>: Default {
    fn push(&mut self, vertex: V);

    fn pop_next(&mut self) -> Option<V>;

    /// Add neighbors given in ascending order so that the smallest one is
    /// processed first among them.
    fn push_ascending(&mut self, neighbors: Vec<V>);
}

impl<V> Frontier<V> for VecDeque<V> {
    fn push(&mut self, vertex: V) {
        self.push_back(vertex);
    }

    fn pop_next(&mut self) -> Option<V> {
        self.pop_front()
    }

    fn push_ascending(&mut self, neighbors: Vec<V>) {
        self.extend(neighbors);
    }
}

impl<V> Frontier<V> for Vec<V> {
    fn push(&mut self, vertex: V) {
        Vec::push(self, vertex);
    }

    fn pop_next(&mut self) -> Option<V> {
        self.pop()
    }

    fn push_ascending(&mut self, neighbors: Vec<V>) {
        self.extend(neighbors.into_iter().rev());
    }
}

impl<V: Vertex> WeightedGraph<V> {
    /// Breadth-first search from `start`, stopping right after `end` is visited.
    ///
    /// Observers get `notify_bfs_has_begun`, then `notify_visit` per visited
    /// vertex, then `notify_search_is_over` if `end` was reached. An
    /// unreachable `end` is not an error: the frontier is exhausted and the
    /// search-over event never fires.
    ///
    /// # Errors
    /// `UnknownVertex` if `start` or `end` is not in the graph. No observer is
    /// notified in that case.
    #[tracing::instrument(skip(self), level = "debug")]
    pub fn run_bfs(&self, start: &V, end: &V) -> Result<()> {
        self.ensure_vertex(start)?;
        self.ensure_vertex(end)?;
        self.observers.notify(|o| o.notify_bfs_has_begun());
        self.search::<VecDeque<V>>(start, end)
    }

    /// Depth-first search from `start`, stopping right after `end` is visited.
    ///
    /// Same notifications and errors as [`WeightedGraph::run_bfs`], with
    /// `notify_dfs_has_begun` as the opening event.
    #[tracing::instrument(skip(self), level = "debug")]
    pub fn run_dfs(&self, start: &V, end: &V) -> Result<()> {
        self.ensure_vertex(start)?;
        self.ensure_vertex(end)?;
        self.observers.notify(|o| o.notify_dfs_has_begun());
        self.search::<Vec<V>>(start, end)
    }

    fn search<F: Frontier<V>>(&self, start: &V, end: &V) -> Result<()> {
        let mut visited: HashSet<V> = HashSet::new();
        let mut frontier = F::default();
        frontier.push(start.clone());

        while let Some(current) = frontier.pop_next() {
            // A vertex can be queued several times before it is first popped
            if !visited.insert(current.clone()) {
                continue;
            }
            self.observers.notify(|o| o.notify_visit(&current));

            if current == *end {
                self.observers.notify(|o| o.notify_search_is_over());
                tracing::debug!(visited = visited.len(), "end vertex reached");
                return Ok(());
            }

            let unvisited: Vec<V> = self
                .neighbors(&current)?
                .into_iter()
                .filter(|(neighbor, _)| !visited.contains(*neighbor))
                .map(|(neighbor, _)| neighbor.clone())
                .collect();
            frontier.push_ascending(unvisited);
        }

        tracing::debug!(visited = visited.len(), "frontier exhausted");
        Ok(())
    }
}

#[cfg(test)]
mod tests;
