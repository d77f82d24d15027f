use super::*;
use crate::error::GraphError;
use crate::graph::{AlgorithmEvent, EventRecorder};
use std::rc::Rc;

/// A -> B, A -> C, B -> D, C -> D, D -> E, plus an isolated Z
fn diamond() -> (WeightedGraph<&'static str>, Rc<EventRecorder<&'static str>>) {
    let mut graph = WeightedGraph::new();
    for v in ["A", "B", "C", "D", "E", "Z"] {
        graph.add_vertex(v).unwrap();
    }
    for (from, to) in [("A", "B"), ("A", "C"), ("B", "D"), ("C", "D"), ("D", "E")] {
        graph.add_edge(&from, &to, 1).unwrap();
    }
    let recorder = Rc::new(EventRecorder::new());
    graph.add_observer(recorder.clone());
    (graph, recorder)
}

#[test]
fn test_bfs_visits_level_by_level() {
    let (graph, recorder) = diamond();
    graph.run_bfs(&"A", &"E").unwrap();

    assert_eq!(recorder.visited(), vec!["A", "B", "C", "D", "E"]);
    assert_eq!(recorder.search_over_count(), 1);
}

#[test]
fn test_dfs_follows_smallest_branch_first() {
    let (graph, recorder) = diamond();
    graph.run_dfs(&"A", &"E").unwrap();

    assert_eq!(recorder.visited(), vec!["A", "B", "D", "E"]);
    assert_eq!(recorder.search_over_count(), 1);
}

#[test]
fn test_bfs_and_dfs_order_differ() {
    let (graph, recorder) = diamond();

    graph.run_bfs(&"A", &"C").unwrap();
    assert_eq!(recorder.visited(), vec!["A", "B", "C"]);

    recorder.clear();
    graph.run_dfs(&"A", &"C").unwrap();
    assert_eq!(recorder.visited(), vec!["A", "B", "D", "E", "C"]);
}

#[test]
fn test_full_event_sequence() {
    let (graph, recorder) = diamond();
    graph.run_bfs(&"A", &"B").unwrap();

    assert_eq!(
        recorder.events(),
        vec![
            AlgorithmEvent::BfsBegun,
            AlgorithmEvent::Visit { vertex: "A" },
            AlgorithmEvent::Visit { vertex: "B" },
            AlgorithmEvent::SearchOver,
        ]
    );

    recorder.clear();
    graph.run_dfs(&"A", &"B").unwrap();
    assert_eq!(recorder.events()[0], AlgorithmEvent::DfsBegun);
}

#[test]
fn test_start_equals_end_does_not_expand() {
    let (graph, recorder) = diamond();
    graph.run_dfs(&"A", &"A").unwrap();

    assert_eq!(
        recorder.events(),
        vec![
            AlgorithmEvent::DfsBegun,
            AlgorithmEvent::Visit { vertex: "A" },
            AlgorithmEvent::SearchOver,
        ]
    );
}

#[test]
fn test_unreachable_end_exhausts_frontier_silently() {
    for depth_first in [false, true] {
        let (graph, recorder) = diamond();
        let result = if depth_first {
            graph.run_dfs(&"A", &"Z")
        } else {
            graph.run_bfs(&"A", &"Z")
        };
        assert!(result.is_ok());

        let mut visited = recorder.visited();
        assert_eq!(visited.len(), 5, "each reachable vertex exactly once");
        visited.sort_unstable();
        assert_eq!(visited, vec!["A", "B", "C", "D", "E"]);
        assert!(!recorder.search_completed());
    }
}

#[test]
fn test_disconnected_pair_never_reports_search_over() {
    let mut graph = WeightedGraph::new();
    graph.add_vertex("A").unwrap();
    graph.add_vertex("B").unwrap();
    let recorder = Rc::new(EventRecorder::new());
    graph.add_observer(recorder.clone());

    graph.run_bfs(&"A", &"B").unwrap();

    assert_eq!(recorder.visited(), vec!["A"]);
    assert_eq!(recorder.search_over_count(), 0);
}

#[test]
fn test_cycles_visit_each_vertex_once() {
    let mut graph = WeightedGraph::new();
    for v in 0..4u32 {
        graph.add_vertex(v).unwrap();
    }
    for from in 0..4u32 {
        for to in 0..4u32 {
            graph.add_edge(&from, &to, 1).unwrap();
        }
    }
    let recorder = Rc::new(EventRecorder::new());
    graph.add_observer(recorder.clone());

    graph.run_bfs(&0, &3).unwrap();
    assert_eq!(recorder.visited(), vec![0, 1, 2, 3]);

    recorder.clear();
    graph.run_dfs(&0, &3).unwrap();
    assert_eq!(recorder.visited(), vec![0, 1, 2, 3]);
}

#[test]
fn test_edges_are_followed_in_one_direction_only() {
    let (graph, recorder) = diamond();
    graph.run_bfs(&"E", &"A").unwrap();

    assert_eq!(recorder.visited(), vec!["E"]);
    assert!(!recorder.search_completed());
}

#[test]
fn test_unknown_endpoints_rejected_before_notifying() {
    let (graph, recorder) = diamond();

    let err = graph.run_bfs(&"Q", &"A").unwrap_err();
    assert!(matches!(err, GraphError::UnknownVertex { .. }));
    let err = graph.run_dfs(&"A", &"Q").unwrap_err();
    assert!(matches!(err, GraphError::UnknownVertex { .. }));

    assert!(recorder.events().is_empty());
}

#[test]
fn test_repeated_runs_are_independent() {
    let (graph, recorder) = diamond();
    graph.run_bfs(&"A", &"D").unwrap();
    let first = recorder.events();

    recorder.clear();
    graph.run_bfs(&"A", &"D").unwrap();
    assert_eq!(recorder.events(), first);
}

#[test]
fn test_frontier_disciplines() {
    let mut queue: VecDeque<u8> = VecDeque::new();
    queue.push_ascending(vec![1, 2, 3]);
    assert_eq!(queue.pop_next(), Some(1));

    let mut stack: Vec<u8> = Vec::new();
    stack.push_ascending(vec![1, 2, 3]);
    assert_eq!(stack.pop_next(), Some(1));
    Frontier::push(&mut stack, 9);
    assert_eq!(stack.pop_next(), Some(9));
}
