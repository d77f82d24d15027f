use super::*;
use crate::graph::{AlgorithmEvent, EventRecorder};
use std::rc::Rc;

fn graph_with(
    vertices: &[&'static str],
    edges: &[(&'static str, &'static str, i64)],
) -> (WeightedGraph<&'static str>, Rc<EventRecorder<&'static str>>) {
    let mut graph = WeightedGraph::new();
    for v in vertices {
        graph.add_vertex(*v).unwrap();
    }
    for (from, to, weight) in edges {
        graph.add_edge(from, to, *weight).unwrap();
    }
    let recorder = Rc::new(EventRecorder::new());
    graph.add_observer(recorder.clone());
    (graph, recorder)
}

/// Sum of edge weights along a reported path
fn path_weight(graph: &WeightedGraph<&'static str>, path: &[&'static str]) -> Cost {
    path.windows(2)
        .map(|pair| Cost::from(graph.get_weight(&pair[0], &pair[1]).unwrap().unwrap()))
        .sum()
}

/// Test HeapEntry comparison ordering
#[test]
fn test_heap_entry_ordering() {
    let entry1 = HeapEntry {
        cost: 1,
        vertex: "A",
    };
    let entry2 = HeapEntry {
        cost: 2,
        vertex: "A",
    };
    let entry3 = HeapEntry {
        cost: 1,
        vertex: "B",
    };

    // Lower cost should compare as less (normal ordering)
    assert_eq!(entry1.cmp(&entry2), Ordering::Less);
    assert_eq!(entry2.cmp(&entry1), Ordering::Greater);

    // Equal costs fall back to the vertex
    assert_eq!(entry1.cmp(&entry3), Ordering::Less);

    let mut heap = BinaryHeap::new();
    heap.push(Reverse(entry2));
    heap.push(Reverse(entry3));
    heap.push(Reverse(entry1.clone()));
    assert_eq!(heap.pop().map(|Reverse(e)| e), Some(entry1));
}

#[test]
fn test_chain_without_shortcut() {
    let (graph, recorder) = graph_with(&["A", "B", "C"], &[("A", "B", 2), ("B", "C", 3)]);
    graph.run_dijkstra(&"A", &"C").unwrap();

    assert_eq!(recorder.path(), Some(vec!["A", "B", "C"]));
    assert_eq!(recorder.finished(), vec![("A", 0), ("B", 2), ("C", 5)]);
}

#[test]
fn test_full_event_sequence() {
    let (graph, recorder) = graph_with(&["A", "B"], &[("A", "B", 4)]);
    graph.run_dijkstra(&"A", &"B").unwrap();

    assert_eq!(
        recorder.events(),
        vec![
            AlgorithmEvent::DijkstraBegun,
            AlgorithmEvent::VertexFinished {
                vertex: "A",
                cost: 0
            },
            AlgorithmEvent::VertexFinished {
                vertex: "B",
                cost: 4
            },
            AlgorithmEvent::DijkstraOver {
                path: vec!["A", "B"]
            },
        ]
    );
}

#[test]
fn test_cheaper_longer_path_wins() {
    let (graph, recorder) = graph_with(
        &["A", "B", "C", "D"],
        &[("A", "D", 10), ("A", "B", 1), ("B", "C", 1), ("C", "D", 1)],
    );
    graph.run_dijkstra(&"A", &"D").unwrap();

    let path = recorder.path().unwrap();
    assert_eq!(path, vec!["A", "B", "C", "D"]);

    let end_cost = recorder
        .finished()
        .into_iter()
        .find(|(v, _)| *v == "D")
        .map(|(_, c)| c);
    assert_eq!(end_cost, Some(3));
    assert_eq!(path_weight(&graph, &path), 3);
}

#[test]
fn test_does_not_stop_at_end() {
    let (graph, recorder) = graph_with(
        &["A", "B", "C", "D"],
        &[("A", "B", 1), ("B", "C", 1), ("C", "D", 1)],
    );
    graph.run_dijkstra(&"A", &"B").unwrap();

    assert_eq!(recorder.finished().len(), 4);
    assert_eq!(recorder.path(), Some(vec!["A", "B"]));
}

#[test]
fn test_every_vertex_finished_once_including_unreachable() {
    let (graph, recorder) = graph_with(
        &["A", "B", "C", "X", "Y"],
        &[("A", "B", 1), ("B", "C", 1), ("X", "Y", 1)],
    );
    graph.run_dijkstra(&"A", &"C").unwrap();

    assert_eq!(
        recorder.finished(),
        vec![
            ("A", 0),
            ("B", 1),
            ("C", 2),
            ("X", INFINITE_COST),
            ("Y", INFINITE_COST),
        ]
    );
}

#[test]
fn test_unreachable_end_is_path_not_found() {
    let (graph, recorder) = graph_with(&["A", "B", "C"], &[("B", "A", 1)]);
    let err = graph.run_dijkstra(&"A", &"C").unwrap_err();

    assert!(matches!(err, GraphError::PathNotFound { .. }));
    assert_eq!(recorder.finished().len(), 3);
    assert_eq!(recorder.path(), None);
}

#[test]
fn test_start_equals_end() {
    let (graph, recorder) = graph_with(&["A", "B"], &[("A", "B", 1)]);
    graph.run_dijkstra(&"A", &"A").unwrap();

    assert_eq!(recorder.path(), Some(vec!["A"]));
    assert_eq!(recorder.finished().len(), 2);
}

#[test]
fn test_ties_go_to_lowest_vertex() {
    let (graph, recorder) = graph_with(
        &["S", "C", "B", "T"],
        &[("S", "C", 1), ("S", "B", 1), ("B", "T", 1), ("C", "T", 1)],
    );
    graph.run_dijkstra(&"S", &"T").unwrap();

    assert_eq!(
        recorder.finished(),
        vec![("S", 0), ("B", 1), ("C", 1), ("T", 2)]
    );
    // T is relaxed first through B; the equal-cost route through C does not replace it
    assert_eq!(recorder.path(), Some(vec!["S", "B", "T"]));
}

#[test]
fn test_deterministic_across_runs() {
    let (graph, recorder) = graph_with(
        &["S", "A", "B", "C", "T"],
        &[
            ("S", "A", 2),
            ("S", "B", 2),
            ("A", "C", 1),
            ("B", "C", 1),
            ("C", "T", 3),
            ("A", "T", 4),
        ],
    );
    graph.run_dijkstra(&"S", &"T").unwrap();
    let first = recorder.events();

    for _ in 0..5 {
        recorder.clear();
        graph.run_dijkstra(&"S", &"T").unwrap();
        assert_eq!(recorder.events(), first);
    }
}

#[test]
fn test_unknown_endpoints_rejected_before_notifying() {
    let (graph, recorder) = graph_with(&["A"], &[]);
    assert!(matches!(
        graph.run_dijkstra(&"A", &"Q"),
        Err(GraphError::UnknownVertex { .. })
    ));
    assert!(recorder.events().is_empty());
}

#[test]
fn test_relaxed_cost_saturates() {
    assert_eq!(relaxed_cost(3, 4), 7);
    assert_eq!(relaxed_cost(INFINITE_COST - 1, 5), INFINITE_COST);
    assert_eq!(relaxed_cost(INFINITE_COST, 1), INFINITE_COST);
}

#[test]
fn test_large_weights_do_not_overflow() {
    let max = i64::from(Weight::MAX);
    let (graph, recorder) = graph_with(&["A", "B", "C"], &[("A", "B", max), ("B", "C", max)]);
    graph.run_dijkstra(&"A", &"C").unwrap();

    let expected = 2 * Cost::from(Weight::MAX);
    assert_eq!(recorder.finished().last(), Some(&("C", expected)));
}
