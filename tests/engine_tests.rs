use rand::rngs::StdRng;
use rand::SeedableRng;
use sssp_trace::graph::generators::random_graph;
use sssp_trace::{
    run_bellman_ford, run_dijkstra, reconstruct, Edge, EdgeListGraph, Error, NullSink, Path,
    RecordingSink,
};
use std::collections::BTreeMap;

fn graph(edges: &[(usize, usize, i64)]) -> EdgeListGraph<i64> {
    EdgeListGraph::from_edges(
        edges
            .iter()
            .map(|&(from, to, weight)| Edge::new(from, to, weight))
            .collect(),
    )
}

fn diamond() -> EdgeListGraph<i64> {
    graph(&[(0, 1, 4), (0, 2, 1), (2, 1, 1), (1, 3, 2), (2, 3, 5)])
}

#[test]
fn both_engines_agree_on_diamond_graph() {
    let graph = diamond();
    let expected_distances: BTreeMap<usize, i64> = [(0, 0), (1, 2), (2, 1), (3, 4)].into();
    let expected_predecessors: BTreeMap<usize, usize> = [(1, 2), (2, 0), (3, 1)].into();

    let bf = run_bellman_ford(&graph, 0, &mut NullSink::new()).unwrap();
    assert_eq!(bf.distances, expected_distances);
    assert_eq!(bf.predecessors, expected_predecessors);
    assert!(!bf.has_negative_cycle);

    let dj = run_dijkstra(&graph, 0, &mut NullSink::new()).unwrap();
    assert_eq!(dj.distances, expected_distances);
    assert_eq!(dj.predecessors, expected_predecessors);

    let path = reconstruct(&bf.predecessors, 0, 3);
    assert_eq!(path.vertices(), Some(&[0, 2, 1, 3][..]));
}

#[test]
fn source_has_zero_distance_and_no_predecessor() {
    let graph = diamond();
    let result = run_bellman_ford(&graph, 0, &mut NullSink::new()).unwrap();
    assert_eq!(result.distances.get(&0), Some(&0));
    assert!(!result.predecessors.contains_key(&0));
}

#[test]
fn bellman_ford_handles_negative_edges_without_cycle() {
    let graph = graph(&[(0, 1, 4), (0, 2, 5), (2, 1, -3), (1, 3, 2)]);
    let result = run_bellman_ford(&graph, 0, &mut NullSink::new()).unwrap();
    assert!(!result.has_negative_cycle);
    assert_eq!(result.distances.get(&1), Some(&2));
    assert_eq!(result.distances.get(&3), Some(&4));
    assert_eq!(result.predecessors.get(&1), Some(&2));
}

#[test]
fn bellman_ford_flags_negative_cycle() {
    // 0 -> 1 -> 2 -> 0 sums to -1
    let graph = graph(&[(0, 1, 1), (1, 2, -3), (2, 0, 1)]);
    let result = run_bellman_ford(&graph, 0, &mut NullSink::new()).unwrap();
    assert!(result.has_negative_cycle);
}

#[test]
fn negative_cycle_is_an_outcome_not_an_error() {
    let graph = graph(&[(0, 1, 1), (1, 0, -2)]);
    assert!(run_bellman_ford(&graph, 0, &mut NullSink::new()).is_ok());
}

#[test]
fn dijkstra_rejects_negative_weight_without_running() {
    let graph = graph(&[(0, 1, 1), (1, 2, -3)]);
    let mut sink = RecordingSink::new();
    let result = run_dijkstra(&graph, 0, &mut sink);
    assert_eq!(result, Err(Error::NegativeWeightRejected { from: 1, to: 2 }));
    assert!(sink.events().is_empty(), "rejection must precede any event");
}

#[test]
fn invalid_source_fails_before_any_event() {
    let graph = diamond();
    let mut sink = RecordingSink::new();
    let result = run_bellman_ford(&graph, 7, &mut sink);
    assert_eq!(result, Err(Error::InvalidSource(7)));
    assert!(sink.events().is_empty());

    let mut sink = RecordingSink::new();
    let result = run_dijkstra(&graph, 7, &mut sink);
    assert_eq!(result, Err(Error::InvalidSource(7)));
    assert!(sink.events().is_empty());
}

#[test]
fn empty_edge_list_has_no_valid_source() {
    let graph: EdgeListGraph<i64> = EdgeListGraph::from_edges(Vec::new());
    assert!(graph.vertices().is_empty());
    assert_eq!(
        run_bellman_ford(&graph, 0, &mut NullSink::new()),
        Err(Error::InvalidSource(0))
    );
    assert_eq!(
        run_dijkstra(&graph, 0, &mut NullSink::new()),
        Err(Error::InvalidSource(0))
    );
}

#[test]
fn disconnected_component_stays_unreachable() {
    let graph = graph(&[(0, 1, 1), (2, 3, 1)]);
    for result in [
        run_bellman_ford(&graph, 0, &mut NullSink::new()).unwrap(),
        run_dijkstra(&graph, 0, &mut NullSink::new()).unwrap(),
    ] {
        assert!(!result.distances.contains_key(&3));
        assert_eq!(reconstruct(&result.predecessors, 0, 3), Path::Unreachable);
        assert_eq!(
            reconstruct(&result.predecessors, 0, 1).vertices(),
            Some(&[0, 1][..])
        );
    }
}

#[test]
fn parallel_edges_are_processed_independently() {
    let graph = graph(&[(0, 1, 7), (0, 1, 3)]);
    let bf = run_bellman_ford(&graph, 0, &mut NullSink::new()).unwrap();
    let dj = run_dijkstra(&graph, 0, &mut NullSink::new()).unwrap();
    assert_eq!(bf.distances.get(&1), Some(&3));
    assert_eq!(dj.distances.get(&1), Some(&3));
}

#[test]
fn engines_agree_on_random_non_negative_graphs() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..10 {
        let graph = random_graph(25, 80, 50, &mut rng);
        for &source in graph.vertices() {
            let bf = run_bellman_ford(&graph, source, &mut NullSink::new()).unwrap();
            let dj = run_dijkstra(&graph, source, &mut NullSink::new()).unwrap();
            assert!(!bf.has_negative_cycle);
            assert_eq!(
                bf.distances, dj.distances,
                "engines disagree from source {}",
                source
            );
        }
    }
}
