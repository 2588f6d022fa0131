//! Property tests for the ordering algorithms.
//!
//! Random DAGs are built from edges `(a, b)` with `a < b`, which can never form a cycle.

use std::collections::HashMap;

use graff::{algorithms::find_cycle, CoffmanGrahamSorter, DirectedGraph, Error, EventGraph};
use proptest::prelude::*;

fn dag_edges(max_node: u8, max_edges: usize) -> impl Strategy<Value = Vec<(u8, u8)>> {
    proptest::collection::vec((0..max_node, 0..max_node), 0..max_edges).prop_map(|pairs| {
        pairs
            .into_iter()
            .filter(|(a, b)| a != b)
            .map(|(a, b)| (a.min(b), a.max(b)))
            .collect()
    })
}

fn reachability(graph: &DirectedGraph<u8>) -> Vec<(u8, u8, bool)> {
    let mut nodes: Vec<u8> = graph.nodes().copied().collect();
    nodes.sort_unstable();

    let mut matrix = Vec::new();
    for &from in &nodes {
        for &to in &nodes {
            matrix.push((from, to, graph.reaches(&from, &to)));
        }
    }
    matrix
}

proptest! {
    #[test]
    fn test_dfs_sort_is_topological(edges in dag_edges(24, 80)) {
        let graph: DirectedGraph<u8> = edges.into_iter().collect();
        let order = graph.dfs_sort().unwrap();

        prop_assert_eq!(order.len(), graph.node_count());
        let position: HashMap<u8, usize> =
            order.iter().enumerate().map(|(i, n)| (*n, i)).collect();
        prop_assert_eq!(position.len(), order.len());

        for (source, target) in graph.edges() {
            prop_assert!(position[source] < position[target]);
        }
    }

    #[test]
    fn test_reduction_preserves_reachability(edges in dag_edges(16, 60)) {
        let graph: DirectedGraph<u8> = edges.into_iter().collect();
        let mut reduced = graph.clone();
        reduced.remove_transitives().unwrap();

        prop_assert_eq!(reduced.node_count(), graph.node_count());
        prop_assert_eq!(reachability(&reduced), reachability(&graph));

        // Every surviving edge is the only path between its endpoints.
        for (source, target) in reduced.edges() {
            let mut without = reduced.clone();
            without.remove_edge(source, target);
            prop_assert!(!without.reaches(source, target));
        }

        let once = reduced.clone();
        reduced.remove_transitives().unwrap();
        prop_assert_eq!(reduced, once);
    }

    #[test]
    fn test_layering_respects_width_and_edges(edges in dag_edges(24, 80), width in 1usize..5) {
        let mut graph: DirectedGraph<u8> = edges.into_iter().collect();
        graph.add_node(200);

        let mut sorter = CoffmanGrahamSorter::new(width).unwrap();
        let layers = sorter.sort(&graph).unwrap().to_vec();

        let placed: usize = layers.iter().map(Vec::len).sum();
        prop_assert_eq!(placed, graph.node_count());
        for layer in &layers {
            prop_assert!(!layer.is_empty());
            prop_assert!(layer.len() <= width);
        }
        for (source, target) in graph.edges() {
            prop_assert!(sorter.level_of(source).unwrap() < sorter.level_of(target).unwrap());
        }

        let deepest = layers.len() - 1;
        prop_assert_eq!(sorter.max_level(), Some(deepest));
        prop_assert_eq!(graph.coffman_graham_sort(width).unwrap(), layers);
    }

    #[test]
    fn test_incremental_layering_is_stable(
        first in dag_edges(12, 30),
        second in dag_edges(24, 40),
        width in 1usize..4
    ) {
        let mut graph: DirectedGraph<u8> = first.into_iter().collect();
        let mut sorter = CoffmanGrahamSorter::incremental(width).unwrap();
        sorter.sort(&graph).unwrap();
        let before = sorter.levels().clone();

        graph.extend(second);
        sorter.sort(&graph).unwrap();

        for (node, level) in &before {
            prop_assert_eq!(sorter.level_of(node), Some(*level));
        }
        for node in graph.nodes() {
            prop_assert!(sorter.level_of(node).is_some());
        }
        for layer in sorter.layers() {
            prop_assert!(layer.len() <= width);
        }
    }

    #[test]
    fn test_back_edge_is_always_detected(edges in dag_edges(16, 40), pick in any::<prop::sample::Index>()) {
        prop_assume!(!edges.is_empty());
        let (source, target) = edges[pick.index(edges.len())];

        let mut graph: DirectedGraph<u8> = edges.into_iter().collect();
        graph.add_edge(target, source);

        prop_assert_eq!(graph.dfs_sort(), Err(Error::CyclicGraph));
        prop_assert_eq!(graph.coffman_graham_sort(2), Err(Error::CyclicGraph));

        let cycle = find_cycle(&graph).unwrap();
        prop_assert_eq!(cycle.first(), cycle.last());
        for pair in cycle.windows(2) {
            prop_assert!(graph.edge_exists(&pair[0], &pair[1]));
        }
    }

    #[test]
    fn test_event_graph_swaps_edges(edges in dag_edges(16, 40)) {
        let mut events = EventGraph::new();
        for (parent, child) in &edges {
            events.add_edge(*parent, *child);
        }

        for (parent, child) in &edges {
            prop_assert!(events.edge_exists(parent, child));
            prop_assert!(events.as_directed().edge_exists(child, parent));
        }
        prop_assert_eq!(events.as_directed().edge_count(), events.edge_count());
    }
}
