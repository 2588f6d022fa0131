#![no_main]

use graff::{CoffmanGrahamSorter, DirectedGraph, Error};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&width, pairs)) = data.split_first() else {
        return;
    };
    let width = usize::from(width % 8) + 1;

    let graph: DirectedGraph<u8> = pairs
        .chunks_exact(2)
        .map(|pair| (pair[0] % 32, pair[1] % 32))
        .collect();

    match graph.dfs_sort() {
        Ok(order) => {
            assert_eq!(order.len(), graph.node_count());
            assert!(graph.find_cycle().is_none());

            let mut sorter = CoffmanGrahamSorter::new(width).unwrap();
            sorter.sort(&graph).unwrap();
            for layer in sorter.layers() {
                assert!(layer.len() <= width);
            }
            for (source, target) in graph.edges() {
                assert!(sorter.level_of(source) < sorter.level_of(target));
            }
        }
        Err(error) => {
            assert_eq!(error, Error::CyclicGraph);
            let cycle = graph.find_cycle().unwrap();
            assert_eq!(cycle.first(), cycle.last());
            assert_eq!(graph.coffman_graham_sort(width), Err(Error::CyclicGraph));
        }
    }
});
