//! Coffman-Graham layering.
//!
//! Layering partitions the nodes of a directed acyclic graph into an ordered sequence of
//! layers such that every edge points from a lower layer to a higher one and no layer holds
//! more than a configured number of nodes. It is the level-assignment step of layered
//! (Sugiyama-style) graph drawing.
//!
//! # Algorithm
//!
//! 1. Copy the graph (or its transpose, see [`Orientation`]) and remove transitive edges
//! 2. Compute a topological order of the reduced copy with [`DfsSorter`]
//! 3. For each node in that order, find the highest layer among its direct predecessors
//! 4. Place the node in the first layer after that one which still has room, appending a
//!    new layer when none does
//!
//! Nodes with equal predecessor layers are placed first-come, first-served in topological
//! order, which makes the result deterministic for a given graph construction history.
//!
//! # Incremental Layering
//!
//! With [`Retention::Persist`] the layers and level map outlive a sort. Nodes that already
//! have a layer are skipped on the next sort, so growing the graph and sorting again only
//! places the new nodes and never moves anything that was placed before. Reduction and the
//! topological order are still recomputed over the whole current graph on every call.
//!
//! # Examples
//!
//! ```rust
//! use graff::{CoffmanGrahamSorter, DirectedGraph};
//!
//! let mut graph = DirectedGraph::new();
//! graph.add_edge("A", "B");
//! graph.add_edge("B", "C");
//!
//! let mut sorter = CoffmanGrahamSorter::incremental(2)?;
//! sorter.sort(&graph)?;
//! assert_eq!(sorter.level_of(&"C"), Some(2));
//!
//! graph.add_edge("A", "D");
//! sorter.sort(&graph)?;
//! assert_eq!(sorter.level_of(&"C"), Some(2));
//! assert_eq!(sorter.level_of(&"D"), Some(1));
//! assert_eq!(sorter.max_level(), Some(2));
//! # Ok::<(), graff::Error>(())
//! ```

mod config;

pub use config::{LayeringConfig, Orientation, Retention};

use std::collections::HashMap;

use tracing::{debug, trace, warn};

use crate::{
    graph::{algorithms::DfsSorter, DirectedGraph, Node},
    Error, Result,
};

/// Width-bounded layer assignment using the Coffman-Graham method.
///
/// The sorter owns its layering state and borrows a graph only for the duration of each
/// [`sort`](Self::sort), so the caller remains free to mutate the graph between incremental
/// sorts.
///
/// # Invariants
///
/// After a successful one-shot sort:
///
/// - Every node of the graph appears in exactly one layer
/// - No layer holds more than `width` nodes
/// - For every edge `(u, v)` of the layered graph, `level_of(u) < level_of(v)`
///
/// With [`Retention::Persist`], the first two still hold and every node keeps the layer it
/// received in the sort that first placed it.
#[derive(Debug, Clone)]
pub struct CoffmanGrahamSorter<N: Node> {
    config: LayeringConfig,
    /// Member lists, indexed by level
    layers: Vec<Vec<N>>,
    /// Level of every placed node
    levels: HashMap<N, usize>,
    /// Highest level assigned so far
    max_level: Option<usize>,
}

impl<N: Node> CoffmanGrahamSorter<N> {
    /// Creates a one-shot sorter that starts from empty layers on every sort.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWidth`] if `width` is zero.
    pub fn new(width: usize) -> Result<Self> {
        Self::with_config(LayeringConfig::new(width))
    }

    /// Creates an incremental sorter that keeps earlier assignments between sorts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWidth`] if `width` is zero.
    pub fn incremental(width: usize) -> Result<Self> {
        Self::with_config(LayeringConfig::incremental(width))
    }

    /// Creates a sorter from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWidth`] if the configured width is zero.
    pub fn with_config(config: LayeringConfig) -> Result<Self> {
        config.validate()?;
        Ok(CoffmanGrahamSorter {
            config,
            layers: Vec::new(),
            levels: HashMap::new(),
            max_level: None,
        })
    }

    /// Returns the configuration this sorter was created with.
    #[must_use]
    pub fn config(&self) -> &LayeringConfig {
        &self.config
    }

    /// Returns the maximum number of nodes per layer.
    #[must_use]
    pub fn width(&self) -> usize {
        self.config.width
    }

    /// Assigns every not yet placed node of `graph` to a layer.
    ///
    /// In one-shot mode the previous result is discarded first. In incremental mode nodes
    /// placed by an earlier sort keep their layer, including nodes that have since left the
    /// graph.
    ///
    /// # Arguments
    ///
    /// * `graph` - The graph to layer; anything that can be viewed as a [`DirectedGraph`],
    ///   including an [`EventGraph`](crate::EventGraph)
    ///
    /// # Returns
    ///
    /// The complete layering, indexed by level.
    ///
    /// # Errors
    ///
    /// - [`Error::CyclicGraph`] if the graph contains a cycle
    /// - [`Error::DependencyOrder`] if a node is reached before one of its predecessors was
    ///   placed, which indicates a broken topological order
    ///
    /// On error, assignments made earlier in the same call are kept in incremental mode;
    /// nodes placed before the failure stay placed.
    pub fn sort<G: AsRef<DirectedGraph<N>>>(&mut self, graph: &G) -> Result<&[Vec<N>]> {
        let graph = graph.as_ref();
        if self.config.retention == Retention::Reset {
            self.reset();
        }

        let mut reduced = match self.config.orientation {
            Orientation::AsGiven => graph.clone(),
            Orientation::Reversed => graph.reversed(),
        };
        reduced.remove_transitives()?;
        let order = DfsSorter::new(&reduced).sort_refs()?;

        let mut placed = 0usize;
        for node in order {
            if self.levels.contains_key(node) {
                continue;
            }

            let dependant_level = self.dependant_level(&reduced, node)?;
            let level = self.place(node.clone(), dependant_level);
            trace!(level, ?dependant_level, "placed node");
            placed += 1;
        }

        debug!(
            placed,
            nodes = graph.node_count(),
            layers = self.layers.len(),
            width = self.config.width,
            retention = %self.config.retention,
            orientation = %self.config.orientation,
            "coffman-graham layering complete"
        );
        Ok(&self.layers)
    }

    /// Highest level among the direct predecessors of `node`, `None` for a source.
    fn dependant_level(&self, reduced: &DirectedGraph<N>, node: &N) -> Result<Option<usize>> {
        let mut dependant_level = None;
        for dependant in reduced.incoming_edges(node) {
            let Some(&level) = self.levels.get(dependant) else {
                warn!("predecessor reached before it was placed");
                return Err(Error::DependencyOrder);
            };
            dependant_level = dependant_level.max(Some(level));
        }
        Ok(dependant_level)
    }

    /// Puts `node` in the first layer after `dependant_level` with room left.
    fn place(&mut self, node: N, dependant_level: Option<usize>) -> usize {
        let first = dependant_level.map_or(0, |level| level + 1);
        let width = self.config.width;

        let available = (first..self.layers.len()).find(|&level| self.layers[level].len() < width);
        let level = match available {
            Some(level) => level,
            None => {
                self.layers.push(Vec::with_capacity(1));
                self.layers.len() - 1
            }
        };

        self.layers[level].push(node.clone());
        self.levels.insert(node, level);
        self.max_level = self.max_level.max(Some(level));
        level
    }

    /// Returns the current layering, indexed by level.
    #[must_use]
    pub fn layers(&self) -> &[Vec<N>] {
        &self.layers
    }

    /// Returns the level assigned to `node`, if it has been placed.
    #[must_use]
    pub fn level_of(&self, node: &N) -> Option<usize> {
        self.levels.get(node).copied()
    }

    /// Returns the level of every placed node.
    #[must_use]
    pub fn levels(&self) -> &HashMap<N, usize> {
        &self.levels
    }

    /// Returns the highest level assigned so far, `None` before anything was placed.
    ///
    /// This is the maximum over all placed nodes, not the level of the most recently placed
    /// one.
    #[must_use]
    pub fn max_level(&self) -> Option<usize> {
        self.max_level
    }

    /// Discards all assignments.
    pub fn reset(&mut self) {
        self.layers.clear();
        self.levels.clear();
        self.max_level = None;
    }

    /// Consumes the sorter, returning its layering.
    #[must_use]
    pub fn into_layers(self) -> Vec<Vec<N>> {
        self.layers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_chain(len: u32) -> DirectedGraph<u32> {
        (0..len.saturating_sub(1)).map(|i| (i, i + 1)).collect()
    }

    fn assert_valid_layering<N: Node + std::fmt::Debug>(
        graph: &DirectedGraph<N>,
        sorter: &CoffmanGrahamSorter<N>,
    ) {
        let placed: usize = sorter.layers().iter().map(Vec::len).sum();
        assert_eq!(placed, graph.node_count());

        for layer in sorter.layers() {
            assert!(!layer.is_empty());
            assert!(layer.len() <= sorter.width());
        }
        for (source, target) in graph.edges() {
            assert!(
                sorter.level_of(source) < sorter.level_of(target),
                "{source:?} must be layered before {target:?}"
            );
        }
    }

    #[test]
    fn test_zero_width() {
        assert_eq!(
            CoffmanGrahamSorter::<u32>::new(0).unwrap_err(),
            Error::InvalidWidth(0)
        );
        assert_eq!(
            CoffmanGrahamSorter::<u32>::incremental(0).unwrap_err(),
            Error::InvalidWidth(0)
        );
    }

    #[test]
    fn test_empty_graph() {
        let graph: DirectedGraph<u32> = DirectedGraph::new();
        let mut sorter = CoffmanGrahamSorter::new(3).unwrap();

        assert!(sorter.sort(&graph).unwrap().is_empty());
        assert_eq!(sorter.max_level(), None);
    }

    #[test]
    fn test_chain_uses_one_layer_per_node() {
        let graph = create_chain(5);
        let mut sorter = CoffmanGrahamSorter::new(3).unwrap();
        let layers = sorter.sort(&graph).unwrap().to_vec();

        assert_eq!(layers, vec![vec![0], vec![1], vec![2], vec![3], vec![4]]);
        assert_eq!(sorter.max_level(), Some(4));
    }

    #[test]
    fn test_width_bounds_independent_nodes() {
        let mut graph: DirectedGraph<u32> = DirectedGraph::new();
        for node in 0..7 {
            graph.add_node(node);
        }

        let mut sorter = CoffmanGrahamSorter::new(3).unwrap();
        sorter.sort(&graph).unwrap();

        let sizes: Vec<usize> = sorter.layers().iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![3, 3, 1]);
        assert_valid_layering(&graph, &sorter);
    }

    #[test]
    fn test_transitive_edge_does_not_push_node_down() {
        // A -> B -> C plus A -> C, and a free node D
        let mut graph = DirectedGraph::new();
        graph.add_edge("A", "B");
        graph.add_edge("B", "C");
        graph.add_edge("A", "C");
        graph.add_node("D");

        let mut sorter = CoffmanGrahamSorter::new(2).unwrap();
        sorter.sort(&graph).unwrap();

        assert_eq!(sorter.level_of(&"A"), Some(0));
        assert_eq!(sorter.level_of(&"B"), Some(1));
        assert_eq!(sorter.level_of(&"C"), Some(2));
        assert_eq!(sorter.level_of(&"D"), Some(0));
        assert_valid_layering(&graph, &sorter);
    }

    #[test]
    fn test_width_one_is_a_total_order() {
        let graph: DirectedGraph<char> = [('A', 'B'), ('A', 'C'), ('B', 'D'), ('C', 'D')]
            .into_iter()
            .collect();
        let layers = graph.coffman_graham_sort(1).unwrap();

        assert_eq!(layers.len(), 4);
        assert!(layers.iter().all(|layer| layer.len() == 1));
        assert_eq!(layers[0], vec!['A']);
        assert_eq!(layers[3], vec!['D']);
    }

    #[test]
    fn test_node_fills_earliest_layer_with_room() {
        // Two sources feeding one sink each, width 1 forces the second source down.
        let graph: DirectedGraph<&str> = [("S1", "T1"), ("S2", "T2")].into_iter().collect();
        let mut sorter = CoffmanGrahamSorter::new(1).unwrap();
        sorter.sort(&graph).unwrap();

        assert_valid_layering(&graph, &sorter);
        assert_eq!(sorter.layers().len(), 4);
    }

    #[test]
    fn test_cycle_is_rejected() {
        let graph: DirectedGraph<&str> = [("A", "B"), ("B", "A")].into_iter().collect();
        let mut sorter = CoffmanGrahamSorter::new(2).unwrap();

        assert_eq!(sorter.sort(&graph).unwrap_err(), Error::CyclicGraph);
        assert!(sorter.layers().is_empty());
    }

    #[test]
    fn test_one_shot_sort_is_repeatable() {
        let mut graph = create_chain(3);
        let mut sorter = CoffmanGrahamSorter::new(2).unwrap();

        let first = sorter.sort(&graph).unwrap().to_vec();
        let second = sorter.sort(&graph).unwrap().to_vec();
        assert_eq!(first, second);

        graph.remove_edge(&1, &2);
        sorter.sort(&graph).unwrap();
        assert_eq!(sorter.level_of(&2), Some(0));
        assert_valid_layering(&graph, &sorter);
    }

    #[test]
    fn test_incremental_keeps_prior_levels() {
        let mut graph = create_chain(3);
        let mut sorter = CoffmanGrahamSorter::incremental(2).unwrap();
        sorter.sort(&graph).unwrap();

        let before: HashMap<u32, usize> = sorter.levels().clone();

        graph.add_edge(0, 10);
        graph.add_edge(10, 11);
        graph.add_edge(2, 12);
        sorter.sort(&graph).unwrap();

        for (node, level) in &before {
            assert_eq!(sorter.level_of(node), Some(*level));
        }
        assert_eq!(sorter.level_of(&10), Some(1));
        assert_eq!(sorter.level_of(&11), Some(2));
        assert_eq!(sorter.level_of(&12), Some(3));
        assert_valid_layering(&graph, &sorter);
    }

    #[test]
    fn test_incremental_ignores_new_shortcut() {
        let mut graph: DirectedGraph<&str> = [("A", "B")].into_iter().collect();
        graph.add_node("C");

        let mut sorter = CoffmanGrahamSorter::incremental(3).unwrap();
        sorter.sort(&graph).unwrap();
        assert_eq!(sorter.level_of(&"C"), Some(0));

        // C would now belong after B, but it was already placed.
        graph.add_edge("B", "C");
        sorter.sort(&graph).unwrap();
        assert_eq!(sorter.level_of(&"C"), Some(0));
    }

    #[test]
    fn test_max_level_is_true_maximum() {
        // 100 comes last in topological order but lands in layer 0.
        let mut graph = DirectedGraph::new();
        graph.add_node(100);
        graph.extend((0..3).map(|i| (i, i + 1)));

        let mut sorter = CoffmanGrahamSorter::new(2).unwrap();
        sorter.sort(&graph).unwrap();
        assert_eq!(sorter.level_of(&100), Some(0));
        assert_eq!(sorter.max_level(), Some(3));

        let mut graph: DirectedGraph<u32> = create_chain(4);
        let mut sorter = CoffmanGrahamSorter::incremental(2).unwrap();
        sorter.sort(&graph).unwrap();
        assert_eq!(sorter.max_level(), Some(3));

        graph.add_node(100);
        sorter.sort(&graph).unwrap();
        assert_eq!(sorter.level_of(&100), Some(0));
        assert_eq!(sorter.max_level(), Some(3));
    }

    #[test]
    fn test_unplaced_predecessor_is_dependency_order_error() {
        let mut reduced = DirectedGraph::new();
        reduced.add_edge("P", "X");
        reduced.add_node("S");

        let sorter = CoffmanGrahamSorter::new(2).unwrap();
        assert_eq!(
            sorter.dependant_level(&reduced, &"X"),
            Err(Error::DependencyOrder)
        );
        assert_eq!(sorter.dependant_level(&reduced, &"S"), Ok(None));
        assert!(sorter.layers().is_empty());
        assert!(sorter.levels().is_empty());
        assert_eq!(sorter.max_level(), None);
    }

    #[test]
    fn test_dependant_level_is_highest_predecessor() {
        let mut reduced = DirectedGraph::new();
        reduced.add_edge("A", "C");
        reduced.add_edge("B", "C");

        let mut sorter = CoffmanGrahamSorter::new(1).unwrap();
        sorter.place("A", None);
        sorter.place("B", None);

        assert_eq!(sorter.level_of(&"B"), Some(1));
        assert_eq!(sorter.dependant_level(&reduced, &"C"), Ok(Some(1)));
    }

    #[test]
    fn test_reset() {
        let graph = create_chain(3);
        let mut sorter = CoffmanGrahamSorter::incremental(2).unwrap();
        sorter.sort(&graph).unwrap();

        sorter.reset();
        assert!(sorter.layers().is_empty());
        assert!(sorter.levels().is_empty());
        assert_eq!(sorter.max_level(), None);
    }

    #[test]
    fn test_reversed_orientation_puts_sinks_first() {
        let graph: DirectedGraph<&str> = [("A", "B"), ("A", "C")].into_iter().collect();
        let config = LayeringConfig::new(2).with_orientation(Orientation::Reversed);
        let mut sorter = CoffmanGrahamSorter::with_config(config).unwrap();
        sorter.sort(&graph).unwrap();

        assert_eq!(sorter.level_of(&"B"), Some(0));
        assert_eq!(sorter.level_of(&"C"), Some(0));
        assert_eq!(sorter.level_of(&"A"), Some(1));
        assert_eq!(sorter.config().orientation, Orientation::Reversed);
    }

    #[test]
    fn test_into_layers() {
        let graph = create_chain(2);
        let mut sorter = CoffmanGrahamSorter::new(4).unwrap();
        sorter.sort(&graph).unwrap();
        assert_eq!(sorter.into_layers(), vec![vec![0], vec![1]]);
    }
}
