//! Depth-first topological sorting.
//!
//! [`DfsSorter`] orders the nodes of a [`DirectedGraph`] so that every edge points forward:
//! for each edge `(u, v)`, `u` appears before `v`. The order is the reversed post-order of a
//! depth-first traversal started from every node in turn.
//!
//! Unlike Kahn's algorithm, the depth-first formulation detects a cycle the moment it closes,
//! which is when the traversal reaches a node still on its own stack.
//!
//! # Complexity
//!
//! - Time: O(V + E)
//! - Space: O(V) for the markers and the explicit traversal stack
//!
//! The traversal is iterative, so arbitrarily deep graphs cannot overflow the call stack.

use std::collections::HashSet;

use tracing::debug;

use crate::{
    graph::{edge::Neighbors, DirectedGraph, Node},
    Error, Result,
};

/// Depth-first topological sorter bound to a graph.
///
/// The sorter keeps three pieces of state: the nodes currently on the traversal stack
/// (`visiting`), the nodes whose traversal has finished (`discovered`), and the post-order
/// emitted so far. All of it is reset at the start of every [`sort`](Self::sort), so a sorter
/// can be reused and a failed sort leaves nothing behind.
///
/// # Examples
///
/// ```rust
/// use graff::{DfsSorter, DirectedGraph, Error};
///
/// let mut graph = DirectedGraph::new();
/// graph.add_edge("compile", "link");
/// graph.add_edge("fetch", "compile");
///
/// let mut sorter = DfsSorter::new(&graph);
/// assert_eq!(sorter.sort()?, vec!["fetch", "compile", "link"]);
///
/// let mut cyclic = DirectedGraph::new();
/// cyclic.add_edge(1, 2);
/// cyclic.add_edge(2, 1);
/// assert_eq!(DfsSorter::new(&cyclic).sort(), Err(Error::CyclicGraph));
/// # Ok::<(), graff::Error>(())
/// ```
#[derive(Debug)]
pub struct DfsSorter<'g, N: Node> {
    graph: &'g DirectedGraph<N>,
    /// Post-order of finished nodes
    sorted: Vec<&'g N>,
    /// Nodes on the current traversal stack
    visiting: HashSet<&'g N>,
    /// Nodes whose traversal has finished
    discovered: HashSet<&'g N>,
}

impl<'g, N: Node> DfsSorter<'g, N> {
    /// Creates a sorter for `graph`.
    #[must_use]
    pub fn new(graph: &'g DirectedGraph<N>) -> Self {
        DfsSorter {
            graph,
            sorted: Vec::new(),
            visiting: HashSet::new(),
            discovered: HashSet::new(),
        }
    }

    /// Returns the nodes of the graph in topological order.
    ///
    /// Every node of the graph appears exactly once, isolated nodes included. Among the valid
    /// orders, the one returned is deterministic for a given graph construction history.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CyclicGraph`] if the traversal closes a cycle, self-loops included.
    pub fn sort(&mut self) -> Result<Vec<N>> {
        Ok(self.sort_refs()?.into_iter().cloned().collect())
    }

    /// Same as [`sort`](Self::sort), borrowing the nodes from the graph instead of cloning.
    pub(crate) fn sort_refs(&mut self) -> Result<Vec<&'g N>> {
        self.init();

        let graph = self.graph;
        for node in graph.nodes() {
            if let Err(error) = self.visit(node) {
                debug!(nodes = graph.node_count(), "depth-first sort found a cycle");
                return Err(error);
            }
        }

        let mut sorted = std::mem::take(&mut self.sorted);
        sorted.reverse();

        debug!(
            nodes = sorted.len(),
            edges = graph.edge_count(),
            "depth-first sort complete"
        );
        Ok(sorted)
    }

    fn init(&mut self) {
        let capacity = self.graph.node_count();
        self.sorted = Vec::with_capacity(capacity);
        self.visiting = HashSet::with_capacity(capacity);
        self.discovered = HashSet::with_capacity(capacity);
    }

    /// Traverses everything reachable from `root`, appending finished nodes in post-order.
    fn visit(&mut self, root: &'g N) -> Result<()> {
        if self.discovered.contains(root) {
            return Ok(());
        }

        self.visiting.insert(root);
        let mut stack: Vec<(&'g N, Neighbors<'g, N>)> =
            vec![(root, self.graph.outgoing_edges(root))];

        while let Some((node, successors)) = stack.last_mut() {
            if let Some(next) = successors.next() {
                if self.discovered.contains(next) {
                    continue;
                }
                if !self.visiting.insert(next) {
                    return Err(Error::CyclicGraph);
                }
                stack.push((next, self.graph.outgoing_edges(next)));
            } else {
                let node = *node;
                stack.pop();
                self.visiting.remove(node);
                self.discovered.insert(node);
                self.sorted.push(node);
            }
        }

        Ok(())
    }
}
