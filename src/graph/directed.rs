//! Core directed graph implementation.
//!
//! This module provides [`DirectedGraph`], the graph type every ordering algorithm in this
//! crate operates on. It composes a [`NodeSet`] (vertex membership) with an [`EdgeIndex`]
//! (bidirectional adjacency), keyed directly by the caller's [`Node`] values.
//!
//! Edges imply membership: adding an edge between nodes that are not yet present adds them.
//! Removing an edge never removes its endpoints.

use std::collections::HashSet;

use tracing::debug;

use crate::{
    graph::{
        algorithms::{self, CoffmanGrahamSorter, DfsSorter},
        edge::{EdgeIndex, Neighbors},
        nodes::NodeSet,
        Node,
    },
    Result,
};

/// A directed graph over opaque node keys.
///
/// `DirectedGraph` stores the relation `edges ⊆ N × N` together with the set of nodes it
/// spans. It supports:
///
/// - Idempotent edge insertion and removal
/// - O(1) amortized successor and predecessor lookup
/// - Deep cloning with no shared storage between original and copy
/// - Depth-first topological sorting, transitive reduction and Coffman-Graham layering
///
/// Self-loops are accepted; they make the graph cyclic, so every ordering algorithm rejects
/// it with [`Error::CyclicGraph`](crate::Error::CyclicGraph).
///
/// # Thread Safety
///
/// `DirectedGraph<N>` is [`Send`] and [`Sync`] when `N` is. Mutation goes through `&mut self`,
/// so exclusive access during a mutation or sort is enforced by the borrow checker; the graph
/// performs no internal locking.
///
/// # Examples
///
/// ## Building and Querying
///
/// ```rust
/// use graff::DirectedGraph;
///
/// let mut graph = DirectedGraph::new();
/// graph.add_edge("A", "B");
/// graph.add_edge("B", "C");
/// graph.add_edge("A", "C");
///
/// assert_eq!(graph.node_count(), 3);
/// assert!(graph.edge_exists(&"A", &"C"));
/// assert_eq!(graph.incoming_edges(&"C").count(), 2);
/// ```
///
/// ## Ordering
///
/// ```rust
/// use graff::DirectedGraph;
///
/// let mut graph = DirectedGraph::new();
/// graph.add_edge("A", "B");
/// graph.add_edge("B", "C");
/// graph.add_edge("A", "C");
///
/// graph.remove_transitives()?;
/// assert!(!graph.edge_exists(&"A", &"C"));
///
/// assert_eq!(graph.dfs_sort()?, vec!["A", "B", "C"]);
/// assert_eq!(graph.coffman_graham_sort(2)?, vec![vec!["A"], vec!["B"], vec!["C"]]);
/// # Ok::<(), graff::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectedGraph<N: Node> {
    /// Vertex membership
    nodes: NodeSet<N>,
    /// Outgoing and incoming adjacency
    edges: EdgeIndex<N>,
}

impl<N: Node> Default for DirectedGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Node> DirectedGraph<N> {
    /// Creates a new empty directed graph.
    #[must_use]
    pub fn new() -> Self {
        DirectedGraph {
            nodes: NodeSet::new(),
            edges: EdgeIndex::new(),
        }
    }

    /// Creates a new empty directed graph with room for `node_capacity` nodes.
    #[must_use]
    pub fn with_capacity(node_capacity: usize) -> Self {
        DirectedGraph {
            nodes: NodeSet::with_capacity(node_capacity),
            edges: EdgeIndex::with_capacity(node_capacity),
        }
    }

    /// Adds an isolated node, returning `true` if it was not already present.
    ///
    /// Nodes are also added implicitly by [`add_edge`](Self::add_edge); this method is only
    /// needed for nodes that have no edges (yet).
    pub fn add_node(&mut self, node: N) -> bool {
        self.nodes.insert(node)
    }

    /// Adds the directed edge `source -> target`.
    ///
    /// Both endpoints are inserted into the node set if absent. Adding an edge that already
    /// exists has no effect.
    ///
    /// # Returns
    ///
    /// `true` if the edge is new, `false` if it was already present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use graff::DirectedGraph;
    ///
    /// let mut graph = DirectedGraph::new();
    /// assert!(graph.add_edge(1, 2));
    /// assert!(!graph.add_edge(1, 2));
    ///
    /// assert_eq!(graph.node_count(), 2);
    /// assert_eq!(graph.edge_count(), 1);
    /// ```
    pub fn add_edge(&mut self, source: N, target: N) -> bool {
        self.nodes.insert(source.clone());
        self.nodes.insert(target.clone());
        self.edges.insert(source, target)
    }

    /// Removes the directed edge `source -> target`.
    ///
    /// Removing an edge that does not exist is a no-op. The endpoints stay in the graph.
    ///
    /// # Returns
    ///
    /// `true` if an edge was removed, `false` otherwise.
    pub fn remove_edge(&mut self, source: &N, target: &N) -> bool {
        self.edges.remove(source, target)
    }

    /// Returns `true` if the directed edge `source -> target` exists.
    #[must_use]
    pub fn edge_exists(&self, source: &N, target: &N) -> bool {
        self.edges.contains(source, target)
    }

    /// Returns the nodes reachable from `node` through a single outgoing edge.
    ///
    /// Yields nothing if `node` has no outgoing edges or is not in the graph.
    pub fn outgoing_edges(&self, node: &N) -> Neighbors<'_, N> {
        self.edges.outgoing(node)
    }

    /// Returns the nodes with a single edge into `node`.
    ///
    /// Yields nothing if `node` has no incoming edges or is not in the graph.
    pub fn incoming_edges(&self, node: &N) -> Neighbors<'_, N> {
        self.edges.incoming(node)
    }

    /// Returns an iterator over all nodes.
    ///
    /// The order is unspecified; the current implementation yields nodes in the order they
    /// first entered the graph.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &N> + '_ {
        self.nodes.iter()
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if `node` is part of the graph.
    #[must_use]
    pub fn contains_node(&self, node: &N) -> bool {
        self.nodes.contains(node)
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns an iterator over all edges as `(source, target)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N)> + '_ {
        self.edges.iter()
    }

    /// Returns `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the number of edges leaving `node`.
    #[must_use]
    pub fn out_degree(&self, node: &N) -> usize {
        self.edges.out_degree(node)
    }

    /// Returns the number of edges entering `node`.
    #[must_use]
    pub fn in_degree(&self, node: &N) -> usize {
        self.edges.in_degree(node)
    }

    /// Returns the nodes without incoming edges.
    pub fn entry_nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.nodes.iter().filter(|node| self.in_degree(node) == 0)
    }

    /// Returns the nodes without outgoing edges.
    pub fn exit_nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.nodes.iter().filter(|node| self.out_degree(node) == 0)
    }

    /// Returns the transpose of this graph: same nodes, every edge reversed.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let mut reversed = DirectedGraph::with_capacity(self.node_count());
        for node in self.nodes.iter() {
            reversed.add_node(node.clone());
        }
        for (source, target) in self.edges() {
            reversed.add_edge(target.clone(), source.clone());
        }
        reversed
    }

    /// Returns `true` if a path of one or more edges leads from `from` to `to`.
    ///
    /// A node only reaches itself when it lies on a cycle.
    #[must_use]
    pub fn reaches(&self, from: &N, to: &N) -> bool {
        let mut visited: HashSet<&N> = HashSet::new();
        let mut stack: Vec<&N> = self.outgoing_edges(from).collect();

        while let Some(node) = stack.pop() {
            if node == to {
                return true;
            }
            if visited.insert(node) {
                stack.extend(self.outgoing_edges(node));
            }
        }

        false
    }

    /// Returns the nodes in topological order using depth-first search.
    ///
    /// For every edge `(u, v)`, `u` precedes `v` in the result. See [`DfsSorter`] for the
    /// algorithm.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CyclicGraph`](crate::Error::CyclicGraph) if the graph contains a cycle.
    pub fn dfs_sort(&self) -> Result<Vec<N>> {
        DfsSorter::new(self).sort()
    }

    /// Removes every edge that is implied by a longer path.
    ///
    /// After reduction, an edge `(u, v)` survives only if no other path leads from `u` to `v`.
    /// Reachability between any two nodes is unchanged, and reducing an already reduced graph
    /// is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CyclicGraph`](crate::Error::CyclicGraph) if the graph contains a cycle.
    /// The graph is left untouched in that case.
    pub fn remove_transitives(&mut self) -> Result<()> {
        let transitive = algorithms::transitive_edges(self)?;
        for (source, target) in &transitive {
            self.edges.remove(source, target);
        }

        debug!(
            nodes = self.node_count(),
            removed = transitive.len(),
            remaining = self.edge_count(),
            "removed transitive edges"
        );
        Ok(())
    }

    /// Sorts the nodes into layers of at most `width` nodes using the Coffman-Graham method.
    ///
    /// This is the one-shot form: nothing is retained between calls. Use
    /// [`CoffmanGrahamSorter::incremental`] to keep earlier assignments stable while the graph
    /// grows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWidth`](crate::Error::InvalidWidth) if `width` is zero and
    /// [`Error::CyclicGraph`](crate::Error::CyclicGraph) if the graph contains a cycle.
    pub fn coffman_graham_sort(&self, width: usize) -> Result<Vec<Vec<N>>> {
        let mut sorter = CoffmanGrahamSorter::new(width)?;
        sorter.sort(self)?;
        Ok(sorter.into_layers())
    }

    /// Returns a cycle as a closed path (first node equals last node), if one exists.
    #[must_use]
    pub fn find_cycle(&self) -> Option<Vec<N>> {
        algorithms::find_cycle(self)
    }

    /// Returns `true` if the graph contains at least one cycle.
    #[must_use]
    pub fn has_cycle(&self) -> bool {
        algorithms::has_cycle(self)
    }
}

impl<N: Node> AsRef<DirectedGraph<N>> for DirectedGraph<N> {
    fn as_ref(&self) -> &DirectedGraph<N> {
        self
    }
}

impl<N: Node> FromIterator<(N, N)> for DirectedGraph<N> {
    fn from_iter<I: IntoIterator<Item = (N, N)>>(iter: I) -> Self {
        let mut graph = DirectedGraph::new();
        graph.extend(iter);
        graph
    }
}

impl<N: Node> Extend<(N, N)> for DirectedGraph<N> {
    fn extend<I: IntoIterator<Item = (N, N)>>(&mut self, iter: I) {
        for (source, target) in iter {
            self.add_edge(source, target);
        }
    }
}
