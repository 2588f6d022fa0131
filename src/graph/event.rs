//! Happens-after view of a directed graph.
//!
//! Event logs are naturally recorded as "this event follows that one". [`EventGraph`] accepts
//! edges in that form and stores them reversed, so the underlying [`DirectedGraph`] holds an
//! edge `child -> parent` for every recorded `(parent, child)` pair. Layering the stored graph
//! incrementally then places the newest events first and merges further events into a stable,
//! previously rendered structure.

use crate::{
    graph::{algorithms::CoffmanGrahamSorter, DirectedGraph, Node},
    Result,
};

/// A [`DirectedGraph`] whose edge methods take their arguments in happens-after order.
///
/// `add_edge(a, b)`, `remove_edge(a, b)` and `edge_exists(a, b)` operate on the stored edge
/// `b -> a`. Every other operation behaves exactly as on the wrapped graph.
///
/// # Examples
///
/// ```rust
/// use graff::EventGraph;
///
/// let mut events = EventGraph::new();
/// events.add_edge("genesis", "e1");
/// events.add_edge("e1", "e2");
///
/// assert!(events.edge_exists(&"genesis", &"e1"));
/// assert!(events.as_directed().edge_exists(&"e1", &"genesis"));
///
/// let mut sorter = EventGraph::sorter(2)?;
/// sorter.sort(&events)?;
/// assert_eq!(sorter.level_of(&"e2"), Some(0));
/// assert_eq!(sorter.level_of(&"genesis"), Some(2));
/// # Ok::<(), graff::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventGraph<N: Node> {
    graph: DirectedGraph<N>,
}

impl<N: Node> Default for EventGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Node> EventGraph<N> {
    /// Creates a new empty event graph.
    #[must_use]
    pub fn new() -> Self {
        EventGraph {
            graph: DirectedGraph::new(),
        }
    }

    /// Creates a new empty event graph with room for `capacity` events.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        EventGraph {
            graph: DirectedGraph::with_capacity(capacity),
        }
    }

    /// Creates an incremental layering sorter for event graphs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidWidth`](crate::Error::InvalidWidth) if `width` is zero.
    pub fn sorter(width: usize) -> Result<CoffmanGrahamSorter<N>> {
        CoffmanGrahamSorter::incremental(width)
    }

    /// Records that `child` happens after `parent`; stores the edge `child -> parent`.
    ///
    /// Returns `true` if the edge is new.
    pub fn add_edge(&mut self, parent: N, child: N) -> bool {
        self.graph.add_edge(child, parent)
    }

    /// Forgets that `child` happens after `parent`; removes the stored edge `child -> parent`.
    ///
    /// Returns `true` if an edge was removed.
    pub fn remove_edge(&mut self, parent: &N, child: &N) -> bool {
        self.graph.remove_edge(child, parent)
    }

    /// Returns `true` if `child` is recorded as happening after `parent`.
    #[must_use]
    pub fn edge_exists(&self, parent: &N, child: &N) -> bool {
        self.graph.edge_exists(child, parent)
    }

    /// Adds an event without relations.
    pub fn add_event(&mut self, event: N) -> bool {
        self.graph.add_node(event)
    }

    /// Returns `true` if `event` is part of the graph.
    #[must_use]
    pub fn contains_event(&self, event: &N) -> bool {
        self.graph.contains_node(event)
    }

    /// Returns an iterator over all events.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &N> + '_ {
        self.graph.nodes()
    }

    /// Returns the number of events.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of recorded relations.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns `true` if there are no events.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Topologically sorts the stored graph, newest events first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CyclicGraph`](crate::Error::CyclicGraph) if the relations are cyclic.
    pub fn dfs_sort(&self) -> Result<Vec<N>> {
        self.graph.dfs_sort()
    }

    /// Removes relations implied by longer chains of events.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CyclicGraph`](crate::Error::CyclicGraph) if the relations are cyclic.
    pub fn remove_transitives(&mut self) -> Result<()> {
        self.graph.remove_transitives()
    }

    /// Returns the underlying graph with edges in stored (`child -> parent`) direction.
    #[must_use]
    pub fn as_directed(&self) -> &DirectedGraph<N> {
        &self.graph
    }

    /// Consumes the event graph, returning the underlying graph.
    #[must_use]
    pub fn into_inner(self) -> DirectedGraph<N> {
        self.graph
    }
}

impl<N: Node> AsRef<DirectedGraph<N>> for EventGraph<N> {
    fn as_ref(&self) -> &DirectedGraph<N> {
        &self.graph
    }
}

impl<N: Node> From<DirectedGraph<N>> for EventGraph<N> {
    /// Wraps a graph whose edges are already stored `child -> parent`.
    fn from(graph: DirectedGraph<N>) -> Self {
        EventGraph { graph }
    }
}
