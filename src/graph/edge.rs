//! Bidirectional edge index for directed graphs.
//!
//! This module provides [`EdgeIndex`], the adjacency half of a
//! [`DirectedGraph`](crate::DirectedGraph). Every edge `(source, target)` is recorded twice,
//! once in the outgoing map of `source` and once in the incoming map of `target`, so that both
//! successor and predecessor lookups are O(1) amortized.
//!
//! Edges carry no data. Inserting an edge that already exists has no effect, and removing an
//! edge that does not exist is a no-op.

use indexmap::{set, IndexMap, IndexSet};

use crate::graph::Node;

/// Iterator over the one-hop neighbors of a node.
///
/// Returned by [`EdgeIndex::outgoing`] and [`EdgeIndex::incoming`] (and the corresponding
/// [`DirectedGraph`](crate::DirectedGraph) methods). Yields nothing for nodes without edges in
/// the requested direction, including nodes that are not part of the graph at all.
#[derive(Debug, Clone)]
pub struct Neighbors<'a, N> {
    inner: Option<set::Iter<'a, N>>,
}

impl<'a, N> Neighbors<'a, N> {
    fn new(inner: Option<set::Iter<'a, N>>) -> Self {
        Neighbors { inner }
    }
}

impl<'a, N> Iterator for Neighbors<'a, N> {
    type Item = &'a N;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.as_mut()?.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner
            .as_ref()
            .map_or((0, Some(0)), Iterator::size_hint)
    }
}

impl<N> ExactSizeIterator for Neighbors<'_, N> {}

/// Adjacency index over ordered pairs of nodes.
///
/// `EdgeIndex` stores a relation `edges ⊆ N × N` with both directions indexed. Nodes only
/// appear as keys while they have at least one edge in that direction; an index with the same
/// set of edges always compares equal regardless of the insertion history.
///
/// # Examples
///
/// ```rust
/// use graff::EdgeIndex;
///
/// let mut edges = EdgeIndex::new();
/// assert!(edges.insert("a", "b"));
/// assert!(!edges.insert("a", "b"));
///
/// assert!(edges.contains(&"a", &"b"));
/// assert_eq!(edges.outgoing(&"a").collect::<Vec<_>>(), vec![&"b"]);
/// assert_eq!(edges.incoming(&"b").collect::<Vec<_>>(), vec![&"a"]);
///
/// assert!(edges.remove(&"a", &"b"));
/// assert!(edges.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeIndex<N: Node> {
    /// Targets per source (successors)
    outgoing: IndexMap<N, IndexSet<N>>,
    /// Sources per target (predecessors)
    incoming: IndexMap<N, IndexSet<N>>,
    /// Number of distinct edges
    len: usize,
}

impl<N: Node> Default for EdgeIndex<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Node> EdgeIndex<N> {
    /// Creates an empty edge index.
    #[must_use]
    pub fn new() -> Self {
        EdgeIndex {
            outgoing: IndexMap::new(),
            incoming: IndexMap::new(),
            len: 0,
        }
    }

    /// Creates an empty edge index sized for roughly `node_capacity` endpoints.
    #[must_use]
    pub fn with_capacity(node_capacity: usize) -> Self {
        EdgeIndex {
            outgoing: IndexMap::with_capacity(node_capacity),
            incoming: IndexMap::with_capacity(node_capacity),
            len: 0,
        }
    }

    /// Records the edge `source -> target`.
    ///
    /// Returns `true` if the edge is new, `false` if it was already present.
    pub fn insert(&mut self, source: N, target: N) -> bool {
        let inserted = self
            .outgoing
            .entry(source.clone())
            .or_default()
            .insert(target.clone());

        if inserted {
            self.incoming.entry(target).or_default().insert(source);
            self.len += 1;
        }

        inserted
    }

    /// Removes the edge `source -> target`.
    ///
    /// Returns `true` if an edge was removed, `false` if it did not exist.
    pub fn remove(&mut self, source: &N, target: &N) -> bool {
        let Some(targets) = self.outgoing.get_mut(source) else {
            return false;
        };
        if !targets.shift_remove(target) {
            return false;
        }
        if targets.is_empty() {
            self.outgoing.shift_remove(source);
        }

        if let Some(sources) = self.incoming.get_mut(target) {
            sources.shift_remove(source);
            if sources.is_empty() {
                self.incoming.shift_remove(target);
            }
        }

        self.len -= 1;
        true
    }

    /// Returns `true` if the edge `source -> target` exists.
    #[must_use]
    pub fn contains(&self, source: &N, target: &N) -> bool {
        self.outgoing
            .get(source)
            .is_some_and(|targets| targets.contains(target))
    }

    /// Returns the targets of all edges leaving `node`.
    pub fn outgoing(&self, node: &N) -> Neighbors<'_, N> {
        Neighbors::new(self.outgoing.get(node).map(IndexSet::iter))
    }

    /// Returns the sources of all edges entering `node`.
    pub fn incoming(&self, node: &N) -> Neighbors<'_, N> {
        Neighbors::new(self.incoming.get(node).map(IndexSet::iter))
    }

    /// Returns the number of edges leaving `node`.
    #[must_use]
    pub fn out_degree(&self, node: &N) -> usize {
        self.outgoing.get(node).map_or(0, IndexSet::len)
    }

    /// Returns the number of edges entering `node`.
    #[must_use]
    pub fn in_degree(&self, node: &N) -> usize {
        self.incoming.get(node).map_or(0, IndexSet::len)
    }

    /// Returns the number of distinct edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if there are no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns an iterator over all edges as `(source, target)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&N, &N)> + '_ {
        self.outgoing
            .iter()
            .flat_map(|(source, targets)| targets.iter().map(move |target| (source, target)))
    }
}
