//! Node membership for directed graphs.
//!
//! [`NodeSet`] is the vertex half of a [`DirectedGraph`](crate::DirectedGraph): a set of
//! [`Node`] keys without duplicates. It carries no edges and knows nothing about adjacency.

use indexmap::IndexSet;

use crate::graph::Node;

/// An unordered set of graph nodes.
///
/// Membership is the only semantic property. Iteration happens to follow insertion order,
/// which keeps algorithm results reproducible for a fixed build sequence, but callers must not
/// rely on any particular order for correctness.
///
/// # Examples
///
/// ```rust
/// use graff::NodeSet;
///
/// let mut nodes = NodeSet::new();
/// assert!(nodes.insert("a"));
/// assert!(!nodes.insert("a"));
/// assert_eq!(nodes.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSet<N: Node> {
    nodes: IndexSet<N>,
}

impl<N: Node> Default for NodeSet<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Node> NodeSet<N> {
    /// Creates an empty node set.
    #[must_use]
    pub fn new() -> Self {
        NodeSet {
            nodes: IndexSet::new(),
        }
    }

    /// Creates an empty node set with room for `capacity` nodes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        NodeSet {
            nodes: IndexSet::with_capacity(capacity),
        }
    }

    /// Adds a node, returning `true` if it was not already present.
    pub fn insert(&mut self, node: N) -> bool {
        self.nodes.insert(node)
    }

    /// Returns `true` if the node is a member of the set.
    #[must_use]
    pub fn contains(&self, node: &N) -> bool {
        self.nodes.contains(node)
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the set holds no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns an iterator over the nodes.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &N> + '_ {
        self.nodes.iter()
    }
}

impl<N: Node> FromIterator<N> for NodeSet<N> {
    fn from_iter<I: IntoIterator<Item = N>>(iter: I) -> Self {
        NodeSet {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl<N: Node> Extend<N> for NodeSet<N> {
    fn extend<I: IntoIterator<Item = N>>(&mut self, iter: I) {
        self.nodes.extend(iter);
    }
}
