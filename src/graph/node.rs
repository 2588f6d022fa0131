//! Node identity for directed graphs.
//!
//! Graphs in this crate do not own node payloads: a node *is* its key. Any value that can be
//! cloned, compared for equality and hashed can act as a node, whether that is a `&str`, an
//! integer, or a domain identifier such as an event hash.

use std::hash::Hash;

/// Marker trait for values usable as graph vertices.
///
/// `Node` is implemented automatically for every `Clone + Eq + Hash` type. Graph correctness
/// depends only on identity comparison; the internal structure of a node is never inspected.
///
/// Sort results and layers hand out owned nodes. Keys should be cheap to clone: integers,
/// `&str`, `Arc<T>` or small ids.
///
/// # Examples
///
/// ```rust
/// use graff::{DirectedGraph, Node};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug)]
/// struct EventId(u64);
///
/// fn assert_node<N: Node>() {}
/// assert_node::<EventId>();
///
/// let mut graph = DirectedGraph::new();
/// graph.add_edge(EventId(1), EventId(2));
/// assert!(graph.edge_exists(&EventId(1), &EventId(2)));
/// ```
pub trait Node: Clone + Eq + Hash {}

impl<T: Clone + Eq + Hash> Node for T {}
