//! Directed graph infrastructure for dependency and event ordering.
//!
//! # Architecture
//!
//! - **Core Types**: [`DirectedGraph`] composes a [`NodeSet`] with an [`EdgeIndex`]; any
//!   `Clone + Eq + Hash` value is a [`Node`]
//! - **Algorithms**: depth-first topological sorting, cycle search, transitive reduction and
//!   Coffman-Graham layering, see [`algorithms`]
//! - **Event View**: [`EventGraph`] records happens-after relations on top of the same graph
//!
//! # Design Principles
//!
//! ## Nodes Are Keys
//!
//! The graph stores no payloads. Callers keep their data in their own maps and use the graph
//! only for structure and ordering.
//!
//! ## Deterministic Iteration
//!
//! Node and adjacency sets iterate in insertion order, so sorts and layerings are reproducible
//! for a given construction history.
//!
//! # Thread Safety
//!
//! All types in this module implement [`Send`] and [`Sync`] when their node type does. No type
//! performs internal locking.

mod directed;
mod edge;
mod event;
mod node;
mod nodes;

pub mod algorithms;

pub use directed::DirectedGraph;
pub use edge::{EdgeIndex, Neighbors};
pub use event::EventGraph;
pub use node::Node;
pub use nodes::NodeSet;
