// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # graff
//!
//! Directed graphs and the ordering algorithms needed to draw them as layers: depth-first
//! topological sorting with cycle detection, transitive reduction, and Coffman-Graham
//! layering with a bounded layer width. Layering can run one-shot or incrementally, so a
//! growing graph (an event log, a dependency set) can be re-layered without moving anything
//! that was already placed.
//!
//! ## Features
//!
//! - **Opaque nodes** - any `Clone + Eq + Hash` value is a node; the graph stores no payloads
//! - **Bidirectional adjacency** - successor and predecessor lookups are O(1) amortized
//! - **Deterministic results** - iteration follows insertion order, so sorts are reproducible
//! - **Iterative traversals** - no recursion, deep graphs cannot overflow the stack
//! - **Incremental layering** - stable layer assignments across repeated sorts
//! - **Event view** - [`EventGraph`] records happens-after relations with swapped arguments
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! graff = "0.1"
//! ```
//!
//! ```rust
//! use graff::prelude::*;
//!
//! let mut graph = DirectedGraph::new();
//! graph.add_edge("A", "B");
//! graph.add_edge("B", "C");
//! graph.add_edge("A", "C");
//! graph.add_node("D");
//!
//! // A -> C is implied by A -> B -> C
//! let mut reduced = graph.clone();
//! reduced.remove_transitives()?;
//! assert!(!reduced.edge_exists(&"A", &"C"));
//!
//! let order = graph.dfs_sort()?;
//! assert_eq!(order.len(), 4);
//!
//! let layers = graph.coffman_graham_sort(2)?;
//! assert_eq!(layers, vec![vec!["D", "A"], vec!["B"], vec!["C"]]);
//! # Ok::<(), graff::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! Graph mutation and queries are infallible. The ordering algorithms return [`Result`]:
//! a cycle fails every one of them with [`Error::CyclicGraph`], and layering additionally
//! rejects a zero width with [`Error::InvalidWidth`].
//!
//! ## Logging
//!
//! Algorithms emit [`tracing`](https://docs.rs/tracing) events: `debug` summaries per sort or
//! reduction, `trace` per placed node, and `warn` on an internal ordering fault. Install any
//! subscriber to see them; without one they cost nothing.
//!
//! ## Testing
//!
//! ```bash
//! cargo test
//! cargo bench --bench layering
//! cargo +nightly fuzz run layering
//! ```

pub(crate) mod error;

/// Directed graph types, the event view, and the ordering algorithms.
pub mod graph;

/// Convenient re-exports of the most commonly used types.
///
/// # Example
///
/// ```rust
/// use graff::prelude::*;
///
/// let mut events: EventGraph<u64> = EventGraph::new();
/// events.add_edge(1, 2);
///
/// let mut sorter = CoffmanGrahamSorter::incremental(4)?;
/// sorter.sort(&events)?;
/// assert_eq!(sorter.max_level(), Some(1));
/// # Ok::<(), graff::Error>(())
/// ```
pub mod prelude;

/// `graff` Result type
///
/// A type alias for `std::result::Result<T, Error>` where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `graff` Error type
///
/// The single error type of this crate. Only the ordering algorithms produce it.
pub use error::Error;

pub use graph::{
    algorithms, algorithms::CoffmanGrahamSorter, algorithms::DfsSorter,
    algorithms::LayeringConfig, algorithms::Orientation, algorithms::Retention, DirectedGraph,
    EdgeIndex, EventGraph, Neighbors, Node, NodeSet,
};
