//! Ordering algorithms over [`DirectedGraph`](crate::DirectedGraph).
//!
//! # Available Algorithms
//!
//! ## Topological Ordering
//!
//! - [`DfsSorter`] - Depth-first topological sort with cycle detection
//!
//! ## Cycle Detection
//!
//! - [`has_cycle`] - Check if a graph contains any cycles
//! - [`find_cycle`] - Find a cycle if one exists
//!
//! ## Reduction
//!
//! - [`transitive_edges`] - Edges implied by longer paths
//!
//! ## Layering
//!
//! - [`CoffmanGrahamSorter`] - Width-bounded layer assignment, one-shot or incremental
//! - [`LayeringConfig`] - Width, retention and orientation of a layering
//!
//! # Algorithm Selection
//!
//! | Algorithm | Time Complexity | Use Case |
//! |-----------|-----------------|----------|
//! | DFS sort | O(V + E) | Dependency ordering |
//! | Cycle search | O(V + E) | Diagnosing a rejected graph |
//! | Transitive reduction | O(V * (V + E)) | Removing redundant precedence |
//! | Coffman-Graham | O(V * (V + E)) | Layered drawing |
//!
//! Layering is dominated by the reduction it runs on a copy of the graph.

mod cycles;
mod dfs;
mod layering;
mod reduction;

pub use cycles::{find_cycle, has_cycle};
pub use dfs::DfsSorter;
pub use layering::{CoffmanGrahamSorter, LayeringConfig, Orientation, Retention};
pub use reduction::transitive_edges;
