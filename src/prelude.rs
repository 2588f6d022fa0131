//! # graff Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the graff library. Import this module to get quick access to the graph types and
//! sorters.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all graff operations
pub use crate::Error;

/// The result type used throughout graff
pub use crate::Result;

// ================================================================================================
// Graphs
// ================================================================================================

/// Directed graph, its event view and the node identity trait
pub use crate::{DirectedGraph, EventGraph, Node};

// ================================================================================================
// Ordering
// ================================================================================================

/// Topological sorting and layering
pub use crate::{CoffmanGrahamSorter, DfsSorter};

/// Layering configuration
pub use crate::{LayeringConfig, Orientation, Retention};
