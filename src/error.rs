use thiserror::Error;

/// The generic Error type, which covers every failure this library can return.
///
/// Graph mutation and queries never fail: asking about absent nodes or edges simply yields
/// empty results. Only the ordering algorithms can fail, and only for the reasons below.
///
/// # Error Categories
///
/// ## Ordering Errors
/// - [`Error::CyclicGraph`] - A topological order was requested for a graph with a cycle
/// - [`Error::DependencyOrder`] - Layering found a node whose predecessor has no layer yet
///
/// ## Configuration Errors
/// - [`Error::InvalidWidth`] - A layer width of zero was requested
///
/// # Examples
///
/// ```rust
/// use graff::{DirectedGraph, Error};
///
/// let mut graph = DirectedGraph::new();
/// graph.add_edge("a", "b");
/// graph.add_edge("b", "a");
///
/// match graph.dfs_sort() {
///     Ok(order) => println!("sorted: {:?}", order),
///     Err(Error::CyclicGraph) => println!("break the cycle and retry"),
///     Err(e) => println!("other error: {}", e),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The graph cannot be cyclic.
    ///
    /// Raised by the depth-first sorter when it reaches a node that is still on the
    /// traversal stack. Transitive reduction and both layering modes depend on a
    /// topological order, so they surface this error unchanged.
    ///
    /// Use [`DirectedGraph::find_cycle`](crate::DirectedGraph::find_cycle) to obtain the
    /// offending path.
    #[error("The graph cannot be cyclic")]
    CyclicGraph,

    /// The topological dependency order is incorrect.
    ///
    /// Raised during layering when a node is reached before one of its predecessors has
    /// been assigned a layer. A correct topological order makes this unreachable, so its
    /// occurrence points at a broken internal invariant rather than bad input.
    #[error("The topological dependency order is incorrect")]
    DependencyOrder,

    /// Layer width must be at least one.
    ///
    /// The associated value is the rejected width.
    #[error("Layer width must be at least one, got {0}")]
    InvalidWidth(usize),
}
