//! Cycle detection for directed graphs.
//!
//! The sorters only report that a graph is cyclic. These functions locate the cycle so callers
//! can report it or decide which edge to drop before retrying.

use std::collections::HashSet;

use crate::graph::{edge::Neighbors, DirectedGraph, Node};

/// Finds a cycle anywhere in the graph.
///
/// Every node is tried as a starting point, so cycles in components that are unreachable from
/// other nodes are found as well.
///
/// # Returns
///
/// `Some(path)` where `path` is a closed walk along existing edges whose first and last
/// elements are the same node, or `None` if the graph is acyclic. A self-loop on `A` yields
/// `[A, A]`.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V)
///
/// # Examples
///
/// ```rust
/// use graff::{algorithms::find_cycle, DirectedGraph};
///
/// let graph: DirectedGraph<char> = [('A', 'B'), ('B', 'C'), ('C', 'A')].into_iter().collect();
///
/// let cycle = find_cycle(&graph).unwrap();
/// assert_eq!(cycle.first(), cycle.last());
/// assert_eq!(cycle.len(), 4);
/// ```
pub fn find_cycle<N: Node>(graph: &DirectedGraph<N>) -> Option<Vec<N>> {
    let mut discovered: HashSet<&N> = HashSet::with_capacity(graph.node_count());

    for root in graph.nodes() {
        if discovered.contains(root) {
            continue;
        }
        if let Some(cycle) = find_cycle_from(graph, root, &mut discovered) {
            return Some(cycle);
        }
    }

    None
}

/// Returns `true` if the graph contains at least one cycle.
///
/// Equivalent to `find_cycle(graph).is_some()`.
#[must_use]
pub fn has_cycle<N: Node>(graph: &DirectedGraph<N>) -> bool {
    find_cycle(graph).is_some()
}

/// Iterative search from `root`. The explicit stack doubles as the current path.
fn find_cycle_from<'g, N: Node>(
    graph: &'g DirectedGraph<N>,
    root: &'g N,
    discovered: &mut HashSet<&'g N>,
) -> Option<Vec<N>> {
    let mut on_path: HashSet<&'g N> = HashSet::new();
    on_path.insert(root);
    let mut path: Vec<(&'g N, Neighbors<'g, N>)> = vec![(root, graph.outgoing_edges(root))];

    while let Some((node, successors)) = path.last_mut() {
        if let Some(next) = successors.next() {
            if on_path.contains(next) {
                let start = path.iter().position(|(n, _)| *n == next)?;
                let mut cycle: Vec<N> = path[start..].iter().map(|(n, _)| (*n).clone()).collect();
                cycle.push(next.clone());
                return Some(cycle);
            }
            if discovered.contains(next) {
                continue;
            }
            on_path.insert(next);
            path.push((next, graph.outgoing_edges(next)));
        } else {
            let node = *node;
            path.pop();
            on_path.remove(node);
            discovered.insert(node);
        }
    }

    None
}
