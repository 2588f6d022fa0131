//! Transitive reduction of directed acyclic graphs.
//!
//! An edge `(u, v)` is *transitive* when `v` is also reachable from `u` through some other
//! successor of `u`. Removing all transitive edges yields the unique minimal graph with the
//! same reachability relation, which is what layering operates on.
//!
//! # Algorithm
//!
//! 1. Compute a topological order with [`DfsSorter`]
//! 2. For each node `u` with two or more successors, visit the successors by ascending
//!    topological position
//! 3. A successor that is already marked is reachable through an earlier sibling, so its edge
//!    is transitive
//! 4. Otherwise mark everything reachable from that successor with an explicit stack, stopping
//!    past the position of the last sibling
//!
//! Visiting successors in topological order guarantees that any sibling which reaches `v` is
//! processed before `v` itself. One marker set is cleared and reused for every node, so memory
//! stays O(V + E) however deep the graph is.

use std::collections::{HashMap, HashSet};

use crate::{
    graph::{algorithms::DfsSorter, DirectedGraph, Node},
    Result,
};

/// Returns the edges of `graph` that are implied by longer paths.
///
/// Removing exactly these edges produces the transitive reduction. The graph itself is not
/// modified; see [`DirectedGraph::remove_transitives`] for the in-place form.
///
/// # Errors
///
/// Returns [`Error::CyclicGraph`](crate::Error::CyclicGraph) if the graph contains a cycle.
///
/// # Examples
///
/// ```rust
/// use graff::{algorithms::transitive_edges, DirectedGraph};
///
/// let graph: DirectedGraph<&str> = [("A", "B"), ("B", "C"), ("A", "C")].into_iter().collect();
/// assert_eq!(transitive_edges(&graph)?, vec![("A", "C")]);
/// # Ok::<(), graff::Error>(())
/// ```
pub fn transitive_edges<N: Node>(graph: &DirectedGraph<N>) -> Result<Vec<(N, N)>> {
    let order = DfsSorter::new(graph).sort_refs()?;
    let position: HashMap<&N, usize> = order
        .iter()
        .enumerate()
        .map(|(index, node)| (*node, index))
        .collect();
    let position_of = |node: &N| position.get(node).copied().unwrap_or(usize::MAX);

    let mut transitive = Vec::new();
    let mut marked: HashSet<&N> = HashSet::new();
    let mut stack: Vec<&N> = Vec::new();

    for &node in order.iter().rev() {
        if graph.out_degree(node) < 2 {
            continue;
        }

        let mut successors: Vec<&N> = graph.outgoing_edges(node).collect();
        successors.sort_by_key(|successor| position_of(*successor));
        let limit = successors.last().map_or(0, |last| position_of(*last));

        marked.clear();
        let last = successors.len() - 1;
        for (index, &successor) in successors.iter().enumerate() {
            if marked.contains(successor) {
                transitive.push((node.clone(), successor.clone()));
                continue;
            }
            if index == last {
                break;
            }

            marked.insert(successor);
            stack.push(successor);
            while let Some(current) = stack.pop() {
                for next in graph.outgoing_edges(current) {
                    if position_of(next) <= limit && marked.insert(next) {
                        stack.push(next);
                    }
                }
            }
        }
    }

    Ok(transitive)
}
