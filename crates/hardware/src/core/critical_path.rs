//! Critical Path Evaluator.
//!
//! Computes the completion time of a trace on a machine with unlimited fetch width and
//! unlimited execution units: the longest latency-weighted path in the dependency graph.
//!
//! A node's path value is its own latency plus the largest path value among its
//! consumers. Values are memoized in `InstructionNode::best_path_from_here`, so a node
//! reachable along many paths is evaluated once. The depth-first walk runs on an
//! explicit stack and therefore has no recursion limit.

use tracing::{debug, info};

use crate::core::graph::{DependencyGraph, NodeId};

/// Returns the critical-path length of `graph` in cycles (0 for an empty graph).
///
/// Fills `best_path_from_here` for every node reachable from a graph source, which in a
/// DAG is every node.
///
/// # Examples
///
/// ```
/// use ilpsim_core::core::{critical_path, DependencyGraph};
/// use ilpsim_core::isa::decode_trace;
///
/// let trace = decode_trace("1=0,0:2\n2=1,1:3\n3=2,2:4\n").unwrap();
/// let mut graph = DependencyGraph::build(&trace).unwrap();
/// assert_eq!(critical_path(&mut graph), 9);
/// ```
pub fn critical_path(graph: &mut DependencyGraph) -> u64 {
    let sources: Vec<NodeId> = graph.sources().map(|n| n.id).collect();
    let mut longest = 0;
    for source in sources {
        let value = best_path_from(graph, source);
        debug!(%source, value, "source evaluated");
        longest = longest.max(value);
    }
    info!(cycles = longest, "critical path");
    longest
}

/// Evaluates and memoizes the longest path starting at `start`.
fn best_path_from(graph: &mut DependencyGraph, start: NodeId) -> u64 {
    if let Some(value) = graph.node(start).best_path_from_here {
        return value;
    }

    // (node, consumers already pushed)
    let mut stack = vec![(start, false)];
    while let Some((id, expanded)) = stack.pop() {
        if graph.node(id).best_path_from_here.is_some() {
            continue;
        }
        if expanded {
            let node = graph.node(id);
            let downstream = node
                .consumers
                .iter()
                .filter_map(|c| graph.node(*c).best_path_from_here)
                .max()
                .unwrap_or(0);
            let value = u64::from(node.latency) + downstream;
            graph.node_mut(id).best_path_from_here = Some(value);
        } else {
            stack.push((id, true));
            stack.extend(
                graph
                    .node(id)
                    .consumers
                    .iter()
                    .filter(|c| graph.node(**c).best_path_from_here.is_none())
                    .map(|c| (*c, false)),
            );
        }
    }

    graph.node(start).best_path_from_here.unwrap_or(0)
}

/// Returns one longest path, from a graph source to a graph sink.
///
/// Evaluates the graph first if needed. Ties go to the lowest trace index, so the result
/// is deterministic. Empty for an empty graph.
pub fn critical_chain(graph: &mut DependencyGraph) -> Vec<NodeId> {
    let total = critical_path(graph);
    let mut chain = Vec::new();
    if total == 0 {
        return chain;
    }

    let mut current = graph
        .sources()
        .find(|n| n.best_path_from_here == Some(total))
        .map(|n| n.id);
    while let Some(id) = current {
        chain.push(id);
        let node = graph.node(id);
        let remaining = node
            .best_path_from_here
            .unwrap_or(0)
            .saturating_sub(u64::from(node.latency));
        current = node
            .consumers
            .iter()
            .copied()
            .find(|c| graph.node(*c).best_path_from_here == Some(remaining));
    }
    chain
}
