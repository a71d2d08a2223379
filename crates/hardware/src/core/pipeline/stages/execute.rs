//! Execute Stage: count down latencies and retire finished nodes.
//!
//! A node that entered `Executing` earlier in this same cycle is decremented too, so a
//! latency-1 node completes in the cycle it dispatches.

use tracing::trace;

use crate::core::graph::NodeStatus;
use crate::core::pipeline::PipelineState;

/// Executes the execute stage.
///
/// # Returns
///
/// The number of nodes that completed this cycle.
pub fn execute_stage(state: &mut PipelineState<'_>) -> usize {
    let cycle = state.cycle;
    let graph = &mut *state.graph;
    let before = state.executing.len();

    state.executing.retain(|&id| {
        let node = graph.node_mut(id);
        node.remaining_latency = node.remaining_latency.saturating_sub(1);
        if node.remaining_latency == 0 {
            node.status = NodeStatus::Completed;
            trace!(cycle, node = %id, "WB");
            false
        } else {
            true
        }
    });

    let retired = before - state.executing.len();
    state.completed += retired;
    retired
}
