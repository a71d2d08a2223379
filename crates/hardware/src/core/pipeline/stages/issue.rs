//! Direct Issue Stage: the two-phase model with no issue window.
//!
//! Ready nodes go straight from `Waiting` to `Executing`. The walk runs in trace order
//! and may skip over nodes whose producers are still in flight. The fetch width limits
//! how many nodes start per cycle; the walk stops as soon as that limit or the unit
//! limit is reached.

use tracing::trace;

use crate::config::Bound;
use crate::core::graph::{NodeId, NodeStatus};
use crate::core::pipeline::PipelineState;

/// Executes the direct issue stage.
///
/// # Returns
///
/// The number of nodes started this cycle.
pub fn direct_issue_stage(
    state: &mut PipelineState<'_>,
    fetch_width: Bound,
    execution_units: Bound,
) -> usize {
    // Everything below the cursor has already started.
    while state.next_fetch < state.graph.len()
        && state.graph.node(NodeId(state.next_fetch)).status != NodeStatus::Waiting
    {
        state.next_fetch += 1;
    }

    let mut started = 0;
    if !execution_units.admits(state.executing.len()) {
        state.stats.fetch_blocked_cycles += 1;
        return started;
    }

    for idx in state.next_fetch..state.graph.len() {
        let id = NodeId(idx);
        if state.graph.node(id).status == NodeStatus::Waiting {
            if state.graph.producers_completed(id) {
                state.graph.node_mut(id).status = NodeStatus::Executing;
                state.executing.push(id);
                started += 1;
                trace!(cycle = state.cycle, node = %id, "IS");
            } else {
                state.stats.stalls_data += 1;
            }
        }
        if fetch_width.is_reached(started) || execution_units.is_reached(state.executing.len()) {
            break;
        }
    }

    state.stats.fetches += started as u64;
    state.stats.observe_units(state.executing.len());
    started
}
