//! Fetch Stage: fill the issue window in trace order.
//!
//! Fetch is strictly in order: the lowest-index `Waiting` node is always the next one
//! fetched, so a single cursor replaces a scan of the graph.

use tracing::trace;

use crate::config::Bound;
use crate::core::graph::{NodeId, NodeStatus};
use crate::core::pipeline::PipelineState;

/// Executes the fetch stage.
///
/// Moves `Waiting` nodes into the window while the fetch width admits another occupant.
///
/// # Returns
///
/// The number of nodes fetched this cycle.
pub fn fetch_stage(state: &mut PipelineState<'_>, fetch_width: Bound) -> usize {
    let mut fetched = 0;
    while state.next_fetch < state.graph.len() && fetch_width.admits(state.window.len()) {
        let id = NodeId(state.next_fetch);
        state.graph.node_mut(id).status = NodeStatus::Fetched;
        state.window.push(id);
        state.next_fetch += 1;
        fetched += 1;
        trace!(cycle = state.cycle, node = %id, "IF");
    }

    state.stats.fetches += fetched as u64;
    state.stats.observe_window(state.window.len());
    if state.next_fetch < state.graph.len() {
        state.stats.fetch_blocked_cycles += 1;
    }
    fetched
}
