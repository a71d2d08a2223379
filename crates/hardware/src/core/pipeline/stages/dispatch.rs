//! Dispatch Stage: move ready window entries onto execution units.
//!
//! Entries are examined in trace order. An entry dispatches when a unit is free and all
//! of its producers have completed; otherwise it stays in the window. A blocked entry
//! does not block younger ones.

use tracing::trace;

use crate::config::Bound;
use crate::core::graph::NodeStatus;
use crate::core::pipeline::PipelineState;

/// Executes the dispatch stage.
///
/// Sees the window as left by this cycle's fetch stage.
///
/// # Returns
///
/// The number of nodes dispatched this cycle.
pub fn dispatch_stage(state: &mut PipelineState<'_>, execution_units: Bound) -> usize {
    let mut dispatched = 0;
    let mut held = Vec::with_capacity(state.window.len());

    for id in std::mem::take(&mut state.window) {
        if !state.graph.producers_completed(id) {
            state.stats.stalls_data += 1;
            held.push(id);
        } else if !execution_units.admits(state.executing.len()) {
            state.stats.stalls_units += 1;
            held.push(id);
        } else {
            state.graph.node_mut(id).status = NodeStatus::Executing;
            state.executing.push(id);
            dispatched += 1;
            trace!(cycle = state.cycle, node = %id, "DS");
        }
    }

    state.window = held;
    state.stats.observe_units(state.executing.len());
    dispatched
}
