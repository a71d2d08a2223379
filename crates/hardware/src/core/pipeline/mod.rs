//! Resource-constrained cycle scheduler.
//!
//! This module simulates execution of a dependency graph one cycle at a time under a
//! fetch-width bound and an execution-unit bound. It includes the following components:
//! 1. **State:** `PipelineState`, the issue window, busy units and cycle counter.
//! 2. **Stages:** Fetch, dispatch, direct issue and execute, as free functions.
//! 3. **Scheduler:** `Scheduler`, which runs the stages in order until every node retires.
//!
//! Node lifecycle is `Waiting -> Fetched -> Executing -> Completed` in the windowed model
//! and `Waiting -> Executing -> Completed` in the direct model. Trace order is the
//! tie-break everywhere, so runs are fully deterministic.

/// Pipeline stage implementations (fetch, dispatch, issue, execute).
pub mod stages;

use tracing::{debug, info};

use crate::config::{Bound, Config, IssueModel};
use crate::core::graph::{DependencyGraph, NodeId};
use crate::stats::{RunMode, SimStats};

/// Mutable machine state threaded through the stages.
#[derive(Debug)]
pub struct PipelineState<'g> {
    /// The graph being scheduled; only node run state is mutated.
    pub graph: &'g mut DependencyGraph,
    /// Current cycle, 1-based once the first cycle has started.
    pub cycle: u64,
    /// Lowest trace index that may still be `Waiting`.
    pub next_fetch: usize,
    /// Fetched, undispatched nodes in trace order.
    pub window: Vec<NodeId>,
    /// Nodes occupying an execution unit.
    pub executing: Vec<NodeId>,
    /// Number of completed nodes.
    pub completed: usize,
    /// Counters for this run.
    pub stats: SimStats,
}

impl<'g> PipelineState<'g> {
    fn new(graph: &'g mut DependencyGraph, mode: RunMode) -> Self {
        graph.reset();
        let stats = SimStats::for_graph(graph, mode);
        Self {
            graph,
            cycle: 0,
            next_fetch: 0,
            window: Vec::new(),
            executing: Vec::new(),
            completed: 0,
            stats,
        }
    }

    /// Returns true once every node has completed.
    pub fn is_done(&self) -> bool {
        self.completed == self.graph.len()
    }
}

/// Cycle-stepped scheduler over a dependency graph.
///
/// Holds the graph exclusively for the duration of a run. Constructing a scheduler
/// resets the graph's run state, so scheduling the same graph twice gives the same result.
///
/// # Examples
///
/// ```
/// use ilpsim_core::config::{Bound, Config};
/// use ilpsim_core::core::{DependencyGraph, Scheduler};
/// use ilpsim_core::isa::decode_trace;
///
/// // Two independent 2-cycle instructions sharing one execution unit.
/// let trace = decode_trace("1=0,0:2\n2=0,0:2\n").unwrap();
/// let mut graph = DependencyGraph::build(&trace).unwrap();
/// let units = Bound::bounded(1, "execution units").unwrap();
/// let cycles = Scheduler::new(&mut graph, Config::new(Bound::Unbounded, units)).run().cycles;
/// assert_eq!(cycles, 4);
/// ```
#[derive(Debug)]
pub struct Scheduler<'g> {
    state: PipelineState<'g>,
    fetch_width: Bound,
    execution_units: Bound,
    model: IssueModel,
}

impl<'g> Scheduler<'g> {
    /// Creates a scheduler for `graph` under the bounds and issue model in `config`.
    pub fn new(graph: &'g mut DependencyGraph, config: Config) -> Self {
        Self {
            state: PipelineState::new(graph, config.model.into()),
            fetch_width: config.fetch_width,
            execution_units: config.execution_units,
            model: config.model,
        }
    }

    /// Read-only view of the machine state.
    pub fn state(&self) -> &PipelineState<'g> {
        &self.state
    }

    /// Returns true once every node has completed.
    pub fn is_done(&self) -> bool {
        self.state.is_done()
    }

    /// Advances the machine by one cycle: fetch, dispatch (or direct issue), execute.
    pub fn tick(&mut self) {
        let state = &mut self.state;
        state.cycle += 1;

        let (fetched, dispatched) = match self.model {
            IssueModel::Windowed => {
                let fetched = stages::fetch_stage(state, self.fetch_width);
                (fetched, stages::dispatch_stage(state, self.execution_units))
            }
            IssueModel::Direct => {
                let started =
                    stages::direct_issue_stage(state, self.fetch_width, self.execution_units);
                (started, started)
            }
        };
        let retired = stages::execute_stage(state);

        debug!(
            cycle = state.cycle,
            fetched,
            dispatched,
            retired,
            window = state.window.len(),
            busy = state.executing.len(),
            "cycle"
        );
    }

    /// Runs until every node has completed and returns the run statistics.
    ///
    /// `SimStats::cycles` is the number of cycles simulated; 0 for an empty graph.
    pub fn run(mut self) -> SimStats {
        while !self.is_done() {
            self.tick();
        }

        let mut stats = self.state.stats;
        stats.cycles = self.state.cycle;
        info!(
            cycles = stats.cycles,
            model = %self.model,
            fetch_width = %self.fetch_width,
            execution_units = %self.execution_units,
            "schedule complete"
        );
        stats
    }
}
