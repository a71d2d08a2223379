use ilpsim_core::config::{Bound, Config, IssueModel};
use ilpsim_core::core::{DependencyGraph, Scheduler, critical_path};

use crate::common::builder::TraceBuilder;

/// Installs a test-friendly log subscriber once; later calls are no-ops.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("ilpsim_core=debug")
        .try_init();
}

/// Shorthand for a bound: 0 means unbounded.
pub fn bound(n: usize) -> Bound {
    if n == 0 {
        Bound::Unbounded
    } else {
        Bound::bounded(n, "test bound").unwrap()
    }
}

/// Machine config from shorthand bounds (0 = unbounded).
pub fn machine(fetch: usize, units: usize, model: IssueModel) -> Config {
    Config {
        fetch_width: bound(fetch),
        execution_units: bound(units),
        model,
    }
}

/// Critical path of a trace.
pub fn critical(trace: &TraceBuilder) -> u64 {
    critical_path(&mut trace.graph())
}

/// Windowed scheduler cycle count (0 = unbounded).
pub fn windowed(trace: &TraceBuilder, fetch: usize, units: usize) -> u64 {
    schedule(&mut trace.graph(), machine(fetch, units, IssueModel::Windowed))
}

/// Direct-issue scheduler cycle count (0 = unbounded).
pub fn direct(trace: &TraceBuilder, fetch: usize, units: usize) -> u64 {
    schedule(&mut trace.graph(), machine(fetch, units, IssueModel::Direct))
}

/// Schedules an existing graph.
pub fn schedule(graph: &mut DependencyGraph, config: Config) -> u64 {
    Scheduler::new(graph, config).run().cycles
}
