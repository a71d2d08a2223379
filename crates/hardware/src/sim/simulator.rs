//! Simulator: owns the dependency graph and the machine configuration side-by-side.
//!
//! Chooses the algorithm from the configuration: with both resources unbounded the
//! result is the critical path; otherwise the cycle scheduler runs.

use std::path::Path;

use tracing::{Level, debug, enabled};

use crate::common::error::SimError;
use crate::config::Config;
use crate::core::critical_path::{critical_chain, critical_path};
use crate::core::graph::DependencyGraph;
use crate::core::pipeline::Scheduler;
use crate::isa::Instruction;
use crate::sim::loader;
use crate::stats::{RunMode, SimStats};

/// Top-level simulator: dependency graph + machine configuration.
#[derive(Debug, Clone)]
pub struct Simulator {
    graph: DependencyGraph,
    config: Config,
}

impl Simulator {
    /// Builds the dependency graph for `trace` and pairs it with `config`.
    pub fn new(trace: &[Instruction], config: Config) -> Result<Self, SimError> {
        Ok(Self {
            graph: DependencyGraph::build(trace)?,
            config,
        })
    }

    /// Loads a trace file and builds a simulator for it.
    pub fn from_file(path: impl AsRef<Path>, config: Config) -> Result<Self, SimError> {
        let trace = loader::load_trace(path)?;
        Self::new(&trace, config)
    }

    /// The dependency graph.
    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    /// The machine configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The algorithm `run` will use.
    pub fn mode(&self) -> RunMode {
        if self.config.is_unconstrained() {
            RunMode::CriticalPath
        } else {
            self.config.model.into()
        }
    }

    /// Evaluates the trace and returns the statistics; `SimStats::cycles` is the result.
    ///
    /// Run state is reset first, so repeated calls return identical results.
    pub fn run(&mut self) -> SimStats {
        self.graph.reset();
        let critical = critical_path(&mut self.graph);
        if enabled!(Level::DEBUG) {
            debug!(chain = ?critical_chain(&mut self.graph), "critical chain");
        }

        let mut stats = match self.mode() {
            RunMode::CriticalPath => {
                let mut stats = SimStats::for_graph(&self.graph, RunMode::CriticalPath);
                stats.cycles = critical;
                stats
            }
            RunMode::Windowed | RunMode::Direct => {
                Scheduler::new(&mut self.graph, self.config).run()
            }
        };
        stats.critical_path = critical;
        stats
    }
}
