//! Run statistics collection and reporting.
//!
//! This module tracks what happened during one evaluation of a trace. It provides:
//! 1. **Result:** Total cycles and derived IPC.
//! 2. **Graph shape:** Instruction, edge, source and sink counts, serial and critical-path time.
//! 3. **Occupancy:** Fetches, peak issue-window and execution-unit usage.
//! 4. **Stalls:** Node-cycles lost to unready producers or busy units, and cycles in which
//!    fetch was blocked by a full window.
//!
//! `SimStats` serializes to JSON and renders as a sectioned text report via `Display`.

use std::fmt;
use std::time::Instant;

use serde::Serialize;

use crate::config::IssueModel;
use crate::core::graph::DependencyGraph;

/// Which algorithm produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    /// Unconstrained machine: critical-path evaluation.
    #[default]
    CriticalPath,
    /// Cycle simulation with the windowed issue model.
    Windowed,
    /// Cycle simulation with the direct issue model.
    Direct,
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CriticalPath => "critical_path",
            Self::Windowed => "windowed",
            Self::Direct => "direct",
        };
        f.write_str(name)
    }
}

impl From<IssueModel> for RunMode {
    fn from(model: IssueModel) -> Self {
        match model {
            IssueModel::Windowed => Self::Windowed,
            IssueModel::Direct => Self::Direct,
        }
    }
}

/// Statistics for a single run.
#[derive(Clone, Debug, Serialize)]
pub struct SimStats {
    #[serde(skip)]
    start_time: Instant,
    /// Algorithm that produced `cycles`.
    pub mode: RunMode,
    /// The result: cycles until every instruction completed.
    pub cycles: u64,

    /// Number of instructions in the trace.
    pub instructions: u64,
    /// Number of producer -> consumer edges.
    pub edges: u64,
    /// Instructions with no producers.
    pub sources: u64,
    /// Instructions with no consumers.
    pub sinks: u64,
    /// Sum of all latencies (fully serial execution time).
    pub total_latency: u64,
    /// Longest latency-weighted dependency chain (unconstrained lower bound).
    pub critical_path: u64,

    /// Instructions moved into the issue window (or started, for the direct model).
    pub fetches: u64,
    /// Largest issue-window occupancy observed after a fetch stage.
    pub peak_window: u64,
    /// Largest number of simultaneously busy execution units.
    pub peak_busy_units: u64,

    /// Node-cycles spent fetched but waiting on an incomplete producer.
    pub stalls_data: u64,
    /// Node-cycles spent fetched and ready but without a free execution unit.
    pub stalls_units: u64,
    /// Cycles that ended with unfetched instructions left behind a full window.
    pub fetch_blocked_cycles: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            mode: RunMode::default(),
            cycles: 0,
            instructions: 0,
            edges: 0,
            sources: 0,
            sinks: 0,
            total_latency: 0,
            critical_path: 0,
            fetches: 0,
            peak_window: 0,
            peak_busy_units: 0,
            stalls_data: 0,
            stalls_units: 0,
            fetch_blocked_cycles: 0,
        }
    }
}

impl SimStats {
    /// Creates stats pre-filled with the shape of `graph`.
    pub fn for_graph(graph: &DependencyGraph, mode: RunMode) -> Self {
        Self {
            mode,
            instructions: graph.len() as u64,
            edges: graph.edge_count() as u64,
            sources: graph.sources().count() as u64,
            sinks: graph.sinks().count() as u64,
            total_latency: graph.total_latency(),
            ..Self::default()
        }
    }

    /// Instructions per cycle; 0 when no cycles elapsed.
    pub fn ipc(&self) -> f64 {
        if self.cycles == 0 {
            0.0
        } else {
            self.instructions as f64 / self.cycles as f64
        }
    }

    /// Speedup over fully serial execution; 0 when no cycles elapsed.
    pub fn speedup(&self) -> f64 {
        if self.cycles == 0 {
            0.0
        } else {
            self.total_latency as f64 / self.cycles as f64
        }
    }

    /// Records the issue-window occupancy after a fetch stage.
    #[inline]
    pub fn observe_window(&mut self, occupancy: usize) {
        self.peak_window = self.peak_window.max(occupancy as u64);
    }

    /// Records the number of busy execution units after dispatch.
    #[inline]
    pub fn observe_units(&mut self, busy: usize) {
        self.peak_busy_units = self.peak_busy_units.max(busy as u64);
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let seconds = self.start_time.elapsed().as_secs_f64();
        writeln!(f, "==========================================================")?;
        writeln!(f, "ILP SCHEDULING STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "host_seconds             {seconds:.4} s")?;
        writeln!(f, "mode                     {}", self.mode)?;
        writeln!(f, "sim_cycles               {}", self.cycles)?;
        writeln!(f, "sim_insts                {}", self.instructions)?;
        writeln!(f, "sim_ipc                  {:.4}", self.ipc())?;
        writeln!(f, "speedup_vs_serial        {:.4}", self.speedup())?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "DEPENDENCY GRAPH")?;
        writeln!(f, "  graph.edges            {}", self.edges)?;
        writeln!(f, "  graph.sources          {}", self.sources)?;
        writeln!(f, "  graph.sinks            {}", self.sinks)?;
        writeln!(f, "  graph.serial_cycles    {}", self.total_latency)?;
        writeln!(f, "  graph.critical_path    {}", self.critical_path)?;
        if self.mode != RunMode::CriticalPath {
            let cyc = self.cycles.max(1) as f64;
            writeln!(f, "----------------------------------------------------------")?;
            writeln!(f, "OCCUPANCY")?;
            writeln!(f, "  fetches                {}", self.fetches)?;
            writeln!(f, "  window.peak            {}", self.peak_window)?;
            writeln!(f, "  units.peak             {}", self.peak_busy_units)?;
            writeln!(f, "----------------------------------------------------------")?;
            writeln!(f, "STALLS")?;
            writeln!(f, "  stalls.data            {} node-cycles", self.stalls_data)?;
            writeln!(f, "  stalls.units           {} node-cycles", self.stalls_units)?;
            writeln!(
                f,
                "  fetch.blocked          {} ({:.2}%)",
                self.fetch_blocked_cycles,
                (self.fetch_blocked_cycles as f64 / cyc) * 100.0
            )?;
        }
        write!(f, "==========================================================")
    }
}
