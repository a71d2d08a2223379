//! Instruction-level parallelism model.
//!
//! This crate evaluates how fast a trace of register-operating instructions can complete
//! on a simplified in-order processor:
//! 1. **Trace:** Decoding of `D=S1,S2:L` instruction records.
//! 2. **Dependencies:** A DAG of read-after-write hazards discovered by register renaming.
//! 3. **Critical path:** Completion time with unlimited fetch width and execution units.
//! 4. **Scheduling:** Cycle-by-cycle simulation under finite fetch width and unit count.
//! 5. **Simulation:** Loaders, configuration, and statistics collection.

/// Common types (register ids, errors).
pub mod common;
/// Machine configuration (resource bounds, issue model).
pub mod config;
/// Dependency graph, critical-path evaluator and cycle scheduler.
pub mod core;
/// Trace instruction records and decoding.
pub mod isa;
/// Trace/config loading and the top-level simulator.
pub mod sim;
/// Run statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Dependency graph built from a trace.
pub use crate::core::DependencyGraph;
/// Top-level simulator; construct with `Simulator::new` or `Simulator::from_file`.
pub use crate::sim::Simulator;
