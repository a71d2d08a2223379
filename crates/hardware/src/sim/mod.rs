//! Simulation entry points.
//!
//! Provides loaders for trace and configuration files and the `Simulator`, which ties a
//! dependency graph to a machine configuration and picks the algorithm to run.

/// Trace and JSON config file loading.
pub mod loader;

/// Graph-plus-config simulator facade.
pub mod simulator;

pub use simulator::Simulator;
