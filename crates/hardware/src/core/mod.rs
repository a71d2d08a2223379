//! Dependency analysis and scheduling.
//!
//! This module contains the algorithmic core of the model: the dependency graph built
//! through register renaming, and the two algorithms that evaluate it.

/// Critical-path evaluation for an unconstrained machine.
pub mod critical_path;

/// Dependency graph arena, node lifecycle and construction.
pub mod graph;

/// Resource-constrained cycle scheduler (state, stages, run loop).
pub mod pipeline;

/// Scoped last-writer register renaming table.
pub mod rename;

pub use self::critical_path::{critical_chain, critical_path};
pub use self::graph::{DependencyGraph, InstructionNode, NodeId, NodeStatus};
pub use self::pipeline::Scheduler;
