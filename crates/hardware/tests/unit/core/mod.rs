//! Dependency analysis and scheduling tests.

/// Critical-path evaluation on hand-built and trace-built graphs.
pub mod critical_path;



/// Randomized properties over generated traces.
pub mod properties;
