//! Simulation entry point tests.
