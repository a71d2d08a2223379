//! Common types shared across the model.
//!
//! This module provides the building blocks used by every other component:
//! 1. **Registers:** The validated `RegId` type and the architectural register count.
//! 2. **Error Handling:** Configuration, parse, structural and run-level error types.

/// Error types for configuration, parsing, graph construction and I/O.
pub mod error;

/// Architectural register identifiers.
pub mod reg;

pub use error::{ConfigError, GraphError, ParseError, ParseErrorKind, SimError};
pub use reg::{NUM_REGS, RegId};
