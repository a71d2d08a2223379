//! Error definitions.
//!
//! This module defines the error taxonomy for a simulation run. It provides:
//! 1. **Configuration errors:** Invalid resource bounds or a malformed machine config.
//! 2. **Parse errors:** Trace lines that do not match `D=S1,S2:L`, with line context.
//! 3. **Structural errors:** Dependency edges that would break the forward-only graph invariant.
//! 4. **Run errors:** A top-level type wrapping all of the above plus I/O failures.
//!
//! No error is recoverable; every variant aborts the run.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::graph::NodeId;

/// Invalid machine configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A resource bound of zero would stall the machine forever.
    #[error("{resource} must be at least 1 (use \"unbounded\" for no limit)")]
    ZeroBound {
        /// Name of the offending resource.
        resource: &'static str,
    },

    /// A bound string that is neither a positive integer nor an unbounded keyword.
    #[error("invalid resource bound '{0}': expected a positive integer, \"unbounded\", \"inf\" or -1")]
    InvalidBound(String),

    /// The JSON machine configuration could not be decoded.
    #[error("malformed machine config: {0}")]
    Json(#[from] serde_json::Error),
}

/// The specific way a trace line failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// The line is not shaped like `D=S1,S2:L`.
    #[error("expected `D=S1,S2:L`")]
    Shape,

    /// A field is not an integer.
    #[error("field `{0}` is not an integer")]
    NotAnInteger(String),

    /// A register id lies outside the architectural register range.
    #[error("register {0} is out of range (0-31)")]
    RegisterOutOfRange(i64),

    /// Latencies must be at least one cycle.
    #[error("latency must be a positive integer, got {0}")]
    NonPositiveLatency(i64),
}

/// A trace line that could not be turned into an instruction record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}: `{text}`")]
pub struct ParseError {
    /// 1-based line number in the trace file.
    pub line: usize,
    /// The offending line, trimmed.
    pub text: String,
    /// What was wrong with it.
    pub kind: ParseErrorKind,
}

/// Violation of the dependency graph's structural invariants.
///
/// The builder only ever produces forward edges, so any of these indicates a defect
/// in the caller rather than bad input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// Edge endpoint does not name a node in the arena.
    #[error("edge references unknown node {0}")]
    UnknownNode(NodeId),

    /// Edge does not point from an earlier to a later trace index.
    #[error("edge {producer} -> {consumer} is not forward; the graph would admit a cycle")]
    NotForward {
        /// Producer end of the rejected edge.
        producer: NodeId,
        /// Consumer end of the rejected edge.
        consumer: NodeId,
    },
}

/// Any failure that aborts a run.
#[derive(Debug, Error)]
pub enum SimError {
    /// Invalid machine configuration.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Malformed trace.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Internal invariant violation while building the dependency graph.
    #[error("structural error: {0}")]
    Graph(#[from] GraphError),

    /// A file could not be read or written.
    #[error("{}: {source}", path.display())]
    Io {
        /// Path of the file involved.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
}
