//! Trace and Configuration Loader.
//!
//! This module reads simulation inputs from disk. It performs:
//! 1. **Trace loading:** Reads a trace file and decodes it into instruction records.
//! 2. **Config loading:** Reads a JSON machine configuration.
//!
//! Failures are returned as `SimError` with the offending path attached.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::common::error::SimError;
use crate::config::Config;
use crate::isa::{Instruction, decode_trace};

/// Reads a whole file as UTF-8 text.
fn read_text(path: &Path) -> Result<String, SimError> {
    fs::read_to_string(path).map_err(|source| SimError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads and decodes a trace file.
///
/// # Arguments
///
/// * `path` - Path to a text file with one `D=S1,S2:L` instruction per non-blank line.
///
/// # Returns
///
/// The instructions in trace order.
pub fn load_trace(path: impl AsRef<Path>) -> Result<Vec<Instruction>, SimError> {
    let path = path.as_ref();
    let trace = decode_trace(&read_text(path)?)?;
    info!(path = %path.display(), instructions = trace.len(), "trace loaded");
    Ok(trace)
}

/// Loads a JSON machine configuration.
///
/// # Arguments
///
/// * `path` - Path to a JSON object with optional `fetch_width`, `execution_units` and
///   `model` fields.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config, SimError> {
    let path = path.as_ref();
    let config = Config::from_json(&read_text(path)?)?;
    info!(path = %path.display(), ?config, "config loaded");
    Ok(config)
}
