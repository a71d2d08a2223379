//! Register renaming table for dependency discovery.
//!
//! Maps each architectural register to the node of its latest writer, or `None` if no
//! instruction seen so far writes it. The graph builder owns one of these for the
//! duration of a single construction pass and drops it afterwards; nothing else reads it.

use crate::common::reg::{NUM_REGS, RegId};
use crate::core::graph::NodeId;

/// Last-writer-wins renaming table.
#[derive(Debug, Clone)]
pub struct RenameTable {
    writers: [Option<NodeId>; NUM_REGS],
}

impl Default for RenameTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RenameTable {
    /// Create a table with every register ready (no pending writer).
    pub fn new() -> Self {
        Self {
            writers: [None; NUM_REGS],
        }
    }

    /// Record `node` as the latest writer of `reg`.
    /// The previous writer, if any, is forgotten but otherwise unaffected.
    pub fn set_writer(&mut self, reg: RegId, node: NodeId) {
        self.writers[reg.index()] = Some(node);
    }

    /// Get the latest writer of `reg`, or `None` if the register is ready.
    pub fn writer(&self, reg: RegId) -> Option<NodeId> {
        self.writers[reg.index()]
    }

    /// Resolve both sources of an instruction to their distinct live writers.
    ///
    /// A register read twice, or two registers last written by the same node, yield a
    /// single producer.
    pub fn producers_of(&self, sources: [RegId; 2]) -> impl Iterator<Item = NodeId> + use<> {
        let first = self.writer(sources[0]);
        let second = self.writer(sources[1]).filter(|&w| Some(w) != first);
        first.into_iter().chain(second)
    }
}
