//! Trace instruction records.
//!
//! An instruction in this model has no opcode: it writes one register, reads two, and
//! occupies an execution unit for a fixed number of cycles.

use std::fmt;

use crate::common::reg::RegId;

/// One parsed trace line: `dest = src1, src2 : latency`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction {
    /// Destination register.
    pub dest: RegId,
    /// First source register.
    pub src1: RegId,
    /// Second source register.
    pub src2: RegId,
    /// Execution latency in cycles (always at least 1).
    pub latency: u32,
}

impl Instruction {
    /// Returns both source registers in operand order.
    #[inline]
    pub fn sources(&self) -> [RegId; 2] {
        [self.src1, self.src2]
    }
}

impl fmt::Display for Instruction {
    /// Formats the record back into trace syntax.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}={},{}:{}",
            self.dest.index(),
            self.src1.index(),
            self.src2.index(),
            self.latency
        )
    }
}
