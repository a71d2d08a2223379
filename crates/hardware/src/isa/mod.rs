//! Trace instruction format.
//!
//! Instructions in this model are abstract: a destination register, two source registers
//! and a latency. There are no opcodes and no memory operations.

/// Trace text decoding.
pub mod decode;

/// The instruction record.
pub mod instruction;

pub use decode::{decode_line, decode_trace};
pub use instruction::Instruction;
