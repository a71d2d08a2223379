//! Architectural register identifiers.
//!
//! Trace instructions name registers by small integers. `RegId` is the validated form:
//! once constructed it is guaranteed to index the renaming table without bounds checks
//! failing.

use std::fmt;

/// Number of architectural registers visible to a trace.
pub const NUM_REGS: usize = 32;

/// A register id in `0..NUM_REGS`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegId(u8);

impl RegId {
    /// Creates a register id, returning `None` if `idx` is out of range.
    ///
    /// # Arguments
    ///
    /// * `idx` - Raw register number from the trace.
    ///
    /// # Returns
    ///
    /// `Some(RegId)` for `0..=31`, `None` otherwise.
    pub fn new(idx: i64) -> Option<Self> {
        u8::try_from(idx)
            .ok()
            .filter(|&r| usize::from(r) < NUM_REGS)
            .map(Self)
    }

    /// Returns the register number as a table index.
    #[inline(always)]
    pub fn index(self) -> usize {
        usize::from(self.0)
    }
}

impl fmt::Display for RegId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}", self.0)
    }
}
