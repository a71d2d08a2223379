//! Trace Decoder.
//!
//! This module turns trace text into `Instruction` records. It handles:
//! 1. **Line syntax:** `D=S1,S2:L`, whitespace tolerated around every field.
//! 2. **Validation:** Register ids in `0..32` and strictly positive latencies.
//! 3. **Indexing:** Blank lines are skipped and do not consume a trace index.
//!
//! Errors carry the 1-based file line number and the offending text.

use tracing::trace;

use crate::common::error::{ParseError, ParseErrorKind};
use crate::common::reg::RegId;
use crate::isa::instruction::Instruction;

/// Separator between the destination and the sources.
const DEST_SEP: char = '=';

/// Separator between the two sources.
const SRC_SEP: char = ',';

/// Separator between the sources and the latency.
const LATENCY_SEP: char = ':';

/// Decodes a single non-blank trace line.
///
/// # Arguments
///
/// * `text` - The line, with or without surrounding whitespace.
///
/// # Returns
///
/// The decoded record, or the reason the line was rejected.
pub fn decode_line(text: &str) -> Result<Instruction, ParseErrorKind> {
    let (dest, rest) = text.split_once(DEST_SEP).ok_or(ParseErrorKind::Shape)?;
    let (src1, rest) = rest.split_once(SRC_SEP).ok_or(ParseErrorKind::Shape)?;
    let (src2, latency) = rest.split_once(LATENCY_SEP).ok_or(ParseErrorKind::Shape)?;

    let latency = int_field(latency)?;
    if latency <= 0 {
        return Err(ParseErrorKind::NonPositiveLatency(latency));
    }

    Ok(Instruction {
        dest: reg_field(dest)?,
        src1: reg_field(src1)?,
        src2: reg_field(src2)?,
        latency: u32::try_from(latency)
            .map_err(|_| ParseErrorKind::NotAnInteger(latency.to_string()))?,
    })
}

/// Decodes a whole trace, one instruction per non-blank line.
///
/// Instruction `i` of the result is trace index `i`; blank lines do not count.
pub fn decode_trace(text: &str) -> Result<Vec<Instruction>, ParseError> {
    let mut trace_out = Vec::new();
    for (lineno, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let inst = decode_line(line).map_err(|kind| ParseError {
            line: lineno + 1,
            text: line.to_string(),
            kind,
        })?;
        trace!(index = trace_out.len(), line = lineno + 1, %inst, "decoded");
        trace_out.push(inst);
    }
    Ok(trace_out)
}

fn int_field(field: &str) -> Result<i64, ParseErrorKind> {
    let field = field.trim();
    field
        .parse::<i64>()
        .map_err(|_| ParseErrorKind::NotAnInteger(field.to_string()))
}

fn reg_field(field: &str) -> Result<RegId, ParseErrorKind> {
    let raw = int_field(field)?;
    RegId::new(raw).ok_or(ParseErrorKind::RegisterOutOfRange(raw))
}
