//! Trace Decode Tests.
//!
//! Verifies that `decode_trace` accepts `D=S1,S2:L` lines, skips blank lines without
//! consuming trace indices, and reports malformed lines with their file line number.

use ilpsim_core::common::{ParseError, ParseErrorKind};
use ilpsim_core::isa::{decode_line, decode_trace};
use pretty_assertions::assert_eq;
use rstest::rstest;

// ══════════════════════════════════════════════════════════
// 1. Well-formed traces
// ══════════════════════════════════════════════════════════

#[test]
fn decodes_in_order() {
    let trace = decode_trace("1=0,0:2\n2=1,1:3\n3=2,1:4\n").unwrap();
    let text: Vec<String> = trace.iter().map(ToString::to_string).collect();
    assert_eq!(text, vec!["1=0,0:2", "2=1,1:3", "3=2,1:4"]);
}

#[test]
fn blank_lines_do_not_consume_indices() {
    let trace = decode_trace("\n1=0,0:2\n\n   \n\t\n2=1,1:3\n\n").unwrap();
    assert_eq!(trace.len(), 2);
    assert_eq!(trace[1].latency, 3);
}

#[test]
fn empty_trace_is_valid() {
    assert!(decode_trace("").unwrap().is_empty());
    assert!(decode_trace("\n\n").unwrap().is_empty());
}

#[test]
fn crlf_line_endings() {
    let trace = decode_trace("1=0,0:2\r\n2=1,1:3\r\n").unwrap();
    assert_eq!(trace.len(), 2);
}

#[test]
fn register_range_edges_accepted() {
    let inst = decode_line("31=0,31:1").unwrap();
    assert_eq!(inst.dest.index(), 31);
    assert_eq!(inst.src1.index(), 0);
    assert_eq!(inst.src2.index(), 31);
}

// ══════════════════════════════════════════════════════════
// 2. Malformed lines
// ══════════════════════════════════════════════════════════

#[rstest]
#[case("1=2,3", ParseErrorKind::Shape)]
#[case("1,2,3:4", ParseErrorKind::Shape)]
#[case("garbage", ParseErrorKind::Shape)]
#[case("a=0,0:1", ParseErrorKind::NotAnInteger("a".into()))]
#[case("1=0,0:x", ParseErrorKind::NotAnInteger("x".into()))]
#[case("1=0,2,3:4", ParseErrorKind::NotAnInteger("2,3".into()))]
#[case("32=0,0:1", ParseErrorKind::RegisterOutOfRange(32))]
#[case("1=-1,0:1", ParseErrorKind::RegisterOutOfRange(-1))]
#[case("1=0,0:0", ParseErrorKind::NonPositiveLatency(0))]
#[case("1=0,0:-3", ParseErrorKind::NonPositiveLatency(-3))]
fn rejects_malformed_line(#[case] line: &str, #[case] kind: ParseErrorKind) {
    assert_eq!(decode_line(line), Err(kind));
}

#[test]
fn error_reports_file_line_number_and_text() {
    let err = decode_trace("1=0,0:2\n\n  2=1,1  \n3=2,2:1\n").unwrap_err();
    assert_eq!(
        err,
        ParseError {
            line: 3,
            text: "2=1,1".to_string(),
            kind: ParseErrorKind::Shape,
        }
    );
    assert!(err.to_string().starts_with("line 3:"));
}

#[test]
fn first_error_aborts() {
    let err = decode_trace("40=0,0:1\n1=0,0:0\n").unwrap_err();
    assert_eq!(err.line, 1);
    assert_eq!(err.kind, ParseErrorKind::RegisterOutOfRange(40));
}
