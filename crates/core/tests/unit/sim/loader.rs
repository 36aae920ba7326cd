//! # Reference Trace Loading Tests
//!
//! Leading-integer parsing, the address-0 fallback, strict mode, blank line
//! handling, kept input text and file loading.

use std::io::Write;

use memsim_core::common::{LogicalAddr, PageNumber, SimError};
use memsim_core::sim::ReferenceTrace;
use memsim_core::sim::loader::parse_leading_int;
use rstest::rstest;
use tempfile::NamedTempFile;

#[rstest]
#[case("16916", Some(16916))]
#[case("  42", Some(42))]
#[case("-7", Some(-7))]
#[case("+9", Some(9))]
#[case("123abc", Some(123))]
#[case("10 20", Some(10))]
#[case("12\r", Some(12))]
#[case("abc", None)]
#[case("-", None)]
#[case("", None)]
#[case("4294967297", Some(1))]
fn leading_int(#[case] text: &str, #[case] expected: Option<i32>) {
    assert_eq!(parse_leading_int(text), expected);
}

#[test]
fn parse_one_address_per_line() {
    let trace = ReferenceTrace::parse("1\n256\n65535\n", false).unwrap();
    assert_eq!(
        trace.addresses(),
        &[LogicalAddr(1), LogicalAddr(256), LogicalAddr(65535)]
    );
}

#[test]
fn trailing_newline_is_optional() {
    let with = ReferenceTrace::parse("1\n2\n", false).unwrap();
    let without = ReferenceTrace::parse("1\n2", false).unwrap();
    assert_eq!(with, without);
}

#[test]
fn interior_blank_lines_become_zero() {
    let trace = ReferenceTrace::parse("1\n\n   \n2\n", false).unwrap();
    assert_eq!(
        trace.addresses(),
        &[LogicalAddr(1), LogicalAddr(0), LogicalAddr(0), LogicalAddr(2)]
    );
    assert_eq!(trace.text(1), Some(""));
}

#[test]
fn trailing_blank_lines_are_dropped() {
    let trace = ReferenceTrace::parse("1\n2\n\n  \n\n", false).unwrap();
    assert_eq!(trace.addresses(), &[LogicalAddr(1), LogicalAddr(2)]);
}

#[test]
fn strict_mode_rejects_interior_blank_line() {
    assert!(matches!(
        ReferenceTrace::parse("1\n\n2\n", true),
        Err(SimError::MalformedAddress { line: 2, .. })
    ));
    assert_eq!(ReferenceTrace::parse("1\n\n", true).unwrap().len(), 1);
}

#[test]
fn input_text_is_kept_trimmed() {
    let trace = ReferenceTrace::parse("  16916 \n4294967297\nhello\n12abc\r\n", false).unwrap();
    assert_eq!(trace.text(0), Some("16916"));
    assert_eq!(trace.text(1), Some("4294967297"));
    assert_eq!(trace.text(2), Some("hello"));
    assert_eq!(trace.text(3), Some("12abc"));
    assert_eq!(trace.text(4), None);
    assert_eq!(trace.addresses()[1], LogicalAddr(1));
}

#[test]
fn collected_addresses_echo_their_value() {
    let trace: ReferenceTrace = [-5, 300].into_iter().collect();
    assert_eq!(trace.text(0), Some("-5"));
    assert_eq!(trace.text(1), Some("300"));
}

#[test]
fn malformed_line_becomes_zero() {
    let trace = ReferenceTrace::parse("300\nhello\n5\n", false).unwrap();
    assert_eq!(
        trace.addresses(),
        &[LogicalAddr(300), LogicalAddr(0), LogicalAddr(5)]
    );
}

#[test]
fn strict_mode_rejects_malformed_line() {
    match ReferenceTrace::parse("300\nhello\n5\n", true) {
        Err(SimError::MalformedAddress { line, text }) => {
            assert_eq!(line, 2);
            assert_eq!(text, "hello");
        }
        other => panic!("expected malformed address error, got {other:?}"),
    }
}

#[test]
fn pages_materializes_whole_sequence() {
    let trace = ReferenceTrace::parse("0\n256\n513\n70000\n", false).unwrap();
    assert_eq!(
        trace.pages(),
        vec![PageNumber(0), PageNumber(1), PageNumber(2), PageNumber(0x11)]
    );
}

#[test]
fn from_reader_matches_parse() {
    let text = "7\n8\nx\n9\n";
    let a = ReferenceTrace::from_reader(text.as_bytes(), false).unwrap();
    let b = ReferenceTrace::parse(text, false).unwrap();
    assert_eq!(a, b);
}

#[test]
fn from_path_reads_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "16916").unwrap();
    writeln!(file, "62493").unwrap();
    file.flush().unwrap();

    let trace = ReferenceTrace::from_path(file.path(), false).unwrap();
    assert_eq!(trace.len(), 2);
    assert!(!trace.is_empty());
}

#[test]
fn from_path_missing_file() {
    assert!(matches!(
        ReferenceTrace::from_path("/nonexistent/addresses.txt", false),
        Err(SimError::ResourceUnavailable { .. })
    ));
}

#[test]
fn empty_file_is_empty_trace() {
    let trace = ReferenceTrace::parse("", false).unwrap();
    assert!(trace.is_empty());
    assert!(trace.pages().is_empty());
}
