//! End-to-end matching scenarios
//!
//! Each test scans a small source and verifies the complete diagnostic
//! stream and summary through the fluent report assertions.

use nestcheck::nestcheck::lexer::DelimiterKind;
use nestcheck::nestcheck::matching::{scan, Diagnostic, Verdict};
use nestcheck::nestcheck::testing::assert_report;
use rstest::rstest;

fn scan_ok(source: &str) -> nestcheck::nestcheck::matching::ScanReport {
    scan(source).expect("scenario inputs never hit the depth limit")
}

#[test]
fn test_balanced_mixed_families() {
    let report = scan_ok("/* c <!-- html --> still c */");
    assert_report(&report)
        .valid(2)
        .errors(0)
        .verdict(Verdict::AllNested);
}

#[test]
fn test_unclosed_detection() {
    let report = scan_ok("/* unclosed");
    assert_report(&report)
        .valid(0)
        .errors(1)
        .diagnostic_count(2)
        .diagnostic(
            1,
            Diagnostic::Unclosed {
                kind: DelimiterKind::CStyle,
                open_line: 1,
            },
        );
}

#[test]
fn test_unexpected_close() {
    let report = scan_ok("*/");
    assert_report(&report)
        .valid(0)
        .errors(1)
        .diagnostic_count(1)
        .diagnostic(
            0,
            Diagnostic::UnexpectedClose {
                token: "*/",
                line: 1,
            },
        );
}

#[test]
fn test_mismatch_resolves_the_opener() {
    let report = scan_ok("/* x --> y");
    assert_report(&report)
        .valid(0)
        .errors(1)
        .diagnostic_count(2)
        .diagnostic(
            1,
            Diagnostic::MismatchedClose {
                expected: "*/",
                found: "-->",
                line: 1,
            },
        );
}

#[test]
fn test_flush_order_is_innermost_first() {
    let report = scan_ok("/* outer <!-- inner");
    assert_report(&report)
        .valid(0)
        .errors(2)
        .diagnostic_count(4)
        .diagnostic(
            2,
            Diagnostic::Unclosed {
                kind: DelimiterKind::Html,
                open_line: 1,
            },
        )
        .diagnostic(
            3,
            Diagnostic::Unclosed {
                kind: DelimiterKind::CStyle,
                open_line: 1,
            },
        );
}

#[test]
fn test_multiple_independent_valid_blocks() {
    let report = scan_ok("/* a */\n<!-- b -->\n/* c */");
    assert_report(&report)
        .valid(3)
        .errors(0)
        .verdict(Verdict::AllNested);
}

#[test]
fn test_open_lines_survive_to_the_close_diagnostic() {
    let report = scan_ok("<!-- one\ntwo\n-->");
    assert_report(&report).diagnostic(
        1,
        Diagnostic::Closed {
            kind: DelimiterKind::Html,
            open_line: 1,
            close_line: 3,
        },
    );
}

#[test]
fn test_scan_is_idempotent() {
    let source = "/* a */ <!-- b */ --> /*";
    let first = scan_ok(source);
    let second = scan_ok(source);
    assert_eq!(first, second);
}

#[test]
fn test_empty_input_has_no_blocks() {
    let report = scan_ok("");
    assert_report(&report)
        .valid(0)
        .errors(0)
        .diagnostic_count(0)
        .verdict(Verdict::NoBlocks);
}

#[rstest]
#[case("*/", "*/")]
#[case("-->", "-->")]
fn test_lone_closers_are_unexpected(#[case] source: &str, #[case] token: &'static str) {
    let report = scan_ok(source);
    assert_report(&report)
        .errors(1)
        .diagnostic(0, Diagnostic::UnexpectedClose { token, line: 1 });
}

#[rstest]
#[case("/* x -->", "*/", "-->")]
#[case("<!-- x */", "-->", "*/")]
fn test_cross_family_mismatches(
    #[case] source: &str,
    #[case] expected: &'static str,
    #[case] found: &'static str,
) {
    let report = scan_ok(source);
    assert_report(&report).valid(0).errors(1).diagnostic(
        1,
        Diagnostic::MismatchedClose {
            expected,
            found,
            line: 1,
        },
    );
}

#[rstest]
#[case("/* a */", 1)]
#[case("/* a */ /* b */", 2)]
#[case("<!-- a --> <!-- b --> <!-- c -->", 3)]
fn test_sequential_blocks_count(#[case] source: &str, #[case] expected: usize) {
    let report = scan_ok(source);
    assert_report(&report).valid(expected).errors(0);
}
