use rowan::TextRange;

use super::*;

fn range(start: u32, end: u32) -> TextRange {
    TextRange::new(start.into(), end.into())
}

#[test]
fn report_with_default_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnmatchedCloseParen, range(2, 3))
        .emit();

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics.summary(), "unmatched `)`");
}

#[test]
fn report_with_custom_message_and_hint() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::ExpectedPrimary, range(0, 1))
        .message("`*` has nothing to repeat")
        .hint("put a symbol before it")
        .emit();

    insta::assert_snapshot!(diagnostics.printer().render(), @r"
    error at 0..1: `*` has nothing to repeat
      help: put a symbol before it
    ");
}

#[test]
fn kinds_carry_default_hints() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::EmptyGroup, range(0, 2))
        .emit();

    let message = diagnostics.primary().unwrap();
    assert_eq!(message.hints, vec!["remove the group or put a symbol inside"]);
}

#[test]
fn primary_prefers_priority_then_position() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::TrailingInput, range(0, 1))
        .emit();
    diagnostics
        .report(DiagnosticKind::UnclosedGroup, range(5, 6))
        .emit();
    diagnostics
        .report(DiagnosticKind::UnclosedGroup, range(3, 4))
        .emit();

    let primary = diagnostics.primary().unwrap();
    assert_eq!(primary.kind, DiagnosticKind::UnclosedGroup);
    assert_eq!(primary.range, range(3, 4));
}

#[test]
fn empty_collection() {
    let diagnostics = Diagnostics::new();
    assert!(diagnostics.is_empty());
    assert!(diagnostics.primary().is_none());
    assert_eq!(diagnostics.summary(), "no diagnostics");
    assert_eq!(diagnostics.printer().render(), "");
}

#[test]
fn plain_printer_separates_messages() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::EmptyPattern, range(0, 0))
        .emit();
    diagnostics
        .report(DiagnosticKind::TrailingInput, range(4, 5))
        .emit();

    insta::assert_snapshot!(diagnostics.printer().render(), @r"
    error at 0..0: pattern is empty
    error at 4..5: unexpected input after pattern
    ");
}

#[test]
fn source_printer_points_at_span() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnexpectedCharacter, range(1, 2))
        .message("unexpected `.`")
        .emit();

    let out = diagnostics
        .printer()
        .source("a.b")
        .path("rules.sig")
        .render();

    assert!(out.contains("error: unexpected `.`"));
    assert!(out.contains("rules.sig"));
    assert!(out.contains("a.b"));
    assert!(out.contains('^'));
}

#[test]
fn source_printer_honours_line_start() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnmatchedCloseParen, range(1, 2))
        .emit();

    let out = diagnostics.printer().source("a)").line_start(42).render();

    assert!(out.contains("42 | a)"));
}

#[test]
fn empty_span_at_end_still_renders() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::ExpectedPrimary, range(2, 2))
        .emit();

    let out = diagnostics.printer().source("a|").render();

    assert!(out.contains("expected a symbol or `(`"));
}
