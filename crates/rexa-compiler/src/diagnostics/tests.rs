use super::*;

#[test]
fn report_with_default_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.report(DiagnosticKind::EmptyPattern, 0..0).emit();

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics.first_kind(), Some(DiagnosticKind::EmptyPattern));
    assert_eq!(diagnostics.first_message(), Some("regex cannot be empty"));
}

#[test]
fn report_with_custom_message() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::UnbalancedParens, 3..4)
        .message("too many closing parentheses")
        .emit();

    insta::assert_snapshot!(
        diagnostics.first_message().unwrap(),
        @"unbalanced parentheses: too many closing parentheses"
    );
}

#[test]
fn consecutive_operators_template() {
    let message = DiagnosticKind::ConsecutiveOperators.message(Some("2"));
    insta::assert_snapshot!(message, @"invalid consecutive operators at position 2");
}

#[test]
fn default_hints_are_attached() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.report(DiagnosticKind::EmptyGroup, 0..2).emit();
    diagnostics
        .report(DiagnosticKind::MissingOperand, 0..1)
        .message("`*` has nothing to repeat")
        .hint("put a symbol or group before it")
        .emit();

    insta::assert_snapshot!(diagnostics.printer().render(), @r"
    error at 0..2: empty parentheses not allowed (hint: remove the group or put a symbol inside it)
    error at 0..1: `*` has nothing to repeat (hint: put a symbol or group before it)
    ");
}

#[test]
fn kinds_keep_report_order() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.report(DiagnosticKind::InvalidCharacter, 1..2).emit();
    diagnostics.report(DiagnosticKind::UnbalancedParens, 0..1).emit();

    let kinds: Vec<_> = diagnostics.kinds().collect();
    assert_eq!(
        kinds,
        vec![DiagnosticKind::InvalidCharacter, DiagnosticKind::UnbalancedParens]
    );
}

#[test]
fn render_with_source_underlines_span() {
    let mut diagnostics = Diagnostics::new();
    diagnostics
        .report(DiagnosticKind::InvalidCharacter, 1..2)
        .message("`#`")
        .emit();

    let rendered = diagnostics.render("a#b");
    assert!(rendered.contains("error: invalid character `#` in regex"));
    assert!(rendered.contains("a#b"));
    assert!(rendered.contains('^'));
}

#[test]
fn render_empty_source_falls_back_to_plain() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.report(DiagnosticKind::EmptyPattern, 0..0).emit();

    insta::assert_snapshot!(diagnostics.render(""), @"error at 0..0: regex cannot be empty");
}

#[test]
fn render_colored_adds_escapes() {
    let mut diagnostics = Diagnostics::new();
    diagnostics.report(DiagnosticKind::EmptyGroup, 0..2).emit();

    assert!(diagnostics.render_colored("()", true).contains("\x1b["));
    assert!(!diagnostics.render_colored("()", false).contains("\x1b["));
}

#[test]
fn extend_appends() {
    let mut a = Diagnostics::new();
    a.report(DiagnosticKind::EmptyGroup, 0..2).emit();
    let mut b = Diagnostics::new();
    b.report(DiagnosticKind::MissingOperand, 0..1).emit();

    a.extend(b);
    assert_eq!(a.len(), 2);
}
