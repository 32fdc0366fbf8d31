use crate::diagnostics::DiagnosticKind;

use super::validate;

fn first_kind(text: &str) -> Option<DiagnosticKind> {
    validate(text).first_kind()
}

#[test]
fn accepts_well_formed_patterns() {
    for pattern in ["a", "ab", "a*", "(a+)b", "a.b", "(ab)*c", "a|b|c", "a?b+", "(a*)|b", "0(0|1)*1"] {
        let diagnostics = validate(pattern);
        assert!(diagnostics.is_empty(), "{pattern}: {}", diagnostics.printer().render());
    }
}

#[test]
fn unclosed_group() {
    assert_eq!(first_kind("(a"), Some(DiagnosticKind::UnbalancedParens));
    insta::assert_snapshot!(
        validate("(a").first_message().unwrap(),
        @"unbalanced parentheses: unclosed parentheses"
    );
}

#[test]
fn stray_closing_paren() {
    let diagnostics = validate("a)");
    assert_eq!(diagnostics.first_kind(), Some(DiagnosticKind::UnbalancedParens));
    insta::assert_snapshot!(
        diagnostics.first_message().unwrap(),
        @"unbalanced parentheses: too many closing parentheses"
    );
}

#[test]
fn consecutive_operators() {
    assert_eq!(first_kind("a||b"), Some(DiagnosticKind::ConsecutiveOperators));
    insta::assert_snapshot!(
        validate("a||b").first_message().unwrap(),
        @"invalid consecutive operators at position 2"
    );
}

#[test]
fn repeat_followed_by_alternation_counts_as_consecutive() {
    assert_eq!(first_kind("a*|b"), Some(DiagnosticKind::ConsecutiveOperators));
    assert_eq!(first_kind("a**"), Some(DiagnosticKind::ConsecutiveOperators));
}

#[test]
fn empty_group() {
    assert_eq!(first_kind("()"), Some(DiagnosticKind::EmptyGroup));
    assert_eq!(first_kind("a()b"), Some(DiagnosticKind::EmptyGroup));
}

#[test]
fn invalid_character() {
    assert_eq!(first_kind("a#b"), Some(DiagnosticKind::InvalidCharacter));
    assert_eq!(first_kind("a b"), Some(DiagnosticKind::InvalidCharacter));
    assert_eq!(first_kind("é"), Some(DiagnosticKind::InvalidCharacter));
    assert_eq!(validate("a#b").len(), 1);
}

#[test]
fn empty_pattern() {
    let diagnostics = validate("");
    assert_eq!(diagnostics.first_kind(), Some(DiagnosticKind::EmptyPattern));
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn operators_without_operands() {
    for pattern in ["*a", "+", "a|", "|a", "(|a)", "(a|)", "a.", ".a", "a..b", "(?a)"] {
        assert_eq!(
            first_kind(pattern),
            Some(DiagnosticKind::MissingOperand),
            "{pattern}"
        );
    }
}

#[test]
fn missing_operand_messages() {
    insta::assert_snapshot!(validate("*a").first_message().unwrap(), @"`*` has nothing to repeat");
    insta::assert_snapshot!(validate("a|").first_message().unwrap(), @"`|` has no right operand");
    insta::assert_snapshot!(validate("|a").first_message().unwrap(), @"`|` has no left operand");
}

#[test]
fn reports_every_problem_in_one_pass() {
    let diagnostics = validate("#(a");
    let kinds: Vec<_> = diagnostics.kinds().collect();
    assert_eq!(
        kinds,
        vec![DiagnosticKind::InvalidCharacter, DiagnosticKind::UnbalancedParens]
    );
}

#[test]
fn spans_point_at_offending_text() {
    insta::assert_snapshot!(validate("ab()").printer().render(), @"error at 2..4: empty parentheses not allowed (hint: remove the group or put a symbol inside it)");
    insta::assert_snapshot!(validate("a(b").printer().render(), @"error at 1..2: unbalanced parentheses: unclosed parentheses");
}
