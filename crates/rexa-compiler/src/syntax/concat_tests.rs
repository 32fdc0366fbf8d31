use super::insert_concat;

#[test]
fn inserts_between_juxtaposed_operands() {
    insta::assert_snapshot!(insert_concat("ab"), @"a.b");
    insta::assert_snapshot!(insert_concat("abc"), @"a.b.c");
    insta::assert_snapshot!(insert_concat("a(b)"), @"a.(b)");
    insta::assert_snapshot!(insert_concat("(a)(b)"), @"(a).(b)");
    insta::assert_snapshot!(insert_concat("(a+)b"), @"(a+).b");
}

#[test]
fn inserts_after_postfix_operators() {
    insta::assert_snapshot!(insert_concat("a*b"), @"a*.b");
    insta::assert_snapshot!(insert_concat("a?(b)"), @"a?.(b)");
    insta::assert_snapshot!(insert_concat("(ab)+c"), @"(a.b)+.c");
}

#[test]
fn never_inserts_before_operators_or_closing_paren() {
    insta::assert_snapshot!(insert_concat("a|b"), @"a|b");
    insta::assert_snapshot!(insert_concat("a*"), @"a*");
    insta::assert_snapshot!(insert_concat("(a)|b"), @"(a)|b");
    insta::assert_snapshot!(insert_concat("(a)*"), @"(a)*");
}

#[test]
fn explicit_concatenation_is_kept() {
    assert_eq!(insert_concat("a.b"), "a.b");
}

#[test]
fn idempotent() {
    for pattern in ["ab", "a*b", "(a|b)*abb", "a?b+c"] {
        let once = insert_concat(pattern);
        assert_eq!(insert_concat(&once), once, "{pattern}");
    }
}
