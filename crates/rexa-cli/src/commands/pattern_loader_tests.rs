use std::path::Path;

use super::pattern_loader::{PatternSource, load_pattern, strip_line_end};

#[test]
fn inline_text_wins_over_path() {
    let source = load_pattern(Some(Path::new("missing.txt")), Some("a|b")).unwrap();
    assert_eq!(
        source,
        PatternSource {
            text: "a|b".to_owned(),
            name: None,
        }
    );
}

#[test]
fn missing_pattern_is_an_error() {
    let err = load_pattern(None, None).unwrap_err();
    insta::assert_snapshot!(err, @"pattern is required: use positional argument or -q/--regex");
}

#[test]
fn unreadable_file_names_the_path() {
    let err = load_pattern(Some(Path::new("definitely/not/here.txt")), None).unwrap_err();
    assert!(err.starts_with("failed to read 'definitely/not/here.txt'"), "{err}");
}

#[test]
fn strips_one_line_ending() {
    assert_eq!(strip_line_end("ab*\n"), "ab*");
    assert_eq!(strip_line_end("ab*\r\n"), "ab*");
    assert_eq!(strip_line_end("ab*\n\n"), "ab*\n");
    assert_eq!(strip_line_end("ab* "), "ab* ");
}
