//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Hidden run flags: compile-only commands accept them without error
//! 2. Help visibility: hidden flags don't appear in --help
//! 3. Positional shifting: -q turns the first positional into the input
//! 4. Params extraction: correct fields are extracted from ArgMatches

use std::path::PathBuf;

use rexa_core::{AutomatonKind, ClosureMode};
use rexa_vm::Verbosity;

use super::*;
use crate::cli::commands::{
    check_command, dump_command, exec_command, export_command, load_command, postfix_command,
    stats_command, suite_command, trace_command,
};
use crate::commands::dump::DumpFormat;
use crate::commands::export::ExportArgs;
use crate::commands::stats::StatsArgs;
use crate::commands::trace::TraceArgs;

#[test]
fn cli_definition_is_consistent() {
    build_cli().debug_assert();
}

#[test]
fn dump_accepts_run_flags() {
    let cmd = dump_command();
    let result = cmd.try_get_matches_from(["dump", "pattern.txt", "-i", "ab", "-vv"]);
    assert!(
        result.is_ok(),
        "dump should accept run flags: {:?}",
        result.err()
    );

    let m = result.unwrap();
    let params = DumpParams::from_matches(&m);
    assert_eq!(params.pattern_path, Some(PathBuf::from("pattern.txt")));
}

#[test]
fn check_accepts_compile_flags() {
    let cmd = check_command();
    let result = cmd.try_get_matches_from([
        "check",
        "-q",
        "a|b",
        "--kind",
        "nfa",
        "--closure",
        "reachability",
        "--format",
        "dot",
    ]);
    assert!(
        result.is_ok(),
        "check should accept compile flags: {:?}",
        result.err()
    );

    let params = CheckParams::from_matches(&result.unwrap());
    assert_eq!(params.pattern_text.as_deref(), Some("a|b"));
    assert_eq!(params.pattern_path, None);
}

#[test]
fn postfix_accepts_input_positional() {
    let cmd = postfix_command();
    let result = cmd.try_get_matches_from(["postfix", "pattern.txt", "abab"]);
    assert!(result.is_ok(), "{:?}", result.err());
}

#[test]
fn dump_help_hides_run_flags() {
    let mut cmd = dump_command();
    let help = cmd.render_help().to_string();

    assert!(help.contains("--kind"));
    assert!(help.contains("--format"));
    assert!(help.contains("--closure"));
    assert!(!help.contains("--input"), "--input should be hidden in dump");
    assert!(!help.contains("--inputs"), "--inputs should be hidden in dump");
    assert!(!help.contains("<INPUT>"), "INPUT should be hidden in dump");
}

#[test]
fn exec_help_shows_input_hides_format() {
    let mut cmd = exec_command();
    let help = cmd.render_help().to_string();

    assert!(help.contains("--input"));
    assert!(help.contains("<INPUT>"));
    assert!(!help.contains("--format"), "--format should be hidden in exec");
    assert!(!help.contains("--inputs"), "--inputs should be hidden in exec");
}

#[test]
fn trace_help_shows_verbose() {
    let mut cmd = trace_command();
    let help = cmd.render_help().to_string();

    assert!(help.contains("-v"));
    assert!(help.contains("--kind"));
    assert!(!help.contains("--format"), "--format should be hidden in trace");
}

#[test]
fn exec_two_positionals() {
    let cmd = exec_command();
    let m = cmd
        .try_get_matches_from(["exec", "pattern.txt", "abab"])
        .unwrap();
    let params = ExecParams::from_matches(&m);

    assert_eq!(params.pattern_path, Some(PathBuf::from("pattern.txt")));
    assert_eq!(params.input.as_deref(), Some("abab"));
    assert_eq!(params.pattern_text, None);
}

#[test]
fn exec_shifts_positional_with_inline_pattern() {
    let cmd = exec_command();
    let m = cmd
        .try_get_matches_from(["exec", "-q", "(ab)*", "abab"])
        .unwrap();
    let params = ExecParams::from_matches(&m);

    assert_eq!(params.pattern_text.as_deref(), Some("(ab)*"));
    assert_eq!(params.pattern_path, None);
    assert_eq!(params.input.as_deref(), Some("abab"));
}

#[test]
fn exec_input_flag_takes_empty_string() {
    let cmd = exec_command();
    let m = cmd
        .try_get_matches_from(["exec", "-q", "a*", "-i", ""])
        .unwrap();
    let params = ExecParams::from_matches(&m);

    assert_eq!(params.input.as_deref(), Some(""));
    assert_eq!(params.pattern_path, None);
}

#[test]
fn exec_input_flag_wins_over_positional() {
    let cmd = exec_command();
    let m = cmd
        .try_get_matches_from(["exec", "pattern.txt", "ignored", "-i", "ab"])
        .unwrap();
    let params = ExecParams::from_matches(&m);

    assert_eq!(params.pattern_path, Some(PathBuf::from("pattern.txt")));
    assert_eq!(params.input.as_deref(), Some("ab"));
}

#[test]
fn exec_rejects_repeated_input() {
    let cmd = exec_command();
    let result = cmd.try_get_matches_from(["exec", "-q", "a", "-i", "a", "-i", "b"]);
    assert!(result.is_err());
}

#[test]
fn exec_defaults() {
    let cmd = exec_command();
    let m = cmd.try_get_matches_from(["exec", "-q", "a", "a"]).unwrap();
    let params = ExecParams::from_matches(&m);

    assert_eq!(params.kind, AutomatonKind::Dfa);
    assert_eq!(params.closure, ClosureMode::Epsilon);
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn exec_kind_and_closure() {
    let cmd = exec_command();
    let m = cmd
        .try_get_matches_from([
            "exec",
            "-q",
            "a",
            "a",
            "--kind",
            "nfa",
            "--closure",
            "reachability",
            "--color",
            "never",
        ])
        .unwrap();
    let params = ExecParams::from_matches(&m);

    assert_eq!(params.kind, AutomatonKind::Nfa);
    assert_eq!(params.closure, ClosureMode::Reachability);
    assert_eq!(params.color, ColorChoice::Never);
}

#[test]
fn exec_rejects_unknown_kind() {
    let cmd = exec_command();
    let result = cmd.try_get_matches_from(["exec", "-q", "a", "a", "--kind", "pda"]);
    assert!(result.is_err());
}

#[test]
fn suite_collects_repeated_inputs() {
    let cmd = suite_command();
    let m = cmd
        .try_get_matches_from(["suite", "-q", "a|b", "-i", "a", "-i", "b", "-i", "ab"])
        .unwrap();
    let params = SuiteParams::from_matches(&m);

    assert_eq!(params.inputs, vec!["a", "b", "ab"]);
    assert_eq!(params.inputs_file, None);
}

#[test]
fn suite_inputs_file() {
    let cmd = suite_command();
    let m = cmd
        .try_get_matches_from(["suite", "pattern.txt", "--inputs", "cases.txt"])
        .unwrap();
    let params = SuiteParams::from_matches(&m);

    assert_eq!(params.pattern_path, Some(PathBuf::from("pattern.txt")));
    assert_eq!(params.inputs_file, Some(PathBuf::from("cases.txt")));
    assert!(params.inputs.is_empty());
}

#[test]
fn trace_shifts_positional_and_counts_verbosity() {
    let cmd = trace_command();
    let m = cmd
        .try_get_matches_from(["trace", "-q", "(ab)*", "abab", "-vv"])
        .unwrap();
    let params = TraceParams::from_matches(&m);

    assert_eq!(params.input.as_deref(), Some("abab"));
    assert_eq!(params.verbose, 2);

    let args: TraceArgs = params.into();
    assert_eq!(args.verbosity, Verbosity::Verbose);
}

#[test]
fn trace_default_verbosity() {
    let cmd = trace_command();
    let m = cmd.try_get_matches_from(["trace", "-q", "a", "a"]).unwrap();
    let args: TraceArgs = TraceParams::from_matches(&m).into();

    assert_eq!(args.verbosity, Verbosity::Default);
}

#[test]
fn stats_json_format() {
    let cmd = stats_command();
    let m = cmd
        .try_get_matches_from(["stats", "-q", "a*", "--format", "json"])
        .unwrap();
    let params = StatsParams::from_matches(&m);
    assert!(params.json);
}

#[test]
fn stats_reads_color() {
    let cmd = stats_command();
    let m = cmd
        .try_get_matches_from(["stats", "-q", "a*", "--color", "always"])
        .unwrap();
    let args: StatsArgs = StatsParams::from_matches(&m).into();
    assert!(args.color);

    let m = stats_command()
        .try_get_matches_from(["stats", "-q", "a*", "--color", "never"])
        .unwrap();
    let args: StatsArgs = StatsParams::from_matches(&m).into();
    assert!(!args.color);
}

#[test]
fn stats_rejects_dot_format() {
    let cmd = stats_command();
    let result = cmd.try_get_matches_from(["stats", "-q", "a*", "--format", "dot"]);
    assert!(result.is_err());
}

#[test]
fn export_compact_turns_off_pretty() {
    let cmd = export_command();
    let m = cmd
        .try_get_matches_from(["export", "-q", "a", "--compact", "-o", "a.json"])
        .unwrap();
    let args: ExportArgs = ExportParams::from_matches(&m).into();

    assert!(!args.pretty);
    assert_eq!(args.output, Some(PathBuf::from("a.json")));
    assert_eq!(args.color, ColorChoice::Auto.should_colorize());
}

#[test]
fn export_reads_color() {
    let m = export_command()
        .try_get_matches_from(["export", "-q", "a", "--color", "always"])
        .unwrap();
    let args: ExportArgs = ExportParams::from_matches(&m).into();
    assert!(args.color);
}

#[test]
fn load_requires_snapshot() {
    let cmd = load_command();
    let result = cmd.try_get_matches_from(["load"]);
    assert!(result.is_err());
}

#[test]
fn load_params() {
    let cmd = load_command();
    let m = cmd
        .try_get_matches_from(["load", "ab.json", "-i", "ab", "--format", "dot"])
        .unwrap();
    let params = LoadParams::from_matches(&m);

    assert_eq!(params.snapshot_path, PathBuf::from("ab.json"));
    assert_eq!(params.inputs, vec!["ab"]);
    assert_eq!(params.format, DumpFormat::Dot);
}

#[test]
fn dump_format_values() {
    for (flag, expected) in [
        ("text", DumpFormat::Text),
        ("dot", DumpFormat::Dot),
        ("json", DumpFormat::Json),
    ] {
        let m = dump_command()
            .try_get_matches_from(["dump", "-q", "a", "--format", flag])
            .unwrap();
        assert_eq!(DumpParams::from_matches(&m).format, expected);
    }
}

#[test]
fn color_never_disables() {
    assert!(!ColorChoice::Never.should_colorize());
    assert!(ColorChoice::Always.should_colorize());
}
