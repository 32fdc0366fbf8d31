//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.
//! Commands that only compile (check/postfix/dump/stats/export) also accept
//! the run flags, hidden from `--help`, so a command line can switch
//! subcommands without being rewritten.

use clap::{ArgAction, Command};

use super::args::*;

/// Add hidden run args (for commands that don't run inputs).
fn with_hidden_run_args(cmd: Command) -> Command {
    cmd.arg(input_text_arg().hide(true))
        .arg(input_arg().hide(true))
        .arg(inputs_file_arg().hide(true))
        .arg(verbose_arg().hide(true))
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("rexa")
        .about("Compile regular expressions to NFAs and DFAs, then inspect and run them")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(postfix_command())
        .subcommand(dump_command())
        .subcommand(exec_command())
        .subcommand(suite_command())
        .subcommand(trace_command())
        .subcommand(stats_command())
        .subcommand(export_command())
        .subcommand(load_command())
}

/// Validate a pattern without building anything.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate a pattern")
        .override_usage(
            "\
  rexa check <PATTERN>
  rexa check -q <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  rexa check pattern.txt      # validate file
  rexa check -q '(a|b)*c'     # validate inline
  echo 'a(b' | rexa check -   # validate stdin

Silent on success. Errors are printed to stderr with exit status 1."#,
        )
        .arg(pattern_path_arg())
        .arg(pattern_text_arg())
        .arg(color_arg());

    with_hidden_run_args(
        cmd.arg(kind_arg().hide(true))
            .arg(closure_arg().hide(true))
            .arg(format_arg().hide(true)),
    )
}

/// Show the concatenation-explicit form and the postfix form.
pub fn postfix_command() -> Command {
    let cmd = Command::new("postfix")
        .about("Show the pattern with explicit concatenation and in postfix")
        .override_usage(
            "\
  rexa postfix <PATTERN>
  rexa postfix -q <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  rexa postfix -q 'a(b|c)*'   # a.(b|c)*  then  abc|*."#,
        )
        .arg(pattern_path_arg())
        .arg(pattern_text_arg())
        .arg(color_arg());

    with_hidden_run_args(
        cmd.arg(kind_arg().hide(true))
            .arg(closure_arg().hide(true))
            .arg(format_arg().hide(true)),
    )
}

/// List the edges of the compiled automaton.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("Show the compiled automaton")
        .override_usage(
            "\
  rexa dump <PATTERN> [--kind nfa|dfa] [--format text|dot|json]
  rexa dump -q <TEXT> [--kind nfa|dfa] [--format text|dot|json]",
        )
        .after_help(
            r#"EXAMPLES:
  rexa dump -q 'a*'                       # DFA edge listing
  rexa dump -q 'a*' --kind nfa            # Thompson NFA
  rexa dump -q 'ab|c' --format dot | dot -Tsvg > ab.svg
  rexa dump -q 'ab|c' --format json       # listing as JSON"#,
        )
        .arg(pattern_path_arg())
        .arg(pattern_text_arg())
        .arg(kind_arg())
        .arg(closure_arg())
        .arg(format_arg())
        .arg(color_arg());

    with_hidden_run_args(cmd)
}

/// Run one input against the compiled automaton.
pub fn exec_command() -> Command {
    Command::new("exec")
        .about("Run an input string against a pattern")
        .override_usage(
            "\
  rexa exec <PATTERN> <INPUT>
  rexa exec -q <TEXT> <INPUT>
  rexa exec -q <TEXT> -i <INPUT>",
        )
        .after_help(
            r#"EXAMPLES:
  rexa exec pattern.txt abab        # pattern file + input
  rexa exec -q '(ab)*' abab         # inline pattern + input
  rexa exec -q 'a*' -i ''           # empty input
  rexa exec -q 'a*' aaa --kind nfa  # simulate the NFA

Prints `accepted` or `rejected`; exit status is 0 only when accepted."#,
        )
        .arg(pattern_path_arg())
        .arg(input_text_arg())
        .arg(pattern_text_arg())
        .arg(input_arg().action(ArgAction::Set).help("Input string to run"))
        .arg(kind_arg())
        .arg(closure_arg())
        .arg(color_arg())
        .arg(inputs_file_arg().hide(true))
        .arg(verbose_arg().hide(true))
        .arg(format_arg().hide(true))
}

/// Run many inputs and tabulate the verdicts.
pub fn suite_command() -> Command {
    Command::new("suite")
        .about("Run a batch of inputs and report each verdict")
        .override_usage(
            "\
  rexa suite <PATTERN> --inputs <FILE>
  rexa suite -q <TEXT> -i <INPUT>...",
        )
        .after_help(
            r#"EXAMPLES:
  rexa suite -q 'a|b' -i a -i b -i ab    # inline inputs
  rexa suite -q '(ab)*' --inputs cases.txt
  rexa suite pattern.txt --inputs cases.txt --kind nfa

Input files hold one string per line. Lines are trimmed and blank lines
are skipped."#,
        )
        .arg(pattern_path_arg())
        .arg(pattern_text_arg())
        .arg(input_arg())
        .arg(inputs_file_arg())
        .arg(kind_arg())
        .arg(closure_arg())
        .arg(color_arg())
        .arg(input_text_arg().hide(true))
        .arg(verbose_arg().hide(true))
        .arg(format_arg().hide(true))
}

/// Run one input and print every step.
pub fn trace_command() -> Command {
    Command::new("trace")
        .about("Trace a run step by step")
        .override_usage(
            "\
  rexa trace <PATTERN> <INPUT>
  rexa trace -q <TEXT> <INPUT>
  rexa trace -q <TEXT> -i <INPUT>",
        )
        .after_help(
            r#"EXAMPLES:
  rexa trace -q '(ab)*' abab              # DFA states per symbol
  rexa trace -q '(ab)*' abab --kind nfa   # NFA active-set sizes
  rexa trace -q '(ab)*' abab --kind nfa -v  # NFA active sets"#,
        )
        .arg(pattern_path_arg())
        .arg(input_text_arg())
        .arg(pattern_text_arg())
        .arg(input_arg().action(ArgAction::Set).help("Input string to run"))
        .arg(kind_arg())
        .arg(closure_arg())
        .arg(verbose_arg())
        .arg(color_arg())
        .arg(inputs_file_arg().hide(true))
        .arg(format_arg().hide(true))
}

/// Print size metrics.
pub fn stats_command() -> Command {
    let cmd = Command::new("stats")
        .about("Show size metrics of the compiled automaton")
        .override_usage(
            "\
  rexa stats <PATTERN> [--kind nfa|dfa]
  rexa stats -q <TEXT> [--kind nfa|dfa]",
        )
        .after_help(
            r#"EXAMPLES:
  rexa stats -q '(a|b)*abb' --kind nfa
  rexa stats -q '(a|b)*abb' --format json"#,
        )
        .arg(pattern_path_arg())
        .arg(pattern_text_arg())
        .arg(kind_arg())
        .arg(closure_arg())
        .arg(
            clap::Arg::new("format")
                .long("format")
                .value_name("FORMAT")
                .default_value("text")
                .value_parser(["text", "json"])
                .help("Output format"),
        )
        .arg(color_arg());

    with_hidden_run_args(cmd)
}

/// Write a snapshot of the compiled automaton.
pub fn export_command() -> Command {
    let cmd = Command::new("export")
        .about("Export the compiled automaton as a JSON snapshot")
        .override_usage(
            "\
  rexa export <PATTERN> [-o <FILE>]
  rexa export -q <TEXT> [-o <FILE>]",
        )
        .after_help(
            r#"EXAMPLES:
  rexa export -q '(ab)*' -o ab.json       # write snapshot
  rexa export -q '(ab)*' --compact        # single-line JSON to stdout
  rexa export -q 'a|b' --kind nfa -o nfa.json"#,
        )
        .arg(pattern_path_arg())
        .arg(pattern_text_arg())
        .arg(kind_arg())
        .arg(closure_arg())
        .arg(output_file_arg())
        .arg(compact_arg())
        .arg(color_arg());

    with_hidden_run_args(cmd.arg(format_arg().hide(true)))
}

/// Rebuild an automaton from a snapshot.
pub fn load_command() -> Command {
    Command::new("load")
        .about("Load a snapshot, show it, and optionally run inputs")
        .override_usage(
            "\
  rexa load <SNAPSHOT>
  rexa load <SNAPSHOT> -i <INPUT>...",
        )
        .after_help(
            r#"EXAMPLES:
  rexa load ab.json                 # show the restored automaton
  rexa load ab.json -i ab -i aba    # run inputs against it
  rexa load ab.json --inputs cases.txt"#,
        )
        .arg(snapshot_path_arg())
        .arg(input_arg())
        .arg(inputs_file_arg())
        .arg(format_arg())
        .arg(color_arg())
}
