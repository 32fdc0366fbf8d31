//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.
//! The same definition is reused across commands, hidden via `.hide(true)`
//! where a command accepts a flag only for a uniform command line.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Pattern file, or `-` for stdin (positional).
pub fn pattern_path_arg() -> Arg {
    Arg::new("pattern_path")
        .value_name("PATTERN")
        .value_parser(value_parser!(PathBuf))
        .help("Pattern file (use - for stdin)")
}

/// Inline pattern text (-q/--regex).
pub fn pattern_text_arg() -> Arg {
    Arg::new("pattern_text")
        .short('q')
        .long("regex")
        .value_name("TEXT")
        .allow_hyphen_values(true)
        .help("Inline pattern text")
}

/// Input string as a second positional, for exec and trace.
pub fn input_text_arg() -> Arg {
    Arg::new("input_text")
        .value_name("INPUT")
        .allow_hyphen_values(true)
        .help("Input string to run")
}

/// Input string (-i/--input), repeatable.
pub fn input_arg() -> Arg {
    Arg::new("input")
        .short('i')
        .long("input")
        .value_name("TEXT")
        .action(ArgAction::Append)
        .allow_hyphen_values(true)
        .help("Input string to run (repeatable)")
}

/// File with one input per line (--inputs).
pub fn inputs_file_arg() -> Arg {
    Arg::new("inputs_file")
        .long("inputs")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("File with one input per line (blank lines skipped)")
}

/// Automaton kind (--kind).
pub fn kind_arg() -> Arg {
    Arg::new("kind")
        .long("kind")
        .value_name("KIND")
        .default_value("dfa")
        .value_parser(["nfa", "dfa"])
        .help("Automaton to build")
}

/// Closure used by subset construction (--closure).
pub fn closure_arg() -> Arg {
    Arg::new("closure")
        .long("closure")
        .value_name("MODE")
        .default_value("epsilon")
        .value_parser(["epsilon", "reachability"])
        .help("Closure used when building a DFA")
}

/// Listing format (--format).
pub fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("text")
        .value_parser(["text", "dot", "json"])
        .help("Output format")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v lists active state sets)")
}

/// Output file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write to FILE instead of stdout")
}

/// Single-line JSON (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Output compact JSON")
}

/// Snapshot file (positional, required).
pub fn snapshot_path_arg() -> Arg {
    Arg::new("snapshot_path")
        .value_name("SNAPSHOT")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("Snapshot file written by `rexa export` (use - for stdin)")
}
