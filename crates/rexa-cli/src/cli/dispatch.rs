//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs populated from clap, ignoring hidden flags
//! - `From<*Params>` impls bridging dispatch to command handlers
//! - Positional shifting for exec/trace (`-q` turns the first positional into the input)

use std::path::PathBuf;

use clap::ArgMatches;
use rexa_core::{AutomatonKind, ClosureMode};
use rexa_vm::Verbosity;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::dump::{DumpArgs, DumpFormat};
use crate::commands::exec::ExecArgs;
use crate::commands::export::ExportArgs;
use crate::commands::load::LoadArgs;
use crate::commands::postfix::PostfixArgs;
use crate::commands::stats::StatsArgs;
use crate::commands::suite::SuiteArgs;
use crate::commands::trace::TraceArgs;

pub struct CheckParams {
    pub pattern_path: Option<PathBuf>,
    pub pattern_text: Option<String>,
    pub color: ColorChoice,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern_path: m.get_one::<PathBuf>("pattern_path").cloned(),
            pattern_text: m.get_one::<String>("pattern_text").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            pattern_path: p.pattern_path,
            pattern_text: p.pattern_text,
            color: p.color.should_colorize(),
        }
    }
}

pub struct PostfixParams {
    pub pattern_path: Option<PathBuf>,
    pub pattern_text: Option<String>,
    pub color: ColorChoice,
}

impl PostfixParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern_path: m.get_one::<PathBuf>("pattern_path").cloned(),
            pattern_text: m.get_one::<String>("pattern_text").cloned(),
            color: parse_color(m),
        }
    }
}

impl From<PostfixParams> for PostfixArgs {
    fn from(p: PostfixParams) -> Self {
        Self {
            pattern_path: p.pattern_path,
            pattern_text: p.pattern_text,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub pattern_path: Option<PathBuf>,
    pub pattern_text: Option<String>,
    pub kind: AutomatonKind,
    pub closure: ClosureMode,
    pub format: DumpFormat,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern_path: m.get_one::<PathBuf>("pattern_path").cloned(),
            pattern_text: m.get_one::<String>("pattern_text").cloned(),
            kind: parse_kind(m),
            closure: parse_closure(m),
            format: parse_format(m),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            pattern_path: p.pattern_path,
            pattern_text: p.pattern_text,
            kind: p.kind,
            closure: p.closure,
            format: p.format,
            color: p.color.should_colorize(),
        }
    }
}

pub struct ExecParams {
    pub pattern_path: Option<PathBuf>,
    pub pattern_text: Option<String>,
    pub input: Option<String>,
    pub kind: AutomatonKind,
    pub closure: ClosureMode,
    pub color: ColorChoice,
}

impl ExecParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let pattern_text = m.get_one::<String>("pattern_text").cloned();
        let (pattern_path, input) = shift_positional_to_input(
            pattern_text.is_some(),
            m.get_one::<PathBuf>("pattern_path").cloned(),
            single_input(m),
        );

        Self {
            pattern_path,
            pattern_text,
            input,
            kind: parse_kind(m),
            closure: parse_closure(m),
            color: parse_color(m),
        }
    }
}

impl From<ExecParams> for ExecArgs {
    fn from(p: ExecParams) -> Self {
        Self {
            pattern_path: p.pattern_path,
            pattern_text: p.pattern_text,
            input: p.input,
            kind: p.kind,
            closure: p.closure,
            color: p.color.should_colorize(),
        }
    }
}

pub struct SuiteParams {
    pub pattern_path: Option<PathBuf>,
    pub pattern_text: Option<String>,
    pub inputs: Vec<String>,
    pub inputs_file: Option<PathBuf>,
    pub kind: AutomatonKind,
    pub closure: ClosureMode,
    pub color: ColorChoice,
}

impl SuiteParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern_path: m.get_one::<PathBuf>("pattern_path").cloned(),
            pattern_text: m.get_one::<String>("pattern_text").cloned(),
            inputs: many_inputs(m),
            inputs_file: m.get_one::<PathBuf>("inputs_file").cloned(),
            kind: parse_kind(m),
            closure: parse_closure(m),
            color: parse_color(m),
        }
    }
}

impl From<SuiteParams> for SuiteArgs {
    fn from(p: SuiteParams) -> Self {
        Self {
            pattern_path: p.pattern_path,
            pattern_text: p.pattern_text,
            inputs: p.inputs,
            inputs_file: p.inputs_file,
            kind: p.kind,
            closure: p.closure,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TraceParams {
    pub pattern_path: Option<PathBuf>,
    pub pattern_text: Option<String>,
    pub input: Option<String>,
    pub kind: AutomatonKind,
    pub closure: ClosureMode,
    pub verbose: u8,
    pub color: ColorChoice,
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let pattern_text = m.get_one::<String>("pattern_text").cloned();
        let (pattern_path, input) = shift_positional_to_input(
            pattern_text.is_some(),
            m.get_one::<PathBuf>("pattern_path").cloned(),
            single_input(m),
        );

        Self {
            pattern_path,
            pattern_text,
            input,
            kind: parse_kind(m),
            closure: parse_closure(m),
            verbose: m.get_count("verbose"),
            color: parse_color(m),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        let verbosity = match p.verbose {
            0 => Verbosity::Default,
            _ => Verbosity::Verbose,
        };

        Self {
            pattern_path: p.pattern_path,
            pattern_text: p.pattern_text,
            input: p.input,
            kind: p.kind,
            closure: p.closure,
            verbosity,
            color: p.color.should_colorize(),
        }
    }
}

pub struct StatsParams {
    pub pattern_path: Option<PathBuf>,
    pub pattern_text: Option<String>,
    pub kind: AutomatonKind,
    pub closure: ClosureMode,
    pub json: bool,
    pub color: ColorChoice,
}

impl StatsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern_path: m.get_one::<PathBuf>("pattern_path").cloned(),
            pattern_text: m.get_one::<String>("pattern_text").cloned(),
            kind: parse_kind(m),
            closure: parse_closure(m),
            json: m.get_one::<String>("format").map(|s| s.as_str()) == Some("json"),
            color: parse_color(m),
        }
    }
}

impl From<StatsParams> for StatsArgs {
    fn from(p: StatsParams) -> Self {
        Self {
            pattern_path: p.pattern_path,
            pattern_text: p.pattern_text,
            kind: p.kind,
            closure: p.closure,
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

pub struct ExportParams {
    pub pattern_path: Option<PathBuf>,
    pub pattern_text: Option<String>,
    pub kind: AutomatonKind,
    pub closure: ClosureMode,
    pub output: Option<PathBuf>,
    pub compact: bool,
    pub color: ColorChoice,
}

impl ExportParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            pattern_path: m.get_one::<PathBuf>("pattern_path").cloned(),
            pattern_text: m.get_one::<String>("pattern_text").cloned(),
            kind: parse_kind(m),
            closure: parse_closure(m),
            output: m.get_one::<PathBuf>("output").cloned(),
            compact: m.get_flag("compact"),
            color: parse_color(m),
        }
    }
}

impl From<ExportParams> for ExportArgs {
    fn from(p: ExportParams) -> Self {
        Self {
            pattern_path: p.pattern_path,
            pattern_text: p.pattern_text,
            kind: p.kind,
            closure: p.closure,
            output: p.output,
            pretty: !p.compact,
            color: p.color.should_colorize(),
        }
    }
}

pub struct LoadParams {
    pub snapshot_path: PathBuf,
    pub inputs: Vec<String>,
    pub inputs_file: Option<PathBuf>,
    pub format: DumpFormat,
    pub color: ColorChoice,
}

impl LoadParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            snapshot_path: m.get_one::<PathBuf>("snapshot_path").cloned().unwrap(),
            inputs: many_inputs(m),
            inputs_file: m.get_one::<PathBuf>("inputs_file").cloned(),
            format: parse_format(m),
            color: parse_color(m),
        }
    }
}

impl From<LoadParams> for LoadArgs {
    fn from(p: LoadParams) -> Self {
        Self {
            snapshot_path: p.snapshot_path,
            inputs: p.inputs,
            inputs_file: p.inputs_file,
            format: p.format,
            color: p.color.should_colorize(),
        }
    }
}

/// Parse --color flag into ColorChoice.
fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}

fn parse_kind(m: &ArgMatches) -> AutomatonKind {
    m.get_one::<String>("kind")
        .and_then(|s| s.parse().ok())
        .unwrap_or_default()
}

fn parse_closure(m: &ArgMatches) -> ClosureMode {
    m.get_one::<String>("closure")
        .and_then(|s| s.parse().ok())
        .unwrap_or_default()
}

fn parse_format(m: &ArgMatches) -> DumpFormat {
    match m.get_one::<String>("format").map(|s| s.as_str()) {
        Some("dot") => DumpFormat::Dot,
        Some("json") => DumpFormat::Json,
        _ => DumpFormat::Text,
    }
}

/// `-i` wins over the positional input.
fn single_input(m: &ArgMatches) -> Option<String> {
    m.get_one::<String>("input")
        .or_else(|| m.get_one::<String>("input_text"))
        .cloned()
}

fn many_inputs(m: &ArgMatches) -> Vec<String> {
    m.get_many::<String>("input")
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

/// When -q is used with a single positional arg, treat it as the input.
/// This enables: `rexa exec -q 'a*' aaa`
fn shift_positional_to_input(
    has_pattern_text: bool,
    pattern_path: Option<PathBuf>,
    input: Option<String>,
) -> (Option<PathBuf>, Option<String>) {
    match (has_pattern_text, pattern_path, input) {
        (true, Some(path), None) => (None, Some(path.to_string_lossy().into_owned())),
        (_, path, input) => (path, input),
    }
}
