//! Trace a run for debugging.

use std::path::PathBuf;

use rexa_core::{AutomatonKind, ClosureMode, Colors};
use rexa_vm::{PrintTracer, Verbosity, run_with};

use super::run_common::{compile_or_exit, load_pattern_or_exit};

pub struct TraceArgs {
    pub pattern_path: Option<PathBuf>,
    pub pattern_text: Option<String>,
    pub input: Option<String>,
    pub kind: AutomatonKind,
    pub closure: ClosureMode,
    pub verbosity: Verbosity,
    pub color: bool,
}

pub fn run(args: TraceArgs) {
    let Some(input) = args.input else {
        eprintln!("error: input is required: use positional argument or -i/--input");
        std::process::exit(1);
    };

    let source = load_pattern_or_exit(args.pattern_path.as_deref(), args.pattern_text.as_deref());
    let compiled = compile_or_exit(&source, args.kind, args.closure, args.color);

    let mut tracer = PrintTracer::new(args.verbosity, Colors::new(args.color));
    let accepted = run_with(compiled.automaton(), &input, &mut tracer);
    tracer.print();

    if !accepted {
        std::process::exit(1);
    }
}
