use std::path::PathBuf;

use rexa_core::{AutomatonKind, ClosureMode};
use rexa_vm::run_suite;

use super::run_common::{collect_inputs, compile_or_exit, load_pattern_or_exit};

pub struct SuiteArgs {
    pub pattern_path: Option<PathBuf>,
    pub pattern_text: Option<String>,
    pub inputs: Vec<String>,
    pub inputs_file: Option<PathBuf>,
    pub kind: AutomatonKind,
    pub closure: ClosureMode,
    pub color: bool,
}

pub fn run(args: SuiteArgs) {
    let source = load_pattern_or_exit(args.pattern_path.as_deref(), args.pattern_text.as_deref());
    let inputs = collect_inputs(args.inputs, args.inputs_file.as_deref());
    if inputs.is_empty() {
        eprintln!("error: no inputs: use -i/--input or --inputs");
        std::process::exit(1);
    }

    let compiled = compile_or_exit(&source, args.kind, args.closure, args.color);
    let report = run_suite(compiled.automaton(), &inputs);
    println!("{}", report);
}
