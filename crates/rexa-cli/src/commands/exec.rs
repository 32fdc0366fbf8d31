use std::path::PathBuf;

use rexa_core::{AutomatonKind, ClosureMode};
use rexa_vm::Verdict;

use super::run_common::{compile_or_exit, load_pattern_or_exit};

pub struct ExecArgs {
    pub pattern_path: Option<PathBuf>,
    pub pattern_text: Option<String>,
    pub input: Option<String>,
    pub kind: AutomatonKind,
    pub closure: ClosureMode,
    pub color: bool,
}

pub fn run(args: ExecArgs) {
    let Some(input) = args.input else {
        eprintln!("error: input is required: use positional argument or -i/--input");
        std::process::exit(1);
    };

    let source = load_pattern_or_exit(args.pattern_path.as_deref(), args.pattern_text.as_deref());
    let compiled = compile_or_exit(&source, args.kind, args.closure, args.color);

    let verdict = Verdict::from_accepted(rexa_vm::run(compiled.automaton(), &input));
    println!("{}", verdict);
    if !verdict.is_accepted() {
        std::process::exit(1);
    }
}
