use std::path::PathBuf;

use rexa_core::{AutomatonKind, ClosureMode, inspect};

use super::run_common::{compile_or_exit, load_pattern_or_exit};

pub struct StatsArgs {
    pub pattern_path: Option<PathBuf>,
    pub pattern_text: Option<String>,
    pub kind: AutomatonKind,
    pub closure: ClosureMode,
    pub json: bool,
    pub color: bool,
}

pub fn run(args: StatsArgs) {
    let source = load_pattern_or_exit(args.pattern_path.as_deref(), args.pattern_text.as_deref());
    let compiled = compile_or_exit(&source, args.kind, args.closure, args.color);

    let stats = inspect(compiled.automaton()).stats();
    if args.json {
        match serde_json::to_string_pretty(&stats) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: failed to serialize stats: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", stats);
    }
}
