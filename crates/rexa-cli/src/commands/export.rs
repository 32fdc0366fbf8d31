use std::fs;
use std::path::PathBuf;

use log::info;
use rexa_core::{AutomatonKind, ClosureMode};

use super::run_common::{compile_or_exit, load_pattern_or_exit};

pub struct ExportArgs {
    pub pattern_path: Option<PathBuf>,
    pub pattern_text: Option<String>,
    pub kind: AutomatonKind,
    pub closure: ClosureMode,
    pub output: Option<PathBuf>,
    pub pretty: bool,
    pub color: bool,
}

pub fn run(args: ExportArgs) {
    let source = load_pattern_or_exit(args.pattern_path.as_deref(), args.pattern_text.as_deref());
    let compiled = compile_or_exit(&source, args.kind, args.closure, args.color);

    let mut json = compiled
        .snapshot()
        .to_json(args.pretty)
        .unwrap_or_else(|e| {
            eprintln!("error: {}", e);
            std::process::exit(1);
        });
    json.push('\n');

    match &args.output {
        Some(path) => {
            if let Err(e) = fs::write(path, &json) {
                eprintln!("error: failed to write '{}': {}", path.display(), e);
                std::process::exit(1);
            }
            info!("wrote {} snapshot to {}", compiled.kind(), path.display());
        }
        None => print!("{}", json),
    }
}
