//! Rebuild an automaton from a snapshot and show or run it.

use std::path::PathBuf;

use rexa_compiler::Compiled;
use rexa_core::{Colors, inspect};
use rexa_vm::run_suite;

use super::dump::{DumpFormat, format_listing};
use super::pattern_loader::load_text;
use super::run_common::collect_inputs;

pub struct LoadArgs {
    pub snapshot_path: PathBuf,
    pub inputs: Vec<String>,
    pub inputs_file: Option<PathBuf>,
    pub format: DumpFormat,
    pub color: bool,
}

pub fn run(args: LoadArgs) {
    let text = load_text(&args.snapshot_path).unwrap_or_else(|msg| {
        eprintln!("error: {}", msg);
        std::process::exit(1);
    });

    let compiled = Compiled::from_json(&text).unwrap_or_else(|e| {
        eprintln!(
            "error: cannot load '{}': {}",
            args.snapshot_path.display(),
            e
        );
        std::process::exit(1);
    });

    let inputs = collect_inputs(args.inputs, args.inputs_file.as_deref());
    if !inputs.is_empty() {
        println!("{}", run_suite(compiled.automaton(), &inputs));
        return;
    }

    let listing = inspect(compiled.automaton());
    if args.format == DumpFormat::Text {
        let c = Colors::new(args.color);
        println!("{}type:{}    {}", c.dim, c.reset, compiled.kind());
        if let Some(regex) = compiled.regex() {
            println!("{}regex:{}   {}", c.dim, c.reset, regex);
        }
        println!("{}postfix:{} {}", c.dim, c.reset, compiled.postfix());
        println!();
    }
    print!("{}", format_listing(&listing, args.format, args.color));
}
