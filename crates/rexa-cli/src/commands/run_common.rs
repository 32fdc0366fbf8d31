//! Shared logic for commands that compile a pattern or run inputs.

use std::path::Path;

use rexa_compiler::{Compiled, Diagnostics, Error, PatternBuilder};
use rexa_core::{AutomatonKind, ClosureMode};
use rexa_vm::parse_inputs;

use super::pattern_loader::{PatternSource, load_pattern, load_text};

/// Load the pattern or exit with an error.
pub fn load_pattern_or_exit(
    pattern_path: Option<&Path>,
    pattern_text: Option<&str>,
) -> PatternSource {
    load_pattern(pattern_path, pattern_text).unwrap_or_else(|msg| {
        eprintln!("error: {}", msg);
        std::process::exit(1);
    })
}

/// Compile `source` or exit, rendering validation diagnostics against it.
pub fn compile_or_exit(
    source: &PatternSource,
    kind: AutomatonKind,
    closure: ClosureMode,
    color: bool,
) -> Compiled {
    let result = PatternBuilder::new(&source.text)
        .kind(kind)
        .closure(closure)
        .compile();

    match result {
        Ok(compiled) => compiled,
        Err(Error::Validation(diagnostics)) => {
            eprint!("{}", render_diagnostics(&diagnostics, source, color));
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Render diagnostics against the pattern, headed by its file name if any.
pub fn render_diagnostics(
    diagnostics: &Diagnostics,
    source: &PatternSource,
    color: bool,
) -> String {
    let mut printer = diagnostics.printer().source(&source.text).colored(color);
    if let Some(name) = &source.name {
        printer = printer.path(name);
    }
    printer.render()
}

/// Collect inputs from `-i` values followed by the lines of `--inputs`.
pub fn collect_inputs(inputs: Vec<String>, inputs_file: Option<&Path>) -> Vec<String> {
    let mut all = inputs;
    if let Some(path) = inputs_file {
        let text = load_text(path).unwrap_or_else(|msg| {
            eprintln!("error: {}", msg);
            std::process::exit(1);
        });
        all.extend(parse_inputs(&text));
    }
    all
}
