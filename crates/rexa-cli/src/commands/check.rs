use std::path::PathBuf;

use rexa_compiler::validate;

use super::run_common::{load_pattern_or_exit, render_diagnostics};

pub struct CheckArgs {
    pub pattern_path: Option<PathBuf>,
    pub pattern_text: Option<String>,
    pub color: bool,
}

pub fn run(args: CheckArgs) {
    let source = load_pattern_or_exit(args.pattern_path.as_deref(), args.pattern_text.as_deref());

    let diagnostics = validate(&source.text);
    if !diagnostics.is_empty() {
        eprint!("{}", render_diagnostics(&diagnostics, &source, args.color));
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}
