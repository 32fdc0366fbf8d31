//! Show the intermediate forms a pattern passes through before construction.

use std::path::PathBuf;

use rexa_compiler::{Error, PatternBuilder};
use rexa_core::Colors;

use super::run_common::{load_pattern_or_exit, render_diagnostics};

pub struct PostfixArgs {
    pub pattern_path: Option<PathBuf>,
    pub pattern_text: Option<String>,
    pub color: bool,
}

pub fn run(args: PostfixArgs) {
    let source = load_pattern_or_exit(args.pattern_path.as_deref(), args.pattern_text.as_deref());

    let parsed = match PatternBuilder::new(&source.text).parse() {
        Ok(parsed) => parsed,
        Err(Error::Validation(diagnostics)) => {
            eprint!("{}", render_diagnostics(&diagnostics, &source, args.color));
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let c = Colors::new(args.color);
    println!("{}concat:{}  {}", c.dim, c.reset, parsed.concat());
    println!("{}postfix:{} {}", c.dim, c.reset, parsed.postfix());
}
