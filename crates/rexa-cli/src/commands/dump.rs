use std::path::PathBuf;

use rexa_core::{AutomatonKind, ClosureMode, Colors, Listing, inspect};

use super::run_common::{compile_or_exit, load_pattern_or_exit};

/// How a listing is written to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DumpFormat {
    #[default]
    Text,
    Dot,
    Json,
}

pub struct DumpArgs {
    pub pattern_path: Option<PathBuf>,
    pub pattern_text: Option<String>,
    pub kind: AutomatonKind,
    pub closure: ClosureMode,
    pub format: DumpFormat,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let source = load_pattern_or_exit(args.pattern_path.as_deref(), args.pattern_text.as_deref());
    let compiled = compile_or_exit(&source, args.kind, args.closure, args.color);

    let listing = inspect(compiled.automaton());
    print!("{}", format_listing(&listing, args.format, args.color));
}

/// Render `listing` in `format`. Shared with `load`.
pub fn format_listing(listing: &Listing, format: DumpFormat, color: bool) -> String {
    match format {
        DumpFormat::Text => listing.render(Colors::new(color)),
        DumpFormat::Dot => listing.to_dot(),
        DumpFormat::Json => {
            let mut json = serde_json::to_string_pretty(listing).unwrap_or_else(|e| {
                eprintln!("error: failed to serialize listing: {}", e);
                std::process::exit(1);
            });
            json.push('\n');
            json
        }
    }
}
