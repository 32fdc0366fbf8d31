use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Where a pattern came from, for diagnostics headers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternSource {
    pub text: String,
    pub name: Option<String>,
}

pub fn load_pattern(
    pattern_path: Option<&Path>,
    pattern_text: Option<&str>,
) -> Result<PatternSource, String> {
    if let Some(text) = pattern_text {
        return Ok(PatternSource {
            text: text.to_owned(),
            name: None,
        });
    }

    if let Some(path) = pattern_path {
        if path.as_os_str() == "-" {
            return Ok(PatternSource {
                text: strip_line_end(&load_stdin()?).to_owned(),
                name: Some("<stdin>".to_owned()),
            });
        }
        return Ok(PatternSource {
            text: strip_line_end(&load_file(path)?).to_owned(),
            name: Some(path.to_string_lossy().into_owned()),
        });
    }

    Err("pattern is required: use positional argument or -q/--regex".to_string())
}

/// Read a file, or stdin when `path` is `-`.
pub fn load_text(path: &Path) -> Result<String, String> {
    if path.as_os_str() == "-" {
        return load_stdin();
    }
    load_file(path)
}

/// Drop the trailing newline editors add; anything else stays and is validated.
pub fn strip_line_end(text: &str) -> &str {
    text.strip_suffix("\r\n")
        .or_else(|| text.strip_suffix('\n'))
        .unwrap_or(text)
}

fn load_stdin() -> Result<String, String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| format!("failed to read stdin: {}", e))?;
    Ok(buf)
}

fn load_file(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|e| format!("failed to read '{}': {}", path.display(), e))
}
