//! rexa compiler: pattern text to finite automata.
//!
//! The pipeline runs strictly forward:
//! - `syntax` - validation, concatenation insertion, postfix translation
//! - `compile` - Thompson construction of an ε-NFA and subset construction of a DFA
//! - `diagnostics` - error reporting for rejected patterns
//! - `pattern` - high-level `PatternBuilder` / `compile` facade

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod compile;
pub mod diagnostics;
pub mod pattern;
pub mod syntax;

#[cfg(test)]
mod test_utils;

pub use compile::{ConstructionError, build_nfa, to_dfa};
pub use diagnostics::{DiagnosticKind, Diagnostics, DiagnosticsPrinter, Span};
pub use pattern::{CompileOptions, Compiled, Parsed, PatternBuilder, compile};
pub use syntax::{Postfix, Token, insert_concat, to_postfix, validate};

/// Errors that can occur while compiling a pattern.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The pattern text was rejected before any state was allocated.
    #[error("pattern validation failed ({})", problem_count(.0))]
    Validation(Diagnostics),

    #[error(transparent)]
    Construction(#[from] ConstructionError),

    #[error(transparent)]
    Snapshot(#[from] rexa_core::SnapshotError),
}

fn problem_count(diagnostics: &Diagnostics) -> String {
    match diagnostics.len() {
        1 => "1 problem".to_string(),
        n => format!("{n} problems"),
    }
}

/// Result type for compiler operations.
pub type Result<T> = std::result::Result<T, Error>;
