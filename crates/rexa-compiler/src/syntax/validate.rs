//! Single-pass pattern validation.

use rexa_core::is_symbol;

use crate::diagnostics::{DiagnosticKind, Diagnostics};

/// Check `text` for problems that would make it impossible to compile.
///
/// An empty result means the pattern is valid.
pub fn validate(text: &str) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();

    if text.is_empty() {
        diagnostics.report(DiagnosticKind::EmptyPattern, 0..0).emit();
        return diagnostics;
    }

    let mut open: Vec<usize> = Vec::new();
    let mut prev: Option<(usize, char)> = None;

    for (pos, c) in text.char_indices() {
        let span = pos..pos + c.len_utf8();
        let before = prev.map(|(_, p)| p);

        match c {
            '(' => open.push(pos),
            ')' => {
                if open.pop().is_none() {
                    diagnostics
                        .report(DiagnosticKind::UnbalancedParens, span.clone())
                        .message("too many closing parentheses")
                        .emit();
                }
                match prev {
                    Some((start, '(')) => {
                        diagnostics
                            .report(DiagnosticKind::EmptyGroup, start..span.end)
                            .emit();
                    }
                    Some((at, op @ ('|' | '.'))) => {
                        diagnostics
                            .report(DiagnosticKind::MissingOperand, at..at + 1)
                            .message(format!("`{op}` has no right operand"))
                            .emit();
                    }
                    _ => {}
                }
            }
            '*' | '+' | '?' | '|' if before.is_some_and(is_repeat_or_alternate) => {
                diagnostics
                    .report(DiagnosticKind::ConsecutiveOperators, span)
                    .message(pos.to_string())
                    .emit();
            }
            '*' | '+' | '?' => {
                if !before.is_some_and(ends_operand) {
                    diagnostics
                        .report(DiagnosticKind::MissingOperand, span)
                        .message(format!("`{c}` has nothing to repeat"))
                        .emit();
                }
            }
            '|' | '.' => {
                if !before.is_some_and(ends_operand) {
                    diagnostics
                        .report(DiagnosticKind::MissingOperand, span)
                        .message(format!("`{c}` has no left operand"))
                        .emit();
                }
            }
            c if is_symbol(c) => {}
            _ => {
                diagnostics
                    .report(DiagnosticKind::InvalidCharacter, span)
                    .message(format!("`{}`", c.escape_debug()))
                    .emit();
            }
        }

        prev = Some((pos, c));
    }

    if let Some((at, op @ ('|' | '.'))) = prev {
        diagnostics
            .report(DiagnosticKind::MissingOperand, at..at + 1)
            .message(format!("`{op}` has no right operand"))
            .emit();
    }

    for start in open {
        diagnostics
            .report(DiagnosticKind::UnbalancedParens, start..start + 1)
            .message("unclosed parentheses")
            .emit();
    }

    diagnostics
}

fn is_repeat_or_alternate(c: char) -> bool {
    matches!(c, '*' | '+' | '?' | '|')
}

/// Whether an operand can end at `c`.
///
/// Invalid characters count as operands so that one bad character yields a
/// single diagnostic.
fn ends_operand(c: char) -> bool {
    !matches!(c, '(' | '|' | '.')
}
