use super::Span;

/// Reasons a pattern is rejected, in the order a single scan detects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    EmptyPattern,
    InvalidCharacter,
    UnbalancedParens,
    EmptyGroup,
    ConsecutiveOperators,
    MissingOperand,
}

impl DiagnosticKind {
    /// Default hint for this kind, automatically included in diagnostics.
    pub fn default_hint(&self) -> Option<&'static str> {
        match self {
            Self::InvalidCharacter => {
                Some("patterns use letters, digits, `|`, `*`, `+`, `?`, `.` and parentheses")
            }
            Self::EmptyGroup => Some("remove the group or put a symbol inside it"),
            Self::ConsecutiveOperators => Some("wrap the operand in parentheses, e.g. `(a*)|b`"),
            _ => None,
        }
    }

    /// Base message for this diagnostic kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::EmptyPattern => "regex cannot be empty",
            Self::InvalidCharacter => "invalid character in regex",
            Self::UnbalancedParens => "unbalanced parentheses",
            Self::EmptyGroup => "empty parentheses not allowed",
            Self::ConsecutiveOperators => "invalid consecutive operators",
            Self::MissingOperand => "operator is missing an operand",
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::ConsecutiveOperators => "invalid consecutive operators at position {}".to_string(),
            Self::InvalidCharacter => "invalid character {} in regex".to_string(),
            Self::MissingOperand => "{}".to_string(),
            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, msg: Option<&str>) -> String {
        match msg {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    /// The range shown to the user (underlined in output).
    pub(crate) span: Span,
    pub(crate) message: String,
    pub(crate) hints: Vec<String>,
}

impl DiagnosticMessage {
    pub(crate) fn new(kind: DiagnosticKind, span: Span, message: impl Into<String>) -> Self {
        Self {
            kind,
            span,
            message: message.into(),
            hints: kind.default_hint().map(String::from).into_iter().collect(),
        }
    }

    pub(crate) fn with_default_message(kind: DiagnosticKind, span: Span) -> Self {
        Self::new(kind, span, kind.fallback_message())
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "error at {}..{}: {}",
            self.span.start, self.span.end, self.message
        )?;
        for hint in &self.hints {
            write!(f, " (hint: {})", hint)?;
        }
        Ok(())
    }
}
