//! Input symbols and edge labels.

use std::fmt;

/// How epsilon edges are spelled in listings and snapshots.
pub const EPSILON_GLYPH: &str = "ε";

/// Whether `c` can appear as an input symbol (a literal in a pattern).
pub fn is_symbol(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Whether `c` is one of the pattern operators, explicit concatenation included.
pub fn is_operator(c: char) -> bool {
    matches!(c, '*' | '+' | '?' | '|' | '.')
}

/// Label of an automaton edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Label {
    Symbol(char),
    Epsilon,
}

impl Label {
    pub fn is_epsilon(self) -> bool {
        matches!(self, Label::Epsilon)
    }

    /// Parse a label as written by `Display`.
    pub fn parse(text: &str) -> Option<Self> {
        if text == EPSILON_GLYPH {
            return Some(Label::Epsilon);
        }
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if is_symbol(c) => Some(Label::Symbol(c)),
            _ => None,
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Symbol(c) => write!(f, "{c}"),
            Label::Epsilon => f.write_str(EPSILON_GLYPH),
        }
    }
}

impl serde::Serialize for Label {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Label {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Label::parse(&text)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid edge label '{text}'")))
    }
}
