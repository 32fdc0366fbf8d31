//! Shunting-yard translation to postfix tokens.

use std::fmt;

use log::debug;
use rexa_core::is_symbol;

use crate::compile::ConstructionError;

/// One postfix token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Symbol(char),
    /// `*`
    Star,
    /// `+`
    Plus,
    /// `?`
    Optional,
    /// `.`
    Concat,
    /// `|`
    Alternate,
}

impl Token {
    /// Operator token spelled by `c`.
    pub fn operator(c: char) -> Option<Self> {
        Some(match c {
            '*' => Token::Star,
            '+' => Token::Plus,
            '?' => Token::Optional,
            '.' => Token::Concat,
            '|' => Token::Alternate,
            _ => return None,
        })
    }

    pub fn from_char(c: char) -> Option<Self> {
        if is_symbol(c) {
            Some(Token::Symbol(c))
        } else {
            Self::operator(c)
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Token::Symbol(c) => c,
            Token::Star => '*',
            Token::Plus => '+',
            Token::Optional => '?',
            Token::Concat => '.',
            Token::Alternate => '|',
        }
    }

    /// Binding strength; symbols have none.
    pub fn precedence(self) -> u8 {
        match self {
            Token::Star | Token::Plus | Token::Optional => 3,
            Token::Concat => 2,
            Token::Alternate => 1,
            Token::Symbol(_) => 0,
        }
    }

    pub fn is_unary(self) -> bool {
        matches!(self, Token::Star | Token::Plus | Token::Optional)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A pattern in postfix (reverse Polish) order, e.g. `ab.` for `ab`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Postfix {
    tokens: Vec<Token>,
}

impl Postfix {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Read back the canonical string form.
    pub fn parse(text: &str) -> Result<Self, ConstructionError> {
        text.chars()
            .enumerate()
            .map(|(position, c)| {
                Token::from_char(c).ok_or(ConstructionError::UnknownToken { token: c, position })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for Postfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

/// Stack entry: an operator waiting for its operands, or an open group.
#[derive(Clone, Copy)]
enum Pending {
    Group,
    Op(Token),
}

/// Translate explicitly concatenated pattern text into postfix.
///
/// Expects validated input; anything that is neither a symbol, an operator
/// nor a parenthesis is skipped, and stray `(` are dropped at the end.
pub fn to_postfix(text: &str) -> Postfix {
    let mut output = Vec::with_capacity(text.len());
    let mut stack: Vec<Pending> = Vec::new();

    for c in text.chars() {
        if is_symbol(c) {
            output.push(Token::Symbol(c));
        } else if c == '(' {
            stack.push(Pending::Group);
        } else if c == ')' {
            while let Some(Pending::Op(op)) = stack.pop() {
                output.push(op);
            }
            // Keeps a repeat bound to the whole group in `(ab)*`.
            if let Some(&Pending::Op(op)) = stack.last()
                && op.is_unary()
            {
                stack.pop();
                output.push(op);
            }
        } else if let Some(incoming) = Token::operator(c) {
            while let Some(&Pending::Op(top)) = stack.last() {
                if top.precedence() < incoming.precedence() {
                    break;
                }
                stack.pop();
                output.push(top);
            }
            stack.push(Pending::Op(incoming));
        }
    }

    while let Some(pending) = stack.pop() {
        if let Pending::Op(op) = pending {
            output.push(op);
        }
    }

    let postfix = Postfix::new(output);
    debug!("postfix for {text:?}: {postfix}");
    postfix
}
