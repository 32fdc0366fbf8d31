//! Thompson construction.
//!
//! Every token except `.` allocates exactly two states; `.` joins
//! two fragments with one ε-edge and allocates none. Existing states never
//! change identity, they only gain ε out-edges.

use log::debug;
use rexa_core::{Nfa, NfaBuilder, StateId};

use super::ConstructionError;
use crate::syntax::{Postfix, Token};

/// A partially built automaton on the operand stack.
#[derive(Debug, Clone, Copy)]
struct Fragment {
    start: StateId,
    accept: StateId,
}

struct Thompson {
    builder: NfaBuilder,
    stack: Vec<Fragment>,
}

/// Build an ε-NFA from postfix tokens.
pub fn build_nfa(postfix: &Postfix) -> Result<Nfa, ConstructionError> {
    let mut thompson = Thompson {
        builder: NfaBuilder::new(),
        stack: Vec::new(),
    };

    for (position, &token) in postfix.tokens().iter().enumerate() {
        thompson.apply(token, position)?;
    }

    let nfa = thompson.finish()?;
    debug!("ε-NFA for {postfix}: {} states", nfa.len());
    Ok(nfa)
}

impl Thompson {
    fn apply(&mut self, token: Token, position: usize) -> Result<(), ConstructionError> {
        let fragment = match token {
            Token::Symbol(c) => self.symbol(c),
            Token::Star => {
                let inner = self.pop(token, position)?;
                self.repeat(inner, true, true)
            }
            Token::Plus => {
                let inner = self.pop(token, position)?;
                self.repeat(inner, false, true)
            }
            Token::Optional => {
                let inner = self.pop(token, position)?;
                self.repeat(inner, true, false)
            }
            Token::Concat => {
                let right = self.pop(token, position)?;
                let left = self.pop(token, position)?;
                self.builder.add_epsilon(left.accept, right.start);
                Fragment {
                    start: left.start,
                    accept: right.accept,
                }
            }
            Token::Alternate => {
                let right = self.pop(token, position)?;
                let left = self.pop(token, position)?;
                let start = self.builder.add_state();
                let accept = self.builder.add_state();
                self.builder.add_epsilon(start, left.start);
                self.builder.add_epsilon(start, right.start);
                self.builder.add_epsilon(left.accept, accept);
                self.builder.add_epsilon(right.accept, accept);
                Fragment { start, accept }
            }
        };

        self.stack.push(fragment);
        Ok(())
    }

    fn symbol(&mut self, c: char) -> Fragment {
        let start = self.builder.add_state();
        let accept = self.builder.add_state();
        self.builder.add_transition(start, c, accept);
        Fragment { start, accept }
    }

    /// `*` is skip + loop, `+` is loop only, `?` is skip only.
    fn repeat(&mut self, inner: Fragment, skip: bool, looping: bool) -> Fragment {
        let start = self.builder.add_state();
        let accept = self.builder.add_state();
        self.builder.add_epsilon(start, inner.start);
        if skip {
            self.builder.add_epsilon(start, accept);
        }
        if looping {
            self.builder.add_epsilon(inner.accept, inner.start);
        }
        self.builder.add_epsilon(inner.accept, accept);
        Fragment { start, accept }
    }

    fn pop(&mut self, token: Token, position: usize) -> Result<Fragment, ConstructionError> {
        self.stack
            .pop()
            .ok_or(ConstructionError::OperandUnderflow {
                token: token.as_char(),
                position,
            })
    }

    fn finish(mut self) -> Result<Nfa, ConstructionError> {
        if self.stack.len() > 1 {
            return Err(ConstructionError::LeftoverOperands {
                count: self.stack.len(),
            });
        }
        let whole = self.stack.pop().ok_or(ConstructionError::EmptyPostfix)?;
        Ok(self.builder.finish(whole.start, whole.accept))
    }
}
