//! Automaton construction from postfix tokens.
//!
//! - `thompson`: postfix → ε-NFA, one fragment per token
//! - `subset`: ε-NFA → DFA by subset construction over a FIFO worklist

mod error;
mod subset;
mod thompson;

#[cfg(test)]
mod subset_tests;

pub use error::ConstructionError;
pub use subset::to_dfa;
pub use thompson::build_nfa;
