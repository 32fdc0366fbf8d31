use std::fmt;
use std::str::FromStr;

use crate::dfa::Dfa;
use crate::nfa::Nfa;
use crate::state::StateId;

/// Read-only view of a finished automaton, used by every traversal.
///
/// Implementors must return edges in a stable order so that listings of
/// identical automata are identical.
pub trait Graph {
    fn start(&self) -> StateId;

    fn is_accepting(&self, state: StateId) -> bool;

    /// Labeled out-edges of `state` in listing order.
    fn labeled_edges(&self, state: StateId) -> Vec<(char, StateId)>;

    /// Unlabeled out-edges of `state` in listing order.
    fn epsilon_edges(&self, state: StateId) -> &[StateId];
}

impl<T: Graph + ?Sized> Graph for &T {
    fn start(&self) -> StateId {
        (*self).start()
    }
    fn is_accepting(&self, state: StateId) -> bool {
        (*self).is_accepting(state)
    }
    fn labeled_edges(&self, state: StateId) -> Vec<(char, StateId)> {
        (*self).labeled_edges(state)
    }
    fn epsilon_edges(&self, state: StateId) -> &[StateId] {
        (*self).epsilon_edges(state)
    }
}

impl Graph for Nfa {
    fn start(&self) -> StateId {
        Nfa::start(self)
    }

    fn is_accepting(&self, state: StateId) -> bool {
        state == self.accept()
    }

    fn labeled_edges(&self, state: StateId) -> Vec<(char, StateId)> {
        self.state(state)
            .transitions()
            .iter()
            .flat_map(|(&symbol, targets)| targets.iter().map(move |&t| (symbol, t)))
            .collect()
    }

    fn epsilon_edges(&self, state: StateId) -> &[StateId] {
        self.state(state).epsilon()
    }
}

impl Graph for Dfa {
    fn start(&self) -> StateId {
        Dfa::start(self)
    }

    fn is_accepting(&self, state: StateId) -> bool {
        Dfa::is_accepting(self, state)
    }

    fn labeled_edges(&self, state: StateId) -> Vec<(char, StateId)> {
        self.alphabet()
            .iter()
            .copied()
            .zip(self.row(state).iter().copied())
            .collect()
    }

    fn epsilon_edges(&self, _state: StateId) -> &[StateId] {
        &[]
    }
}

/// Which kind of automaton a compilation produces.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum AutomatonKind {
    #[serde(rename = "NFA")]
    Nfa,
    #[default]
    #[serde(rename = "DFA")]
    Dfa,
}

impl fmt::Display for AutomatonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AutomatonKind::Nfa => f.write_str("NFA"),
            AutomatonKind::Dfa => f.write_str("DFA"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown automaton kind '{0}' (expected 'nfa' or 'dfa')")]
pub struct ParseKindError(pub String);

impl FromStr for AutomatonKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nfa" => Ok(AutomatonKind::Nfa),
            "dfa" => Ok(AutomatonKind::Dfa),
            _ => Err(ParseKindError(s.to_string())),
        }
    }
}

/// A compiled automaton of either kind.
#[derive(Debug, Clone)]
pub enum Automaton {
    Nfa(Nfa),
    Dfa(Dfa),
}

impl Automaton {
    pub fn kind(&self) -> AutomatonKind {
        match self {
            Automaton::Nfa(_) => AutomatonKind::Nfa,
            Automaton::Dfa(_) => AutomatonKind::Dfa,
        }
    }

    /// Number of states in the arena (reachable or not).
    pub fn len(&self) -> usize {
        match self {
            Automaton::Nfa(nfa) => nfa.len(),
            Automaton::Dfa(dfa) => dfa.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_nfa(&self) -> Option<&Nfa> {
        match self {
            Automaton::Nfa(nfa) => Some(nfa),
            Automaton::Dfa(_) => None,
        }
    }

    pub fn as_dfa(&self) -> Option<&Dfa> {
        match self {
            Automaton::Dfa(dfa) => Some(dfa),
            Automaton::Nfa(_) => None,
        }
    }
}

impl Graph for Automaton {
    fn start(&self) -> StateId {
        match self {
            Automaton::Nfa(nfa) => Graph::start(nfa),
            Automaton::Dfa(dfa) => Graph::start(dfa),
        }
    }

    fn is_accepting(&self, state: StateId) -> bool {
        match self {
            Automaton::Nfa(nfa) => Graph::is_accepting(nfa, state),
            Automaton::Dfa(dfa) => Graph::is_accepting(dfa, state),
        }
    }

    fn labeled_edges(&self, state: StateId) -> Vec<(char, StateId)> {
        match self {
            Automaton::Nfa(nfa) => nfa.labeled_edges(state),
            Automaton::Dfa(dfa) => dfa.labeled_edges(state),
        }
    }

    fn epsilon_edges(&self, state: StateId) -> &[StateId] {
        match self {
            Automaton::Nfa(nfa) => nfa.epsilon_edges(state),
            Automaton::Dfa(dfa) => dfa.epsilon_edges(state),
        }
    }
}

impl From<Nfa> for Automaton {
    fn from(nfa: Nfa) -> Self {
        Automaton::Nfa(nfa)
    }
}

impl From<Dfa> for Automaton {
    fn from(dfa: Dfa) -> Self {
        Automaton::Dfa(dfa)
    }
}
