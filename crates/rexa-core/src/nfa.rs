//! Epsilon non-deterministic finite automaton.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;

use crate::state::{IdAllocator, StateId, StateSet};

/// One arena slot of an ε-NFA.
#[derive(Debug, Clone, Default)]
pub struct NfaState {
    /// Labeled out-edges, in insertion order.
    transitions: IndexMap<char, Vec<StateId>>,
    /// Unlabeled out-edges, in insertion order.
    epsilon: Vec<StateId>,
}

impl NfaState {
    pub fn transitions(&self) -> &IndexMap<char, Vec<StateId>> {
        &self.transitions
    }

    pub fn epsilon(&self) -> &[StateId] {
        &self.epsilon
    }

    /// Successors on `symbol` (empty if none).
    pub fn on(&self, symbol: char) -> &[StateId] {
        self.transitions.get(&symbol).map_or(&[], Vec::as_slice)
    }
}

/// Mutable arena used while an ε-NFA is being assembled.
#[derive(Debug, Default)]
pub struct NfaBuilder {
    pub(crate) states: Vec<NfaState>,
    ids: IdAllocator,
}

impl NfaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh state with no edges.
    pub fn add_state(&mut self) -> StateId {
        let id = self.ids.next_id();
        self.states.push(NfaState::default());
        id
    }

    /// Add `from --symbol--> to`. Duplicate edges are ignored.
    pub fn add_transition(&mut self, from: StateId, symbol: char, to: StateId) {
        self.ensure_state(to);
        let targets = self
            .ensure_state_mut(from)
            .transitions
            .entry(symbol)
            .or_default();
        if !targets.contains(&to) {
            targets.push(to);
        }
    }

    /// Add `from --ε--> to`. Duplicate edges are ignored.
    pub fn add_epsilon(&mut self, from: StateId, to: StateId) {
        self.ensure_state(to);
        let epsilon = &mut self.ensure_state_mut(from).epsilon;
        if !epsilon.contains(&to) {
            epsilon.push(to);
        }
    }

    /// Number of states allocated so far.
    pub fn len(&self) -> usize {
        self.ids.allocated()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Seal the arena into an immutable automaton.
    pub fn finish(self, start: StateId, accept: StateId) -> Nfa {
        self.ensure_state(start);
        self.ensure_state(accept);
        Nfa {
            states: self.states,
            start,
            accept,
        }
    }
}

/// A finished ε-NFA with exactly one start and one accept state.
///
/// The arena is the single source of truth for every state's edges, so there
/// is no separate "all transitions" table to keep in sync.
#[derive(Debug, Clone)]
pub struct Nfa {
    pub(crate) states: Vec<NfaState>,
    start: StateId,
    accept: StateId,
}

impl Nfa {
    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn accept(&self) -> StateId {
        self.accept
    }

    /// Number of states in the arena.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn state(&self, id: StateId) -> &NfaState {
        self.ensure_state(id)
    }

    /// All states with their ids, in allocation order.
    pub fn states(&self) -> impl Iterator<Item = (StateId, &NfaState)> + '_ {
        self.states
            .iter()
            .enumerate()
            .map(|(i, s)| (i as StateId, s))
    }

    /// Every labeled symbol used anywhere in the arena, sorted.
    pub fn alphabet(&self) -> Vec<char> {
        let symbols: BTreeSet<char> = self
            .states
            .iter()
            .flat_map(|s| s.transitions.keys().copied())
            .collect();
        symbols.into_iter().collect()
    }

    /// Union of the `symbol` successors of every state in `states`.
    ///
    /// No closure is applied.
    pub fn step(&self, states: &StateSet, symbol: char) -> StateSet {
        let mut reached = StateSet::new();
        for id in states.iter() {
            reached.extend(self.state(id).on(symbol).iter().copied());
        }
        reached
    }

    /// States reachable from `seeds` through ε-edges only (seeds included).
    pub fn epsilon_closure(&self, seeds: &StateSet) -> StateSet {
        self.expand(seeds, false)
    }

    /// States reachable from `seeds` through ε-edges *and* labeled edges.
    ///
    /// This is not an epsilon closure. It treats every labeled edge as if it
    /// were also unlabeled, which is how older exports built their DFAs.
    pub fn reachability_closure(&self, seeds: &StateSet) -> StateSet {
        self.expand(seeds, true)
    }

    /// Closure under the given mode.
    pub fn closure(&self, seeds: &StateSet, mode: ClosureMode) -> StateSet {
        match mode {
            ClosureMode::Epsilon => self.epsilon_closure(seeds),
            ClosureMode::Reachability => self.reachability_closure(seeds),
        }
    }

    fn expand(&self, seeds: &StateSet, follow_labeled: bool) -> StateSet {
        let mut closure = seeds.clone();
        let mut stack: Vec<StateId> = seeds.iter().collect();

        while let Some(id) = stack.pop() {
            let state = self.state(id);
            if follow_labeled {
                for targets in state.transitions.values() {
                    for &next in targets {
                        if closure.insert(next) {
                            stack.push(next);
                        }
                    }
                }
            }
            for &next in &state.epsilon {
                if closure.insert(next) {
                    stack.push(next);
                }
            }
        }

        closure
    }
}

/// Which closure the subset construction applies after every move.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ClosureMode {
    /// Textbook ε-closure. The resulting DFA accepts the same language as the NFA.
    #[default]
    Epsilon,
    /// Follow labeled edges too. Kept for parity with automata exported by
    /// earlier tools; the resulting DFA generally accepts a larger language.
    Reachability,
}

impl fmt::Display for ClosureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClosureMode::Epsilon => f.write_str("epsilon"),
            ClosureMode::Reachability => f.write_str("reachability"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown closure mode '{0}' (expected 'epsilon' or 'reachability')")]
pub struct ParseClosureError(pub String);

impl FromStr for ClosureMode {
    type Err = ParseClosureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "epsilon" | "eps" => Ok(ClosureMode::Epsilon),
            "reachability" | "reach" => Ok(ClosureMode::Reachability),
            _ => Err(ParseClosureError(s.to_string())),
        }
    }
}
