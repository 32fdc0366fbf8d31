//! Deterministic finite automaton with a total transition table.

use crate::state::{IdAllocator, StateId, StateSet};

/// Errors raised when sealing a DFA.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DfaTableError {
    #[error("state {state} has no transition on '{symbol}'")]
    MissingTransition { state: StateId, symbol: char },

    #[error("start state {0} was never allocated")]
    UnknownStart(StateId),
}

/// Mutable table used while a DFA is being assembled.
#[derive(Debug)]
pub struct DfaBuilder {
    alphabet: Vec<char>,
    pub(crate) rows: Vec<Vec<Option<StateId>>>,
    subsets: Vec<StateSet>,
    accepting: StateSet,
    dead: Option<StateId>,
    ids: IdAllocator,
}

impl DfaBuilder {
    /// Create a builder over `alphabet` (sorted and deduplicated here).
    pub fn new(alphabet: impl IntoIterator<Item = char>) -> Self {
        let mut alphabet: Vec<char> = alphabet.into_iter().collect();
        alphabet.sort_unstable();
        alphabet.dedup();
        Self {
            alphabet,
            rows: Vec::new(),
            subsets: Vec::new(),
            accepting: StateSet::new(),
            dead: None,
            ids: IdAllocator::new(),
        }
    }

    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    /// Allocate a state standing for `subset` of NFA states.
    pub fn add_state(&mut self, subset: StateSet) -> StateId {
        let id = self.ids.next_id();
        self.rows.push(vec![None; self.alphabet.len()]);
        self.subsets.push(subset);
        id
    }

    /// The shared dead state, created on first use.
    ///
    /// It represents the empty subset, self-loops on every symbol and never
    /// accepts.
    pub fn dead_state(&mut self) -> StateId {
        if let Some(dead) = self.dead {
            return dead;
        }
        let dead = self.add_state(StateSet::new());
        for index in 0..self.alphabet.len() {
            self.set_transition(dead, index, dead);
        }
        self.dead = Some(dead);
        dead
    }

    /// The dead state, if one has been created yet.
    pub fn dead_state_id(&self) -> Option<StateId> {
        self.dead
    }

    /// Set the successor of `from` on the symbol at `symbol_index`.
    pub fn set_transition(&mut self, from: StateId, symbol_index: usize, to: StateId) {
        self.ensure_row_mut(from)[symbol_index] = Some(to);
    }

    pub fn mark_accepting(&mut self, state: StateId) {
        self.accepting.insert(state);
    }

    pub fn len(&self) -> usize {
        self.ids.allocated()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Seal the table. Every cell must be filled.
    pub fn finish(self, start: StateId) -> Result<Dfa, DfaTableError> {
        if start as usize >= self.rows.len() {
            return Err(DfaTableError::UnknownStart(start));
        }

        let mut table = Vec::with_capacity(self.rows.len());
        for (state, row) in self.rows.into_iter().enumerate() {
            let mut filled = Vec::with_capacity(row.len());
            for (index, cell) in row.into_iter().enumerate() {
                let Some(target) = cell else {
                    return Err(DfaTableError::MissingTransition {
                        state: state as StateId,
                        symbol: self.alphabet[index],
                    });
                };
                filled.push(target);
            }
            table.push(filled);
        }

        Ok(Dfa {
            alphabet: self.alphabet,
            table,
            subsets: self.subsets,
            accepting: self.accepting,
            start,
            dead: self.dead,
        })
    }
}

/// A finished DFA.
///
/// `table[state][i]` is the successor of `state` on `alphabet[i]`; the table
/// is total over the alphabet.
#[derive(Debug, Clone)]
pub struct Dfa {
    alphabet: Vec<char>,
    pub(crate) table: Vec<Vec<StateId>>,
    subsets: Vec<StateSet>,
    accepting: StateSet,
    start: StateId,
    dead: Option<StateId>,
}

impl Dfa {
    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Sorted input alphabet.
    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    pub fn symbol_index(&self, symbol: char) -> Option<usize> {
        self.alphabet.binary_search(&symbol).ok()
    }

    /// Successor of `state` on `symbol`, or `None` if the symbol is not in
    /// the alphabet.
    pub fn next(&self, state: StateId, symbol: char) -> Option<StateId> {
        let index = self.symbol_index(symbol)?;
        Some(self.ensure_row(state)[index])
    }

    /// Successors of `state`, parallel to `alphabet()`.
    pub fn row(&self, state: StateId) -> &[StateId] {
        self.ensure_row(state)
    }

    pub fn is_accepting(&self, state: StateId) -> bool {
        self.accepting.contains(state)
    }

    pub fn accepting(&self) -> &StateSet {
        &self.accepting
    }

    pub fn dead_state(&self) -> Option<StateId> {
        self.dead
    }

    /// The NFA states `state` stands for (empty for the dead state).
    pub fn subset(&self, state: StateId) -> &StateSet {
        &self.subsets[state as usize]
    }
}
