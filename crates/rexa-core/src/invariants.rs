//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::dfa::{Dfa, DfaBuilder};
use crate::nfa::{Nfa, NfaBuilder, NfaState};
use crate::state::StateId;

impl NfaBuilder {
    pub(crate) fn ensure_state(&self, id: StateId) -> &NfaState {
        self.states.get(id as usize).unwrap_or_else(|| {
            panic!(
                "NfaBuilder: state {id} was never allocated \
                 (edges may only connect states from the same arena)"
            )
        })
    }

    pub(crate) fn ensure_state_mut(&mut self, id: StateId) -> &mut NfaState {
        self.states.get_mut(id as usize).unwrap_or_else(|| {
            panic!(
                "NfaBuilder: state {id} was never allocated \
                 (edges may only connect states from the same arena)"
            )
        })
    }
}

impl Nfa {
    pub(crate) fn ensure_state(&self, id: StateId) -> &NfaState {
        self.states
            .get(id as usize)
            .unwrap_or_else(|| panic!("Nfa: state {id} out of range (len {})", self.states.len()))
    }
}

impl DfaBuilder {
    pub(crate) fn ensure_row_mut(&mut self, id: StateId) -> &mut Vec<Option<StateId>> {
        let len = self.rows.len();
        self.rows
            .get_mut(id as usize)
            .unwrap_or_else(|| panic!("DfaBuilder: state {id} out of range (len {len})"))
    }
}

impl Dfa {
    pub(crate) fn ensure_row(&self, id: StateId) -> &[StateId] {
        self.table
            .get(id as usize)
            .map(Vec::as_slice)
            .unwrap_or_else(|| panic!("Dfa: state {id} out of range (len {})", self.table.len()))
    }
}
