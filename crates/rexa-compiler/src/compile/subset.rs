//! Subset construction.

use std::collections::VecDeque;

use indexmap::IndexMap;
use log::{debug, trace};
use rexa_core::{ClosureMode, Dfa, DfaBuilder, Nfa, StateId, StateSet, SubsetKey};

use super::ConstructionError;

/// Convert an ε-NFA into a DFA whose table is total over the NFA's alphabet.
///
/// DFA states are deduplicated by the canonical key of the NFA subset they
/// stand for. An empty subset goes to one shared dead state. `mode` picks
/// the closure applied after every move; only `ClosureMode::Epsilon`
/// preserves the language.
pub fn to_dfa(nfa: &Nfa, mode: ClosureMode) -> Result<Dfa, ConstructionError> {
    let mut builder = DfaBuilder::new(nfa.alphabet());
    let alphabet = builder.alphabet().to_vec();

    let mut known: IndexMap<SubsetKey, StateId> = IndexMap::new();
    let mut queue: VecDeque<(StateId, StateSet)> = VecDeque::new();

    let seed = nfa.closure(&StateSet::singleton(nfa.start()), mode);
    let start = builder.add_state(seed.clone());
    if seed.contains(nfa.accept()) {
        builder.mark_accepting(start);
    }
    known.insert(seed.key(), start);
    queue.push_back((start, seed));

    while let Some((from, subset)) = queue.pop_front() {
        trace!("expanding D{from} = {{{}}}", subset.key());

        for (index, &symbol) in alphabet.iter().enumerate() {
            let moved = nfa.step(&subset, symbol);
            let target = nfa.closure(&moved, mode);

            let to = if target.is_empty() {
                if builder.dead_state_id().is_none() {
                    debug!("subset construction needs a dead state");
                }
                builder.dead_state()
            } else {
                let key = target.key();
                match known.get(&key) {
                    Some(&existing) => existing,
                    None => {
                        let id = builder.add_state(target.clone());
                        if target.contains(nfa.accept()) {
                            builder.mark_accepting(id);
                        }
                        trace!("D{id} = {{{key}}} via '{symbol}' from D{from}");
                        known.insert(key, id);
                        queue.push_back((id, target));
                        id
                    }
                }
            };

            builder.set_transition(from, index, to);
        }
    }

    let dfa = builder.finish(start)?;
    debug!(
        "DFA ({mode} closure): {} states over {} symbols",
        dfa.len(),
        dfa.alphabet().len()
    );
    Ok(dfa)
}
