//! Helpers shared by compiler tests.

use rexa_core::{Automaton, StateSet};

/// Reference acceptance check written directly against the core API.
pub fn accepts(automaton: &Automaton, input: &str) -> bool {
    match automaton {
        Automaton::Nfa(nfa) => {
            let mut current = nfa.epsilon_closure(&StateSet::singleton(nfa.start()));
            for c in input.chars() {
                current = nfa.epsilon_closure(&nfa.step(&current, c));
            }
            current.contains(nfa.accept())
        }
        Automaton::Dfa(dfa) => {
            let mut state = dfa.start();
            for c in input.chars() {
                match dfa.next(state, c) {
                    Some(next) => state = next,
                    None => return false,
                }
            }
            dfa.is_accepting(state)
        }
    }
}

/// Every string over `alphabet` of length at most `max_len`, shortest first.
pub fn all_strings(alphabet: &[char], max_len: usize) -> Vec<String> {
    let mut out = vec![String::new()];
    let mut frontier = vec![String::new()];
    for _ in 0..max_len {
        let mut next = Vec::with_capacity(frontier.len() * alphabet.len());
        for prefix in &frontier {
            for &c in alphabet {
                let mut s = prefix.clone();
                s.push(c);
                next.push(s);
            }
        }
        out.extend(next.iter().cloned());
        frontier = next;
    }
    out
}

/// Symbols used by `pattern` plus one symbol it never mentions.
pub fn sample_alphabet(pattern: &str) -> Vec<char> {
    let mut symbols: Vec<char> = pattern
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();
    symbols.sort_unstable();
    symbols.dedup();
    symbols.push('Z');
    symbols
}
