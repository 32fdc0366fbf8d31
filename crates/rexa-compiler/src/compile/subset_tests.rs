use indoc::indoc;
use rexa_core::{ClosureMode, Dfa, inspect};

use super::{build_nfa, to_dfa};
use crate::syntax::{insert_concat, to_postfix};

fn dfa(pattern: &str, mode: ClosureMode) -> Dfa {
    let postfix = to_postfix(&insert_concat(pattern));
    let nfa = build_nfa(&postfix).unwrap();
    to_dfa(&nfa, mode).unwrap()
}

fn walk(dfa: &Dfa, input: &str) -> bool {
    let mut state = dfa.start();
    for c in input.chars() {
        match dfa.next(state, c) {
            Some(next) => state = next,
            None => return false,
        }
    }
    dfa.is_accepting(state)
}

#[test]
fn concatenation_routes_misses_to_dead_state() {
    let dfa = dfa("ab", ClosureMode::Epsilon);

    assert_eq!(dfa.alphabet(), &['a', 'b']);
    assert_eq!(dfa.len(), 4);
    assert!(dfa.dead_state().is_some());

    assert_eq!(
        inspect(&dfa).to_string(),
        indoc! {"
            S0 -- a --> S1
            S0 -- b --> S2
            S1 -- a --> S2
            S1 -- b --> S3
            S2 -- a --> S2
            S2 -- b --> S2
            S3 -- a --> S2
            S3 -- b --> S2

            Start: S0
            Accept: S3
        "}
    );
}

#[test]
fn start_subset_is_closure_of_nfa_start() {
    let dfa = dfa("ab", ClosureMode::Epsilon);
    assert_eq!(dfa.subset(dfa.start()).key().to_string(), "0");

    let dfa = to_dfa(
        &build_nfa(&to_postfix("a*")).unwrap(),
        ClosureMode::Epsilon,
    )
    .unwrap();
    assert_eq!(dfa.subset(dfa.start()).key().to_string(), "0,2,3");
}

#[test]
fn no_dead_state_when_every_move_succeeds() {
    let dfa = dfa("a*", ClosureMode::Epsilon);
    assert_eq!(dfa.dead_state(), None);
    assert_eq!(dfa.len(), 2);
    assert!(dfa.is_accepting(dfa.start()));
}

#[test]
fn table_is_total() {
    for pattern in ["ab", "a|b", "(a|b)*abb", "a?b+c", "0(0|1)*1"] {
        let dfa = dfa(pattern, ClosureMode::Epsilon);
        for state in 0..dfa.len() as u32 {
            for &symbol in dfa.alphabet() {
                assert!(dfa.next(state, symbol).is_some(), "{pattern}: {state} on {symbol}");
            }
        }
    }
}

#[test]
fn dead_state_never_accepts_and_loops() {
    let dfa = dfa("a|b", ClosureMode::Epsilon);
    let dead = dfa.dead_state().unwrap();
    assert!(!dfa.is_accepting(dead));
    assert!(dfa.subset(dead).is_empty());
    assert!(dfa.row(dead).iter().all(|&t| t == dead));
}

#[test]
fn subsets_are_deduplicated_by_key() {
    // Every `a` from the loop lands in the same subset.
    let dfa = dfa("(ab)*", ClosureMode::Epsilon);
    let keys: std::collections::BTreeSet<String> = (0..dfa.len() as u32)
        .map(|s| dfa.subset(s).key().to_string())
        .collect();
    assert_eq!(keys.len(), dfa.len());
}

#[test]
fn epsilon_closure_preserves_language() {
    let dfa = dfa("ab", ClosureMode::Epsilon);
    assert!(walk(&dfa, "ab"));
    assert!(!walk(&dfa, ""));
    assert!(!walk(&dfa, "a"));
    assert!(!walk(&dfa, "ba"));
}

#[test]
fn reachability_closure_over_approximates() {
    // Following labeled edges during closure lets the start subset reach
    // the accept state without reading anything.
    let dfa = dfa("ab", ClosureMode::Reachability);
    assert!(walk(&dfa, ""));
    assert!(walk(&dfa, "ab"));
    assert!(!walk(&dfa, "c"));
}
