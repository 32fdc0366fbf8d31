use crate::{DfaBuilder, DfaTableError, StateSet};

#[test]
fn alphabet_is_sorted_and_deduplicated() {
    let builder = DfaBuilder::new(['b', 'a', 'b']);
    assert_eq!(builder.alphabet(), &['a', 'b']);
}

#[test]
fn dead_state_is_shared_and_self_looping() {
    let mut builder = DfaBuilder::new(['a', 'b']);
    let start = builder.add_state(StateSet::singleton(0));
    let dead = builder.dead_state();
    assert_eq!(builder.dead_state(), dead);

    builder.set_transition(start, 0, start);
    builder.set_transition(start, 1, dead);
    let dfa = builder.finish(start).unwrap();

    assert_eq!(dfa.dead_state(), Some(dead));
    assert_eq!(dfa.next(dead, 'a'), Some(dead));
    assert_eq!(dfa.next(dead, 'b'), Some(dead));
    assert!(!dfa.is_accepting(dead));
    assert!(dfa.subset(dead).is_empty());
}

#[test]
fn next_outside_alphabet_is_none() {
    let mut builder = DfaBuilder::new(['a']);
    let s = builder.add_state(StateSet::singleton(0));
    builder.set_transition(s, 0, s);
    let dfa = builder.finish(s).unwrap();

    assert_eq!(dfa.next(s, 'a'), Some(s));
    assert_eq!(dfa.next(s, 'z'), None);
}

#[test]
fn finish_rejects_missing_cells() {
    let mut builder = DfaBuilder::new(['a', 'b']);
    let s = builder.add_state(StateSet::singleton(0));
    builder.set_transition(s, 0, s);

    let err = builder.finish(s).unwrap_err();
    assert_eq!(
        err,
        DfaTableError::MissingTransition {
            state: 0,
            symbol: 'b'
        }
    );
    assert_eq!(err.to_string(), "state 0 has no transition on 'b'");
}

#[test]
fn finish_rejects_unknown_start() {
    let builder = DfaBuilder::new(['a']);
    assert_eq!(builder.finish(3).unwrap_err(), DfaTableError::UnknownStart(3));
}

#[test]
fn accepting_states_and_subsets_are_kept() {
    let mut builder = DfaBuilder::new(['a']);
    let s = builder.add_state([0, 2].into_iter().collect());
    let t = builder.add_state(StateSet::singleton(1));
    builder.set_transition(s, 0, t);
    builder.set_transition(t, 0, t);
    builder.mark_accepting(t);
    let dfa = builder.finish(s).unwrap();

    assert_eq!(dfa.len(), 2);
    assert!(dfa.is_accepting(t));
    assert!(!dfa.is_accepting(s));
    assert_eq!(dfa.subset(s).key().to_string(), "0,2");
    assert_eq!(dfa.row(s), &[t]);
    assert_eq!(dfa.dead_state(), None);
}
