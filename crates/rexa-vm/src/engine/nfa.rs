use rexa_core::{Nfa, StateSet};

use super::trace::{Active, NoopTracer, Tracer};

/// Simulate an ε-NFA by tracking the set of active states.
///
/// Only ε-edges are followed between symbols. An empty active set does not
/// end the run early; it simply stays empty until the input is consumed.
pub fn simulate_nfa(nfa: &Nfa, input: &str) -> bool {
    exec(nfa, input, &mut NoopTracer)
}

pub(super) fn exec(nfa: &Nfa, input: &str, tracer: &mut impl Tracer) -> bool {
    let mut current = nfa.epsilon_closure(&StateSet::singleton(nfa.start()));
    tracer.trace_start(Active::Nfa(&current));

    for (position, symbol) in input.chars().enumerate() {
        current = nfa.epsilon_closure(&nfa.step(&current, symbol));
        if current.is_empty() {
            tracer.trace_stuck(position, symbol);
        } else {
            tracer.trace_step(position, symbol, Active::Nfa(&current));
        }
    }

    let accepted = current.contains(nfa.accept());
    tracer.trace_finish(accepted);
    accepted
}
