use rexa_core::Dfa;

use super::trace::{Active, NoopTracer, Tracer};

/// Walk the transition table from the start state.
///
/// A symbol outside the alphabet has no table column and rejects at once.
pub fn simulate_dfa(dfa: &Dfa, input: &str) -> bool {
    exec(dfa, input, &mut NoopTracer)
}

pub(super) fn exec(dfa: &Dfa, input: &str, tracer: &mut impl Tracer) -> bool {
    let mut state = dfa.start();
    tracer.trace_start(Active::Dfa(state));

    for (position, symbol) in input.chars().enumerate() {
        let Some(next) = dfa.next(state, symbol) else {
            tracer.trace_stuck(position, symbol);
            tracer.trace_finish(false);
            return false;
        };
        state = next;
        tracer.trace_step(position, symbol, Active::Dfa(state));
    }

    let accepted = dfa.is_accepting(state);
    tracer.trace_finish(accepted);
    accepted
}
