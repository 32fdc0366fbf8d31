//! Execution engine.
//!
//! Both simulators are pure: they read the automaton and keep only per-call
//! working sets, so one automaton can be shared by any number of callers.
//! Symbols outside the automaton's alphabet reject; they are never errors.

mod dfa;
mod nfa;
mod suite;
mod trace;


pub use dfa::simulate_dfa;
pub use nfa::simulate_nfa;
pub use suite::{CaseResult, SuiteReport, Verdict, parse_inputs, run_suite};
pub use trace::{Active, NoopTracer, PrintTracer, Tracer, Verbosity};

use rexa_core::Automaton;

/// Whether `automaton` accepts `input`.
pub fn run(automaton: &Automaton, input: &str) -> bool {
    run_with(automaton, input, &mut NoopTracer)
}

/// Like `run`, reporting every step to `tracer`.
pub fn run_with(automaton: &Automaton, input: &str, tracer: &mut impl Tracer) -> bool {
    match automaton {
        Automaton::Nfa(nfa) => nfa::exec(nfa, input, tracer),
        Automaton::Dfa(dfa) => dfa::exec(dfa, input, tracer),
    }
}
