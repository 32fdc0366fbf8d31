//! Simulator for compiled rexa automata.
//!
//! Decides acceptance of input strings against an ε-NFA or a DFA, with
//! optional step tracing and a batch runner for many inputs at once.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod engine;

// Re-export commonly used items at crate root
pub use engine::{
    Active, CaseResult, NoopTracer, PrintTracer, SuiteReport, Tracer, Verbosity, Verdict,
    parse_inputs, run, run_suite, run_with, simulate_dfa, simulate_nfa,
};
