#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for rexa automata.
//!
//! Two layers:
//! - **Construction layer**: `NfaBuilder` / `DfaBuilder` own a mutable state
//!   arena and an explicit id allocator for the duration of one compilation.
//! - **Sealed layer**: `Nfa` / `Dfa` are immutable once built and can be
//!   shared read-only by any number of simulations.
//!
//! Everything that walks a finished automaton (listing, stats, snapshots)
//! goes through the `Graph` trait.

mod automaton;
mod colors;
mod dfa;
mod inspect;
mod invariants;
mod nfa;
mod snapshot;
mod state;
mod symbol;

#[cfg(test)]
mod dfa_tests;
#[cfg(test)]
mod state_tests;

pub use automaton::{Automaton, AutomatonKind, Graph, ParseKindError};
pub use colors::Colors;
pub use dfa::{Dfa, DfaBuilder, DfaTableError};
pub use inspect::{Edge, Listing, Stats, inspect};
pub use nfa::{ClosureMode, Nfa, NfaBuilder, NfaState, ParseClosureError};
pub use snapshot::{SNAPSHOT_VERSION, Snapshot, SnapshotEdge, SnapshotError};
pub use state::{IdAllocator, StateId, StateSet, SubsetKey};
pub use symbol::{EPSILON_GLYPH, Label, is_operator, is_symbol};
