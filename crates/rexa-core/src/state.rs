//! State identifiers and state sets.

use std::collections::BTreeSet;
use std::fmt;

/// A state identifier. Doubles as the index into the owning arena.
pub type StateId = u32;

/// Hands out state identifiers for a single automaton under construction.
///
/// Identifiers are dense, start at zero and are never reused. Each builder
/// owns its own allocator, so two compilations never share a counter.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    next: StateId,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next identifier.
    pub fn next_id(&mut self) -> StateId {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Number of identifiers handed out so far.
    pub fn allocated(&self) -> usize {
        self.next as usize
    }
}

/// An ordered set of states.
///
/// Iteration is always ascending, which is what makes `key()` canonical.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct StateSet {
    states: BTreeSet<StateId>,
}

impl StateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set containing a single state.
    pub fn singleton(state: StateId) -> Self {
        let mut set = Self::new();
        set.insert(state);
        set
    }

    /// Insert a state. Returns `true` if it was not present.
    pub fn insert(&mut self, state: StateId) -> bool {
        self.states.insert(state)
    }

    pub fn contains(&self, state: StateId) -> bool {
        self.states.contains(&state)
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Iterate in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = StateId> + '_ {
        self.states.iter().copied()
    }

    /// Union `other` into `self`.
    pub fn union_with(&mut self, other: &StateSet) {
        self.states.extend(other.iter());
    }

    /// Canonical dedup key for this set.
    pub fn key(&self) -> SubsetKey {
        SubsetKey(self.iter().collect())
    }
}

impl fmt::Debug for StateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<StateId> for StateSet {
    fn from_iter<I: IntoIterator<Item = StateId>>(iter: I) -> Self {
        Self {
            states: iter.into_iter().collect(),
        }
    }
}

impl Extend<StateId> for StateSet {
    fn extend<I: IntoIterator<Item = StateId>>(&mut self, iter: I) {
        self.states.extend(iter);
    }
}

/// Canonical identity of a set of NFA states: the sorted ids.
///
/// Two subsets with the same members always produce equal keys, regardless of
/// the order in which their members were discovered. Displays as the ids
/// joined with `,`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubsetKey(Vec<StateId>);

impl SubsetKey {
    pub fn as_slice(&self) -> &[StateId] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SubsetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, id) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{id}")?;
        }
        Ok(())
    }
}
