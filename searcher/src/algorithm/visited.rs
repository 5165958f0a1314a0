//! Bookkeeping for states which have already been expanded.

use std::collections::HashSet;
use std::default::Default;
use std::hash::Hash;

/// The set of states already popped from the frontier.
///
/// Only ever grows during a search, and lives exactly as
/// long as the search which owns it.
#[derive(Debug)]
pub(crate) struct Visited<S>
where
    S: Eq + Hash,
{
    states: HashSet<S>,
}

impl<S> Default for Visited<S>
where
    S: Eq + Hash,
{
    fn default() -> Self {
        Visited {
            states: HashSet::default(),
        }
    }
}

impl<S> Visited<S>
where
    S: Eq + Hash,
{
    /// Mark a state as visited.
    ///
    /// Returns false when the state had already been visited.
    pub(crate) fn insert(&mut self, state: S) -> bool {
        self.states.insert(state)
    }

    pub(crate) fn len(&self) -> usize {
        self.states.len()
    }
}
