//! State identifiers and the final-state set.
//!
//! States carry no payload: a state is its index in `[0, num_states)`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Index of a state within an automaton.
pub type StateId = usize;

/// Set of accepting states.
///
/// Ordered so that iteration, serialization and debug output are stable.
///
/// # Example
///
/// ```rust
/// use dfakit::core::FinalStates;
///
/// let finals = FinalStates::from_iter([2, 0, 2]);
/// assert_eq!(finals.len(), 2);
/// assert!(finals.contains(0));
/// assert!(!finals.contains(1));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FinalStates {
    states: BTreeSet<StateId>,
}

impl FinalStates {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check membership.
    pub fn contains(&self, state: StateId) -> bool {
        self.states.contains(&state)
    }

    /// Insert a state, returning `false` if it was already present.
    pub fn insert(&mut self, state: StateId) -> bool {
        self.states.insert(state)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Iterate in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = StateId> + '_ {
        self.states.iter().copied()
    }

    /// Largest state in the set, if any.
    pub fn max(&self) -> Option<StateId> {
        self.states.last().copied()
    }
}

impl FromIterator<StateId> for FinalStates {
    fn from_iter<I: IntoIterator<Item = StateId>>(iter: I) -> Self {
        Self {
            states: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_collapse() {
        let finals = FinalStates::from_iter([1, 1, 3]);
        assert_eq!(finals.len(), 2);
        assert_eq!(finals.iter().collect::<Vec<_>>(), vec![1, 3]);
    }

    #[test]
    fn membership() {
        let finals = FinalStates::from_iter([0, 4]);
        assert!(finals.contains(0));
        assert!(finals.contains(4));
        assert!(!finals.contains(2));
    }

    #[test]
    fn insert_reports_novelty() {
        let mut finals = FinalStates::new();
        assert!(finals.insert(2));
        assert!(!finals.insert(2));
        assert_eq!(finals.max(), Some(2));
    }

    #[test]
    fn empty_set() {
        let finals = FinalStates::new();
        assert!(finals.is_empty());
        assert_eq!(finals.max(), None);
    }

    #[test]
    fn serializes_as_plain_list() {
        let finals = FinalStates::from_iter([3, 1]);
        let json = serde_json::to_string(&finals).unwrap();
        assert_eq!(json, "[1,3]");

        let deserialized: FinalStates = serde_json::from_str(&json).unwrap();
        assert_eq!(finals, deserialized);
    }
}
