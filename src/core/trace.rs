//! Evaluation traces.
//!
//! A trace records the path an automaton took while consuming an input,
//! one step per symbol.

use super::state::StateId;
use serde::{Deserialize, Serialize};

/// A single move of the automaton.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// State before reading the symbol
    pub from: StateId,
    /// Symbol consumed
    pub symbol: char,
    /// State after reading the symbol
    pub to: StateId,
}

/// Ordered record of the steps taken on one input.
///
/// # Example
///
/// ```rust
/// use dfakit::dfa;
///
/// let dfa = dfa! {
///     alphabet: "ab",
///     states: 2,
///     initial: 0,
///     final: [1],
///     transitions: {
///         0: ['a' => 1, 'b' => 0],
///         1: ['a' => 1, 'b' => 0],
///     }
/// }
/// .unwrap();
///
/// let trace = dfa.trace("ba").unwrap();
/// assert_eq!(trace.get_path(), vec![0, 0, 1]);
/// assert_eq!(trace.final_state(), 1);
/// assert!(trace.is_accepted());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    start: StateId,
    steps: Vec<Step>,
    accepted: bool,
}

impl Trace {
    pub(crate) fn new(start: StateId) -> Self {
        Self {
            start,
            steps: Vec::new(),
            accepted: false,
        }
    }

    pub(crate) fn record(&mut self, step: Step) {
        self.steps.push(step);
    }

    pub(crate) fn finish(mut self, accepted: bool) -> Self {
        self.accepted = accepted;
        self
    }

    /// State the automaton started in.
    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// States visited, starting state first.
    ///
    /// Always one longer than the number of steps.
    pub fn get_path(&self) -> Vec<StateId> {
        let mut path = Vec::with_capacity(self.steps.len() + 1);
        path.push(self.start);
        path.extend(self.steps.iter().map(|step| step.to));
        path
    }

    /// State reached after the last step.
    pub fn final_state(&self) -> StateId {
        self.steps.last().map_or(self.start, |step| step.to)
    }

    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    /// Number of symbols consumed.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Trace {
        let mut trace = Trace::new(0);
        trace.record(Step {
            from: 0,
            symbol: 'a',
            to: 1,
        });
        trace.record(Step {
            from: 1,
            symbol: 'b',
            to: 2,
        });
        trace.finish(true)
    }

    #[test]
    fn new_trace_is_empty() {
        let trace = Trace::new(3);
        assert!(trace.is_empty());
        assert_eq!(trace.get_path(), vec![3]);
        assert_eq!(trace.final_state(), 3);
        assert!(!trace.is_accepted());
    }

    #[test]
    fn path_follows_steps() {
        let trace = sample();
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.get_path(), vec![0, 1, 2]);
        assert_eq!(trace.final_state(), 2);
        assert_eq!(trace.steps()[1].symbol, 'b');
    }

    #[test]
    fn finish_sets_verdict() {
        assert!(sample().is_accepted());
        assert!(!Trace::new(0).finish(false).is_accepted());
    }

    #[test]
    fn trace_serializes_correctly() {
        let trace = sample();
        let json = serde_json::to_string(&trace).unwrap();
        let deserialized: Trace = serde_json::from_str(&json).unwrap();
        assert_eq!(trace, deserialized);
    }
}
