//! The deterministic finite automaton.

use crate::automaton::error::DfaError;
use crate::core::{Alphabet, FinalStates, StateId, Step, Trace, TransitionTable};
use crate::validation::{ensure_state, ensure_state_count};
use log::{debug, trace};

/// Construction phase of an automaton.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Some transitions are still undefined; queries fail.
    Building { remaining: usize },

    /// Every transition is defined; queries succeed.
    Ready,
}

/// Deterministic finite automaton `(Q, Σ, q0, F, δ)`.
///
/// States are the integers `0..num_states`. The automaton is created with
/// an empty transition table, filled one cell at a time with
/// [`add_transition`](Dfa::add_transition), and can be queried once every
/// cell holds a destination.
///
/// # Example
///
/// ```rust
/// use dfakit::{Dfa, DfaError};
///
/// // Binary strings ending in 1
/// let mut dfa = Dfa::create("01".chars(), 2, 0, [1]).unwrap();
/// assert!(matches!(dfa.accepts("1"), Err(DfaError::IncompleteTable { remaining: 4 })));
///
/// for state in 0..2 {
///     dfa.add_transition(state, '0', 0).unwrap();
///     dfa.add_transition(state, '1', 1).unwrap();
/// }
///
/// assert_eq!(dfa.accepts("101"), Ok(true));
/// assert_eq!(dfa.accepts("100"), Ok(false));
/// assert_eq!(dfa.accepts(""), Ok(false));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dfa {
    alphabet: Alphabet,
    num_states: usize,
    initial_state: StateId,
    final_states: FinalStates,
    table: TransitionTable,
}

impl Dfa {
    /// Create an automaton with every transition undefined.
    ///
    /// Fails on an empty or repeated alphabet, a zero state count, an
    /// initial or final state outside `0..num_states`, or a table too large
    /// to allocate.
    pub fn create<A, F>(
        alphabet: A,
        num_states: usize,
        initial_state: StateId,
        final_states: F,
    ) -> Result<Self, DfaError>
    where
        A: IntoIterator<Item = char>,
        F: IntoIterator<Item = StateId>,
    {
        let alphabet = Alphabet::new(alphabet)?;
        ensure_state_count(num_states)?;
        ensure_state(initial_state, num_states)?;

        let final_states: FinalStates = final_states.into_iter().collect();
        for state in final_states.iter() {
            ensure_state(state, num_states)?;
        }

        let table = TransitionTable::new(num_states, alphabet.len()).ok_or(
            DfaError::TooManyStates {
                num_states,
                symbols: alphabet.len(),
            },
        )?;
        Ok(Self::assemble(
            alphabet,
            num_states,
            initial_state,
            final_states,
            table,
        ))
    }

    /// Wire validated parts together. The table must be sized
    /// `num_states × alphabet.len()`.
    pub(crate) fn assemble(
        alphabet: Alphabet,
        num_states: usize,
        initial_state: StateId,
        final_states: FinalStates,
        table: TransitionTable,
    ) -> Self {
        debug!(
            "Created automaton: {} states, alphabet {:?}, initial {}, final {:?}, {} cells undefined",
            num_states,
            alphabet.symbols(),
            initial_state,
            final_states,
            table.incomplete_cells()
        );

        Self {
            alphabet,
            num_states,
            initial_state,
            final_states,
            table,
        }
    }

    /// Column of `symbol` in the transition table.
    pub fn index_of(&self, symbol: char) -> Option<usize> {
        self.alphabet.index_of(symbol)
    }

    /// Define `δ(from, symbol) = to`.
    ///
    /// Returns the destination this call replaced, or `None` if the cell was
    /// undefined. Only first definitions count toward completeness, so
    /// redefining a cell never moves a ready automaton back to building.
    pub fn add_transition(
        &mut self,
        from: StateId,
        symbol: char,
        to: StateId,
    ) -> Result<Option<StateId>, DfaError> {
        ensure_state(from, self.num_states)?;
        let column = self
            .index_of(symbol)
            .ok_or(DfaError::UnknownSymbol { symbol })?;
        ensure_state(to, self.num_states)?;

        let was_complete = self.table.is_complete();
        let previous = self.table.set(from, column, to);

        if let Some(old) = previous {
            debug!("Redefined transition ({from}, {symbol:?}): {old} -> {to}");
        }
        if !was_complete && self.table.is_complete() {
            debug!("Transition table complete, automaton ready");
        }

        Ok(previous)
    }

    /// Decide whether `input` belongs to the language.
    ///
    /// Errors are distinct from rejection: an incomplete table or a symbol
    /// outside the alphabet never yields `Ok(false)`.
    pub fn accepts(&self, input: &str) -> Result<bool, DfaError> {
        let state = self.run(input)?;
        let accepted = self.final_states.contains(state);
        trace!("Evaluated {input:?}: state {state}, accepted {accepted}");
        Ok(accepted)
    }

    /// Consume `input` and return the state reached.
    pub fn run(&self, input: &str) -> Result<StateId, DfaError> {
        self.walk(input, |_| {})
    }

    /// Consume `input`, recording every step.
    pub fn trace(&self, input: &str) -> Result<Trace, DfaError> {
        let mut path = Trace::new(self.initial_state);
        let state = self.walk(input, |step| path.record(step))?;
        Ok(path.finish(self.final_states.contains(state)))
    }

    fn walk<F>(&self, input: &str, mut on_step: F) -> Result<StateId, DfaError>
    where
        F: FnMut(Step),
    {
        if !self.table.is_complete() {
            return Err(DfaError::IncompleteTable {
                remaining: self.table.incomplete_cells(),
            });
        }

        let mut state = self.initial_state;
        for (position, symbol) in input.chars().enumerate() {
            let column = self
                .index_of(symbol)
                .ok_or(DfaError::InvalidCharacter { symbol, position })?;
            let next = self
                .table
                .get(state, column)
                .ok_or(DfaError::IncompleteTable {
                    remaining: self.table.incomplete_cells(),
                })?;
            on_step(Step {
                from: state,
                symbol,
                to: next,
            });
            state = next;
        }

        Ok(state)
    }

    /// Defined successor of `(from, symbol)`, if any.
    pub fn transition(&self, from: StateId, symbol: char) -> Option<StateId> {
        self.index_of(symbol)
            .and_then(|column| self.table.get(from, column))
    }

    /// Every `(state, symbol)` pair still lacking a transition, row by row.
    pub fn missing_transitions(&self) -> Vec<(StateId, char)> {
        self.table
            .unset()
            .filter_map(|(state, column)| self.alphabet.symbol(column).map(|s| (state, s)))
            .collect()
    }

    pub fn phase(&self) -> Phase {
        match self.table.incomplete_cells() {
            0 => Phase::Ready,
            remaining => Phase::Building { remaining },
        }
    }

    pub fn is_complete(&self) -> bool {
        self.table.is_complete()
    }

    pub fn incomplete_cells(&self) -> usize {
        self.table.incomplete_cells()
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn num_states(&self) -> usize {
        self.num_states
    }

    pub fn initial_state(&self) -> StateId {
        self.initial_state
    }

    pub fn final_states(&self) -> &FinalStates {
        &self.final_states
    }

    pub fn is_final(&self, state: StateId) -> bool {
        self.final_states.contains(state)
    }

    pub(crate) fn table(&self) -> &TransitionTable {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ends_in_one() -> Dfa {
        let mut dfa = Dfa::create("01".chars(), 2, 0, [1]).unwrap();
        dfa.add_transition(0, '0', 0).unwrap();
        dfa.add_transition(0, '1', 1).unwrap();
        dfa.add_transition(1, '0', 0).unwrap();
        dfa.add_transition(1, '1', 1).unwrap();
        dfa
    }

    fn even_as() -> Dfa {
        let mut dfa = Dfa::create("ab".chars(), 2, 0, [0]).unwrap();
        dfa.add_transition(0, 'a', 1).unwrap();
        dfa.add_transition(0, 'b', 0).unwrap();
        dfa.add_transition(1, 'a', 0).unwrap();
        dfa.add_transition(1, 'b', 1).unwrap();
        dfa
    }

    #[test]
    fn create_sizes_table() {
        let dfa = Dfa::create("abc".chars(), 4, 0, [3]).unwrap();
        assert_eq!(dfa.incomplete_cells(), 12);
        assert_eq!(dfa.phase(), Phase::Building { remaining: 12 });
        assert_eq!(dfa.num_states(), 4);
        assert_eq!(dfa.alphabet().len(), 3);
    }

    #[test]
    fn create_rejects_out_of_range_initial() {
        assert_eq!(
            Dfa::create("01".chars(), 2, 2, [1]),
            Err(DfaError::InvalidState {
                state: 2,
                num_states: 2
            })
        );
    }

    #[test]
    fn create_rejects_out_of_range_final() {
        assert_eq!(
            Dfa::create("01".chars(), 2, 0, [0, 5]),
            Err(DfaError::InvalidState {
                state: 5,
                num_states: 2
            })
        );
    }

    #[test]
    fn create_rejects_zero_states() {
        assert_eq!(
            Dfa::create("01".chars(), 0, 0, []),
            Err(DfaError::NoStates)
        );
    }

    #[test]
    fn create_rejects_oversized_table() {
        let num_states = usize::MAX / 2 + 1;
        assert_eq!(
            Dfa::create("ab".chars(), num_states, 0, [0]),
            Err(DfaError::TooManyStates {
                num_states,
                symbols: 2
            })
        );
    }

    #[test]
    fn create_rejects_bad_alphabet() {
        assert_eq!(
            Dfa::create("".chars(), 1, 0, []),
            Err(DfaError::EmptyAlphabet)
        );
        assert_eq!(
            Dfa::create("00".chars(), 1, 0, []),
            Err(DfaError::DuplicateSymbol { symbol: '0' })
        );
    }

    #[test]
    fn index_of_finds_columns() {
        let dfa = Dfa::create("xyz".chars(), 1, 0, []).unwrap();
        assert_eq!(dfa.index_of('y'), Some(1));
        assert_eq!(dfa.index_of('w'), None);
    }

    #[test]
    fn ends_in_one_scenario() {
        let dfa = ends_in_one();
        assert_eq!(dfa.accepts("101"), Ok(true));
        assert_eq!(dfa.accepts("100"), Ok(false));
        assert_eq!(dfa.accepts(""), Ok(false));
    }

    #[test]
    fn even_as_scenario() {
        let dfa = even_as();
        assert_eq!(dfa.accepts("aabb"), Ok(true));
        assert_eq!(dfa.accepts("ab"), Ok(false));
        assert_eq!(dfa.accepts(""), Ok(true));
    }

    #[test]
    fn all_final_scenario() {
        let mut dfa = Dfa::create("abc".chars(), 1, 0, [0]).unwrap();
        for symbol in ['a', 'b', 'c'] {
            dfa.add_transition(0, symbol, 0).unwrap();
        }

        assert_eq!(dfa.accepts("abcabc"), Ok(true));
        assert_eq!(dfa.accepts(""), Ok(true));
        assert_eq!(
            dfa.accepts("abd"),
            Err(DfaError::InvalidCharacter {
                symbol: 'd',
                position: 2
            })
        );
    }

    #[test]
    fn incomplete_table_blocks_queries() {
        let mut dfa = Dfa::create("01".chars(), 2, 0, [1]).unwrap();
        dfa.add_transition(0, '0', 0).unwrap();

        assert_eq!(
            dfa.accepts(""),
            Err(DfaError::IncompleteTable { remaining: 3 })
        );
        assert_eq!(
            dfa.accepts("xyz"),
            Err(DfaError::IncompleteTable { remaining: 3 })
        );
    }

    #[test]
    fn unknown_symbol_is_reported() {
        let mut dfa = Dfa::create("01".chars(), 2, 0, [1]).unwrap();
        assert_eq!(
            dfa.add_transition(0, '2', 1),
            Err(DfaError::UnknownSymbol { symbol: '2' })
        );
        assert_eq!(dfa.incomplete_cells(), 4);
    }

    #[test]
    fn out_of_range_transition_is_rejected() {
        let mut dfa = Dfa::create("01".chars(), 2, 0, [1]).unwrap();
        assert_eq!(
            dfa.add_transition(2, '0', 1),
            Err(DfaError::InvalidState {
                state: 2,
                num_states: 2
            })
        );
        assert_eq!(
            dfa.add_transition(0, '0', 7),
            Err(DfaError::InvalidState {
                state: 7,
                num_states: 2
            })
        );
        assert_eq!(dfa.incomplete_cells(), 4);
    }

    #[test]
    fn redefinition_overwrites_without_counting() {
        let mut dfa = Dfa::create("01".chars(), 2, 0, [1]).unwrap();
        assert_eq!(dfa.add_transition(0, '0', 0), Ok(None));
        assert_eq!(dfa.add_transition(0, '0', 1), Ok(Some(0)));
        assert_eq!(dfa.incomplete_cells(), 3);
        assert_eq!(dfa.transition(0, '0'), Some(1));
    }

    #[test]
    fn ready_is_one_way() {
        let mut dfa = ends_in_one();
        assert_eq!(dfa.phase(), Phase::Ready);

        dfa.add_transition(1, '1', 0).unwrap();
        assert_eq!(dfa.phase(), Phase::Ready);
        assert_eq!(dfa.accepts("11"), Ok(false));
    }

    #[test]
    fn missing_transitions_lists_unset_cells() {
        let mut dfa = Dfa::create("ab".chars(), 2, 0, []).unwrap();
        dfa.add_transition(0, 'b', 1).unwrap();
        dfa.add_transition(1, 'a', 1).unwrap();

        assert_eq!(dfa.missing_transitions(), vec![(0, 'a'), (1, 'b')]);
        assert!(ends_in_one().missing_transitions().is_empty());
    }

    #[test]
    fn run_returns_reached_state() {
        let dfa = even_as();
        assert_eq!(dfa.run("a"), Ok(1));
        assert_eq!(dfa.run("aa"), Ok(0));
        assert_eq!(dfa.run(""), Ok(0));
    }

    #[test]
    fn trace_records_path() {
        let dfa = ends_in_one();
        let trace = dfa.trace("10").unwrap();

        assert_eq!(trace.get_path(), vec![0, 1, 0]);
        assert_eq!(
            trace.steps()[0],
            Step {
                from: 0,
                symbol: '1',
                to: 1
            }
        );
        assert!(!trace.is_accepted());
    }

    #[test]
    fn trace_fails_like_accepts() {
        let dfa = ends_in_one();
        assert_eq!(
            dfa.trace("1a"),
            Err(DfaError::InvalidCharacter {
                symbol: 'a',
                position: 1
            })
        );
    }

    #[test]
    fn evaluation_is_deterministic() {
        let dfa = even_as();
        let first = dfa.accepts("abab");
        let second = dfa.accepts("abab");
        assert_eq!(first, second);
    }

    #[test]
    fn automaton_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Dfa>();
    }
}
