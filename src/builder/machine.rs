//! Builder for constructing automata.

use crate::automaton::Dfa;
use crate::builder::error::BuildError;
use crate::core::StateId;
use crate::validation::{validate_definition, violations};

/// Builder for constructing automata with a fluent API.
///
/// Unlike [`Dfa::create`], `build` validates the whole definition at once
/// and reports every violation it finds.
///
/// # Example
///
/// ```rust
/// use dfakit::builder::DfaBuilder;
///
/// // Even number of 'a'
/// let dfa = DfaBuilder::new()
///     .alphabet("ab".chars())
///     .states(2)
///     .initial(0)
///     .final_state(0)
///     .row(0, [('a', 1), ('b', 0)])
///     .row(1, [('a', 0), ('b', 1)])
///     .require_complete()
///     .build()
///     .unwrap();
///
/// assert_eq!(dfa.accepts("aabb"), Ok(true));
/// assert_eq!(dfa.accepts("ab"), Ok(false));
/// ```
#[derive(Clone, Debug, Default)]
pub struct DfaBuilder {
    alphabet: Option<Vec<char>>,
    num_states: Option<usize>,
    initial: Option<StateId>,
    finals: Vec<StateId>,
    transitions: Vec<(StateId, char, StateId)>,
    require_complete: bool,
}

impl DfaBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the alphabet (required).
    pub fn alphabet<I>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        self.alphabet = Some(symbols.into_iter().collect());
        self
    }

    /// Set the number of states (required).
    pub fn states(mut self, num_states: usize) -> Self {
        self.num_states = Some(num_states);
        self
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: StateId) -> Self {
        self.initial = Some(state);
        self
    }

    /// Mark one state as accepting.
    pub fn final_state(mut self, state: StateId) -> Self {
        self.finals.push(state);
        self
    }

    /// Mark several states as accepting.
    pub fn final_states<I>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = StateId>,
    {
        self.finals.extend(states);
        self
    }

    /// Add a single transition. Later definitions of the same cell win.
    pub fn transition(mut self, from: StateId, symbol: char, to: StateId) -> Self {
        self.transitions.push((from, symbol, to));
        self
    }

    /// Add every transition leaving `from`.
    pub fn row<I>(mut self, from: StateId, moves: I) -> Self
    where
        I: IntoIterator<Item = (char, StateId)>,
    {
        self.transitions
            .extend(moves.into_iter().map(|(symbol, to)| (from, symbol, to)));
        self
    }

    /// Fail the build unless every transition is defined.
    pub fn require_complete(mut self) -> Self {
        self.require_complete = true;
        self
    }

    /// Build the automaton.
    /// Returns an error if required fields are missing or the definition
    /// is invalid.
    pub fn build(self) -> Result<Dfa, BuildError> {
        let alphabet = self.alphabet.ok_or(BuildError::MissingAlphabet)?;
        let num_states = self.num_states.ok_or(BuildError::MissingStateCount)?;
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        let checked = validate_definition(
            &alphabet,
            num_states,
            initial,
            &self.finals,
            &self.transitions,
        );
        if checked.is_failure() {
            return Err(BuildError::Invalid(violations(&checked)));
        }

        let mut dfa = Dfa::create(alphabet, num_states, initial, self.finals)?;
        for (from, symbol, to) in self.transitions {
            dfa.add_transition(from, symbol, to)?;
        }

        if self.require_complete && !dfa.is_complete() {
            return Err(BuildError::Incomplete {
                missing: dfa.missing_transitions(),
            });
        }

        Ok(dfa)
    }
}
