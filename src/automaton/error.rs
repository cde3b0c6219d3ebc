//! Errors raised while defining or querying an automaton.

use crate::core::StateId;
use thiserror::Error;

/// Errors that can occur when constructing or evaluating an automaton.
///
/// None of these are fatal; every operation reports them to its caller and
/// leaves the automaton unchanged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DfaError {
    #[error("Alphabet must contain at least one symbol")]
    EmptyAlphabet,

    #[error("Symbol {symbol:?} appears more than once in the alphabet")]
    DuplicateSymbol { symbol: char },

    #[error("Automaton must have at least one state")]
    NoStates,

    #[error("Transition table for {num_states} states over {symbols} symbols is too large")]
    TooManyStates { num_states: usize, symbols: usize },

    #[error("State {state} is out of range (automaton has {num_states} states)")]
    InvalidState { state: StateId, num_states: usize },

    #[error("Symbol {symbol:?} is not part of the alphabet")]
    UnknownSymbol { symbol: char },

    /// A query was made before every transition was defined.
    #[error("Transition table is incomplete ({remaining} cells undefined)")]
    IncompleteTable { remaining: usize },

    /// The input contains a symbol outside the alphabet.
    #[error("Invalid character {symbol:?} at position {position}")]
    InvalidCharacter { symbol: char, position: usize },
}
