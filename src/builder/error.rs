//! Build errors for the automaton builder.

use crate::automaton::DfaError;
use crate::core::StateId;
use thiserror::Error;

/// Errors that can occur when building an automaton.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Alphabet not specified. Call .alphabet(symbols) before .build()")]
    MissingAlphabet,

    #[error("State count not specified. Call .states(n) before .build()")]
    MissingStateCount,

    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    /// Every violation found in the definition.
    #[error("Invalid automaton definition ({} violations)", .0.len())]
    Invalid(Vec<DfaError>),

    #[error("Transition table incomplete, {} transitions missing", .missing.len())]
    Incomplete { missing: Vec<(StateId, char)> },

    #[error(transparent)]
    Dfa(#[from] DfaError),
}
