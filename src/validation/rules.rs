//! Definition checks for automata using Validation.

use crate::automaton::DfaError;
use crate::core::StateId;
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Accumulated outcome of one or more checks.
pub type Checked = Validation<(), NonEmptyVec<DfaError>>;

/// Fail fast if `num_states` cannot hold an initial state.
pub fn ensure_state_count(num_states: usize) -> Result<(), DfaError> {
    if num_states == 0 {
        Err(DfaError::NoStates)
    } else {
        Ok(())
    }
}

/// Fail fast if `state` lies outside `0..num_states`.
pub fn ensure_state(state: StateId, num_states: usize) -> Result<(), DfaError> {
    if state < num_states {
        Ok(())
    } else {
        Err(DfaError::InvalidState { state, num_states })
    }
}

fn check(result: Result<(), DfaError>) -> Checked {
    match result {
        Ok(()) => Validation::success(()),
        Err(error) => Validation::fail(error),
    }
}

/// Flag an empty alphabet and every repeated symbol.
///
/// A symbol appearing `n` times is reported `n - 1` times.
pub fn validate_alphabet(symbols: &[char]) -> Checked {
    if symbols.is_empty() {
        return Validation::fail(DfaError::EmptyAlphabet);
    }

    let mut seen = HashSet::with_capacity(symbols.len());
    let checks: Vec<Checked> = symbols
        .iter()
        .map(|&symbol| {
            if seen.insert(symbol) {
                Validation::success(())
            } else {
                Validation::fail(DfaError::DuplicateSymbol { symbol })
            }
        })
        .collect();

    Validation::all_vec(checks).map(|_| ())
}

/// Flag a zero state count and every out-of-range state reference.
pub fn validate_states(num_states: usize, initial: StateId, finals: &[StateId]) -> Checked {
    if num_states == 0 {
        return Validation::fail(DfaError::NoStates);
    }

    let checks: Vec<Checked> = std::iter::once(initial)
        .chain(finals.iter().copied())
        .map(|state| check(ensure_state(state, num_states)))
        .collect();

    Validation::all_vec(checks).map(|_| ())
}

/// Flag a transition whose states or symbol do not fit the definition.
pub fn validate_transition(
    symbols: &[char],
    num_states: usize,
    from: StateId,
    symbol: char,
    to: StateId,
) -> Checked {
    let known = if symbols.contains(&symbol) {
        Validation::success(())
    } else {
        Validation::fail(DfaError::UnknownSymbol { symbol })
    };

    Validation::all_vec(vec![
        check(ensure_state(from, num_states)),
        known,
        check(ensure_state(to, num_states)),
    ])
    .map(|_| ())
}

/// Check a full definition, collecting every violation.
pub fn validate_definition(
    symbols: &[char],
    num_states: usize,
    initial: StateId,
    finals: &[StateId],
    transitions: &[(StateId, char, StateId)],
) -> Checked {
    let mut checks = vec![
        validate_alphabet(symbols),
        validate_states(num_states, initial, finals),
    ];
    checks.extend(
        transitions
            .iter()
            .map(|&(from, symbol, to)| validate_transition(symbols, num_states, from, symbol, to)),
    );

    Validation::all_vec(checks).map(|_| ())
}

/// Flatten a failed check into a plain list of violations.
pub fn violations(checked: &Checked) -> Vec<DfaError> {
    match checked {
        Validation::Success(_) => Vec::new(),
        Validation::Failure(errors) => errors.iter().cloned().collect(),
    }
}
