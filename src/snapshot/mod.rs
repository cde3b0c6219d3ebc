//! Snapshot and restore for automata.
//!
//! A snapshot captures an automaton's full definition, including a
//! partially filled transition table, so it can be stored and rebuilt after
//! a process restart. Snapshots encode to JSON or to a compact binary form.

use crate::automaton::Dfa;
use crate::core::{Alphabet, FinalStates, StateId, TransitionTable};
use crate::validation::{ensure_state, ensure_state_count};
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable snapshot of an automaton definition.
///
/// # Example
///
/// ```rust
/// use dfakit::{dfa, Dfa, Snapshot};
///
/// let dfa = dfa! {
///     alphabet: "01",
///     states: 2,
///     initial: 0,
///     final: [1],
///     transitions: {
///         0: ['0' => 0, '1' => 1],
///         1: ['0' => 0, '1' => 1],
///     }
/// }
/// .unwrap();
///
/// let json = dfa.snapshot().to_json().unwrap();
/// let restored = Dfa::restore(&Snapshot::from_json(&json).unwrap()).unwrap();
/// assert_eq!(restored.accepts("011"), Ok(true));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: String,

    /// When snapshot was created
    pub timestamp: DateTime<Utc>,

    /// Alphabet, in column order
    pub alphabet: Vec<char>,

    pub num_states: usize,

    pub initial_state: StateId,

    /// Accepting states, ascending
    pub final_states: Vec<StateId>,

    /// Transition cells in row-major order; `None` marks an undefined cell
    pub transitions: Vec<Option<StateId>>,
}

impl Snapshot {
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(json).map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        bincode::deserialize(bytes)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))
    }
}

impl Dfa {
    /// Capture the current definition.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            alphabet: self.alphabet().symbols().to_vec(),
            num_states: self.num_states(),
            initial_state: self.initial_state(),
            final_states: self.final_states().iter().collect(),
            transitions: self.table().cells().to_vec(),
        }
    }

    /// Rebuild an automaton from a snapshot.
    ///
    /// The incomplete-cell count is recomputed from the stored cells, so a
    /// snapshot taken mid-construction restores in its building phase.
    pub fn restore(snapshot: &Snapshot) -> Result<Dfa, SnapshotError> {
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: snapshot.version,
                supported: SNAPSHOT_VERSION,
            });
        }

        let alphabet = Alphabet::new(snapshot.alphabet.iter().copied())?;
        let num_states = snapshot.num_states;
        ensure_state_count(num_states)?;
        ensure_state(snapshot.initial_state, num_states)?;
        for &state in &snapshot.final_states {
            ensure_state(state, num_states)?;
        }
        for &target in snapshot.transitions.iter().flatten() {
            ensure_state(target, num_states)?;
        }

        let symbols = alphabet.len();
        let table = TransitionTable::from_cells(num_states, symbols, snapshot.transitions.clone())
            .ok_or_else(|| {
                SnapshotError::ValidationFailed(
                    match TransitionTable::cell_count(num_states, symbols) {
                        Some(expected) => format!(
                            "expected {expected} transition cells, found {}",
                            snapshot.transitions.len()
                        ),
                        None => format!(
                            "transition table for {num_states} states over {symbols} symbols is too large"
                        ),
                    },
                )
            })?;

        debug!("Restoring automaton from snapshot {}", snapshot.id);

        let final_states: FinalStates = snapshot.final_states.iter().copied().collect();
        Ok(Dfa::assemble(
            alphabet,
            num_states,
            snapshot.initial_state,
            final_states,
            table,
        ))
    }
}
