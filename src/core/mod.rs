//! Value types the automaton is assembled from.
//!
//! - `Alphabet`: ordered, distinct input symbols
//! - `StateId` / `FinalStates`: integer states and the accepting set
//! - `TransitionTable`: the successor grid and its completeness counter
//! - `Trace`: the path taken while evaluating one input

mod alphabet;
mod state;
mod table;
mod trace;

pub use alphabet::Alphabet;
pub use state::{FinalStates, StateId};
pub use table::TransitionTable;
pub use trace::{Step, Trace};
