//! Dfakit: deterministic finite automata
//!
//! A DFA is the 5-tuple `(Q, Σ, q0, F, δ)`. Dfakit builds one from an
//! alphabet, a state count, an initial state and a set of final states,
//! then fills its transition table one cell at a time. It tracks how many
//! cells are still undefined and refuses to answer queries until the table
//! is complete.
//!
//! # Core Concepts
//!
//! - **Automaton**: [`Dfa`], with construction, transition definition and
//!   string evaluation
//! - **Completeness**: a building/ready lifecycle driven by the
//!   incomplete-cell counter
//! - **Errors**: failures such as an incomplete table or a foreign input
//!   symbol are [`DfaError`] values, never conflated with rejection
//!
//! # Example
//!
//! ```rust
//! use dfakit::{Dfa, DfaError, Phase};
//!
//! // Strings over {a, b} with an even number of 'a'
//! let mut dfa = Dfa::create("ab".chars(), 2, 0, [0]).unwrap();
//! dfa.add_transition(0, 'a', 1).unwrap();
//! dfa.add_transition(0, 'b', 0).unwrap();
//! dfa.add_transition(1, 'a', 0).unwrap();
//! assert_eq!(dfa.phase(), Phase::Building { remaining: 1 });
//!
//! dfa.add_transition(1, 'b', 1).unwrap();
//! assert_eq!(dfa.phase(), Phase::Ready);
//!
//! assert_eq!(dfa.accepts("aabb"), Ok(true));
//! assert_eq!(dfa.accepts("ab"), Ok(false));
//! assert_eq!(
//!     dfa.accepts("abc"),
//!     Err(DfaError::InvalidCharacter { symbol: 'c', position: 2 })
//! );
//! ```

pub mod automaton;
pub mod builder;
pub mod core;
pub mod snapshot;
pub mod validation;

// Re-export commonly used types
pub use automaton::{Dfa, DfaError, Phase};
pub use builder::{BuildError, DfaBuilder};
pub use self::core::{Alphabet, FinalStates, StateId, Step, Trace, TransitionTable};
pub use snapshot::{Snapshot, SnapshotError, SNAPSHOT_VERSION};
