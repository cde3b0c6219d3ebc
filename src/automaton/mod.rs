//! The automaton and its error taxonomy.
//!
//! A [`Dfa`] has a two-phase lifecycle:
//!
//! - **Building**: created with every transition undefined; only
//!   [`Dfa::add_transition`] is meaningful.
//! - **Ready**: every transition defined; [`Dfa::accepts`] and friends
//!   answer queries. Ready is permanent, redefinitions only overwrite.
//!
//! Evaluation never mutates the automaton, so a ready `Dfa` can be shared
//! across threads and queried concurrently without locking.

mod dfa;
pub mod error;

pub use dfa::{Dfa, Phase};
pub use error::DfaError;
