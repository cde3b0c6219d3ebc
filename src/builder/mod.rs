//! Builder API for ergonomic automaton construction.
//!
//! [`DfaBuilder`] collects a definition piece by piece and validates it as
//! a whole; the [`dfa!`](crate::dfa) macro does the same from a literal
//! transition table.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::DfaBuilder;
