//! Validation of automaton definitions.
//!
//! [`Dfa::create`](crate::Dfa::create) stops at the first problem. The
//! checks here use stillwater's `Validation` to accumulate ALL violations
//! instead, so a definition assembled from user input can be corrected in
//! a single pass.
//!
//! # Example
//!
//! ```rust
//! use dfakit::validation::{validate_definition, violations};
//!
//! let checked = validate_definition(&['0', '0'], 2, 3, &[1], &[(0, '2', 1)]);
//! assert!(checked.is_failure());
//! assert_eq!(violations(&checked).len(), 3);
//! ```

pub mod rules;

pub use rules::{
    ensure_state, ensure_state_count, validate_alphabet, validate_definition, validate_states,
    validate_transition, violations, Checked,
};
