//! Validation-based invariant enforcement for game snapshots.
//!
//! This module checks every invariant a [`GameState`](crate::machine::GameState)
//! must hold using Stillwater's `Validation` type, which accumulates ALL
//! violations instead of stopping at the first one.
//!
//! The game shell runs these rules after every transition when
//! `verify_invariants` is enabled, and the builder runs them on any
//! snapshot supplied from outside.
//!
//! # Example
//!
//! ```rust
//! use tictac::builder::BranchPolicy;
//! use tictac::enforcement::InvariantRules;
//! use tictac::machine::GameState;
//!
//! let rules = InvariantRules::for_policy(BranchPolicy::Truncate)
//!     .require_pred(|state| state.history().len() <= 10, "Too many moves".to_string());
//!
//! assert!(rules.enforce(&GameState::new()).is_success());
//! ```

pub mod rules;
pub mod violations;

// Re-export commonly used types
pub use rules::{CheckResult, InvariantRules, StateCheck};
pub use violations::InvariantViolation;
