//! Build errors for games and their configuration.

use crate::enforcement::InvariantViolation;
use thiserror::Error;

/// Errors that can occur when configuring and building a game.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Invalid game configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("Initial state breaks {} invariant(s): {}", .0.len(), describe(.0))]
    InvalidState(Vec<InvariantViolation>),
}

fn describe(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
