//! Invariant violation errors.

use crate::core::Mark;
use thiserror::Error;

/// A broken game-state invariant.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InvariantViolation {
    #[error("Step 0 must be the empty board with no move")]
    InitialEntryNotEmpty,

    #[error("Current step {step} is outside the history (length {len})")]
    CurrentStepOutOfRange { step: usize, len: usize },

    #[error("Step {step} has no recorded move")]
    MissingPlacement { step: usize },

    #[error("Step {step} records a move on cell {cell} that its board does not show")]
    PlacementNotOnBoard { step: usize, cell: usize },

    #[error("Step {step} is not the previous board plus exactly one new mark")]
    BoardNotExtended { step: usize },

    #[error("Step {step} was played after the game was already won")]
    MoveAfterWin { step: usize },

    #[error("Step {step} was played by {found}, expected {expected}")]
    MarkOutOfTurn {
        step: usize,
        expected: Mark,
        found: Mark,
    },

    #[error("{found} is to move at step {step}, expected {expected}")]
    NextMarkMismatch {
        step: usize,
        expected: Mark,
        found: Mark,
    },

    #[error("Move list does not list every step in {} order", order_name(.descending))]
    MoveLinksOutOfOrder { descending: bool },

    #[error("Custom check failed: {message}")]
    CustomCheckFailed { message: String },
}

fn order_name(descending: &bool) -> &'static str {
    if *descending {
        "descending"
    } else {
        "ascending"
    }
}
