//! User actions and the reducer that applies them.

use crate::builder::BranchPolicy;
use crate::core::Rejection;
use crate::machine::state::GameState;
use serde::{Deserialize, Serialize};

/// A user interaction, one per clickable thing on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// A cell was clicked
    PlaceMark(usize),

    /// A move-list entry was clicked
    JumpTo(usize),

    /// The sort toggle was clicked
    ToggleMoveOrder,
}

/// Result of reducing a single action
#[derive(Clone, Debug, PartialEq)]
pub enum StepResult {
    /// The action produced a new snapshot
    Transitioned(GameState),

    /// The action was not allowed; the snapshot is unchanged
    Rejected(Rejection),
}

impl StepResult {
    pub fn is_transitioned(&self) -> bool {
        matches!(self, Self::Transitioned(_))
    }

    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Rejected(rejection) => Some(*rejection),
            Self::Transitioned(_) => None,
        }
    }
}

/// Apply `action` to `state` (pure).
pub fn reduce(state: &GameState, action: Action, policy: BranchPolicy) -> StepResult {
    let next = match action {
        Action::PlaceMark(cell) => state.apply_move(cell, policy),
        Action::JumpTo(step) => state.jump_to(step),
        Action::ToggleMoveOrder => Ok(state.toggle_move_order()),
    };

    match next {
        Ok(next) => StepResult::Transitioned(next),
        Err(rejection) => StepResult::Rejected(rejection),
    }
}
