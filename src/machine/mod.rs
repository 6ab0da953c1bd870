//! The game state machine.
//!
//! This module splits the game into a pure core and an imperative shell:
//!
//! - **Snapshots**: [`GameState`] values with pure transitions that return
//!   a new snapshot or a [`Rejection`](crate::core::Rejection)
//! - **Reducer**: [`reduce`] maps each user [`Action`] onto a transition
//! - **Shell**: [`Game`] owns the current snapshot and notifies
//!   [`Observer`]s after every successful transition

mod game;
mod observer;
mod state;
mod transition;

pub use game::Game;
pub use observer::Observer;
pub use state::GameState;
pub use transition::{reduce, Action, StepResult};
