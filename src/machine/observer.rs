//! Observers notified of state changes.

use crate::machine::state::GameState;
use crate::machine::transition::Action;

/// Receives every new snapshot the game publishes.
///
/// Observers are called once per successful transition, after the new
/// snapshot has been installed, in registration order. Rejected actions
/// notify nobody.
///
/// Any `FnMut(&Action, &GameState)` closure is an observer.
pub trait Observer {
    fn on_transition(&mut self, action: &Action, state: &GameState);
}

impl<F> Observer for F
where
    F: FnMut(&Action, &GameState),
{
    fn on_transition(&mut self, action: &Action, state: &GameState) {
        self(action, state)
    }
}
