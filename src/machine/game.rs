//! Game shell that owns the current snapshot and publishes changes.

use crate::builder::{GameBuilder, GameConfig};
use crate::enforcement::InvariantRules;
use crate::machine::observer::Observer;
use crate::machine::state::GameState;
use crate::machine::transition::{reduce, Action, StepResult};
use crate::view::View;
use stillwater::validation::Validation;
use tracing::{debug, error, trace};

/// A running game.
///
/// `Game` is the imperative shell around the pure reducers: it holds the
/// single current [`GameState`], swaps in each new snapshot and notifies
/// observers. Rejected actions leave everything untouched.
///
/// # Example
///
/// ```rust
/// use tictac::core::Mark;
/// use tictac::machine::Game;
///
/// let mut game = Game::new();
/// game.apply_move(0);
/// game.apply_move(0); // Occupied: silently ignored
///
/// assert_eq!(game.state().history().len(), 2);
/// assert_eq!(game.state().next_mark(), Mark::O);
/// ```
pub struct Game {
    state: GameState,
    config: GameConfig,
    rules: InvariantRules,
    observers: Vec<Box<dyn Observer>>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Create a fresh game with the default configuration.
    pub fn new() -> Self {
        let config = GameConfig::default();
        let state = GameState::with_move_order(config.move_order_descending);
        Self::from_parts(state, config, Vec::new())
    }

    pub fn builder() -> GameBuilder {
        GameBuilder::new()
    }

    pub(crate) fn from_parts(
        state: GameState,
        config: GameConfig,
        observers: Vec<Box<dyn Observer>>,
    ) -> Self {
        Self {
            rules: InvariantRules::for_policy(config.branch_policy),
            state,
            config,
            observers,
        }
    }

    /// Current snapshot (pure)
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Register an observer for every future transition.
    pub fn subscribe<O: Observer + 'static>(&mut self, observer: O) {
        self.observers.push(Box::new(observer));
    }

    /// Apply a user action.
    ///
    /// On success the new snapshot replaces the current one and every
    /// observer is notified. On rejection nothing changes.
    pub fn dispatch(&mut self, action: Action) -> StepResult {
        let result = reduce(&self.state, action, self.config.branch_policy);

        match &result {
            StepResult::Transitioned(next) => {
                if self.config.verify_invariants {
                    self.verify(next);
                }
                trace!(
                    ?action,
                    step = next.current_step(),
                    entries = next.history().len(),
                    "transition applied"
                );
                self.state = next.clone();
                for observer in &mut self.observers {
                    observer.on_transition(&action, &self.state);
                }
            }
            StepResult::Rejected(rejection) => {
                debug!(?action, %rejection, "action rejected");
            }
        }

        result
    }

    /// Cell click.
    pub fn apply_move(&mut self, cell: usize) -> StepResult {
        self.dispatch(Action::PlaceMark(cell))
    }

    /// Move-list click.
    pub fn jump_to(&mut self, step: usize) -> StepResult {
        self.dispatch(Action::JumpTo(step))
    }

    /// Sort-toggle click.
    pub fn toggle_move_order(&mut self) -> StepResult {
        self.dispatch(Action::ToggleMoveOrder)
    }

    /// Everything a UI needs to draw the current snapshot.
    pub fn view(&self) -> View {
        View::project(&self.state, &self.config)
    }

    fn verify(&self, state: &GameState) {
        if let Validation::Failure(errors) = self.rules.enforce(state) {
            for violation in errors.iter() {
                error!(%violation, "game invariant violated");
            }
        }
    }
}
