//! Builder for constructing games.

use crate::builder::config::{BranchPolicy, GameConfig};
use crate::builder::error::BuildError;
use crate::enforcement::InvariantRules;
use crate::machine::{Game, GameState, Observer};
use stillwater::validation::Validation;

/// Builder for constructing games with a fluent API.
///
/// # Example
///
/// ```rust
/// use tictac::builder::{BranchPolicy, GameBuilder};
///
/// let game = GameBuilder::new()
///     .branch_policy(BranchPolicy::Preserve)
///     .highlight_winning_line(false)
///     .build()
///     .unwrap();
///
/// assert_eq!(game.state().history().len(), 1);
/// ```
#[derive(Default)]
pub struct GameBuilder {
    config: GameConfig,
    initial: Option<GameState>,
    observers: Vec<Box<dyn Observer>>,
}

impl GameBuilder {
    /// Create a new builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn branch_policy(mut self, policy: BranchPolicy) -> Self {
        self.config.branch_policy = policy;
        self
    }

    pub fn highlight_winning_line(mut self, enabled: bool) -> Self {
        self.config.highlight_winning_line = enabled;
        self
    }

    pub fn move_order_descending(mut self, descending: bool) -> Self {
        self.config.move_order_descending = descending;
        self
    }

    pub fn verify_invariants(mut self, enabled: bool) -> Self {
        self.config.verify_invariants = enabled;
        self
    }

    /// Start from an existing snapshot instead of a fresh board.
    ///
    /// The snapshot is checked against every invariant of the configured
    /// branch policy when the game is built.
    pub fn initial_state(mut self, state: GameState) -> Self {
        self.initial = Some(state);
        self
    }

    /// Register an observer notified after every successful transition.
    pub fn observer<O: Observer + 'static>(mut self, observer: O) -> Self {
        self.observers.push(Box::new(observer));
        self
    }

    /// Build the game.
    /// Returns an error if a supplied initial state is inconsistent.
    pub fn build(self) -> Result<Game, BuildError> {
        let state = match self.initial {
            Some(state) => {
                let rules = InvariantRules::for_policy(self.config.branch_policy);
                if let Validation::Failure(errors) = rules.enforce(&state) {
                    return Err(BuildError::InvalidState(errors.iter().cloned().collect()));
                }
                state
            }
            None => GameState::with_move_order(self.config.move_order_descending),
        };

        Ok(Game::from_parts(state, self.config, self.observers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enforcement::InvariantViolation;
    use crate::machine::Action;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn default_builder_starts_fresh_game() {
        let game = GameBuilder::new().build().unwrap();

        assert_eq!(game.state(), &GameState::new());
        assert_eq!(game.config().branch_policy, BranchPolicy::Truncate);
    }

    #[test]
    fn fluent_api_sets_config() {
        let game = GameBuilder::new()
            .branch_policy(BranchPolicy::Preserve)
            .highlight_winning_line(false)
            .move_order_descending(true)
            .verify_invariants(true)
            .build()
            .unwrap();

        let config = game.config();
        assert_eq!(config.branch_policy, BranchPolicy::Preserve);
        assert!(!config.highlight_winning_line);
        assert!(config.move_order_descending);
        assert!(config.verify_invariants);
        assert!(game.state().move_order_descending());
    }

    #[test]
    fn builder_accepts_consistent_initial_state() {
        let state = GameState::new()
            .apply_move(4, BranchPolicy::Truncate)
            .unwrap();
        let game = GameBuilder::new()
            .initial_state(state.clone())
            .build()
            .unwrap();

        assert_eq!(game.state(), &state);
    }

    #[test]
    fn builder_rejects_inconsistent_initial_state() {
        let state = GameState::new()
            .apply_move(4, BranchPolicy::Truncate)
            .unwrap();
        let mut value = serde_json::to_value(&state).unwrap();
        value["current_step"] = serde_json::json!(3);
        let broken: GameState = serde_json::from_value(value).unwrap();

        let result = GameBuilder::new().initial_state(broken).build();

        match result {
            Err(BuildError::InvalidState(violations)) => {
                assert!(violations.contains(&InvariantViolation::CurrentStepOutOfRange {
                    step: 3,
                    len: 2
                }));
            }
            Err(e) => panic!("Expected InvalidState, got {e}"),
            Ok(_) => panic!("Expected InvalidState, got a game"),
        }
    }

    #[test]
    fn builder_registers_observers() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let mut game = GameBuilder::new()
            .observer(move |action: &Action, _state: &GameState| {
                sink.borrow_mut().push(*action);
            })
            .build()
            .unwrap();

        game.apply_move(0);
        assert_eq!(*seen.borrow(), vec![Action::PlaceMark(0)]);
    }
}
