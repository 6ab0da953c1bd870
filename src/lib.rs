//! Tictac: a pure functional tic-tac-toe engine
//!
//! Tictac follows the "pure core, imperative shell" philosophy. Boards,
//! histories and game snapshots are immutable values and every game rule
//! is a pure function; a thin [`Game`] shell owns the current snapshot and
//! tells observers whenever it changes. Drawing is left to the host UI,
//! which renders a [`View`].
//!
//! # Core Concepts
//!
//! - **Board & History**: immutable grid snapshots, one per move
//! - **Evaluator**: first-match winner detection over the 8 fixed lines
//! - **GameState**: history, viewed step, player to move, move-list order
//! - **Game**: dispatches user actions and publishes new snapshots
//! - **Enforcement**: accumulating invariant checks over snapshots
//!
//! # Example
//!
//! ```rust
//! use tictac::core::Mark;
//! use tictac::evaluator::WinnerResult;
//! use tictac::machine::Game;
//!
//! let mut game = Game::new();
//! for cell in [0, 4, 1, 3] {
//!     game.apply_move(cell);
//! }
//! assert_eq!(game.state().winner(), WinnerResult::NoWinner);
//!
//! game.apply_move(2);
//! assert_eq!(game.state().winner().mark(), Some(Mark::X));
//! assert_eq!(game.view().status, "Winner: X");
//!
//! // Go back and explore another line of play.
//! game.jump_to(2);
//! assert_eq!(game.state().next_mark(), Mark::X);
//! ```

pub mod builder;
pub mod core;
pub mod enforcement;
pub mod evaluator;
pub mod machine;
pub mod view;

// Re-export commonly used types
pub use builder::{BranchPolicy, GameBuilder, GameConfig};
pub use crate::core::{Board, Mark, Rejection};
pub use evaluator::{evaluate, WinnerResult};
pub use machine::{Action, Game, GameState, StepResult};
pub use view::View;
