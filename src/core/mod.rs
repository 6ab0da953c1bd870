//! Core game types and logic.
//!
//! This module contains the pure functional core of the game:
//! - Marks and the immutable 3x3 board
//! - Guard predicates for move legality
//! - Immutable snapshot history
//!
//! All logic in this module is pure (no side effects), following
//! the "pure core, imperative shell" philosophy.

mod board;
mod guard;
mod history;
mod mark;

pub use board::{Board, CELL_COUNT};
pub use guard::{cell_in_range, cell_vacant, check_move, game_undecided, Rejection};
pub use history::{History, HistoryEntry, Placement};
pub use mark::Mark;
