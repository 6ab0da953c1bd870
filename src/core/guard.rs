//! Guard predicates for controlling moves.
//!
//! Guards are pure checks that decide whether a move may be played on a
//! board. A failed guard produces a [`Rejection`] describing why; the game
//! treats every rejection as a silent no-op.

use super::board::{Board, CELL_COUNT};
use super::mark::Mark;
use crate::evaluator::{evaluate, WinnerResult};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why an action left the game untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum Rejection {
    #[error("Cell {cell} is off the grid (valid cells are 0..=8)")]
    CellOutOfRange { cell: usize },

    #[error("Cell {cell} is already taken by {mark}")]
    CellOccupied { cell: usize, mark: Mark },

    #[error("Game already won by {winner}")]
    GameDecided { winner: Mark },

    #[error("Step {step} does not exist (history has {len} entries)")]
    StepOutOfRange { step: usize, len: usize },
}

/// The cell must be on the grid.
pub fn cell_in_range(cell: usize) -> Result<(), Rejection> {
    if cell < CELL_COUNT {
        Ok(())
    } else {
        Err(Rejection::CellOutOfRange { cell })
    }
}

/// The cell must not hold a mark yet.
pub fn cell_vacant(board: &Board, cell: usize) -> Result<(), Rejection> {
    match board.get(cell) {
        Some(mark) => Err(Rejection::CellOccupied { cell, mark }),
        None => Ok(()),
    }
}

/// Nobody may have completed a line yet.
pub fn game_undecided(board: &Board) -> Result<(), Rejection> {
    match evaluate(board) {
        WinnerResult::Winner { mark, .. } => Err(Rejection::GameDecided { winner: mark }),
        WinnerResult::NoWinner => Ok(()),
    }
}

/// Run every move guard in order, stopping at the first failure.
///
/// # Example
///
/// ```rust
/// use tictac::core::{check_move, Board, Mark, Rejection};
///
/// let board = Board::new().place(4, Mark::X).unwrap();
///
/// assert!(check_move(&board, 0).is_ok());
/// assert_eq!(
///     check_move(&board, 4),
///     Err(Rejection::CellOccupied { cell: 4, mark: Mark::X })
/// );
/// ```
pub fn check_move(board: &Board, cell: usize) -> Result<(), Rejection> {
    cell_in_range(cell)?;
    game_undecided(board)?;
    cell_vacant(board, cell)
}
