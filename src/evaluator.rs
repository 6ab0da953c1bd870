//! Win detection and status text.

use crate::core::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three board indices that win when they hold the same mark.
pub type WinLine = [usize; 3];

/// Every winning line, in priority order: rows top to bottom, columns left
/// to right, then the two diagonals.
pub const WIN_LINES: [WinLine; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Outcome of evaluating a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinnerResult {
    NoWinner,
    Winner { mark: Mark, line: WinLine },
}

impl WinnerResult {
    pub fn mark(&self) -> Option<Mark> {
        match self {
            Self::Winner { mark, .. } => Some(*mark),
            Self::NoWinner => None,
        }
    }

    pub fn line(&self) -> Option<WinLine> {
        match self {
            Self::Winner { line, .. } => Some(*line),
            Self::NoWinner => None,
        }
    }

    pub fn is_winner(&self) -> bool {
        matches!(self, Self::Winner { .. })
    }
}

/// Find the first completed line on `board`.
///
/// Lines are checked in [`WIN_LINES`] order and the first match wins;
/// boards with several completed lines (impossible in alternating play)
/// report the earliest one. Total over every board.
///
/// # Example
///
/// ```rust
/// use tictac::core::{Board, Mark};
/// use tictac::evaluator::{evaluate, WinnerResult};
///
/// let board = Board::from_cells([
///     Some(Mark::X), None, None,
///     None, Some(Mark::X), None,
///     None, None, Some(Mark::X),
/// ]);
///
/// assert_eq!(evaluate(&board), WinnerResult::Winner { mark: Mark::X, line: [0, 4, 8] });
/// assert_eq!(evaluate(&Board::new()), WinnerResult::NoWinner);
/// ```
#[instrument(level = "trace", ret)]
pub fn evaluate(board: &Board) -> WinnerResult {
    for line @ [a, b, c] in WIN_LINES {
        if let Some(mark) = board.get(a) {
            if board.get(b) == Some(mark) && board.get(c) == Some(mark) {
                return WinnerResult::Winner { mark, line };
            }
        }
    }
    WinnerResult::NoWinner
}

/// Status line shown above the move list.
pub fn status_text(result: &WinnerResult, next_mark: Mark) -> String {
    match result {
        WinnerResult::Winner { mark, .. } => format!("Winner: {mark}"),
        WinnerResult::NoWinner => format!("Next player: {next_mark}"),
    }
}
