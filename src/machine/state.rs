//! Immutable game snapshots and the pure transitions between them.

use crate::builder::BranchPolicy;
use crate::core::{check_move, Board, History, HistoryEntry, Mark, Placement, Rejection};
use crate::evaluator::{evaluate, status_text, WinLine, WinnerResult};
use serde::{Deserialize, Serialize};

/// Everything the game knows at one instant.
///
/// Snapshots are never mutated. Each operation returns a new snapshot, or
/// a [`Rejection`] when the action is not allowed, leaving the receiver
/// exactly as it was.
///
/// # Example
///
/// ```rust
/// use tictac::builder::BranchPolicy;
/// use tictac::core::Mark;
/// use tictac::machine::GameState;
///
/// let start = GameState::new();
/// let after = start.apply_move(4, BranchPolicy::Truncate).unwrap();
///
/// assert_eq!(after.history().len(), 2);
/// assert_eq!(after.next_mark(), Mark::O);
/// assert_eq!(start.history().len(), 1); // Original unchanged
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    history: History,
    current_step: usize,
    next_mark: Mark,
    move_order_descending: bool,
    highlight_active: bool,
    moves: Vec<usize>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh game: one empty board, X to move, moves listed ascending.
    pub fn new() -> Self {
        Self::with_move_order(false)
    }

    /// Fresh game whose move list starts in the given order.
    pub fn with_move_order(descending: bool) -> Self {
        Self {
            history: History::new(),
            current_step: 0,
            next_mark: Mark::X,
            move_order_descending: descending,
            highlight_active: false,
            moves: vec![0],
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Step currently shown to the players.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn next_mark(&self) -> Mark {
        self.next_mark
    }

    pub fn move_order_descending(&self) -> bool {
        self.move_order_descending
    }

    /// Whether the entry for the current step should be marked active in
    /// the move list. Set by the first jump and kept from then on.
    pub fn highlight_active(&self) -> bool {
        self.highlight_active
    }

    /// Step numbers of the jump links, in display order.
    pub fn moves(&self) -> &[usize] {
        &self.moves
    }

    /// Board at the current step.
    pub fn viewed_board(&self) -> &Board {
        self.history
            .get(self.current_step)
            .map_or(&self.history.latest().board, |entry| &entry.board)
    }

    /// Board after the most recent move.
    pub fn latest_board(&self) -> &Board {
        &self.history.latest().board
    }

    /// Winner on the viewed board.
    pub fn winner(&self) -> WinnerResult {
        evaluate(self.viewed_board())
    }

    pub fn winning_line(&self) -> Option<WinLine> {
        self.winner().line()
    }

    pub fn status_text(&self) -> String {
        status_text(&self.winner(), self.next_mark)
    }

    /// Place the next mark on `cell`.
    ///
    /// The move builds on the viewed board; when that is the latest board
    /// this simply extends the game. After a jump back, `policy` decides
    /// whether the abandoned future is discarded ([`BranchPolicy::Truncate`])
    /// or kept ahead of the new entry ([`BranchPolicy::Preserve`]).
    pub fn apply_move(&self, cell: usize, policy: BranchPolicy) -> Result<Self, Rejection> {
        let board = self.viewed_board();
        check_move(board, cell)?;

        let mark = self.next_mark;
        let next_board = board
            .place(cell, mark)
            .ok_or(Rejection::CellOutOfRange { cell })?;

        let (base, kept_moves) = match policy {
            BranchPolicy::Truncate => {
                let base = self.history.truncate(self.current_step);
                let kept = self
                    .moves
                    .iter()
                    .copied()
                    .filter(|step| *step <= self.current_step)
                    .collect();
                (base, kept)
            }
            BranchPolicy::Preserve => (self.history.clone(), self.moves.clone()),
        };

        let history = base.record(HistoryEntry::after(next_board, Placement { cell, mark }));
        let step = history.last_step();

        Ok(Self {
            history,
            current_step: step,
            next_mark: mark.opponent(),
            move_order_descending: self.move_order_descending,
            highlight_active: self.highlight_active,
            moves: with_link(kept_moves, step, self.move_order_descending),
        })
    }

    /// Show the board as of `step`.
    ///
    /// History is left alone; the player to move is derived from the
    /// step's parity.
    pub fn jump_to(&self, step: usize) -> Result<Self, Rejection> {
        let len = self.history.len();
        if step >= len {
            return Err(Rejection::StepOutOfRange { step, len });
        }

        Ok(Self {
            current_step: step,
            next_mark: Mark::for_step(step),
            highlight_active: true,
            ..self.clone()
        })
    }

    /// Reverse the order of the move list.
    pub fn toggle_move_order(&self) -> Self {
        let mut moves = self.moves.clone();
        moves.reverse();
        Self {
            move_order_descending: !self.move_order_descending,
            moves,
            ..self.clone()
        }
    }
}

/// Add a jump link for `step` at the end the current order grows from.
fn with_link(mut moves: Vec<usize>, step: usize, descending: bool) -> Vec<usize> {
    if descending {
        moves.insert(0, step);
    } else {
        moves.push(step);
    }
    moves
}
