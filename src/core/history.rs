//! Board snapshot history.
//!
//! Provides immutable tracking of every board a game has passed through,
//! following functional programming principles.

use super::board::Board;
use super::mark::Mark;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The move that produced a history entry.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Placement {
    /// Cell the mark was placed on
    pub cell: usize,
    /// Mark that was placed
    pub mark: Mark,
}

/// Board snapshot taken immediately after a move.
///
/// # Example
///
/// ```rust
/// use tictac::core::{Board, HistoryEntry, Mark, Placement};
///
/// let board = Board::new().place(4, Mark::X).unwrap();
/// let entry = HistoryEntry::after(board, Placement { cell: 4, mark: Mark::X });
///
/// assert_eq!(entry.board.get(4), Some(Mark::X));
/// assert!(HistoryEntry::initial().placement.is_none());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The board after the move
    pub board: Board,
    /// The move itself; `None` only for the initial empty board
    pub placement: Option<Placement>,
    /// When the snapshot was taken
    pub recorded_at: DateTime<Utc>,
}

impl HistoryEntry {
    /// The empty board every game starts from.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            placement: None,
            recorded_at: Utc::now(),
        }
    }

    /// Snapshot of `board` right after `placement` was played.
    pub fn after(board: Board, placement: Placement) -> Self {
        Self {
            board,
            placement: Some(placement),
            recorded_at: Utc::now(),
        }
    }
}

/// Entries are equal when they hold the same board and move; the
/// timestamp is bookkeeping only.
impl PartialEq for HistoryEntry {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board && self.placement == other.placement
    }
}

/// Ordered history of board snapshots.
///
/// Step 0 is always the initial entry and can never be removed, so a
/// history is never empty. History is immutable - `record` and `truncate`
/// return new histories.
///
/// # Example
///
/// ```rust
/// use tictac::core::{History, HistoryEntry, Mark, Placement};
///
/// let history = History::new();
/// let board = history.latest().board.place(0, Mark::X).unwrap();
/// let next = history.record(HistoryEntry::after(board, Placement { cell: 0, mark: Mark::X }));
///
/// assert_eq!(next.len(), 2);
/// assert_eq!(history.len(), 1); // Original unchanged
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct History {
    initial: HistoryEntry,
    moves: Vec<HistoryEntry>,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(clippy::len_without_is_empty)]
impl History {
    /// Create a history holding only the initial empty board.
    pub fn new() -> Self {
        Self::starting_from(HistoryEntry::initial())
    }

    /// Create a history whose step 0 is `initial`.
    ///
    /// Callers seeding a game from outside data should validate the result
    /// with [`crate::enforcement::InvariantRules`].
    pub fn starting_from(initial: HistoryEntry) -> Self {
        Self {
            initial,
            moves: Vec::new(),
        }
    }

    /// Append an entry, returning a new history.
    ///
    /// This is a pure function - it does not mutate the existing history
    /// but returns a new one with the entry added.
    pub fn record(&self, entry: HistoryEntry) -> Self {
        let mut moves = self.moves.clone();
        moves.push(entry);
        Self {
            initial: self.initial.clone(),
            moves,
        }
    }

    /// Keep steps `0..=step`, returning a new history.
    ///
    /// A `step` at or past the end leaves the history as it is.
    pub fn truncate(&self, step: usize) -> Self {
        let mut moves = self.moves.clone();
        moves.truncate(step);
        Self {
            initial: self.initial.clone(),
            moves,
        }
    }

    /// Entry at `step`, if it exists.
    pub fn get(&self, step: usize) -> Option<&HistoryEntry> {
        match step {
            0 => Some(&self.initial),
            n => self.moves.get(n - 1),
        }
    }

    pub fn initial(&self) -> &HistoryEntry {
        &self.initial
    }

    /// Most recent entry.
    pub fn latest(&self) -> &HistoryEntry {
        self.moves.last().unwrap_or(&self.initial)
    }

    /// Number of entries, including the initial board.
    pub fn len(&self) -> usize {
        self.moves.len() + 1
    }

    /// Index of the most recent entry.
    pub fn last_step(&self) -> usize {
        self.moves.len()
    }

    /// All entries in order, starting with the initial board.
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        std::iter::once(&self.initial).chain(self.moves.iter())
    }

    /// Calculate total duration from the first to the last entry.
    ///
    /// Returns `None` if no move has been recorded yet.
    pub fn duration(&self) -> Option<Duration> {
        let last = self.moves.last()?;
        last.recorded_at
            .signed_duration_since(self.initial.recorded_at)
            .to_std()
            .ok()
    }
}
