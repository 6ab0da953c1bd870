//! The 3x3 grid.

use super::mark::Mark;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of cells on the grid.
pub const CELL_COUNT: usize = 9;

/// Row-major 3x3 grid of cells, each empty or holding a mark.
///
/// Boards are immutable values: [`Board::place`] returns a new board and
/// leaves the original untouched, so every history snapshot can share the
/// type without defensive copies.
///
/// # Example
///
/// ```rust
/// use tictac::core::{Board, Mark};
///
/// let empty = Board::new();
/// let board = empty.place(4, Mark::X).unwrap();
///
/// assert_eq!(board.get(4), Some(Mark::X));
/// assert!(empty.is_vacant(4)); // Original unchanged
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Mark>; CELL_COUNT],
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board from raw cells.
    ///
    /// Any combination of marks is accepted, including positions that
    /// cannot arise from alternating play.
    pub fn from_cells(cells: [Option<Mark>; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Mark at `index`, or `None` when the cell is empty or off the grid.
    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    /// Whether `index` is on the grid and empty.
    pub fn is_vacant(&self, index: usize) -> bool {
        matches!(self.cells.get(index), Some(None))
    }

    /// Return a new board with `mark` at `index`.
    ///
    /// Returns `None` when `index` is off the grid. Occupancy is not
    /// checked here; that is the move guards' job.
    pub fn place(&self, index: usize, mark: Mark) -> Option<Self> {
        if index >= CELL_COUNT {
            return None;
        }
        let mut cells = self.cells;
        cells[index] = Some(mark);
        Some(Self { cells })
    }

    pub fn cells(&self) -> &[Option<Mark>; CELL_COUNT] {
        &self.cells
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|c| **c == Some(mark)).count()
    }

    /// Number of non-empty cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.occupied() == 0
    }

    pub fn is_full(&self) -> bool {
        self.occupied() == CELL_COUNT
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
            for col in 0..3 {
                if col > 0 {
                    write!(f, "|")?;
                }
                match self.cells[row * 3 + col] {
                    Some(mark) => write!(f, "{mark}")?,
                    None => write!(f, ".")?,
                }
            }
        }
        Ok(())
    }
}
