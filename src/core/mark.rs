//! Player marks.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One player's symbol.
///
/// X always moves first, so the mark to play at any step of a game is
/// fully determined by the step's parity.
///
/// # Example
///
/// ```rust
/// use tictac::core::Mark;
///
/// assert_eq!(Mark::for_step(0), Mark::X);
/// assert_eq!(Mark::for_step(3), Mark::O);
/// assert_eq!(Mark::X.opponent(), Mark::O);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The mark that moves at `step` (even steps belong to X).
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 {
            Self::X
        } else {
            Self::O
        }
    }

    /// The other player's mark.
    pub fn opponent(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Self::X => 'X',
            Self::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
