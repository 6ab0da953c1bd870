//! Render-ready projection of a game snapshot.
//!
//! The drawing itself belongs to whatever UI hosts the game. A [`View`]
//! carries exactly what that UI needs: cell contents and highlights, the
//! status line, the sort toggle label and the move list. It serializes to
//! JSON for web front ends.

use crate::builder::GameConfig;
use crate::core::Mark;
use crate::machine::GameState;
use serde::Serialize;

/// Toggle label while the move list is ascending.
pub const SORT_DESCENDING_LABEL: &str = "Sort Descending";

/// Toggle label while the move list is descending.
pub const SORT_ASCENDING_LABEL: &str = "Sort Ascending";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CellView {
    pub index: usize,
    pub mark: Option<Mark>,
    /// Part of the winning line on the viewed board
    pub highlighted: bool,
}

/// One clickable entry of the move list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MoveLink {
    pub step: usize,
    pub label: String,
    /// The viewed step, once the player has started jumping around
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct View {
    /// The viewed board, row-major
    pub cells: Vec<CellView>,
    pub status: String,
    /// Label of the sort toggle, naming the order it switches to
    pub sort_label: &'static str,
    /// Move list in display order
    pub move_links: Vec<MoveLink>,
}

impl View {
    /// Project `state` for display.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tictac::builder::{BranchPolicy, GameConfig};
    /// use tictac::machine::GameState;
    /// use tictac::view::View;
    ///
    /// let state = GameState::new().apply_move(4, BranchPolicy::Truncate).unwrap();
    /// let view = View::project(&state, &GameConfig::default());
    ///
    /// assert_eq!(view.status, "Next player: O");
    /// assert_eq!(view.move_links[1].label, "Go to Step 1");
    /// ```
    pub fn project(state: &GameState, config: &GameConfig) -> Self {
        let board = state.viewed_board();
        let line = if config.highlight_winning_line {
            state.winning_line()
        } else {
            None
        };

        let cells = board
            .cells()
            .iter()
            .enumerate()
            .map(|(index, mark)| CellView {
                index,
                mark: *mark,
                highlighted: line.is_some_and(|l| l.contains(&index)),
            })
            .collect();

        let move_links = state
            .moves()
            .iter()
            .map(|&step| MoveLink {
                step,
                label: format!("Go to Step {step}"),
                active: state.highlight_active() && step == state.current_step(),
            })
            .collect();

        Self {
            cells,
            status: state.status_text(),
            sort_label: if state.move_order_descending() {
                SORT_ASCENDING_LABEL
            } else {
                SORT_DESCENDING_LABEL
            },
            move_links,
        }
    }

    /// Indices of highlighted cells.
    pub fn highlighted(&self) -> Vec<usize> {
        self.cells
            .iter()
            .filter(|c| c.highlighted)
            .map(|c| c.index)
            .collect()
    }

    pub fn active_link(&self) -> Option<&MoveLink> {
        self.move_links.iter().find(|link| link.active)
    }
}
