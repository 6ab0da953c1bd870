//! Game configuration.

use crate::builder::error::BuildError;
use serde::{Deserialize, Serialize};

/// What happens to the moves after the viewed step when a new move is
/// played there.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BranchPolicy {
    /// Discard the abandoned future before appending
    #[default]
    Truncate,

    /// Keep the abandoned future and append the new move after it.
    ///
    /// The move is checked against and built on the viewed board, not the
    /// latest one. A vacant cell on an undecided viewed board is accepted
    /// even when the latest board is already won, and the new entry holds
    /// the viewed board plus that mark.
    Preserve,
}

/// Settings for a [`Game`](crate::machine::Game).
///
/// Every field has a default, so partial JSON documents are accepted.
///
/// # Example
///
/// ```rust
/// use tictac::builder::{BranchPolicy, GameConfig};
///
/// let config = GameConfig::from_json(r#"{ "branch_policy": "preserve" }"#).unwrap();
///
/// assert_eq!(config.branch_policy, BranchPolicy::Preserve);
/// assert!(config.highlight_winning_line);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Branch handling for moves played after a jump
    pub branch_policy: BranchPolicy,

    /// Mark the cells of the winning line in the view
    pub highlight_winning_line: bool,

    /// Start with the move list in descending order
    pub move_order_descending: bool,

    /// Check every invariant after each transition and log violations
    pub verify_invariants: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            branch_policy: BranchPolicy::Truncate,
            highlight_winning_line: true,
            move_order_descending: false,
            verify_invariants: cfg!(debug_assertions),
        }
    }
}

impl GameConfig {
    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        Ok(serde_json::from_str(json)?)
    }
}
