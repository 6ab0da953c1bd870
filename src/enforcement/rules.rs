//! Invariant rules for game snapshots using Validation.

use crate::builder::BranchPolicy;
use crate::core::{HistoryEntry, Mark};
use crate::enforcement::violations::InvariantViolation;
use crate::evaluator::evaluate;
use crate::machine::GameState;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of a single check.
pub type CheckResult = Validation<(), NonEmptyVec<InvariantViolation>>;

/// Type alias for custom check functions
pub type StateCheck = Box<dyn Fn(&GameState) -> CheckResult + Send + Sync>;

/// Invariant rules for game snapshots.
/// Uses Validation to accumulate ALL violations.
///
/// Structural rules (empty initial board, step in range, recorded moves
/// visible on their boards, a consistent move list) always apply. Strict
/// rules also require the history to be one linear game with alternating
/// marks; they only hold under [`BranchPolicy::Truncate`], since
/// preserving abandoned futures interleaves branches in one history.
pub struct InvariantRules {
    pub(crate) strict: bool,
    pub(crate) required_checks: Vec<StateCheck>,
}

impl InvariantRules {
    /// Rules that every state reachable under `policy` satisfies.
    pub fn for_policy(policy: BranchPolicy) -> Self {
        Self {
            strict: matches!(policy, BranchPolicy::Truncate),
            required_checks: Vec::new(),
        }
    }

    /// Add a simple predicate check with error message
    pub fn require_pred<F>(mut self, predicate: F, error_msg: String) -> Self
    where
        F: Fn(&GameState) -> bool + Send + Sync + 'static,
    {
        let check = move |state: &GameState| {
            if predicate(state) {
                Validation::success(())
            } else {
                Validation::fail(InvariantViolation::CustomCheckFailed {
                    message: error_msg.clone(),
                })
            }
        };
        self.required_checks.push(Box::new(check));
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Enforce all rules, accumulating ALL violations.
    /// Returns Validation::Success(()) if all checks pass.
    /// Returns Validation::Failure with ALL violations if any fail.
    pub fn enforce(&self, state: &GameState) -> CheckResult {
        let history = state.history();
        let len = history.len();
        let mut checks: Vec<CheckResult> = Vec::new();

        let initial = history.initial();
        checks.push(check(
            initial.board.is_empty() && initial.placement.is_none(),
            || InvariantViolation::InitialEntryNotEmpty,
        ));

        checks.push(check(state.current_step() < len, || {
            InvariantViolation::CurrentStepOutOfRange {
                step: state.current_step(),
                len,
            }
        }));

        let entries: Vec<&HistoryEntry> = history.entries().collect();
        for (step, pair) in entries.windows(2).enumerate().map(|(i, w)| (i + 1, w)) {
            let (previous, entry) = (pair[0], pair[1]);
            checks.push(self.check_entry(step, previous, entry));
        }

        if self.strict {
            let expected = Mark::for_step(state.current_step());
            checks.push(check(state.next_mark() == expected, || {
                InvariantViolation::NextMarkMismatch {
                    step: state.current_step(),
                    expected,
                    found: state.next_mark(),
                }
            }));
        }

        let descending = state.move_order_descending();
        let mut expected_links: Vec<usize> = (0..len).collect();
        if descending {
            expected_links.reverse();
        }
        checks.push(check(state.moves() == expected_links.as_slice(), || {
            InvariantViolation::MoveLinksOutOfOrder { descending }
        }));

        for check_fn in &self.required_checks {
            checks.push(check_fn(state));
        }

        Validation::all_vec(checks).map(|_| ())
    }

    fn check_entry(
        &self,
        step: usize,
        previous: &HistoryEntry,
        entry: &HistoryEntry,
    ) -> CheckResult {
        let Some(placement) = entry.placement else {
            return Validation::fail(InvariantViolation::MissingPlacement { step });
        };

        let mut checks = vec![check(
            entry.board.get(placement.cell) == Some(placement.mark),
            || InvariantViolation::PlacementNotOnBoard {
                step,
                cell: placement.cell,
            },
        )];

        if self.strict {
            let extended = previous.board.is_vacant(placement.cell)
                && previous.board.place(placement.cell, placement.mark) == Some(entry.board);
            checks.push(check(extended, || InvariantViolation::BoardNotExtended {
                step,
            }));

            checks.push(check(!evaluate(&previous.board).is_winner(), || {
                InvariantViolation::MoveAfterWin { step }
            }));

            let expected = Mark::for_step(step - 1);
            checks.push(check(placement.mark == expected, || {
                InvariantViolation::MarkOutOfTurn {
                    step,
                    expected,
                    found: placement.mark,
                }
            }));
        }

        Validation::all_vec(checks).map(|_| ())
    }
}

fn check(holds: bool, violation: impl FnOnce() -> InvariantViolation) -> CheckResult {
    if holds {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, History, Placement};

    fn play(policy: BranchPolicy, cells: &[usize]) -> GameState {
        cells.iter().fold(GameState::new(), |state, &cell| {
            state.apply_move(cell, policy).unwrap()
        })
    }

    fn violations(result: CheckResult) -> Vec<InvariantViolation> {
        match result {
            Validation::Success(_) => Vec::new(),
            Validation::Failure(errors) => errors.iter().cloned().collect(),
        }
    }

    /// Swap the history of a real game for `history` by going through serde,
    /// the only way outside data can reach a snapshot.
    fn with_history(state: &GameState, history: &History) -> GameState {
        let mut value = serde_json::to_value(state).unwrap();
        value["history"] = serde_json::to_value(history).unwrap();
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn fresh_game_passes() {
        let rules = InvariantRules::for_policy(BranchPolicy::Truncate);
        assert!(rules.enforce(&GameState::new()).is_success());
    }

    #[test]
    fn played_game_passes_strict_rules() {
        let rules = InvariantRules::for_policy(BranchPolicy::Truncate);
        let state = play(BranchPolicy::Truncate, &[0, 4, 1, 3, 8])
            .toggle_move_order()
            .jump_to(2)
            .unwrap();
        assert!(rules.enforce(&state).is_success());
    }

    #[test]
    fn preserved_branches_pass_relaxed_rules() {
        let rules = InvariantRules::for_policy(BranchPolicy::Preserve);
        let state = play(BranchPolicy::Preserve, &[0, 4, 1])
            .jump_to(1)
            .unwrap()
            .apply_move(8, BranchPolicy::Preserve)
            .unwrap();

        assert!(rules.enforce(&state).is_success());

        // The same state breaks linear-game rules.
        let strict = InvariantRules::for_policy(BranchPolicy::Truncate);
        let found = violations(strict.enforce(&state));
        assert!(found
            .iter()
            .any(|v| matches!(v, InvariantViolation::BoardNotExtended { step: 4 })));
    }

    #[test]
    fn enforcement_accumulates_all_violations() {
        let state = play(BranchPolicy::Truncate, &[0, 4]);

        // A history where O moved first and then a move vanished from the board.
        let history = History::new()
            .record(HistoryEntry::after(
                Board::new().place(0, Mark::O).unwrap(),
                Placement {
                    cell: 0,
                    mark: Mark::O,
                },
            ))
            .record(HistoryEntry::after(
                Board::new(),
                Placement {
                    cell: 4,
                    mark: Mark::X,
                },
            ));
        let tampered = with_history(&state, &history);

        let rules = InvariantRules::for_policy(BranchPolicy::Truncate)
            .require_pred(|_| false, "Custom check always fails".to_string());
        let found = violations(rules.enforce(&tampered));

        assert!(found.contains(&InvariantViolation::MarkOutOfTurn {
            step: 1,
            expected: Mark::X,
            found: Mark::O,
        }));
        assert!(found.contains(&InvariantViolation::PlacementNotOnBoard { step: 2, cell: 4 }));
        assert!(found.contains(&InvariantViolation::BoardNotExtended { step: 2 }));
        assert!(found
            .iter()
            .any(|v| matches!(v, InvariantViolation::CustomCheckFailed { .. })));
    }

    #[test]
    fn detects_bad_step_and_turn() {
        let state = play(BranchPolicy::Truncate, &[0]);
        let mut value = serde_json::to_value(&state).unwrap();
        value["current_step"] = serde_json::json!(5);
        value["next_mark"] = serde_json::json!("X");
        value["moves"] = serde_json::json!([1, 0]);
        let broken: GameState = serde_json::from_value(value).unwrap();

        let found = violations(InvariantRules::for_policy(BranchPolicy::Truncate).enforce(&broken));

        assert!(found.contains(&InvariantViolation::CurrentStepOutOfRange { step: 5, len: 2 }));
        assert!(found.contains(&InvariantViolation::NextMarkMismatch {
            step: 5,
            expected: Mark::O,
            found: Mark::X,
        }));
        assert!(found.contains(&InvariantViolation::MoveLinksOutOfOrder { descending: false }));
    }

    #[test]
    fn detects_move_after_win() {
        let state = play(BranchPolicy::Truncate, &[0, 3, 1, 4, 2]);
        let board = state.latest_board().place(8, Mark::O).unwrap();
        let history = state.history().record(HistoryEntry::after(
            board,
            Placement {
                cell: 8,
                mark: Mark::O,
            },
        ));
        let mut value = serde_json::to_value(&state).unwrap();
        value["history"] = serde_json::to_value(&history).unwrap();
        value["current_step"] = serde_json::json!(6);
        value["next_mark"] = serde_json::json!("X");
        value["moves"] = serde_json::json!([0, 1, 2, 3, 4, 5, 6]);
        let broken: GameState = serde_json::from_value(value).unwrap();

        let found = violations(InvariantRules::for_policy(BranchPolicy::Truncate).enforce(&broken));
        assert_eq!(found, vec![InvariantViolation::MoveAfterWin { step: 6 }]);
    }

    #[test]
    fn custom_check_passes() {
        let rules = InvariantRules::for_policy(BranchPolicy::Truncate).require_pred(
            |state| state.history().len() < 10,
            "History too long".to_string(),
        );
        assert!(rules.enforce(&GameState::new()).is_success());
    }
}
