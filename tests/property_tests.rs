//! Property-based tests for the evaluator and the game state machine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated boards and click sequences.

use proptest::prelude::*;
use tictac::builder::BranchPolicy;
use tictac::core::{Board, Mark, CELL_COUNT};
use tictac::enforcement::InvariantRules;
use tictac::evaluator::{evaluate, WinnerResult, WIN_LINES};
use tictac::machine::{reduce, Action, GameState, StepResult};

prop_compose! {
    fn arbitrary_cell()(variant in 0..3u8) -> Option<Mark> {
        match variant {
            0 => None,
            1 => Some(Mark::X),
            _ => Some(Mark::O),
        }
    }
}

prop_compose! {
    fn arbitrary_board()(cells in prop::array::uniform9(arbitrary_cell())) -> Board {
        Board::from_cells(cells)
    }
}

prop_compose! {
    fn arbitrary_action()(variant in 0..10u8, index in 0..12usize) -> Action {
        match variant {
            0..=5 => Action::PlaceMark(index),
            6..=8 => Action::JumpTo(index),
            _ => Action::ToggleMoveOrder,
        }
    }
}

fn arbitrary_policy() -> impl Strategy<Value = BranchPolicy> {
    prop_oneof![Just(BranchPolicy::Truncate), Just(BranchPolicy::Preserve)]
}

fn completed(board: &Board, line: [usize; 3]) -> Option<Mark> {
    let [a, b, c] = line;
    let mark = board.get(a)?;
    (board.get(b) == Some(mark) && board.get(c) == Some(mark)).then_some(mark)
}

proptest! {
    #[test]
    fn evaluate_is_deterministic(board in arbitrary_board()) {
        let before = board;
        let first = evaluate(&board);
        let second = evaluate(&board);
        prop_assert_eq!(first, second);
        prop_assert_eq!(board, before);
    }

    #[test]
    fn evaluate_reports_first_completed_line(board in arbitrary_board()) {
        let expected = WIN_LINES
            .iter()
            .find_map(|&line| completed(&board, line).map(|mark| WinnerResult::Winner { mark, line }))
            .unwrap_or(WinnerResult::NoWinner);
        prop_assert_eq!(evaluate(&board), expected);
    }

    #[test]
    fn winner_line_holds_winner_mark(board in arbitrary_board()) {
        if let WinnerResult::Winner { mark, line } = evaluate(&board) {
            for index in line {
                prop_assert_eq!(board.get(index), Some(mark));
            }
        }
    }

    #[test]
    fn distinct_moves_grow_history(cells in Just((0..CELL_COUNT).collect::<Vec<_>>()).prop_shuffle()) {
        let mut state = GameState::new();
        let mut applied = 0;

        for cell in cells {
            match state.apply_move(cell, BranchPolicy::Truncate) {
                Ok(next) => {
                    prop_assert_eq!(next.latest_board().get(cell), Some(Mark::for_step(applied)));
                    state = next;
                    applied += 1;
                }
                Err(_) => {
                    // Only a finished game may refuse a vacant cell.
                    prop_assert!(state.winner().is_winner());
                }
            }
        }

        prop_assert_eq!(state.history().len(), applied + 1);
        prop_assert_eq!(state.next_mark(), Mark::for_step(applied));
    }

    #[test]
    fn rejections_are_deterministic(
        actions in prop::collection::vec(arbitrary_action(), 0..40),
        policy in arbitrary_policy(),
    ) {
        let mut state = GameState::new();
        for action in actions {
            match reduce(&state, action, policy) {
                StepResult::Transitioned(next) => state = next,
                StepResult::Rejected(_) => {
                    let again = reduce(&state, action, policy);
                    prop_assert!(!again.is_transitioned());
                }
            }
        }
    }

    #[test]
    fn reachable_states_hold_invariants(
        actions in prop::collection::vec(arbitrary_action(), 0..40),
        policy in arbitrary_policy(),
    ) {
        let rules = InvariantRules::for_policy(policy);
        let mut state = GameState::new();
        for action in actions {
            if let StepResult::Transitioned(next) = reduce(&state, action, policy) {
                state = next;
                prop_assert!(rules.enforce(&state).is_success());
            }
        }
    }

    #[test]
    fn jump_sets_parity(
        moves in prop::collection::vec(0..CELL_COUNT, 0..9),
        target in 0..10usize,
    ) {
        let mut state = GameState::new();
        for cell in moves {
            if let Ok(next) = state.apply_move(cell, BranchPolicy::Truncate) {
                state = next;
            }
        }

        match state.jump_to(target) {
            Ok(jumped) => {
                let expected = if target % 2 == 0 { Mark::X } else { Mark::O };
                prop_assert_eq!(jumped.next_mark(), expected);
                prop_assert_eq!(jumped.current_step(), target);
                prop_assert_eq!(jumped.history(), state.history());
            }
            Err(_) => prop_assert!(target >= state.history().len()),
        }
    }

    #[test]
    fn toggle_twice_is_identity(
        actions in prop::collection::vec(arbitrary_action(), 0..20),
    ) {
        let mut state = GameState::new();
        for action in actions {
            if let StepResult::Transitioned(next) = reduce(&state, action, BranchPolicy::Truncate) {
                state = next;
            }
        }
        prop_assert_eq!(state.toggle_move_order().toggle_move_order(), state);
    }
}
