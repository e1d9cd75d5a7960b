//! Property tests for the timeline engine.

use proptest::prelude::*;
use strictly_timetravel::{
    Board, GameState, InvariantSet, Player, Position, Square, TimelineInvariants, rules, winner,
};

fn square() -> impl Strategy<Value = Square> {
    prop_oneof![
        Just(Square::Empty),
        Just(Square::Occupied(Player::X)),
        Just(Square::Occupied(Player::O)),
    ]
}

fn board() -> impl Strategy<Value = Board> {
    prop::array::uniform9(square()).prop_map(Board::from_squares)
}

fn player() -> impl Strategy<Value = Player> {
    prop_oneof![Just(Player::X), Just(Player::O)]
}

/// Applies cell indices to a new game, with an occasional jump mixed in.
fn play(ops: &[(bool, usize)]) -> GameState {
    ops.iter().fold(GameState::new(), |state, (jump, n)| {
        if *jump {
            state.jump_to(*n % state.history().len())
        } else {
            state.apply_move(*n % 9)
        }
    })
}

proptest! {
    #[test]
    fn winner_ignores_cells_outside_a_completed_line(
        base in board(),
        line in 0usize..8,
        mark in player(),
    ) {
        let cells = rules::LINES[line];
        let board = cells.iter().fold(base, |b, pos| b.with_mark(*pos, mark));

        // Only boards where no other player's line appears are well-formed.
        let other = rules::LINES.iter().any(|l| {
            l.iter().all(|pos| board.get(*pos) == Square::Occupied(mark.opponent()))
        });
        prop_assume!(!other);

        prop_assert_eq!(winner(&board), Some(mark));
    }

    #[test]
    fn occupied_cell_move_is_a_no_op(ops in prop::collection::vec((any::<bool>(), 0usize..16), 0..20)) {
        let state = play(&ops);
        for pos in Position::ALL {
            if !state.current().is_empty(pos) {
                prop_assert_eq!(state.apply_move(pos.to_index()), state.clone());
            }
        }
    }

    #[test]
    fn move_after_win_is_a_no_op(ops in prop::collection::vec((any::<bool>(), 0usize..16), 0..30)) {
        let state = play(&ops);
        if state.winner().is_some() {
            for index in 0..9 {
                prop_assert_eq!(state.apply_move(index), state.clone());
            }
        }
    }

    #[test]
    fn accepted_moves_grow_history_by_one(cells in prop::collection::vec(0usize..9, 0..12)) {
        let mut state = GameState::new();
        let mut accepted = 0;
        for cell in cells {
            let next = state.apply_move(cell);
            if next != state {
                accepted += 1;
            }
            state = next;
        }
        prop_assert_eq!(state.history().len(), accepted + 1);
    }

    #[test]
    fn jump_then_move_truncates_to_step_plus_two(
        cells in prop::collection::vec(0usize..9, 1..9),
        target in 0usize..9,
        cell in 0usize..9,
    ) {
        let state = GameState::replay(cells);
        let target = target % state.history().len();
        let jumped = state.jump_to(target);
        let next = jumped.apply_move(cell);

        if next != jumped {
            prop_assert_eq!(next.history().len(), target + 2);
            prop_assert_eq!(&next.history()[..=target], &state.history()[..=target]);
        }
    }

    #[test]
    fn invariants_hold_for_every_reachable_state(
        ops in prop::collection::vec((any::<bool>(), 0usize..16), 0..40),
    ) {
        let state = play(&ops);
        prop_assert!(TimelineInvariants::check_all(&state).is_ok());
    }
}
