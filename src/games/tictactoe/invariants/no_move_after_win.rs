//! A won board ends its branch of the timeline.

use super::super::{GameState, rules};
use super::Invariant;

/// Invariant: no snapshot follows a board that already has a winner.
pub struct NoMoveAfterWinInvariant;

impl Invariant<GameState> for NoMoveAfterWinInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();
        let last = history.len().saturating_sub(1);
        history[..last]
            .iter()
            .all(|board| rules::winner(board).is_none())
    }

    fn description() -> &'static str {
        "No move follows a won board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Position};

    #[test]
    fn test_won_final_snapshot_holds() {
        let state = GameState::replay([0, 3, 1, 4, 2]);
        assert_eq!(state.winner(), Some(Player::X));
        assert!(NoMoveAfterWinInvariant::holds(&state));
    }

    #[test]
    fn test_empty_history_holds() {
        let state = GameState::from_parts_unchecked(Vec::new(), 0);
        assert!(NoMoveAfterWinInvariant::holds(&state));
    }

    #[test]
    fn test_move_after_win_violates() {
        let won = GameState::replay([0, 3, 1, 4, 2]);
        let mut history = won.history().to_vec();
        history.push(won.current().with_mark(Position::BottomRight, Player::O));
        let state = GameState::from_parts_unchecked(history, 6);
        assert!(!NoMoveAfterWinInvariant::holds(&state));
    }
}
