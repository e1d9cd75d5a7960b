//! Contract-based validation for timeline moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P(state, position)} apply_move {Q(before, after)}

use super::action::MoveError;
use super::invariants::{InvariantSet, TimelineInvariants};
use super::{GameState, Position};
use tracing::instrument;

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: nobody has won on the board at the current step.
pub struct GameNotWon;

impl GameNotWon {
    /// Fails with [`MoveError::GameOver`] when the current board has a winner.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), MoveError> {
        match state.winner() {
            Some(player) => Err(MoveError::GameOver(player)),
            None => Ok(()),
        }
    }
}

/// Precondition: the square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`MoveError::SquareOccupied`] when the target is taken.
    #[instrument(skip(state))]
    pub fn check(pos: Position, state: &GameState) -> Result<(), MoveError> {
        if state.current().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(pos))
        }
    }
}

/// Composite precondition: no winner yet and the square is free.
///
/// A full board is rejected by the square check, never as a game over.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(state))]
    pub fn check(pos: Position, state: &GameState) -> Result<(), MoveError> {
        GameNotWon::check(state)?;
        SquareIsEmpty::check(pos, state)?;
        Ok(())
    }
}

/// Contract for move actions.
///
/// Preconditions:
/// - No winner at the current step
/// - Square must be empty
///
/// Postconditions:
/// - All timeline invariants hold
/// - History was truncated at the old step and grew by one
pub struct MoveContract;

impl Contract<GameState, Position> for MoveContract {
    fn pre(state: &GameState, pos: &Position) -> Result<(), MoveError> {
        LegalMove::check(*pos, state)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        TimelineInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })?;

        let kept = &before.history()[..=before.step()];
        if after.history().len() != kept.len() + 1 || !after.history().starts_with(kept) {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: history was not branched at the active step".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, Player};

    #[test]
    fn test_precondition_empty_square() {
        let state = GameState::new();
        assert!(MoveContract::pre(&state, &Position::Center).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let state = GameState::new().apply_move(4);
        assert_eq!(
            MoveContract::pre(&state, &Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_game_won() {
        let state = GameState::replay([0, 3, 1, 4, 2]);
        assert_eq!(
            MoveContract::pre(&state, &Position::BottomRight),
            Err(MoveError::GameOver(Player::X))
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = GameState::new().apply_move(0).apply_move(1).jump_to(1);
        let after = before.apply_move(8);
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = GameState::new();
        let corrupt = Board::new().with_mark(Position::TopLeft, Player::O);
        let after = GameState::from_parts_unchecked(vec![Board::new(), corrupt], 1);
        assert!(MoveContract::post(&before, &after).is_err());
    }

    #[test]
    fn test_postcondition_detects_lost_branch_point() {
        let before = GameState::new().apply_move(0).apply_move(1);
        let after = GameState::new().apply_move(4);
        assert!(MoveContract::post(&before, &after).is_err());
    }
}
