//! First-class invariants for the tic-tac-toe timeline.
//!
//! Invariants are logical properties that must hold for every reachable
//! `GameState`. They are checked after each transition in debug builds
//! and on every deserialized timeline.

mod initial_empty;
mod no_move_after_win;
mod single_mark;
mod step_in_range;

pub use initial_empty::InitialEmptyInvariant;
pub use no_move_after_win::NoMoveAfterWinInvariant;
pub use single_mark::SingleMarkInvariant;
pub use step_in_range::StepInRangeInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = match <(I1, I2, I3)>::check_all(state) {
            Ok(()) => Vec::new(),
            Err(violations) => violations,
        };

        if !I4::holds(state) {
            violations.push(InvariantViolation::new(I4::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }

        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// All timeline invariants as a composable set.
pub type TimelineInvariants = (
    InitialEmptyInvariant,
    SingleMarkInvariant,
    StepInRangeInvariant,
    NoMoveAfterWinInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Board, GameState, Player, Position};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(TimelineInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves_and_jumps() {
        let state = GameState::new()
            .apply_move(0)
            .apply_move(4)
            .apply_move(8)
            .jump_to(1)
            .apply_move(2);
        assert!(TimelineInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let bogus = Board::new().with_mark(Position::Center, Player::O);
        let state = GameState::from_parts_unchecked(vec![bogus], 3);

        let violations = TimelineInvariants::check_all(&state).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_invariant_set_rejects_move_after_win() {
        let won = GameState::replay([0, 3, 1, 4, 2]);
        let mut history = won.history().to_vec();
        history.push(won.current().with_mark(Position::BottomRight, Player::O));
        let state = GameState::from_parts_unchecked(history, 6);

        let violations = TimelineInvariants::check_all(&state).unwrap_err();
        assert_eq!(
            violations,
            vec![InvariantViolation::new(NoMoveAfterWinInvariant::description())]
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (InitialEmptyInvariant, StepInRangeInvariant);
        assert!(TwoInvariants::check_all(&GameState::new()).is_ok());
    }
}
