//! The timeline always starts from an empty board.

use super::super::{Board, GameState};
use super::Invariant;

/// Invariant: history is non-empty and entry 0 is the empty board.
pub struct InitialEmptyInvariant;

impl Invariant<GameState> for InitialEmptyInvariant {
    fn holds(state: &GameState) -> bool {
        state.history().first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}
