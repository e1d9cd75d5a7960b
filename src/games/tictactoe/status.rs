//! Status of the game at a single step of the timeline.

use super::rules::{is_full, winner};
use super::{Board, Player};
use serde::{Deserialize, Serialize};

/// Status of the board at the active step.
///
/// Always derived from a board snapshot, never stored, so jumping back
/// before a win yields `InProgress` again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing and `next` moves.
    InProgress {
        /// Player to move.
        next: Player,
    },
    /// Game ended in a win.
    Won(Player),
    /// Board is full with no winner.
    Draw,
}

impl GameStatus {
    /// Evaluates `board`, where `next` is the player whose turn it would be.
    pub fn evaluate(board: &Board, next: Player) -> Self {
        if let Some(player) = winner(board) {
            GameStatus::Won(player)
        } else if is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress { next }
        }
    }

    /// True once no further move can be made at this step.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress { next } => write!(f, "Next player: {}", next),
            GameStatus::Won(player) => write!(f, "Winner: {}", player),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}
