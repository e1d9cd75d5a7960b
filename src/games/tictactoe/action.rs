//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. The timeline stores board
//! snapshots, and moves are recovered from the difference between two
//! consecutive snapshots.

use super::{Player, Position};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Reason a move was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The board at the current step already has a winner.
    #[display("Game is already won by {}", _0)]
    GameOver(#[error(not(source))] Player),

    /// The cell index is outside 0-8.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// The input names no position.
    #[display("Cannot parse position from {:?}", _0)]
    Unparsable(#[error(not(source))] String),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}

/// Reason a jump was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum JumpError {
    /// The target step is past the end of the history.
    #[display("Step {} is out of range (history has {} entries)", target, len)]
    OutOfRange {
        /// Requested step.
        target: usize,
        /// History length at the time of the request.
        len: usize,
    },
}
