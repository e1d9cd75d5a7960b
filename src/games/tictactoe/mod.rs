//! Tic-tac-toe with move history and time travel.

mod action;
mod contracts;
mod invariants;
mod position;
pub mod rules;
mod status;
mod timeline;
mod types;

pub use action::{JumpError, Move, MoveError};
pub use contracts::{Contract, GameNotWon, LegalMove, MoveContract, SquareIsEmpty};
pub use invariants::{
    InitialEmptyInvariant, Invariant, InvariantSet, InvariantViolation, NoMoveAfterWinInvariant,
    SingleMarkInvariant, StepInRangeInvariant, TimelineInvariants,
};
pub use position::Position;
pub use status::GameStatus;
pub use timeline::{GameState, InvalidTimeline, JumpPolicy};
pub use types::{Board, Player, Square};

/// Winner of `board`, if any. See [`rules::LINES`] for the check order.
pub fn winner(board: &Board) -> Option<Player> {
    rules::winner(board)
}
