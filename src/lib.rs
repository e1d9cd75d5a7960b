//! Strictly Timetravel - tic-tac-toe with move history and time travel
//!
//! The engine keeps every board snapshot of a game and a pointer to the
//! active one. Jumping back and then moving again starts a new branch.
//!
//! # Architecture
//!
//! - **Games**: the tic-tac-toe timeline engine, rules and invariants
//! - **Session**: owns the current state and notifies observers
//! - **Driver**: text commands for the CLI
//! - **Config**: TOML configuration
//!
//! # Example
//!
//! ```
//! use strictly_timetravel::{GameState, Player};
//!
//! let state = GameState::new()
//!     .apply_move(0)
//!     .apply_move(4)
//!     .apply_move(1)
//!     .apply_move(7)
//!     .apply_move(2);
//! assert_eq!(state.winner(), Some(Player::X));
//!
//! // Time travel back to the start and branch.
//! let branched = state.jump_to(0).apply_move(8);
//! assert_eq!(branched.history().len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod driver;
mod games;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, TimelineConfig};

// Crate-level exports - Driver
pub use driver::{Command, CommandError, Driver, Flow, HELP};

// Crate-level exports - Session management
pub use session::{GameSession, SessionError, StateObserver};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Contract, GameNotWon, GameState, GameStatus, InitialEmptyInvariant, InvalidTimeline,
    Invariant, InvariantSet, InvariantViolation, JumpError, JumpPolicy, LegalMove, Move,
    MoveContract, MoveError, NoMoveAfterWinInvariant, Player, Position, SingleMarkInvariant,
    Square, SquareIsEmpty, StepInRangeInvariant, TimelineInvariants, rules, winner,
};
