//! Game state engine: board history with time travel.
//!
//! A `GameState` owns every board snapshot since the start of the game and
//! a pointer to the active one. Transitions never mutate a state; they
//! return the next one. Moving after a jump back discards the snapshots
//! past the active step, starting a new branch.

use super::action::{JumpError, Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::invariants::{InvariantSet, TimelineInvariants};
use super::rules;
use super::status::GameStatus;
use super::{Board, Player, Position};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How to handle a jump past the end of the history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JumpPolicy {
    /// Leave the state unchanged.
    #[default]
    Reject,
    /// Jump to the last snapshot instead.
    Clamp,
}

/// Complete game state: snapshot history plus the active step.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTimeline")]
pub struct GameState {
    /// Board snapshots; entry 0 is the empty board.
    history: Vec<Board>,
    /// Index of the active snapshot.
    step: usize,
}

impl GameState {
    /// Creates a new game: one empty board, step 0.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            step: 0,
        }
    }

    /// Builds a state without checking invariants.
    pub(crate) fn from_parts_unchecked(history: Vec<Board>, step: usize) -> Self {
        Self { history, step }
    }

    /// Returns all snapshots in move order.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Returns the active step.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Returns the board at the active step.
    pub fn current(&self) -> &Board {
        &self.history[self.step]
    }

    /// True when X moves next (the step is even).
    pub fn x_is_next(&self) -> bool {
        self.step % 2 == 0
    }

    /// Player whose turn it is at the active step.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.step)
    }

    /// Winner on the board at the active step.
    pub fn winner(&self) -> Option<Player> {
        rules::winner(self.current())
    }

    /// Status at the active step, derived from the board.
    pub fn status(&self) -> GameStatus {
        GameStatus::evaluate(self.current(), self.next_player())
    }

    /// Status string for display ("Winner: X", "Next player: O", "Draw").
    pub fn status_line(&self) -> String {
        self.status().to_string()
    }

    /// Moves recovered from consecutive snapshots, across the whole history.
    pub fn moves(&self) -> Vec<Move> {
        self.history
            .windows(2)
            .enumerate()
            .filter_map(|(step, pair)| match pair[0].diff(&pair[1]).as_slice() {
                [pos] => Some(Move::new(Player::for_step(step), *pos)),
                _ => None,
            })
            .collect()
    }

    /// One label per snapshot, for a jump list.
    pub fn move_labels(&self) -> Vec<String> {
        (0..self.history.len())
            .map(|step| match step {
                0 => "Go to game start".to_string(),
                n => format!("Go to move #{}", n),
            })
            .collect()
    }

    /// Places the next player's mark at `pos`.
    ///
    /// Snapshots after the active step are discarded before the new board
    /// is appended.
    ///
    /// # Errors
    ///
    /// - `MoveError::GameOver` if the active board already has a winner
    /// - `MoveError::SquareOccupied` if `pos` is taken
    #[instrument(skip(self), fields(step = self.step, player = %self.next_player()))]
    pub fn try_apply_move(&self, pos: Position) -> Result<Self, MoveError> {
        MoveContract::pre(self, &pos)?;

        let board = self.current().with_mark(pos, self.next_player());
        let mut history = self.history[..=self.step].to_vec();
        let discarded = self.history.len() - history.len();
        history.push(board);
        let next = Self {
            step: history.len() - 1,
            history,
        };
        debug!(discarded, step = next.step, "Move applied");

        #[cfg(debug_assertions)]
        MoveContract::post(self, &next)?;

        Ok(next)
    }

    /// Like [`GameState::try_apply_move`], taking a raw cell index.
    ///
    /// # Errors
    ///
    /// `MoveError::OutOfBounds` for indices past 8, plus the errors of
    /// [`GameState::try_apply_move`].
    pub fn try_apply_index(&self, index: usize) -> Result<Self, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.try_apply_move(pos)
    }

    /// Applies a move at cell `index`, or returns an unchanged copy if the
    /// move is rejected.
    pub fn apply_move(&self, index: usize) -> Self {
        self.try_apply_index(index).unwrap_or_else(|e| {
            debug!(error = %e, index, "Move rejected");
            self.clone()
        })
    }

    /// Moves the pointer to `target`, leaving the history untouched.
    ///
    /// # Errors
    ///
    /// `JumpError::OutOfRange` when `target` is not a recorded step.
    #[instrument(skip(self), fields(step = self.step, len = self.history.len()))]
    pub fn try_jump_to(&self, target: usize) -> Result<Self, JumpError> {
        if target >= self.history.len() {
            return Err(JumpError::OutOfRange {
                target,
                len: self.history.len(),
            });
        }
        debug!("Jumped");
        Ok(Self {
            history: self.history.clone(),
            step: target,
        })
    }

    /// Jumps to `target`, or returns an unchanged copy if it is out of range.
    pub fn jump_to(&self, target: usize) -> Self {
        self.try_jump_to(target).unwrap_or_else(|e| {
            debug!(error = %e, "Jump rejected");
            self.clone()
        })
    }

    /// Jumps to `target`, clamped to the last snapshot.
    pub fn jump_to_clamped(&self, target: usize) -> Self {
        Self {
            history: self.history.clone(),
            step: target.min(self.history.len() - 1),
        }
    }

    /// Jumps under the given out-of-range policy.
    pub fn jump_with(&self, target: usize, policy: JumpPolicy) -> Self {
        match policy {
            JumpPolicy::Reject => self.jump_to(target),
            JumpPolicy::Clamp => self.jump_to_clamped(target),
        }
    }

    /// Replays cell indices from a new game, skipping rejected moves.
    #[instrument(skip(cells))]
    pub fn replay(cells: impl IntoIterator<Item = usize>) -> Self {
        cells
            .into_iter()
            .fold(Self::new(), |state, cell| state.apply_move(cell))
    }

    /// Replays positions from a new game, stopping at the first rejection.
    ///
    /// # Errors
    ///
    /// The first `MoveError` encountered.
    #[instrument]
    pub fn try_replay(positions: &[Position]) -> Result<Self, MoveError> {
        positions
            .iter()
            .try_fold(Self::new(), |state, pos| state.try_apply_move(*pos))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialized timeline prior to validation.
#[derive(Debug, Deserialize)]
struct RawTimeline {
    history: Vec<Board>,
    step: usize,
}

/// A deserialized timeline that breaks one or more invariants.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid timeline: {}", reasons.join("; "))]
pub struct InvalidTimeline {
    /// Descriptions of the violated invariants.
    pub reasons: Vec<String>,
}

impl TryFrom<RawTimeline> for GameState {
    type Error = InvalidTimeline;

    fn try_from(raw: RawTimeline) -> Result<Self, Self::Error> {
        let state = Self::from_parts_unchecked(raw.history, raw.step);
        TimelineInvariants::check_all(&state).map_err(|violations| InvalidTimeline {
            reasons: violations.into_iter().map(|v| v.description).collect(),
        })?;
        Ok(state)
    }
}
