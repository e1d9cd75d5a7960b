//! Game session: owns the current timeline and notifies observers.
//!
//! The engine itself is a value type. A session is the one place that
//! holds "the" state, applies requested transitions, and pushes each new
//! state to whoever renders it.

use crate::config::TimelineConfig;
use crate::games::tictactoe::{GameState, JumpError, JumpPolicy, MoveError, Position};
use derive_more::{Display, Error, From};
use tracing::{debug, info, instrument};

/// Receives every state a session moves to.
pub trait StateObserver {
    /// Called after each accepted transition.
    fn on_change(&mut self, state: &GameState);
}

impl<F> StateObserver for F
where
    F: FnMut(&GameState),
{
    fn on_change(&mut self, state: &GameState) {
        self(state)
    }
}

/// A rejected session request.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum SessionError {
    /// The move was rejected.
    #[display("{}", _0)]
    Move(MoveError),
    /// The jump was rejected.
    #[display("{}", _0)]
    Jump(JumpError),
}

/// A single game with time travel.
pub struct GameSession {
    state: GameState,
    jump_policy: JumpPolicy,
    observers: Vec<Box<dyn StateObserver>>,
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("state", &self.state)
            .field("jump_policy", &self.jump_policy)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl GameSession {
    /// Creates a new session with a fresh game.
    #[instrument]
    pub fn new(jump_policy: JumpPolicy) -> Self {
        info!("Creating new game session");
        Self {
            state: GameState::new(),
            jump_policy,
            observers: Vec::new(),
        }
    }

    /// Creates a session using the configured jump policy.
    pub fn from_config(config: &TimelineConfig) -> Self {
        Self::new(*config.jump_policy())
    }

    /// Returns the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the active jump policy.
    pub fn jump_policy(&self) -> JumpPolicy {
        self.jump_policy
    }

    /// Registers an observer. It is not called for the current state.
    pub fn subscribe(&mut self, observer: impl StateObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Plays the next mark at `pos`.
    ///
    /// # Errors
    ///
    /// `SessionError::Move` when the engine rejects the move; the state is
    /// unchanged and observers are not called.
    #[instrument(skip(self), fields(step = self.state.step()))]
    pub fn play(&mut self, pos: Position) -> Result<(), SessionError> {
        let next = self.state.try_apply_move(pos)?;
        self.replace(next);
        Ok(())
    }

    /// Plays the next mark at a raw cell index.
    ///
    /// # Errors
    ///
    /// As [`GameSession::play`], plus `MoveError::OutOfBounds`.
    pub fn play_index(&mut self, index: usize) -> Result<(), SessionError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfBounds(index))?;
        self.play(pos)
    }

    /// Moves the step pointer to `target`.
    ///
    /// # Errors
    ///
    /// `SessionError::Jump` when `target` is out of range and the policy is
    /// [`JumpPolicy::Reject`].
    #[instrument(skip(self), fields(step = self.state.step(), policy = ?self.jump_policy))]
    pub fn jump(&mut self, target: usize) -> Result<(), SessionError> {
        let next = match self.jump_policy {
            JumpPolicy::Reject => self.state.try_jump_to(target)?,
            JumpPolicy::Clamp => self.state.jump_to_clamped(target),
        };
        if next == self.state {
            debug!(target, "Jump leaves the step unchanged");
            return Ok(());
        }
        self.replace(next);
        Ok(())
    }

    /// Starts over with a new game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting game");
        self.replace(GameState::new());
    }

    fn replace(&mut self, next: GameState) {
        self.state = next;
        debug!(
            observers = self.observers.len(),
            step = self.state.step(),
            "Notifying observers"
        );
        for observer in &mut self.observers {
            observer.on_change(&self.state);
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(JumpPolicy::default())
    }
}
