//! Text driver: maps typed commands onto a game session.
//!
//! This is the presentation boundary. Rejected moves and jumps are logged
//! and otherwise ignored; the player just sees the unchanged board.

use crate::config::TimelineConfig;
use crate::games::tictactoe::{GameState, Position};
use crate::session::GameSession;
use derive_more::{Display, Error};
use std::str::FromStr;
use tracing::{debug, instrument, warn};

/// A command typed by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the next mark.
    Move(Position),
    /// Jump to a recorded step.
    Jump(usize),
    /// Show the board and status.
    Board,
    /// Show the jump list.
    History,
    /// Start a new game.
    Reset,
    /// Show the command summary.
    Help,
    /// Leave the game.
    Quit,
}

/// Input that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unknown command: {:?}", input)]
pub struct CommandError {
    /// The offending input.
    pub input: String,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || CommandError {
            input: s.to_string(),
        };
        let mut words = s.split_whitespace();
        let head = words.next().ok_or_else(err)?.to_lowercase();
        let rest = words.collect::<Vec<_>>().join(" ");

        let command = match (head.as_str(), rest.as_str()) {
            ("move" | "m" | "play", arg) => {
                Command::Move(Position::from_label_or_number(arg).ok_or_else(err)?)
            }
            ("jump" | "j" | "goto", arg) => Command::Jump(arg.parse().map_err(|_| err())?),
            ("board" | "status", "") => Command::Board,
            ("history" | "moves", "") => Command::History,
            ("reset" | "new", "") => Command::Reset,
            ("help" | "?", "") => Command::Help,
            ("quit" | "exit" | "q", "") => Command::Quit,
            _ => Command::Move(Position::from_label_or_number(s).ok_or_else(err)?),
        };
        Ok(command)
    }
}

/// Whether the driver loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep going.
    Continue,
    /// Stop reading input.
    Quit,
}

/// Help text listing every command.
pub const HELP: &str = "\
Commands:
  <0-8> | <label>            place the next mark (e.g. `4`, `center`)
  move | m | play <cell>     same, spelled out (e.g. `move top-left`)
  jump | j | goto <step>     time travel to a recorded step
  board | status             show the board and status
  history | moves            show the jump list
  reset | new                start a new game
  help | ?                   show this text
  quit | exit | q            leave";

/// Drives a [`GameSession`] from text commands.
#[derive(Debug)]
pub struct Driver {
    session: GameSession,
    config: TimelineConfig,
}

impl Driver {
    /// Creates a driver with a fresh session.
    #[instrument(skip(config))]
    pub fn new(config: TimelineConfig) -> Self {
        Self {
            session: GameSession::from_config(&config),
            config,
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        self.session.state()
    }

    /// Returns the underlying session, e.g. to subscribe observers.
    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    /// Parses and runs one line of input, returning what to print.
    #[instrument(skip(self))]
    pub fn handle_line(&mut self, line: &str) -> (Flow, Option<String>) {
        if line.trim().is_empty() {
            return (Flow::Continue, None);
        }
        match line.parse::<Command>() {
            Ok(command) => self.execute(command),
            Err(e) => {
                debug!(error = %e, "Unparsable input");
                (Flow::Continue, Some(format!("{}. Type `help` for commands.", e)))
            }
        }
    }

    /// Runs one command, returning what to print.
    #[instrument(skip(self))]
    pub fn execute(&mut self, command: Command) -> (Flow, Option<String>) {
        match command {
            Command::Move(pos) => {
                if let Err(e) = self.session.play(pos) {
                    let game_over = self.state().status().is_over();
                    warn!(error = %e, game_over, "Move ignored");
                }
                (Flow::Continue, Some(self.render()))
            }
            Command::Jump(step) => {
                if let Err(e) = self.session.jump(step) {
                    warn!(error = %e, "Jump ignored");
                }
                (Flow::Continue, Some(self.render()))
            }
            Command::Board => (Flow::Continue, Some(self.render_board())),
            Command::History => (Flow::Continue, Some(self.render_moves())),
            Command::Reset => {
                self.session.reset();
                (Flow::Continue, Some(self.render()))
            }
            Command::Help => (Flow::Continue, Some(HELP.to_string())),
            Command::Quit => (Flow::Quit, None),
        }
    }

    /// Board, status line and (if configured) the jump list.
    pub fn render(&self) -> String {
        if *self.config.show_move_list() {
            format!("{}\n{}", self.render_board(), self.render_moves())
        } else {
            self.render_board()
        }
    }

    /// Board followed by the status line.
    pub fn render_board(&self) -> String {
        let state = self.state();
        format!("{}\n{}", state.current(), state.status_line())
    }

    /// Jump list with the active step marked.
    pub fn render_moves(&self) -> String {
        let state = self.state();
        state
            .move_labels()
            .iter()
            .enumerate()
            .map(|(step, label)| {
                let marker = if step == state.step() { '>' } else { ' ' };
                format!("{} {}. {}", marker, step, label)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
