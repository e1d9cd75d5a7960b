//! Command-line interface for strictly_timetravel.

use clap::{Parser, Subcommand};

/// Strictly Timetravel - tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "strictly_timetravel")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file (defaults apply if missing)
    #[arg(short, long, default_value = "timetravel.toml", global = true)]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, reading commands from stdin
    Play,

    /// Run a sequence of commands and print the final position
    Replay {
        /// Commands to run, e.g. `0 4 1 "jump 1" 8`
        #[arg(required = true)]
        commands: Vec<String>,

        /// Print the final state as JSON instead of a board
        #[arg(long)]
        json: bool,
    },
}
