//! Strictly Timetravel - CLI
//!
//! Plays tic-tac-toe with time travel in the terminal.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::io::{BufRead, Write};
use strictly_timetravel::{Driver, Flow, HELP, TimelineConfig};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TimelineConfig::load_or_default(&cli.config)?;
    initialize_tracing(&config);
    debug!(?config, "Configuration resolved");

    match cli.command {
        Command::Play => run_interactive(config),
        Command::Replay { commands, json } => run_replay(config, &commands, json),
    }
}

/// Run the interactive stdin loop
#[instrument(skip(config))]
fn run_interactive(config: TimelineConfig) -> Result<()> {
    info!("Starting interactive game");

    let mut driver = Driver::new(config);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    writeln!(stdout, "{}\n\n{}", HELP, driver.render())?;
    write!(stdout, "> ")?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let (flow, output) = driver.handle_line(&line);
        if let Some(output) = output {
            writeln!(stdout, "{}", output)?;
        }
        if flow == Flow::Quit {
            break;
        }
        write!(stdout, "> ")?;
        stdout.flush()?;
    }

    info!(step = driver.state().step(), "Game ended");
    Ok(())
}

/// Run a fixed list of commands and print the result
#[instrument(skip(config))]
fn run_replay(config: TimelineConfig, commands: &[String], json: bool) -> Result<()> {
    let mut driver = Driver::new(config);

    for command in commands {
        if driver.handle_line(command).0 == Flow::Quit {
            break;
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(driver.state())?);
    } else {
        println!("{}", driver.render());
    }
    Ok(())
}

fn initialize_tracing(config: &TimelineConfig) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .init();
}
