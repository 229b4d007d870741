//! tictactoe - two-player tic-tac-toe in the terminal.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use tictactoe::{TuiConfig, play_moves, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Tui { config: None }) {
        Command::Tui { config } => run_interactive(config),
        Command::Play { moves, json } => run_play(&moves, json),
    }
}

/// Run the interactive terminal game.
fn run_interactive(config: Option<PathBuf>) -> Result<()> {
    let config = TuiConfig::load(config.as_deref())
        .context("Failed to load TUI config")?;
    run_tui(config)
}

/// Play a scripted sequence of moves and print the result.
fn run_play(moves: &[String], json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(count = moves.len(), "Playing scripted moves");
    let report = play_moves(moves);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.render());
    }
    Ok(())
}
