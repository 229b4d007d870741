//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `tui`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Tui {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },

    /// Play a fixed sequence of moves and print the result
    Play {
        /// Cells to play in order, as indices 0-8 or labels such as "center"
        #[arg(required = true)]
        moves: Vec<String>,

        /// Print a JSON report instead of the board
        #[arg(long)]
        json: bool,
    },
}
