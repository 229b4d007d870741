//! Terminal tic-tac-toe.
//!
//! Presentation side of the game: configuration, a ratatui front end that
//! renders [`tictactoe_engine`] events, and a scripted `play` mode.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod config;
pub mod play;
pub mod tui;

pub use config::{ConfigError, TuiConfig};
pub use play::{MoveRecord, PlayReport, play_moves};
pub use tui::{App, BoardView, Theme, run_tui};
