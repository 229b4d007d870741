//! Terminal UI for tictactoe.

mod app;
mod input;
mod terminal;
mod ui;

pub use app::{App, BoardView};
pub use input::{Action, action_for_key, move_cursor};
pub use terminal::TerminalGuard;
pub use ui::{Theme, draw};

use crate::config::TuiConfig;
use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Run the TUI client.
pub fn run_tui(config: TuiConfig) -> Result<()> {
    // Log to a file so output does not interfere with the TUI
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting tictactoe TUI");

    let guard = TerminalGuard::enter(io::stdout())
        .context("Failed to prepare terminal")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let theme = Theme::from_config(&config);
    let mut app = App::new();
    let res = run_app(&mut terminal, &mut app, &theme);

    drop(terminal);
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI closed");
    res
}

/// Draws, then handles one input at a time until the user quits.
#[instrument(skip_all)]
fn run_app(terminal: &mut Tui, app: &mut App, theme: &Theme) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| draw(f, app, theme))?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            _ => {}
        }
    }
    Ok(())
}
