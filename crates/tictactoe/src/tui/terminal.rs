//! Raw-mode terminal setup that undoes itself.

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::{self, Write};
use tracing::{debug, warn};

/// Puts the terminal into raw mode on the alternate screen and restores it
/// on drop, including when setup fails part way.
pub struct TerminalGuard<W: Write> {
    out: W,
    raw_mode: bool,
}

impl<W: Write> TerminalGuard<W> {
    /// Enables raw mode, then switches `out` to the alternate screen with
    /// mouse capture.
    pub fn enter(out: W) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self {
            out,
            raw_mode: true,
        };
        execute!(guard.out, EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }

    /// Runs every teardown step even if an earlier one fails; returns the
    /// first error.
    fn restore(&mut self) -> io::Result<()> {
        let raw = if self.raw_mode {
            self.raw_mode = false;
            disable_raw_mode()
        } else {
            Ok(())
        };
        let screen = execute!(self.out, LeaveAlternateScreen, DisableMouseCapture, Show);
        raw.and(screen)
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        if let Err(e) = self.restore() {
            warn!(error = %e, "Failed to restore terminal");
        }
    }
}
