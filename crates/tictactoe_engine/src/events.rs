//! Outbound events emitted by the engine for the presentation layer.
//!
//! The engine never draws anything. It queues [`GameEvent`]s; a
//! [`Presenter`] applies them to whatever surface it owns.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A change the presentation layer should reflect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// Human-readable status line ("X's turn", "O wins!", "Draw!").
    StatusChanged {
        /// Text for the status area.
        text: String,
    },
    /// A mark was placed and should be rendered.
    CellFilled {
        /// Where the mark was placed.
        position: Position,
        /// Whose mark it is.
        player: Player,
    },
    /// Every rendered cell should be cleared.
    BoardCleared,
}

/// Receiver side of the presentation boundary.
pub trait Presenter {
    /// Shows `text` in the status area.
    fn on_status_changed(&mut self, text: &str);

    /// Renders `player`'s symbol at `position`.
    fn on_cell_filled(&mut self, position: Position, player: Player);

    /// Clears all rendered cell contents.
    fn on_board_cleared(&mut self);

    /// Routes a single event to the matching callback.
    fn present(&mut self, event: &GameEvent) {
        match event {
            GameEvent::StatusChanged { text } => self.on_status_changed(text),
            GameEvent::CellFilled { position, player } => self.on_cell_filled(*position, *player),
            GameEvent::BoardCleared => self.on_board_cleared(),
        }
    }
}

/// Collects events verbatim. Useful for logging and tests.
impl Presenter for Vec<GameEvent> {
    fn on_status_changed(&mut self, text: &str) {
        self.push(GameEvent::StatusChanged {
            text: text.to_string(),
        });
    }

    fn on_cell_filled(&mut self, position: Position, player: Player) {
        self.push(GameEvent::CellFilled { position, player });
    }

    fn on_board_cleared(&mut self) {
        self.push(GameEvent::BoardCleared);
    }
}
