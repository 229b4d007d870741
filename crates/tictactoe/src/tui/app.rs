//! Application state: the engine plus the view it drives.

use super::input::{Action, action_for_key, move_cursor};
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tictactoe_engine::{GameEngine, MoveOutcome, Player, Position, Presenter};
use tracing::{debug, instrument};

/// What the screen shows, kept in sync only through engine events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardView {
    cells: [Option<Player>; 9],
    status: String,
}

impl BoardView {
    /// Mark rendered at `pos`.
    pub fn cell(&self, pos: Position) -> Option<Player> {
        self.cells[pos.to_index()]
    }

    /// Status line text.
    pub fn status(&self) -> &str {
        &self.status
    }
}

impl Presenter for BoardView {
    fn on_status_changed(&mut self, text: &str) {
        self.status = text.to_string();
    }

    fn on_cell_filled(&mut self, position: Position, player: Player) {
        self.cells[position.to_index()] = Some(player);
    }

    fn on_board_cleared(&mut self) {
        self.cells = [None; 9];
    }
}

/// Main application state.
pub struct App {
    engine: GameEngine,
    view: BoardView,
    cursor: Position,
    notice: Option<String>,
    cell_areas: [Rect; 9],
    should_quit: bool,
}

impl App {
    /// Creates a new application with a started game.
    #[instrument]
    pub fn new() -> Self {
        let mut app = Self {
            engine: GameEngine::new(),
            view: BoardView::default(),
            cursor: Position::Center,
            notice: None,
            cell_areas: [Rect::default(); 9],
            should_quit: false,
        };
        app.engine.initialize();
        app.sync();
        app
    }

    /// The engine, read-only.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// The rendered view.
    pub fn view(&self) -> &BoardView {
        &self.view
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Explanation of the last ignored input, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// A board position was selected.
    #[instrument(skip(self))]
    pub fn on_cell_activated(&mut self, index: usize) -> MoveOutcome {
        let outcome = self.engine.attempt_move(index);
        self.notice = match outcome {
            MoveOutcome::Accepted(pos) => {
                self.cursor = pos;
                None
            }
            MoveOutcome::Ignored(reason) => {
                debug!(%reason, "Move ignored");
                Some(reason.to_string())
            }
        };
        self.sync();
        outcome
    }

    /// The restart control was used.
    #[instrument(skip(self))]
    pub fn on_restart_requested(&mut self) {
        self.engine.restart();
        self.notice = None;
        self.sync();
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let Some(action) = action_for_key(key) else {
            return;
        };
        debug!(?action, "Key action");

        match action {
            Action::Activate(pos) => {
                self.on_cell_activated(pos.to_index());
            }
            Action::ActivateCursor => {
                self.on_cell_activated(self.cursor.to_index());
            }
            Action::MoveCursor(code) => self.cursor = move_cursor(self.cursor, code),
            Action::Restart => self.on_restart_requested(),
            Action::Quit => self.should_quit = true,
        }
    }

    /// Handles a mouse event; a left click on a cell plays it.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(pos) = self.cell_at(mouse.column, mouse.row) {
            self.on_cell_activated(pos.to_index());
        }
    }

    /// Records where each cell was last drawn, for mouse hit-testing.
    pub fn set_cell_areas(&mut self, areas: [Rect; 9]) {
        self.cell_areas = areas;
    }

    /// The cell drawn at a terminal coordinate.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        Position::ALL.into_iter().find(|pos| {
            let area = self.cell_areas[pos.to_index()];
            column >= area.x
                && column < area.x.saturating_add(area.width)
                && row >= area.y
                && row < area.y.saturating_add(area.height)
        })
    }

    fn sync(&mut self) {
        self.engine.dispatch(&mut self.view);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
