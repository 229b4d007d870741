//! The tic-tac-toe state machine.
//!
//! [`GameEngine`] owns the board and turn state. Inputs arrive as raw cell
//! indices or restart requests; outputs are queued [`GameEvent`]s that the
//! presentation layer drains after each input.

use super::events::{GameEvent, Presenter};
use super::position::Position;
use super::rules;
use super::types::{Board, GameStatus, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Why a move request left the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum IgnoreReason {
    /// The index does not name a cell.
    #[display("Index {_0} is off the board")]
    OutOfRange(usize),
    /// The cell already holds a mark.
    #[display("{_0} is already taken")]
    Occupied(Position),
    /// The game is over or has not been initialized.
    #[display("Game is not active")]
    Inactive,
}

/// Result of a move request.
///
/// Ignored moves are not failures; callers treat them as no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The mark was placed at this position.
    Accepted(Position),
    /// Nothing changed.
    Ignored(IgnoreReason),
}

impl MoveOutcome {
    /// Returns true if the move changed the board.
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveOutcome::Accepted(_))
    }
}

/// Serializable view of an engine at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// The board.
    pub board: Board,
    /// Player to move (or who made the last move, once terminal).
    pub current_player: Player,
    /// Game status.
    pub status: GameStatus,
    /// Whether moves are accepted.
    pub active: bool,
    /// Status line text.
    pub status_text: String,
    /// Cells a move may still go to.
    pub valid_moves: Vec<Position>,
}

/// Tic-tac-toe game engine.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    status: GameStatus,
    active: bool,
    initialized: bool,
    pending: Vec<GameEvent>,
}

impl GameEngine {
    /// Creates an engine that ignores moves until [`initialize`](Self::initialize).
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            active: false,
            initialized: false,
            pending: Vec::new(),
        }
    }

    /// Starts the first game. Later calls do nothing.
    #[instrument(skip(self))]
    pub fn initialize(&mut self) {
        if self.initialized {
            debug!("Engine already initialized");
            return;
        }
        info!("Starting game");
        self.reset();
    }

    /// Resets the board and turn state, from any state.
    #[instrument(skip(self), fields(status = ?self.status))]
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.emit(GameEvent::BoardCleared);
        self.reset();
    }

    fn reset(&mut self) {
        self.board.clear();
        self.current_player = Player::X;
        self.status = GameStatus::InProgress;
        self.active = true;
        self.initialized = true;
        self.emit_status();
    }

    /// Attempts to place the current player's mark at a raw cell index.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn attempt_move(&mut self, index: usize) -> MoveOutcome {
        match Position::from_index(index) {
            Some(pos) => self.place(pos),
            None => {
                debug!(index, "Ignoring move off the board");
                MoveOutcome::Ignored(IgnoreReason::OutOfRange(index))
            }
        }
    }

    /// Attempts to place the current player's mark at `pos`.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn place(&mut self, pos: Position) -> MoveOutcome {
        if !self.active {
            debug!("Ignoring move while game is not active");
            return MoveOutcome::Ignored(IgnoreReason::Inactive);
        }
        if !self.board.is_empty(pos) {
            debug!(%pos, "Ignoring move on occupied square");
            return MoveOutcome::Ignored(IgnoreReason::Occupied(pos));
        }

        let player = self.current_player;
        self.board.set(pos, Square::Occupied(player));
        self.emit(GameEvent::CellFilled {
            position: pos,
            player,
        });

        self.status = self.check_winner();
        match self.status {
            GameStatus::InProgress => self.current_player = player.opponent(),
            GameStatus::Won(winner) => info!(%winner, "Game won"),
            GameStatus::Draw => info!("Game drawn"),
        }
        self.active = !self.status.is_terminal();
        self.emit_status();

        MoveOutcome::Accepted(pos)
    }

    fn check_winner(&self) -> GameStatus {
        rules::evaluate(&self.board)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true while moves are accepted.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Empty cells, or none once the game is not active.
    pub fn valid_moves(&self) -> Vec<Position> {
        if !self.active {
            return Vec::new();
        }
        Position::valid_moves(&self.board)
    }

    /// The line that ended the game, if it was won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        self.status.winner()?;
        rules::winning_line(&self.board)
    }

    /// Status line text for the current state.
    pub fn status_text(&self) -> String {
        match self.status {
            GameStatus::InProgress => format!("{}'s turn", self.current_player),
            GameStatus::Won(winner) => format!("{winner} wins!"),
            GameStatus::Draw => "Draw!".to_string(),
        }
    }

    /// Captures the current state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            current_player: self.current_player,
            status: self.status,
            active: self.active,
            status_text: self.status_text(),
            valid_moves: self.valid_moves(),
        }
    }

    /// Removes and returns pending events in emission order.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending)
    }

    /// Drains pending events into `presenter`.
    #[instrument(skip_all)]
    pub fn dispatch<P: Presenter + ?Sized>(&mut self, presenter: &mut P) {
        for event in self.drain_events() {
            presenter.present(&event);
        }
    }

    fn emit_status(&mut self) {
        let text = self.status_text();
        self.emit(GameEvent::StatusChanged { text });
    }

    fn emit(&mut self, event: GameEvent) {
        debug!(?event, "Queued event");
        self.pending.push(event);
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
