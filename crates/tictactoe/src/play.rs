//! Non-interactive play: feed a list of moves through an engine.

use serde::Serialize;
use tictactoe_engine::{GameEngine, GameEvent, GameSnapshot, MoveOutcome, Position};
use tracing::{debug, instrument};

/// One requested move and what became of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveRecord {
    /// The move as given.
    pub input: String,
    /// Whether the board changed.
    pub accepted: bool,
    /// Why the move was ignored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Result of a scripted game.
#[derive(Debug, Clone, Serialize)]
pub struct PlayReport {
    /// Every requested move, in order.
    pub moves: Vec<MoveRecord>,
    /// Events emitted along the way.
    pub events: Vec<GameEvent>,
    /// Final state.
    pub snapshot: GameSnapshot,
}

impl PlayReport {
    /// Board, ignored moves and status as plain text.
    pub fn render(&self) -> String {
        let mut out = self.snapshot.board.display();
        out.push_str("\n\n");
        for record in self.moves.iter().filter(|r| !r.accepted) {
            let note = record.note.as_deref().unwrap_or("ignored");
            out.push_str(&format!("ignored '{}': {}\n", record.input, note));
        }
        out.push_str(&self.snapshot.status_text);
        out
    }
}

/// Plays `moves` in order on a fresh game.
///
/// Moves are indices 0-8 or position labels. Anything else is recorded as
/// ignored, like any other rejected move.
#[instrument]
pub fn play_moves(moves: &[String]) -> PlayReport {
    let mut engine = GameEngine::new();
    engine.initialize();
    let mut events: Vec<GameEvent> = Vec::new();

    let records = moves
        .iter()
        .map(|input| {
            let outcome = match input.parse::<Position>() {
                Ok(pos) => Some(engine.place(pos)),
                Err(_) => match input.trim().parse::<usize>() {
                    Ok(index) => Some(engine.attempt_move(index)),
                    Err(_) => None,
                },
            };
            engine.dispatch(&mut events);
            debug!(%input, ?outcome, "Played move");

            match outcome {
                Some(MoveOutcome::Accepted(_)) => MoveRecord {
                    input: input.clone(),
                    accepted: true,
                    note: None,
                },
                Some(MoveOutcome::Ignored(reason)) => MoveRecord {
                    input: input.clone(),
                    accepted: false,
                    note: Some(reason.to_string()),
                },
                None => MoveRecord {
                    input: input.clone(),
                    accepted: false,
                    note: Some("not a board position".to_string()),
                },
            }
        })
        .collect();

    PlayReport {
        moves: records,
        events,
        snapshot: engine.snapshot(),
    }
}
