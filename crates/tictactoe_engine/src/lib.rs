//! Tic-tac-toe game engine.
//!
//! A pure state machine for two-player tic-tac-toe. The engine owns the
//! board and turn state and reports every visible change as a [`GameEvent`];
//! rendering and input delivery belong to the caller.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, GameStatus, Player};
//!
//! let mut engine = GameEngine::new();
//! engine.initialize();
//! for index in [0, 3, 1, 4, 2] {
//!     engine.attempt_move(index);
//! }
//! assert_eq!(engine.status(), GameStatus::Won(Player::X));
//! assert!(!engine.is_active());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod events;
mod position;
pub mod rules;
mod types;

pub use engine::{GameEngine, GameSnapshot, IgnoreReason, MoveOutcome};
pub use events::{GameEvent, Presenter};
pub use position::{InvalidPosition, Position};
pub use types::{Board, GameStatus, Player, Square};
