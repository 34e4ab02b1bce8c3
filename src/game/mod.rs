//! The game state machine and its notifications.
//!
//! ## Key Types
//!
//! - `Game`: decks, hands, board, turn order and pass streak
//! - `GameEvent` / `GameListener`: synchronous notifications
//! - `Position`: read-only snapshot handed to strategies

pub mod events;
#[allow(clippy::module_inception)]
pub mod game;
pub mod position;

pub use events::{GameEvent, GameListener};
pub use game::Game;
pub use position::Position;
