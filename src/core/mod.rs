//! Core types: players, coordinates, errors, RNG, configuration.
//!
//! These are the leaf building blocks shared by cards, the board, the
//! game state machine and the strategies.

pub mod config;
pub mod coordinate;
pub mod error;
pub mod player;
pub mod rng;

pub use config::GameConfig;
pub use coordinate::Coordinate;
pub use error::{ErrorKind, GameError};
pub use player::{Player, PlayerMap};
pub use rng::GameRng;
