//! # sanguine
//!
//! Rules engine and move-generation strategies for Sanguine, a two-player
//! card-placement board game.
//!
//! ## Rules in brief
//!
//! Each player owns a deck of cards. A card costs 1 to 3 pawns and is
//! played onto a cell holding at least that many of its owner's pawns.
//! The cell becomes a value cell worth the card's value, and the card's
//! influence pattern adds, strengthens or captures pawns around it. A row
//! is won by the player with the higher sum of value cells in it; a
//! player's total is the sum of the rows they win. The game ends after two
//! consecutive passes or when every cell holds a card.
//!
//! ## Design
//!
//! - **Validate, then mutate**: every rejected call returns a `GameError`
//!   and leaves the game untouched.
//! - **Persistent board**: the grid is an `im::Vector`, so strategies clone
//!   it in O(1) to try moves.
//! - **Pure strategies**: `Strategy::generate_moves` borrows a read-only
//!   `Position` and returns candidate moves.
//!
//! ## Modules
//!
//! - `core`: players, coordinates, errors, RNG, configuration
//! - `cards`: cards and the deck file loader
//! - `board`: cells, the grid, influence and scoring
//! - `game`: the turn state machine and its notifications
//! - `strategy`: move generation and the machine player

pub mod core;
pub mod cards;
pub mod board;
pub mod game;
pub mod strategy;

pub use crate::core::{Coordinate, ErrorKind, GameConfig, GameError, GameRng, Player, PlayerMap};

pub use crate::cards::{load_deck, parse_deck, parse_decks, Card, DeckError};

pub use crate::board::{Board, Cell, CellContents, CellKind};

pub use crate::game::{Game, GameEvent, GameListener, Position};

pub use crate::strategy::{
    Composite, ControlTheBoard, FirstFit, MachinePlayer, MaximizeRowScore, Minimax, Move,
    Strategy, TurnOutcome,
};
