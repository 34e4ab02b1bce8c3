//! Cards and deck loading.
//!
//! ## Key Types
//!
//! - `Card`: immutable influence card (owner, name, cost, value, pattern)
//! - `DeckError`: failures while reading a deck file
//!
//! Decks are plain `Vec<Card>`; `deck::parse_deck` builds one from the
//! text format.

pub mod card;
pub mod deck;

pub use card::{Card, Influence, MAX_COST, MIN_COST};
pub use deck::{load_deck, parse_deck, parse_decks, DeckError};
