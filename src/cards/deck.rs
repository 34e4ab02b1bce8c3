//! Deck configuration loader.
//!
//! A deck file is a sequence of card blocks. Each block is a header line
//! `NAME COST VALUE` followed by a 5x5 grid centred on the card, where
//! `I` marks an influenced cell and any other character is blank:
//!
//! ```text
//! Trooper 1 2
//! XXXXX
//! XXIXX
//! XXCIX
//! XXIXX
//! XXXXX
//! ```
//!
//! Grids are written from Red's point of view; Blue's copies are mirrored
//! by `Card::new`. Blank lines between blocks are ignored.

use std::path::Path;

use tracing::debug;

use crate::core::{Coordinate, GameError, Player, PlayerMap};

use super::card::Card;

/// Side length of the influence grid.
pub const GRID_SIZE: usize = 5;

const GRID_CENTER: i32 = (GRID_SIZE / 2) as i32;

/// Errors raised while reading a deck file.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum DeckError {
    #[display("Could not read deck file {path}: {source}")]
    Io { path: String, source: std::io::Error },

    #[display("Line {line}: expected `NAME COST VALUE`")]
    BadHeader { line: usize },

    #[display("Line {line}: `{text}` is not a number")]
    BadNumber { line: usize, text: String },

    #[display("Line {line}: influence grid rows need 5 cells")]
    BadGridRow { line: usize },

    #[display("Line {line}: card ends before its influence grid")]
    TruncatedGrid { line: usize },

    #[display("Line {line}: {source}")]
    InvalidCard { line: usize, source: GameError },
}

/// Parse every card in `text` as a card owned by `player`.
pub fn parse_deck(text: &str, player: Player) -> Result<Vec<Card>, DeckError> {
    let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l.trim_end()));
    let mut cards = Vec::new();

    while let Some((header_line, header)) = lines.by_ref().find(|(_, l)| !l.trim().is_empty()) {
        let fields: Vec<&str> = header.split_whitespace().collect();
        let [name, cost, value] = fields[..] else {
            return Err(DeckError::BadHeader { line: header_line });
        };
        let cost = parse_number(cost, header_line)?;
        let value = parse_number(value, header_line)?;

        let mut influence = Vec::new();
        for grid_row in 0..GRID_SIZE {
            let (line, cells) = lines
                .next()
                .ok_or(DeckError::TruncatedGrid { line: header_line })?;
            let cells: Vec<char> = cells.chars().collect();
            if cells.len() < GRID_SIZE {
                return Err(DeckError::BadGridRow { line });
            }
            for (grid_col, &c) in cells.iter().take(GRID_SIZE).enumerate() {
                if c == 'I' {
                    influence.push(Coordinate::new(
                        grid_col as i32 - GRID_CENTER,
                        grid_row as i32 - GRID_CENTER,
                    ));
                }
            }
        }

        let card = Card::new(player, name, cost, value, influence)
            .map_err(|source| DeckError::InvalidCard { line: header_line, source })?;
        cards.push(card);
    }

    debug!(%player, cards = cards.len(), "parsed deck");
    Ok(cards)
}

/// Parse the same deck text once per player.
pub fn parse_decks(text: &str) -> Result<PlayerMap<Vec<Card>>, DeckError> {
    PlayerMap::try_new(|player| parse_deck(text, player))
}

/// Read and parse a deck file for `player`.
pub fn load_deck(path: impl AsRef<Path>, player: Player) -> Result<Vec<Card>, DeckError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| DeckError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_deck(&text, player)
}

fn parse_number(text: &str, line: usize) -> Result<u32, DeckError> {
    text.parse().map_err(|_| DeckError::BadNumber {
        line,
        text: text.to_string(),
    })
}
