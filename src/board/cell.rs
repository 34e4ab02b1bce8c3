//! Board cells.
//!
//! A cell is a small `Copy` value. The board never mutates a cell in
//! place; it replaces the whole value in its grid.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::{GameError, Player};

/// Most pawns a single cell can hold.
pub const MAX_PAWNS: u32 = 3;

/// One slot of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nothing here yet.
    #[default]
    Empty,
    /// 1 to 3 pawns owned by one player; spent to play cards.
    Pawn { count: u32, owner: Player },
    /// A played card's value, counted toward its owner's row score.
    Value { amount: u32, owner: Player },
}

/// Which variant a cell is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    Empty,
    Pawn,
    Value,
}

/// Tagged description of a cell for views and logs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellContents {
    pub kind: CellKind,
    /// `None` for an empty cell.
    pub owner: Option<Player>,
    /// Pawn count or card value; 0 when empty.
    pub magnitude: u32,
}

impl Cell {
    /// A validated pawn cell.
    pub fn pawn(count: u32, owner: Player) -> Result<Self, GameError> {
        Self::Pawn { count, owner }.validated()
    }

    /// A validated value cell.
    pub fn value(amount: u32, owner: Player) -> Result<Self, GameError> {
        Self::Value { amount, owner }.validated()
    }

    /// Check the variant's magnitude invariant.
    pub fn validated(self) -> Result<Self, GameError> {
        match self {
            Cell::Pawn { count, .. } if !(1..=MAX_PAWNS).contains(&count) => Err(GameError::InvalidCell {
                reason: "pawn count must be between 1 and 3",
            }),
            Cell::Value { amount: 0, .. } => Err(GameError::InvalidCell {
                reason: "value must be positive",
            }),
            _ => Ok(self),
        }
    }

    /// Owner, or `None` for an empty cell.
    #[must_use]
    pub fn owner(&self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Pawn { owner, .. } | Cell::Value { owner, .. } => Some(*owner),
        }
    }

    /// Pawn count or value amount; 0 when empty.
    #[must_use]
    pub fn magnitude(&self) -> u32 {
        match self {
            Cell::Empty => 0,
            Cell::Pawn { count, .. } => *count,
            Cell::Value { amount, .. } => *amount,
        }
    }

    #[must_use]
    pub fn kind(&self) -> CellKind {
        match self {
            Cell::Empty => CellKind::Empty,
            Cell::Pawn { .. } => CellKind::Pawn,
            Cell::Value { .. } => CellKind::Value,
        }
    }

    #[must_use]
    pub fn contents(&self) -> CellContents {
        CellContents {
            kind: self.kind(),
            owner: self.owner(),
            magnitude: self.magnitude(),
        }
    }

    #[must_use]
    pub fn is_value(&self) -> bool {
        matches!(self, Cell::Value { .. })
    }

    /// True for a pawn cell owned by `player`.
    #[must_use]
    pub fn is_pawn_of(&self, player: Player) -> bool {
        matches!(self, Cell::Pawn { owner, .. } if *owner == player)
    }

    /// Whether `card` may be played here.
    ///
    /// The cell must hold pawns owned by the card's owner, at least as
    /// many as the card costs.
    pub fn check_playable(&self, card: &Card) -> Result<(), GameError> {
        let Cell::Pawn { count, owner } = *self else {
            return Err(GameError::NotPawnCell);
        };
        if owner != card.owner() {
            return Err(GameError::WrongCellOwner {
                owner,
                card_owner: card.owner(),
            });
        }
        if count < card.cost() {
            return Err(GameError::InsufficientPawns {
                pawns: count,
                cost: card.cost(),
            });
        }
        Ok(())
    }

    /// Boolean form of `check_playable`.
    #[must_use]
    pub fn is_playable(&self, card: &Card) -> bool {
        matches!(self, Cell::Pawn { count, owner } if *owner == card.owner() && *count >= card.cost())
    }

    /// The cell after `player` influences it.
    ///
    /// Own pawns gain one (saturating at 3), enemy pawns change hands
    /// keeping their count, empty cells gain a single pawn and value
    /// cells are untouched.
    #[must_use]
    pub fn influenced_by(self, player: Player) -> Self {
        match self {
            Cell::Empty => Cell::Pawn { count: 1, owner: player },
            Cell::Pawn { count, owner } if owner == player => Cell::Pawn {
                count: (count + 1).min(MAX_PAWNS),
                owner,
            },
            Cell::Pawn { count, .. } => Cell::Pawn { count, owner: player },
            Cell::Value { .. } => self,
        }
    }

    /// Glyph used by the board rendering.
    #[must_use]
    pub fn glyph(&self) -> char {
        match self {
            Cell::Empty => '_',
            Cell::Pawn { count, .. } => char::from_digit(*count, 10).unwrap_or('?'),
            Cell::Value { owner, .. } => owner.initial(),
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Empty => write!(f, "Empty"),
            Cell::Pawn { count, owner } => write!(f, "Pawn({owner}, {count})"),
            Cell::Value { amount, owner } => write!(f, "Value({owner}, {amount})"),
        }
    }
}
