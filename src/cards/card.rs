//! Influence cards.
//!
//! A card is immutable once built. Its influence pattern is authored from
//! Red's point of view; Blue's copies are mirrored across the vertical
//! axis when the card is constructed, so the board never needs to know
//! which side a pattern was written for.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Coordinate, GameError, Player};

/// Influence offsets. Most cards touch a handful of cells.
pub type Influence = SmallVec<[Coordinate; 8]>;

/// Lowest and highest pawn cost a card may have.
pub const MIN_COST: u32 = 1;
pub const MAX_COST: u32 = 3;

/// A playable card.
///
/// ## Example
///
/// ```
/// use sanguine::cards::Card;
/// use sanguine::core::{Coordinate, Player};
///
/// let red = Card::new(Player::Red, "Guard", 1, 2, [Coordinate::new(1, 0)]).unwrap();
/// let blue = Card::new(Player::Blue, "Guard", 1, 2, [Coordinate::new(1, 0)]).unwrap();
///
/// assert_eq!(red.influence(), &[Coordinate::new(1, 0)]);
/// assert_eq!(blue.influence(), &[Coordinate::new(-1, 0)]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    owner: Player,
    name: String,
    cost: u32,
    value: u32,
    influence: Influence,
}

impl Card {
    /// Build a card, validating every field.
    ///
    /// `influence` is given from Red's perspective and mirrored for Blue.
    pub fn new(
        owner: Player,
        name: impl Into<String>,
        cost: u32,
        value: u32,
        influence: impl IntoIterator<Item = Coordinate>,
    ) -> Result<Self, GameError> {
        let name = name.into();
        if name.is_empty() {
            return Err(GameError::InvalidCard { reason: "name cannot be empty" });
        }
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(GameError::InvalidCard { reason: "cost must be between 1 and 3" });
        }
        if value == 0 {
            return Err(GameError::InvalidCard { reason: "value must be positive" });
        }

        let influence: Influence = influence
            .into_iter()
            .map(|c| match owner {
                Player::Red => c,
                Player::Blue => c.mirrored(),
            })
            .collect();
        if influence.is_empty() {
            return Err(GameError::InvalidCard { reason: "influence cannot be empty" });
        }
        if influence.iter().any(|c| c.is_origin()) {
            return Err(GameError::InvalidCard { reason: "influence cannot include the card's own cell" });
        }

        Ok(Self {
            owner,
            name,
            cost,
            value,
            influence,
        })
    }

    #[must_use]
    pub fn owner(&self) -> Player {
        self.owner
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pawns required on the target cell.
    #[must_use]
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Row score contributed once played.
    #[must_use]
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Influence offsets, already mirrored for Blue.
    #[must_use]
    pub fn influence(&self) -> &[Coordinate] {
        &self.influence
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (cost {}, value {})", self.name, self.cost, self.value)
    }
}
