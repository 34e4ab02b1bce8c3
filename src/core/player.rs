//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! Sanguine is strictly two-player: `Red` always moves first and owns the
//! left edge of the board, `Blue` moves second and owns the right edge.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `Player` for O(1) access.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    /// First player. Seeded on column 0, moves first.
    Red,
    /// Second player. Seeded on the last column, cards are mirrored.
    Blue,
}

impl Player {
    /// Both players in turn order.
    pub const ALL: [Player; 2] = [Player::Red, Player::Blue];

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::Red => Player::Blue,
            Player::Blue => Player::Red,
        }
    }

    /// Slot index (Red = 0, Blue = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::Red => 0,
            Player::Blue => 1,
        }
    }

    /// Single-character marker used in board rendering.
    #[must_use]
    pub const fn initial(self) -> char {
        match self {
            Player::Red => 'R',
            Player::Blue => 'B',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::Red => write!(f, "RED"),
            Player::Blue => write!(f, "BLUE"),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use sanguine::core::{Player, PlayerMap};
///
/// let mut passes: PlayerMap<u32> = PlayerMap::with_value(0);
/// passes[Player::Blue] += 1;
///
/// assert_eq!(passes[Player::Red], 0);
/// assert_eq!(passes[Player::Blue], 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(mut factory: impl FnMut(Player) -> T) -> Self {
        Self {
            data: [factory(Player::Red), factory(Player::Blue)],
        }
    }

    /// Create a map from a fallible factory, stopping at the first error.
    pub fn try_new<E>(mut factory: impl FnMut(Player) -> Result<T, E>) -> Result<Self, E> {
        Ok(Self {
            data: [factory(Player::Red)?, factory(Player::Blue)?],
        })
    }

    /// Create a map from Red's and Blue's entries.
    pub fn from_pair(red: T, blue: T) -> Self {
        Self { data: [red, blue] }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value],
        }
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
    }

    /// Map every entry through `f`, keeping the player association.
    pub fn map<'a, U>(&'a self, mut f: impl FnMut(Player, &'a T) -> U) -> PlayerMap<U> {
        PlayerMap::new(|player| f(player, self.get(player)))
    }

    /// Consume the map, transforming every entry through `f`.
    pub fn map_into<U>(self, mut f: impl FnMut(Player, T) -> U) -> PlayerMap<U> {
        let [red, blue] = self.data;
        PlayerMap::from_pair(f(Player::Red, red), f(Player::Blue, blue))
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}
