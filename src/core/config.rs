//! Game setup parameters.

use serde::{Deserialize, Serialize};

/// Parameters for `Game::start_with`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board rows (at least 1).
    pub rows: usize,

    /// Board columns (odd, at least 3).
    pub cols: usize,

    /// Cards dealt to each hand at start. At most a third of a deck.
    pub hand_size: usize,

    /// Shuffle both decks before dealing.
    pub shuffle: bool,

    /// Seed for the shuffle. Same seed produces the same deal.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 3,
            cols: 5,
            hand_size: 5,
            shuffle: false,
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Set the board dimensions.
    pub fn with_board(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Set the starting hand size.
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Enable shuffling with the given seed.
    pub fn shuffled(mut self, seed: u64) -> Self {
        self.shuffle = true;
        self.seed = seed;
        self
    }
}
