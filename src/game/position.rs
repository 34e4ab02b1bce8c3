//! Read-only view of a game handed to strategies.

use crate::board::Board;
use crate::cards::Card;
use crate::core::{Player, PlayerMap};

/// A snapshot borrow of the board, the side to move and both hands.
///
/// Holding a `Position` borrowed from a `Game` keeps the game immutable
/// for as long as the position lives.
#[derive(Clone, Copy, Debug)]
pub struct Position<'a> {
    board: &'a Board,
    player: Player,
    hands: PlayerMap<&'a [Card]>,
}

impl<'a> Position<'a> {
    /// A position for `player` with explicit hands.
    pub fn new(board: &'a Board, player: Player, red_hand: &'a [Card], blue_hand: &'a [Card]) -> Self {
        Self::from_parts(board, player, PlayerMap::from_pair(red_hand, blue_hand))
    }

    pub(crate) fn from_parts(board: &'a Board, player: Player, hands: PlayerMap<&'a [Card]>) -> Self {
        Self { board, player, hands }
    }

    #[must_use]
    pub fn board(&self) -> &'a Board {
        self.board
    }

    /// The side to move.
    #[must_use]
    pub fn player(&self) -> Player {
        self.player
    }

    #[must_use]
    pub fn hand(&self, player: Player) -> &'a [Card] {
        self.hands[player]
    }

    /// The side to move's hand.
    #[must_use]
    pub fn own_hand(&self) -> &'a [Card] {
        self.hands[self.player]
    }

    /// The same position seen by the other side.
    #[must_use]
    pub fn for_opponent(&self) -> Self {
        Self {
            player: self.player.opponent(),
            ..*self
        }
    }
}
