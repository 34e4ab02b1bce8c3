//! Classified failures of the rules engine.
//!
//! Every rejected call returns a `GameError` and leaves the game untouched.
//! Callers that only care about the broad class (e.g. a view deciding
//! whether to surface or swallow a failure) use `GameError::kind`.

use super::player::Player;

/// Broad class of a `GameError`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The game is in the wrong lifecycle state for the call.
    InvalidState,
    /// Structurally invalid input: dimensions, ownership, illegal move.
    InvalidArgument,
    /// Direct cell access outside the grid.
    OutOfRange,
}

/// Errors produced by cards, cells, the board and the game.
#[derive(Clone, Debug, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GameError {
    #[display("Game has not started")]
    NotStarted,

    #[display("Game has already been started")]
    AlreadyStarted,

    #[display("Game is over")]
    GameOver,

    #[display("Invalid board dimensions {rows}x{cols}: need at least one row and an odd column count of at least 3")]
    InvalidDimensions { rows: usize, cols: usize },

    #[display("Board rows must all have the same length")]
    RaggedBoard,

    #[display("Not enough cards in {player}'s deck for the board: have {size}, need {required}")]
    DeckTooSmall { player: Player, size: usize, required: usize },

    #[display("Hand size {hand_size} exceeds a third of {player}'s deck (max {max})")]
    HandTooLarge { player: Player, hand_size: usize, max: usize },

    #[display("Card belongs to {found}, not to {expected}")]
    WrongDeckOwner { expected: Player, found: Player },

    #[display("Cannot play {card_owner}'s card on {current}'s turn")]
    NotCurrentPlayer { card_owner: Player, current: Player },

    #[display("It is {current}'s turn, not {player}'s")]
    OutOfTurn { player: Player, current: Player },

    #[display("Hand index {index} is outside {player}'s hand of {len}")]
    HandIndexOutOfRange { player: Player, index: usize, len: usize },

    #[display("Card {name} is not in {player}'s hand")]
    CardNotInHand { player: Player, name: String },

    #[display("Invalid cell. Must be a pawn cell")]
    NotPawnCell,

    #[display("Invalid cell. Cell is owned by {owner}, card by {card_owner}")]
    WrongCellOwner { owner: Player, card_owner: Player },

    #[display("Invalid cell. {pawns} pawn(s) cannot pay cost {cost}")]
    InsufficientPawns { pawns: u32, cost: u32 },

    #[display("Invalid card: {reason}")]
    InvalidCard { reason: &'static str },

    #[display("Invalid cell: {reason}")]
    InvalidCell { reason: &'static str },

    #[display("Cell ({row}, {col}) is outside the board")]
    OutOfRange { row: usize, col: usize },
}

impl GameError {
    /// The class of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::NotStarted | GameError::AlreadyStarted | GameError::GameOver => {
                ErrorKind::InvalidState
            },
            GameError::OutOfRange { .. } | GameError::HandIndexOutOfRange { .. } => {
                ErrorKind::OutOfRange
            },
            GameError::InvalidDimensions { .. }
            | GameError::RaggedBoard
            | GameError::DeckTooSmall { .. }
            | GameError::HandTooLarge { .. }
            | GameError::WrongDeckOwner { .. }
            | GameError::NotCurrentPlayer { .. }
            | GameError::OutOfTurn { .. }
            | GameError::CardNotInHand { .. }
            | GameError::NotPawnCell
            | GameError::WrongCellOwner { .. }
            | GameError::InsufficientPawns { .. }
            | GameError::InvalidCard { .. }
            | GameError::InvalidCell { .. } => ErrorKind::InvalidArgument,
        }
    }
}
