//! Board and cells.
//!
//! ## Key Types
//!
//! - `Cell`: Empty, Pawn or Value slot
//! - `CellContents`: kind, owner and magnitude of a cell
//! - `Board`: grid of cells; owns placement, influence and scoring
//!
//! The board never calls back into the game. Turn order and card
//! ownership against the current player are the game's concern.

pub mod grid;
pub mod cell;

pub use grid::Board;
pub use cell::{Cell, CellContents, CellKind, MAX_PAWNS};
