//! The strategy trait and the greedy policies.
//!
//! A strategy reads a `Position` and returns candidate moves for the side
//! to move, best first. An empty list means "no move, pass". Strategies
//! never mutate anything and give the same answer for the same position.
//!
//! - `FirstFit`: every legal move, in enumeration order
//! - `ControlTheBoard`: moves maximizing owned pawn cells
//! - `MaximizeRowScore`: moves that turn a lost or tied row into a win

use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::cards::Card;
use crate::core::Player;
use crate::game::Position;

/// A card placed at a board cell.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub card: Card,
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(card: Card, row: usize, col: usize) -> Self {
        Self { card, row, col }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at ({}, {})", self.card.name(), self.row, self.col)
    }
}

/// Produces candidate moves for the side to move.
pub trait Strategy: Send + Sync {
    /// Candidate moves, best first. Empty when there is nothing to play.
    fn generate_moves(&self, position: &Position<'_>) -> Vec<Move>;
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn generate_moves(&self, position: &Position<'_>) -> Vec<Move> {
        (**self).generate_moves(position)
    }
}

/// Every legal move for the side to move: hand order, then rows top to
/// bottom, then columns left to right.
pub fn legal_moves<'a>(position: &Position<'a>) -> impl Iterator<Item = Move> + 'a {
    let board = position.board();
    position
        .own_hand()
        .iter()
        .flat_map(move |card| legal_cells(board, card).map(move |(row, col)| Move::new(card.clone(), row, col)))
}

/// Cells where `card` may be placed, row-major.
pub(crate) fn legal_cells<'a>(board: &'a Board, card: &'a Card) -> impl Iterator<Item = (usize, usize)> + 'a {
    board
        .iter()
        .filter(move |(_, _, cell)| cell.is_playable(card))
        .map(|(row, col, _)| (row, col))
}

// =============================================================================
// FirstFit
// =============================================================================

/// Every legal move, in enumeration order.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstFit;

impl Strategy for FirstFit {
    fn generate_moves(&self, position: &Position<'_>) -> Vec<Move> {
        legal_moves(position).collect()
    }
}

// =============================================================================
// ControlTheBoard
// =============================================================================

/// Moves that leave the player owning the most pawn cells.
///
/// A move is scored as the target cell plus every other pawn cell the
/// player already owns. All moves sharing the best score are kept, in
/// enumeration order.
#[derive(Clone, Copy, Debug, Default)]
pub struct ControlTheBoard;

impl ControlTheBoard {
    fn ownership_after(board: &Board, player: Player, row: usize, col: usize) -> usize {
        board
            .iter()
            .filter(|&(r, c, cell)| (r, c) == (row, col) || cell.is_pawn_of(player))
            .count()
    }
}

impl Strategy for ControlTheBoard {
    fn generate_moves(&self, position: &Position<'_>) -> Vec<Move> {
        let board = position.board();
        let player = position.player();

        let mut best = Vec::new();
        let mut best_score = 0;
        for mv in legal_moves(position) {
            let score = Self::ownership_after(board, player, mv.row, mv.col);
            if best.is_empty() || score > best_score {
                best_score = score;
                best.clear();
                best.push(mv);
            } else if score == best_score {
                best.push(mv);
            }
        }
        best
    }
}

// =============================================================================
// MaximizeRowScore
// =============================================================================

/// Moves that win a row the player is currently losing or tying.
///
/// Rows are visited top to bottom; within a row, hand order then columns.
/// A move is kept only when the card's value lifts the player's row score
/// strictly above the opponent's.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaximizeRowScore;

impl Strategy for MaximizeRowScore {
    fn generate_moves(&self, position: &Position<'_>) -> Vec<Move> {
        let board = position.board();
        let player = position.player();
        let hand = position.own_hand();

        let mut moves = Vec::new();
        for (row, scores) in board.row_scores().into_iter().enumerate() {
            let own = scores[player];
            let theirs = scores[player.opponent()];
            if own > theirs {
                continue;
            }
            for card in hand {
                if own.saturating_add(card.value()) <= theirs {
                    continue;
                }
                for col in 0..board.num_cols() {
                    if board.cell(row, col).is_ok_and(|cell| cell.is_playable(card)) {
                        moves.push(Move::new(card.clone(), row, col));
                    }
                }
            }
        }
        moves
    }
}
