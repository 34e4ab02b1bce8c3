//! One-ply adversarial move selection.
//!
//! For each legal move the player's card is placed on a private copy of
//! the board (cheap, the grid is persistent). The opponent's candidate
//! replies come from an opponent strategy run once against the position
//! as it stands now, seen from the opponent's side. Each reply is scored
//! against the post-move board as the number of rows the opponent would
//! strictly win with that reply's value added to its row, provided the
//! reply's target cell is still playable after the player's move.
//!
//! The move whose best reply scores lowest wins; the first such move in
//! enumeration order is kept. This is a heuristic, not a tree search.

use tracing::{debug, instrument};

use crate::board::Board;
use crate::core::Player;
use crate::game::Position;

use super::policy::{legal_moves, Move, Strategy};

/// Picks the move that minimizes the opponent's best reply.
pub struct Minimax {
    opponent: Box<dyn Strategy>,
}

impl Minimax {
    /// Model the opponent's replies with `opponent`.
    pub fn new(opponent: impl Strategy + 'static) -> Self {
        Self {
            opponent: Box::new(opponent),
        }
    }

    /// Rows `player` strictly wins on `board` if `reply` is played.
    fn rows_won(board: &Board, player: Player, reply: &Move) -> usize {
        let lands = board
            .cell(reply.row, reply.col)
            .is_ok_and(|cell| cell.is_playable(&reply.card));

        board
            .row_scores()
            .iter()
            .enumerate()
            .filter(|(row, scores)| {
                let bonus = if lands && *row == reply.row {
                    reply.card.value()
                } else {
                    0
                };
                scores[player].saturating_add(bonus) > scores[player.opponent()]
            })
            .count()
    }

    /// Best score among `replies`, 0 when there are none.
    fn best_reply(board: &Board, opponent: Player, replies: &[Move]) -> usize {
        replies
            .iter()
            .map(|reply| Self::rows_won(board, opponent, reply))
            .max()
            .unwrap_or(0)
    }
}

impl Strategy for Minimax {
    #[instrument(level = "debug", skip_all, fields(player = %position.player()))]
    fn generate_moves(&self, position: &Position<'_>) -> Vec<Move> {
        let opponent = position.player().opponent();
        let replies = self.opponent.generate_moves(&position.for_opponent());

        let mut best: Option<(usize, Move)> = None;
        for mv in legal_moves(position) {
            let mut after = position.board().clone();
            if after.play_card(&mv.card, mv.row, mv.col).is_err() {
                continue;
            }
            let score = Self::best_reply(&after, opponent, &replies);
            if best.as_ref().map_or(true, |(lowest, _)| score < *lowest) {
                best = Some((score, mv));
            }
        }

        debug!(replies = replies.len(), best = ?best.as_ref().map(|(s, m)| (s, m.to_string())), "minimax");
        best.map(|(_, mv)| mv).into_iter().collect()
    }
}

impl std::fmt::Debug for Minimax {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Minimax").finish_non_exhaustive()
    }
}
