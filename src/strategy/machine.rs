//! A computer-controlled side.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::board::Board;
use crate::core::{GameError, Player};
use crate::game::Game;

use super::policy::{Move, Strategy};

/// What a `MachinePlayer` did on its turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// Played this move.
    Played(Move),
    /// No candidate was playable, so the turn was passed.
    Passed,
    /// Not this player's turn, or the game is over.
    Idle,
}

/// Plays one side of a game with a strategy.
pub struct MachinePlayer {
    player: Player,
    strategy: Box<dyn Strategy>,
}

impl MachinePlayer {
    pub fn new(player: Player, strategy: impl Strategy + 'static) -> Self {
        Self {
            player,
            strategy: Box::new(strategy),
        }
    }

    #[must_use]
    pub fn player(&self) -> Player {
        self.player
    }

    /// Act if it is this player's turn.
    ///
    /// Plays the first candidate whose card is still in hand and whose
    /// cell still accepts it, otherwise passes.
    #[instrument(skip_all, fields(player = %self.player))]
    pub fn take_turn(&self, game: &mut Game) -> Result<TurnOutcome, GameError> {
        if game.game_over()? || game.current_player()? != self.player {
            return Ok(TurnOutcome::Idle);
        }

        let candidates = self.strategy.generate_moves(&game.position()?);
        let chosen = candidates.into_iter().find_map(|mv| {
            let slot = game.hand(self.player).iter().position(|c| *c == mv.card)?;
            let cell = game.cell(mv.row, mv.col).ok()?;
            Board::check_valid_move(&cell, &mv.card).ok()?;
            Some((slot, mv))
        });

        match chosen {
            Some((slot, mv)) => {
                game.play_from_hand(self.player, slot, mv.row, mv.col)?;
                debug!(%mv, "played");
                Ok(TurnOutcome::Played(mv))
            }
            None => {
                game.pass_as(self.player)?;
                debug!("passed");
                Ok(TurnOutcome::Passed)
            }
        }
    }
}

impl std::fmt::Debug for MachinePlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MachinePlayer")
            .field("player", &self.player)
            .finish_non_exhaustive()
    }
}
