//! The game state machine.
//!
//! A `Game` is created from two decks and is `NotStarted` until
//! `start_game` (or `start_with`) deals the hands and builds the board.
//! It is then `InProgress` until two consecutive passes or a full board
//! make it `Over`. Over is computed, never stored, and once reached every
//! mutator is rejected.
//!
//! Every mutator checks all of its preconditions before touching any
//! state, so a rejected call leaves the game exactly as it was. Rejections
//! are logged with `warn!` and reported to listeners as
//! `GameEvent::Error`.

use std::collections::VecDeque;

use tracing::{debug, instrument, warn};

use crate::board::{Board, Cell, CellContents};
use crate::cards::Card;
use crate::core::{GameConfig, GameError, GameRng, Player, PlayerMap};

use super::events::{GameEvent, GameListener};
use super::position::Position;

/// A two-player game of Sanguine.
pub struct Game {
    /// Undealt cards; the front is drawn next.
    decks: PlayerMap<VecDeque<Card>>,
    hands: PlayerMap<Vec<Card>>,
    /// `None` until the game starts.
    board: Option<Board>,
    current: Player,
    seed: u64,
    last_passer: Option<Player>,
    consecutive_passes: u32,
    listeners: Vec<Box<dyn GameListener>>,
}

impl Game {
    /// Create an unstarted game from each player's deck.
    ///
    /// Every card in a deck must belong to that deck's player.
    pub fn new(red_deck: Vec<Card>, blue_deck: Vec<Card>) -> Result<Self, GameError> {
        Self::from_decks(PlayerMap::from_pair(red_deck, blue_deck))
    }

    /// Create an unstarted game from a per-player deck map.
    pub fn from_decks(decks: PlayerMap<Vec<Card>>) -> Result<Self, GameError> {
        for (expected, deck) in decks.iter() {
            if let Some(card) = deck.iter().find(|c| c.owner() != expected) {
                return Err(GameError::WrongDeckOwner {
                    expected,
                    found: card.owner(),
                });
            }
        }

        Ok(Self {
            decks: decks.map_into(|_, deck| VecDeque::from(deck)),
            hands: PlayerMap::default(),
            board: None,
            current: Player::Red,
            seed: GameConfig::default().seed,
            last_passer: None,
            consecutive_passes: 0,
            listeners: Vec::new(),
        })
    }

    /// Set the seed used when `start_game` shuffles.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Register a listener. Listeners run in registration order.
    pub fn add_listener(&mut self, listener: impl GameListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    // === Lifecycle ===

    /// Build the board, optionally shuffle, and deal `hand_size` cards to
    /// each player. Red moves first.
    ///
    /// Shuffling uses the game's seed (see `with_seed`).
    pub fn start_game(
        &mut self,
        rows: usize,
        cols: usize,
        hand_size: usize,
        shuffle: bool,
    ) -> Result<(), GameError> {
        let config = GameConfig {
            rows,
            cols,
            hand_size,
            shuffle,
            seed: self.seed,
        };
        self.start_with(&config)
    }

    /// Start the game from a `GameConfig`.
    ///
    /// Fails if already started, if the dimensions are invalid, if either
    /// deck holds fewer than `rows * cols` cards, or if the hand size
    /// exceeds a third of either deck.
    #[instrument(skip(self, config), fields(rows = config.rows, cols = config.cols, hand = config.hand_size))]
    pub fn start_with(&mut self, config: &GameConfig) -> Result<(), GameError> {
        let result = self.try_start(config);
        let result = self.reported(result);
        if result.is_ok() {
            self.notify(GameEvent::TurnChanged(self.current));
        }
        result
    }

    fn try_start(&mut self, config: &GameConfig) -> Result<(), GameError> {
        if self.board.is_some() {
            return Err(GameError::AlreadyStarted);
        }
        let board = Board::new(config.rows, config.cols)?;

        let required = config.rows * config.cols;
        for (player, deck) in self.decks.iter() {
            if deck.len() < required {
                return Err(GameError::DeckTooSmall {
                    player,
                    size: deck.len(),
                    required,
                });
            }
            let max = deck.len() / 3;
            if config.hand_size > max {
                return Err(GameError::HandTooLarge {
                    player,
                    hand_size: config.hand_size,
                    max,
                });
            }
        }

        if config.shuffle {
            let mut rng = GameRng::new(config.seed);
            for player in Player::ALL {
                rng.shuffle(self.decks[player].make_contiguous());
            }
        }
        for player in Player::ALL {
            let dealt = self.decks[player].drain(..config.hand_size);
            self.hands[player].extend(dealt);
        }

        self.board = Some(board);
        self.current = Player::Red;
        self.last_passer = None;
        self.consecutive_passes = 0;
        debug!(seed = config.seed, shuffled = config.shuffle, "game started");
        Ok(())
    }

    /// Whether `start_game` has succeeded.
    #[must_use]
    pub fn is_started(&self) -> bool {
        self.board.is_some()
    }

    // === Turns ===

    /// Play `card` from the current player's hand at `(row, col)`.
    ///
    /// The card must be owned by the current player and be in their hand,
    /// and the target cell must be a pawn cell of theirs with enough pawns
    /// to pay its cost. On success the pass streak resets, the card leaves
    /// the hand, the turn passes and the new current player draws.
    #[instrument(skip(self, card), fields(card = card.name(), player = %card.owner()))]
    pub fn play_card(&mut self, card: &Card, row: usize, col: usize) -> Result<(), GameError> {
        let result = self.try_play_card(card, row, col);
        self.reported(result)?;
        self.end_turn();
        Ok(())
    }

    fn try_play_card(&mut self, card: &Card, row: usize, col: usize) -> Result<(), GameError> {
        self.check_in_progress()?;
        if card.owner() != self.current {
            return Err(GameError::NotCurrentPlayer {
                card_owner: card.owner(),
                current: self.current,
            });
        }
        let slot = self.hands[self.current]
            .iter()
            .position(|c| c == card)
            .ok_or_else(|| GameError::CardNotInHand {
                player: self.current,
                name: card.name().to_string(),
            })?;

        let board = self.board.as_mut().ok_or(GameError::NotStarted)?;
        board.play_card(card, row, col)?;

        self.hands[self.current].remove(slot);
        self.consecutive_passes = 0;
        Ok(())
    }

    /// Play the card at `index` in `player`'s hand at `(row, col)`.
    ///
    /// The entry point for an actor that picked a hand slot and a cell.
    /// Fails with `OutOfTurn` when `player` is not to move and with
    /// `HandIndexOutOfRange` for a bad slot.
    #[instrument(skip(self))]
    pub fn play_from_hand(
        &mut self,
        player: Player,
        index: usize,
        row: usize,
        col: usize,
    ) -> Result<(), GameError> {
        let result = self
            .check_actor(player)
            .and_then(|()| self.hand_card(player, index));
        let card = self.reported(result)?;
        self.play_card(&card, row, col)
    }

    /// Pass on behalf of `player`, failing with `OutOfTurn` when it is
    /// not their turn.
    pub fn pass_as(&mut self, player: Player) -> Result<(), GameError> {
        let result = self.check_actor(player);
        self.reported(result)?;
        self.pass()
    }

    /// Pass the current player's turn.
    ///
    /// Two passes in a row by alternating players end the game. A pass by
    /// the player who also made the previous pass restarts the streak.
    #[instrument(skip(self), fields(player = %self.current))]
    pub fn pass(&mut self) -> Result<(), GameError> {
        let result = self.check_in_progress();
        self.reported(result)?;

        let passer = self.current;
        self.consecutive_passes = if self.last_passer == Some(passer) {
            1
        } else {
            self.consecutive_passes + 1
        };
        self.last_passer = Some(passer);
        debug!(streak = self.consecutive_passes, "pass");

        self.notify(GameEvent::TurnPassed(passer));
        self.end_turn();
        Ok(())
    }

    /// Hand the turn to the other player without playing or passing.
    pub fn switch_player(&mut self) -> Result<(), GameError> {
        let result = self.check_started();
        self.reported(result)?;
        self.current = self.current.opponent();
        self.notify(GameEvent::TurnChanged(self.current));
        Ok(())
    }

    /// Switch player, draw for the new player, then announce the turn and,
    /// if reached, the end of the game.
    fn end_turn(&mut self) {
        self.current = self.current.opponent();
        if let Some(card) = self.decks[self.current].pop_front() {
            debug!(player = %self.current, card = card.name(), "draw");
            self.hands[self.current].push(card);
        }
        self.notify(GameEvent::TurnChanged(self.current));

        if self.is_over() {
            let winner = self.board.as_ref().and_then(winner_of);
            debug!(?winner, "game over");
            self.notify(GameEvent::GameOver { winner });
        }
    }

    // === Outcome ===

    /// Two consecutive passes, or every cell holds a played card.
    pub fn game_over(&self) -> Result<bool, GameError> {
        self.check_started()?;
        Ok(self.is_over())
    }

    /// The player with the higher total score once the game is over.
    ///
    /// `None` while the game is running and on a tie.
    pub fn winner(&self) -> Result<Option<Player>, GameError> {
        let board = self.started_board()?;
        if !self.is_over() {
            return Ok(None);
        }
        Ok(winner_of(board))
    }

    fn is_over(&self) -> bool {
        self.consecutive_passes >= 2 || self.board.as_ref().is_some_and(Board::is_full)
    }

    // === Accessors ===

    pub fn current_player(&self) -> Result<Player, GameError> {
        self.check_started()?;
        Ok(self.current)
    }

    pub fn board(&self) -> Result<&Board, GameError> {
        self.started_board()
    }

    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, GameError> {
        self.started_board()?.cell(row, col)
    }

    /// Owner of the cell, `None` when it is empty.
    pub fn cell_owner(&self, row: usize, col: usize) -> Result<Option<Player>, GameError> {
        Ok(self.cell(row, col)?.owner())
    }

    /// Kind, owner and magnitude of a cell.
    pub fn cell_contents(&self, row: usize, col: usize) -> Result<CellContents, GameError> {
        Ok(self.cell(row, col)?.contents())
    }

    pub fn row_score(&self, row: usize, player: Player) -> Result<u32, GameError> {
        self.started_board()?.row_score(row, player)
    }

    pub fn total_score(&self, player: Player) -> Result<u32, GameError> {
        Ok(self.started_board()?.total_score(player))
    }

    pub fn num_rows(&self) -> Result<usize, GameError> {
        Ok(self.started_board()?.num_rows())
    }

    pub fn num_cols(&self) -> Result<usize, GameError> {
        Ok(self.started_board()?.num_cols())
    }

    /// Whether `card` may be placed on `cell`, by board rules alone.
    pub fn check_valid_move(&self, cell: &Cell, card: &Card) -> Result<(), GameError> {
        Board::check_valid_move(cell, card)
    }

    /// Remaining undealt cards, next draw first.
    #[must_use]
    pub fn deck(&self, player: Player) -> &VecDeque<Card> {
        &self.decks[player]
    }

    #[must_use]
    pub fn hand(&self, player: Player) -> &[Card] {
        &self.hands[player]
    }

    /// Length of the current pass streak.
    #[must_use]
    pub fn consecutive_passes(&self) -> u32 {
        self.consecutive_passes
    }

    #[must_use]
    pub fn last_passer(&self) -> Option<Player> {
        self.last_passer
    }

    /// A read-only snapshot for strategies.
    pub fn position(&self) -> Result<Position<'_>, GameError> {
        let board = self.started_board()?;
        let hands = self.hands.map(|_, hand| hand.as_slice());
        Ok(Position::from_parts(board, self.current, hands))
    }

    // === Internals ===

    fn started_board(&self) -> Result<&Board, GameError> {
        self.board.as_ref().ok_or(GameError::NotStarted)
    }

    fn check_started(&self) -> Result<(), GameError> {
        self.started_board().map(|_| ())
    }

    fn check_in_progress(&self) -> Result<(), GameError> {
        self.check_started()?;
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        Ok(())
    }

    fn check_actor(&self, player: Player) -> Result<(), GameError> {
        self.check_in_progress()?;
        if player != self.current {
            return Err(GameError::OutOfTurn {
                player,
                current: self.current,
            });
        }
        Ok(())
    }

    fn hand_card(&self, player: Player, index: usize) -> Result<Card, GameError> {
        let hand = &self.hands[player];
        hand.get(index)
            .cloned()
            .ok_or(GameError::HandIndexOutOfRange {
                player,
                index,
                len: hand.len(),
            })
    }

    /// Log and broadcast a rejection before handing it back.
    fn reported<T>(&mut self, result: Result<T, GameError>) -> Result<T, GameError> {
        if let Err(err) = &result {
            warn!(error = %err, "rejected");
            let event = GameEvent::Error {
                reason: err.to_string(),
            };
            self.notify(event);
        }
        result
    }

    fn notify(&mut self, event: GameEvent) {
        for listener in &mut self.listeners {
            listener.on_event(&event);
        }
    }
}

fn winner_of(board: &Board) -> Option<Player> {
    let red = board.total_score(Player::Red);
    let blue = board.total_score(Player::Blue);
    match red.cmp(&blue) {
        std::cmp::Ordering::Greater => Some(Player::Red),
        std::cmp::Ordering::Less => Some(Player::Blue),
        std::cmp::Ordering::Equal => None,
    }
}

impl std::fmt::Debug for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Game")
            .field("board", &self.board)
            .field("current", &self.current)
            .field("hands", &self.hands)
            .field("consecutive_passes", &self.consecutive_passes)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}
