//! Move generation.
//!
//! ## Key Types
//!
//! - `Strategy`: the move-generation trait
//! - `Move`: a card and a target cell
//! - `FirstFit`, `ControlTheBoard`, `MaximizeRowScore`: greedy policies
//! - `Minimax`: one-ply defence against an assumed opponent strategy
//! - `Composite`: narrows candidates through a chain of strategies
//! - `MachinePlayer`: applies a strategy's choice to a live game
//!
//! ## Example
//!
//! ```
//! use sanguine::cards::parse_decks;
//! use sanguine::core::Player;
//! use sanguine::game::Game;
//! use sanguine::strategy::{Composite, ControlTheBoard, MaximizeRowScore, Strategy};
//!
//! let text = "Guard 1 2\nXXXXX\nXXIXX\nXXCIX\nXXIXX\nXXXXX\n".repeat(15);
//! let mut game = Game::from_decks(parse_decks(&text).unwrap()).unwrap();
//! game.start_game(3, 5, 5, false).unwrap();
//!
//! let strategy = Composite::new().then(MaximizeRowScore).then(ControlTheBoard);
//! let moves = strategy.generate_moves(&game.position().unwrap());
//!
//! assert_eq!(moves.len(), 1);
//! assert_eq!(moves[0].card.owner(), Player::Red);
//! ```

pub mod composite;
pub mod machine;
pub mod minimax;
pub mod policy;

pub use composite::Composite;
pub use machine::{MachinePlayer, TurnOutcome};
pub use minimax::Minimax;
pub use policy::{legal_moves, ControlTheBoard, FirstFit, MaximizeRowScore, Move, Strategy};
