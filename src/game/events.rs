//! Notifications emitted by a running game.
//!
//! Listeners are called synchronously, in registration order, after the
//! game has finished updating itself. They receive the event by reference
//! and have no handle back to the game.

use serde::{Deserialize, Serialize};

use crate::core::Player;

/// Something observable that happened to a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// It is now this player's turn.
    TurnChanged(Player),
    /// This player passed.
    TurnPassed(Player),
    /// The game ended; `None` is a tie.
    GameOver { winner: Option<Player> },
    /// A call was rejected.
    Error { reason: String },
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::TurnChanged(player) => write!(f, "{player} to move"),
            GameEvent::TurnPassed(player) => write!(f, "{player} passed"),
            GameEvent::GameOver { winner: Some(player) } => write!(f, "Game over, {player} wins"),
            GameEvent::GameOver { winner: None } => write!(f, "Game over, tie"),
            GameEvent::Error { reason } => write!(f, "Error: {reason}"),
        }
    }
}

/// Receiver of game notifications.
///
/// Any `FnMut(&GameEvent)` closure is a listener.
pub trait GameListener {
    fn on_event(&mut self, event: &GameEvent);
}

impl<F> GameListener for F
where
    F: FnMut(&GameEvent),
{
    fn on_event(&mut self, event: &GameEvent) {
        self(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_listener() {
        let mut seen = Vec::new();
        {
            let mut listener = |event: &GameEvent| seen.push(event.clone());
            listener.on_event(&GameEvent::TurnPassed(Player::Red));
            listener.on_event(&GameEvent::TurnChanged(Player::Blue));
        }
        assert_eq!(
            seen,
            vec![GameEvent::TurnPassed(Player::Red), GameEvent::TurnChanged(Player::Blue)]
        );
    }

    #[test]
    fn test_event_display() {
        assert_eq!(GameEvent::TurnChanged(Player::Blue).to_string(), "BLUE to move");
        assert_eq!(
            GameEvent::GameOver { winner: Some(Player::Red) }.to_string(),
            "Game over, RED wins"
        );
        assert_eq!(GameEvent::GameOver { winner: None }.to_string(), "Game over, tie");
    }
}
