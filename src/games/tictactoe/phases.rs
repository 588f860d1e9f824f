//! Controller phases and game outcomes.

use super::Player;
use serde::{Deserialize, Serialize};

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Where the controller's state machine currently is.
///
/// ```text
/// Setup --start--> WaitingForHumanMove <--> ComputerThinking
///                          |                       |
///                          +------> GameOver <-----+
/// ```
///
/// `start_game` returns to `WaitingForHumanMove` from any phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Phase {
    /// No game started yet.
    #[default]
    Setup,
    /// The human (X) is to move.
    WaitingForHumanMove,
    /// The computer (O) is to move.
    ComputerThinking,
    /// The game has ended.
    GameOver(Outcome),
}
