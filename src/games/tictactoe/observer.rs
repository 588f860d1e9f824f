//! Notifications from the controller to its UI collaborator.

use super::{Outcome, Player, Position};
use serde::{Deserialize, Serialize};

/// Receives game events from a [`GameController`](super::GameController).
///
/// Implemented by whatever presents the game (the terminal UI, tests).
pub trait GameObserver {
    /// A new game has started with an empty board.
    fn on_game_started(&mut self) {}

    /// `player` was placed at `position`. Called after every successful placement.
    fn on_cell_changed(&mut self, position: Position, player: Player);

    /// The game ended. Called once per game, after the final `on_cell_changed`.
    fn on_game_over(&mut self, outcome: Outcome);
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl GameObserver for NullObserver {
    fn on_cell_changed(&mut self, _position: Position, _player: Player) {}

    fn on_game_over(&mut self, _outcome: Outcome) {}
}

/// A single recorded notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// See [`GameObserver::on_game_started`].
    Started,
    /// See [`GameObserver::on_cell_changed`].
    CellChanged(Position, Player),
    /// See [`GameObserver::on_game_over`].
    GameOver(Outcome),
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::Started => write!(f, "New game"),
            GameEvent::CellChanged(pos, player) => write!(f, "{} -> {}", player, pos.label()),
            GameEvent::GameOver(outcome) => write!(f, "{}", outcome),
        }
    }
}

/// Observer that keeps every event in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    events: Vec<GameEvent>,
}

impl RecordingObserver {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Events received so far, oldest first.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Forgets all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl GameObserver for RecordingObserver {
    fn on_game_started(&mut self) {
        self.events.push(GameEvent::Started);
    }

    fn on_cell_changed(&mut self, position: Position, player: Player) {
        self.events.push(GameEvent::CellChanged(position, player));
    }

    fn on_game_over(&mut self, outcome: Outcome) {
        self.events.push(GameEvent::GameOver(outcome));
    }
}
