//! Tic-tac-toe against an exhaustive minimax opponent.

mod action;
mod controller;
mod error;
pub mod invariants;
pub mod minimax;
mod observer;
mod phases;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use controller::{COMPUTER, GameController, HUMAN};
pub use error::{GameError, TransitionError};
pub use minimax::{Score, SearchResult, search, select_move};
pub use observer::{GameEvent, GameObserver, NullObserver, RecordingObserver};
pub use phases::{Outcome, Phase};
pub use position::Position;
pub use types::{Board, BoardParseError, GameState, Player, Square};
