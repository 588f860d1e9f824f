//! Controller error types.

use super::MoveError;
use derive_more::{Display, Error, From};

/// An action that is not valid in the controller's current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum TransitionError {
    /// No game has been started yet.
    #[display("No game has been started")]
    NotStarted,

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It is the computer's turn, not the human's.
    #[display("It's not the human player's turn")]
    NotHumanTurn,

    /// It is the human's turn, not the computer's.
    #[display("It's not the computer's turn")]
    NotComputerTurn,

    /// The computer can only open a game that has no moves yet.
    #[display("Moves have already been made in this game")]
    MovesAlreadyMade,
}

impl std::error::Error for TransitionError {}

/// Any error the game controller can report.
///
/// Every variant is recoverable: the controller state is unchanged
/// and the caller may simply ignore the action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum GameError {
    /// Placement rejected by the board.
    #[display("Invalid move: {}", _0)]
    Move(MoveError),

    /// Action rejected by the state machine.
    #[display("Invalid state transition: {}", _0)]
    Transition(TransitionError),
}
