//! Tic-tac-toe against a computer that never loses.
//!
//! # Architecture
//!
//! - **Board model**: [`Board`], [`Square`], [`Position`] and the pure
//!   functions in [`rules`]
//! - **Move selector**: exhaustive minimax in [`minimax`]
//! - **Controller**: [`GameController`] owns the [`GameState`] and reports
//!   to a [`GameObserver`]
//! - **Terminal UI**: [`tui`], one observer implementation
//! - **One-shot queries**: [`BestMove`] answers the `best` command
//!
//! # Example
//!
//! ```
//! use tictactoe_minimax::{GameController, Phase, RecordingObserver};
//!
//! let mut game = GameController::new(RecordingObserver::new());
//! game.start_game();
//! game.apply_human_move(0, 0).unwrap();
//! // The computer has already answered in the center.
//! assert_eq!(game.state().history().len(), 2);
//! assert_eq!(game.phase(), Phase::WaitingForHumanMove);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod best;
mod config;
mod games;
pub mod tui;

// Crate-level exports - Queries
pub use best::BestMove;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, GameConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardParseError, COMPUTER, GameController, GameError, GameEvent, GameObserver,
    GameState, HUMAN, Move, MoveError, NullObserver, Outcome, Phase, Player, Position,
    RecordingObserver, Score, SearchResult, Square, TransitionError, invariants, minimax, rules,
    search, select_move,
};
