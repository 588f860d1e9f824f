//! Core domain types for tic-tac-toe.

use super::phases::{Outcome, Phase};
use super::{Move, MoveError, Position};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
pub enum Player {
    /// Player X (the human, moves first unless the computer opens).
    X,
    /// Player O (always the computer).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
///
/// The board only knows which squares are filled. Turn order is the
/// controller's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Creates a board from raw squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Places `player` at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] if either coordinate is outside
    /// `0..=2`, and [`MoveError::SquareOccupied`] if the square is taken.
    #[instrument(skip(self))]
    pub fn set(&mut self, row: usize, col: usize, player: Player) -> Result<(), MoveError> {
        let pos = Position::from_row_col(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        self.place(pos, player)
    }

    /// Places `player` at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::SquareOccupied`] if the square is taken.
    pub fn place(&mut self, pos: Position, player: Player) -> Result<(), MoveError> {
        if !self.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }
        self.squares[pos.to_index()] = Square::Occupied(player);
        Ok(())
    }

    /// Returns a copy of this board with `player` at `pos`, assuming it is empty.
    pub(crate) fn with(mut self, pos: Position, player: Player) -> Self {
        self.squares[pos.to_index()] = Square::Occupied(player);
        self
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::iter().filter(|pos| self.is_empty(*pos))
    }

    /// Number of squares holding `player`.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let symbol = match self.squares[row * 3 + col] {
                    Square::Empty => ' ',
                    Square::Occupied(Player::X) => 'X',
                    Square::Occupied(Player::O) => 'O',
                };
                write!(f, "{symbol}")?;
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardParseError {
    /// The text did not describe exactly nine squares.
    #[display("Expected 9 squares, found {}", _0)]
    WrongLength(usize),

    /// A character that is neither a mark, an empty marker nor a separator.
    #[display("Unexpected character {:?} in board", _0)]
    InvalidChar(char),
}

impl std::error::Error for BoardParseError {}

impl std::str::FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine squares in row-major order.
    ///
    /// `X`/`O` (either case) are marks; `.`, `_` and space are empty.
    /// `/`, `|`, `,`, `-`, `+` and line breaks are ignored, so rows can be
    /// separated and the [`Display`](std::fmt::Display) grid reads back.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(9);
        for ch in s.chars() {
            let square = match ch {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '.' | '_' | ' ' => Square::Empty,
                '/' | '|' | ',' | '-' | '+' | '\n' | '\r' => continue,
                other => return Err(BoardParseError::InvalidChar(other)),
            };
            squares.push(square);
        }
        let squares: [Square; 9] = squares
            .try_into()
            .map_err(|v: Vec<Square>| BoardParseError::WrongLength(v.len()))?;
        Ok(Self::from_squares(squares))
    }
}

/// Complete game state, owned by the controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Player to move next.
    to_move: Player,
    /// Controller phase.
    phase: Phase,
    /// Moves played so far.
    history: Vec<Move>,
}

impl GameState {
    /// Creates a state that has not been started yet.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            phase: Phase::Setup,
            history: Vec::new(),
        }
    }

    /// Creates a freshly started game: empty board, X to move.
    pub fn started() -> Self {
        Self {
            phase: Phase::WaitingForHumanMove,
            ..Self::new()
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the controller phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// True once the game has ended.
    pub fn is_terminal(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    /// Winner of a finished game, if it was not a draw.
    pub fn winner(&self) -> Option<Player> {
        match self.phase {
            Phase::GameOver(outcome) => outcome.winner(),
            _ => None,
        }
    }

    /// Outcome of a finished game.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::GameOver(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Places the move on the board and records it.
    pub(super) fn apply_move(&mut self, action: Move) -> Result<(), MoveError> {
        self.board.place(action.position, action.player)?;
        self.history.push(action);
        Ok(())
    }

    pub(super) fn set_to_move(&mut self, player: Player) {
        self.to_move = player;
    }

    pub(super) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    /// Test-only access for corrupting a state on purpose.
    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
