//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};

const ROWS: [[Position; 3]; 3] = [
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
];

const COLUMNS: [[Position; 3]; 3] = [
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
];

const DIAGONALS: [[Position; 3]; 2] = [
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

fn line_is(board: &Board, line: &[Position; 3], player: Player) -> bool {
    line.iter()
        .all(|&pos| board.get(pos) == Square::Occupied(player))
}

/// True iff `player` holds a full row, a full column or either diagonal.
///
/// Rows, columns and diagonals are each scanned in turn. Only the check
/// within a single line stops early.
pub fn is_winner(board: &Board, player: Player) -> bool {
    let row = ROWS.iter().any(|line| line_is(board, line, player));
    let column = COLUMNS.iter().any(|line| line_is(board, line, player));
    let diagonal = DIAGONALS.iter().any(|line| line_is(board, line, player));
    row || column || diagonal
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise. X is checked before O.
pub fn check_winner(board: &Board) -> Option<Player> {
    [Player::X, Player::O]
        .into_iter()
        .find(|&player| is_winner(board, player))
}
