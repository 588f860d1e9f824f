//! Draw and terminal-position detection for tic-tac-toe.

use super::super::{Board, Player, Square};
use super::win::is_winner;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// True when the game on this board has ended: a win for either player
/// or a full board.
pub fn is_terminal(board: &Board) -> bool {
    is_winner(board, Player::X) || is_winner(board, Player::O) || is_full(board)
}

/// True when the board is full and nobody has three in a row.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && !is_winner(board, Player::X) && !is_winner(board, Player::O)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Position;

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert!(!is_terminal(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.place(Position::Center, Player::X).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board: Board = "XOX/OXX/OXO".parse().unwrap();
        assert!(is_full(&board));
        assert!(is_draw(&board));
        assert!(is_terminal(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        assert!(!is_draw(&board));
        assert!(is_terminal(&board));
    }

    #[test]
    fn test_full_board_with_winner_is_not_draw() {
        let board: Board = "XXX/OOX/XOO".parse().unwrap();
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
