//! Exhaustive minimax move selection.
//!
//! The whole remaining game tree is searched on every call. There is no
//! pruning, no memoization and no depth discount: a win is worth +1
//! however far away it is. Each branch works on its own copy of the
//! board, so nothing needs undoing when a branch returns.

use super::rules::{is_full, is_terminal, is_winner};
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Value of a position from the computer's point of view.
pub type Score = i8;

/// Computer has three in a row.
pub const WIN: Score = 1;
/// Opponent has three in a row.
pub const LOSS: Score = -1;
/// Full board, no winner.
pub const DRAW: Score = 0;

/// The move chosen by a search, with its score and the work it took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Chosen square.
    pub position: Position,
    /// Minimax value of playing there.
    pub score: Score,
    /// Positions evaluated below the root.
    pub nodes: u64,
}

struct Search {
    computer: Player,
    nodes: u64,
}

impl Search {
    fn new(computer: Player) -> Self {
        Self { computer, nodes: 0 }
    }

    fn minimax(&mut self, board: Board, maximizing: bool) -> Score {
        self.nodes += 1;

        if is_winner(&board, self.computer) {
            return WIN;
        }
        if is_winner(&board, self.computer.opponent()) {
            return LOSS;
        }
        if is_full(&board) {
            return DRAW;
        }

        let mover = if maximizing {
            self.computer
        } else {
            self.computer.opponent()
        };
        let scores = board
            .empty_positions()
            .map(|pos| self.minimax(board.with(pos, mover), !maximizing));

        let best = if maximizing { scores.max() } else { scores.min() };
        // A non-terminal board always has an empty square.
        best.unwrap_or(DRAW)
    }
}

/// Minimax value of `board` for `computer`.
///
/// `maximizing` is true when `computer` is the side to move.
pub fn minimax(board: &Board, computer: Player, maximizing: bool) -> Score {
    Search::new(computer).minimax(*board, maximizing)
}

/// Searches every empty square for `computer` and returns the best one.
///
/// Ties go to the first square in row-major order. Returns `None` when
/// the board is already terminal.
#[instrument(skip_all, fields(computer = %computer))]
pub fn search(board: &Board, computer: Player) -> Option<SearchResult> {
    if is_terminal(board) {
        debug!("Board is terminal, no move to select");
        return None;
    }

    let mut search = Search::new(computer);
    let mut best: Option<(Position, Score)> = None;

    for pos in board.empty_positions() {
        let score = search.minimax(board.with(pos, computer), false);
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }

    let (position, score) = best?;
    debug!(%position, score, nodes = search.nodes, "Selected move");
    Some(SearchResult {
        position,
        score,
        nodes: search.nodes,
    })
}

/// Returns the optimal square for `computer` on `board`.
///
/// Never loses, and wins whenever the opponent allows it.
pub fn select_move(board: &Board, computer: Player) -> Option<Position> {
    search(board, computer).map(|result| result.position)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_board_has_no_move() {
        let won: Board = "XXX/OO./...".parse().unwrap();
        assert_eq!(select_move(&won, Player::O), None);

        let drawn: Board = "XOX/OXX/OXO".parse().unwrap();
        assert_eq!(select_move(&drawn, Player::O), None);
    }

    #[test]
    fn test_empty_board_opens_top_left() {
        // Every opening is a draw under perfect play; first in row-major wins the tie.
        let result = search(&Board::new(), Player::O).unwrap();
        assert_eq!(result.position, Position::TopLeft);
        assert_eq!(result.score, DRAW);
        assert!(result.nodes > 0);
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        assert_eq!(minimax(&Board::new(), Player::O, true), DRAW);
        assert_eq!(minimax(&Board::new(), Player::O, false), DRAW);
    }

    #[test]
    fn test_respond_to_corner_with_center() {
        let board: Board = "X../.../...".parse().unwrap();
        assert_eq!(select_move(&board, Player::O), Some(Position::Center));
    }

    #[test]
    fn test_block_opponents_win() {
        // X threatens top row; O must block at top-right.
        let board: Board = "XX./.O./...".parse().unwrap();
        assert_eq!(select_move(&board, Player::O), Some(Position::TopRight));
    }

    #[test]
    fn test_winning_move_is_chosen_over_block() {
        // O wins on the middle row. Blocking X at top-center would lose to the
        // left column instead.
        let board: Board = "X.X/.OO/X..".parse().unwrap();
        let result = search(&board, Player::O).unwrap();
        assert_eq!(result.position, Position::MiddleLeft);
        assert_eq!(result.score, WIN);
    }

    #[test]
    fn test_lost_position_scores_loss() {
        // X has two open threats; O cannot stop both.
        let board: Board = "X.X/.O./X.O".parse().unwrap();
        assert_eq!(minimax(&board, Player::O, true), LOSS);
    }

    #[test]
    fn test_search_works_for_x() {
        // Several squares force a win for X; any of them will do.
        let board: Board = "OO./XX./...".parse().unwrap();
        let result = search(&board, Player::X).unwrap();
        assert_eq!(result.score, WIN);
        assert!(board.is_empty(result.position));
        let after = board.with(result.position, Player::X);
        assert_eq!(minimax(&after, Player::X, false), WIN);
    }

    #[test]
    fn test_search_does_not_modify_board() {
        let board: Board = "X../.O./..X".parse().unwrap();
        let before = board;
        let _ = select_move(&board, Player::O);
        assert_eq!(board, before);
    }
}
