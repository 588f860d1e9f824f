//! History consistency invariant: history matches occupied squares.

use super::super::{GameState, Square};
use super::Invariant;

/// Invariant: every occupied square has exactly one move in history.
///
/// History length equals the number of occupied squares, and each
/// recorded move's mark is the one on the board.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let occupied_count = state
            .board()
            .squares()
            .iter()
            .filter(|s| **s != Square::Empty)
            .count();

        state.history().len() == occupied_count
            && state
                .history()
                .iter()
                .all(|mv| state.board().get(mv.position) == Square::Occupied(mv.player))
    }

    fn description() -> &'static str {
        "History matches the occupied squares"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Move, Player, Position};

    #[test]
    fn test_empty_game_holds() {
        assert!(HistoryConsistentInvariant::holds(&GameState::started()));
    }

    #[test]
    fn test_applied_moves_hold() {
        let mut state = GameState::started();
        state.apply_move(Move::new(Player::X, Position::Center)).unwrap();
        state.apply_move(Move::new(Player::O, Position::TopLeft)).unwrap();
        assert!(HistoryConsistentInvariant::holds(&state));
        assert_eq!(state.history().len(), 2);
    }

    #[test]
    fn test_square_without_history_violates() {
        let mut state = GameState::started();
        state.apply_move(Move::new(Player::X, Position::Center)).unwrap();
        state.board_mut().place(Position::TopLeft, Player::O).unwrap();
        assert!(!HistoryConsistentInvariant::holds(&state));
    }
}
