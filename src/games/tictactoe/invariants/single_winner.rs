//! Single winner invariant: X and O never both have three in a row.

use super::super::rules::is_winner;
use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: at most one player holds a winning line.
pub struct SingleWinnerInvariant;

impl Invariant<GameState> for SingleWinnerInvariant {
    fn holds(state: &GameState) -> bool {
        !(is_winner(state.board(), Player::X) && is_winner(state.board(), Player::O))
    }

    fn description() -> &'static str {
        "X and O do not both have three in a row"
    }
}
