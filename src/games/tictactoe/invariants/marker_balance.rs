//! Marker balance invariant: X and O counts differ by at most one.

use super::super::{GameState, Player};
use super::Invariant;
use tracing::warn;

/// Invariant: `|#X - #O| <= 1`.
///
/// Either side may open (the computer can move first), so the surplus
/// may belong to X or to O.
pub struct MarkerBalanceInvariant;

impl Invariant<GameState> for MarkerBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        let x_count = state.board().count(Player::X);
        let o_count = state.board().count(Player::O);
        let valid = x_count.abs_diff(o_count) <= 1;
        if !valid {
            warn!(x_count, o_count, "Marker balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X and O counts differ by at most one"
    }
}
