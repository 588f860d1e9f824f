//! Exhaustive checks of the move selector over the whole game tree.

use tictactoe_minimax::rules::{is_terminal, is_winner};
use tictactoe_minimax::{
    Board, GameController, NullObserver, Outcome, Phase, Player, Position, select_move,
};

/// Visits every position reachable by legal alternating play from an empty
/// board, stopping at terminal positions.
fn visit_reachable(board: Board, to_move: Player, visit: &mut impl FnMut(&Board)) {
    visit(&board);
    if is_terminal(&board) {
        return;
    }
    for pos in board.empty_positions() {
        let mut next = board;
        next.place(pos, to_move).unwrap();
        visit_reachable(next, to_move.opponent(), visit);
    }
}

#[test]
fn test_reachable_positions_never_have_two_winners() {
    for first in [Player::X, Player::O] {
        let mut positions = 0u64;
        visit_reachable(Board::new(), first, &mut |board| {
            positions += 1;
            assert!(
                !(is_winner(board, Player::X) && is_winner(board, Player::O)),
                "both players win on\n{board}"
            );
        });
        assert!(positions > 500_000);
    }
}

/// Plays every possible human line against the controller and returns the
/// outcomes of all finished games.
fn all_outcomes(game: GameController<NullObserver>, outcomes: &mut Vec<Outcome>) {
    if let Phase::GameOver(outcome) = game.phase() {
        outcomes.push(outcome);
        return;
    }
    assert_eq!(game.phase(), Phase::WaitingForHumanMove);
    let empties: Vec<Position> = game.state().board().empty_positions().collect();
    for pos in empties {
        let mut next = game.clone();
        next.apply_human_move_at(pos).unwrap();
        all_outcomes(next, outcomes);
    }
}

#[test]
fn test_computer_never_loses_moving_second() {
    let mut game = GameController::new(NullObserver);
    game.start_game();

    let mut outcomes = Vec::new();
    all_outcomes(game, &mut outcomes);

    assert!(!outcomes.is_empty());
    assert!(!outcomes.contains(&Outcome::Winner(Player::X)));
    // Weak human play gets punished somewhere in the tree.
    assert!(outcomes.contains(&Outcome::Winner(Player::O)));
    assert!(outcomes.contains(&Outcome::Draw));
}

#[test]
fn test_computer_never_loses_moving_first() {
    let mut game = GameController::new(NullObserver);
    game.start_game();
    game.request_ai_first().unwrap();

    let mut outcomes = Vec::new();
    all_outcomes(game, &mut outcomes);

    assert!(!outcomes.is_empty());
    assert!(!outcomes.contains(&Outcome::Winner(Player::X)));
    assert!(outcomes.contains(&Outcome::Winner(Player::O)));
}

#[test]
fn test_selected_move_is_always_empty() {
    let mut checked = 0u32;
    visit_reachable(Board::new(), Player::X, &mut |board| {
        // Sample the shallower positions; deep ones are covered above.
        if board.empty_positions().count() < 6 || is_terminal(board) {
            return;
        }
        let pos = select_move(board, Player::O).unwrap();
        assert!(board.is_empty(pos));
        checked += 1;
    });
    assert!(checked > 0);
}

#[test]
fn test_takes_immediate_win_when_it_is_first_in_scan() {
    let board: Board = "OO./XX./X..".parse().unwrap();
    assert_eq!(select_move(&board, Player::O), Some(Position::TopRight));
}
