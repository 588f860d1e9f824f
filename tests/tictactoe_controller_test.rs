//! Tests for the game controller state machine.

use tictactoe_minimax::{
    COMPUTER, GameController, GameError, GameEvent, HUMAN, MoveError, NullObserver, Outcome,
    Phase, Player, Position, RecordingObserver, Square, TransitionError,
};

fn started() -> GameController<RecordingObserver> {
    let mut game = GameController::new(RecordingObserver::new());
    game.start_game();
    game
}

/// Plays human moves until one fails or the game ends.
fn play_until_over(game: &mut GameController<RecordingObserver>) {
    while game.phase() == Phase::WaitingForHumanMove {
        let pos = game.state().board().empty_positions().next().unwrap();
        game.apply_human_move_at(pos).unwrap();
    }
}

#[test]
fn test_start_game_resets_everything() {
    let mut game = started();
    assert_eq!(game.phase(), Phase::WaitingForHumanMove);
    assert_eq!(game.state().to_move(), Player::X);
    assert!(game.state().history().is_empty());
    assert!(
        game.state()
            .board()
            .squares()
            .iter()
            .all(|s| *s == Square::Empty)
    );

    game.apply_human_move(2, 2).unwrap();
    game.start_game();
    assert_eq!(game.state().history().len(), 0);
}

#[test]
fn test_fresh_game_after_terminal_state() {
    let mut game = started();
    play_until_over(&mut game);
    assert!(game.state().is_terminal());

    game.start_game();
    assert_eq!(game.phase(), Phase::WaitingForHumanMove);
    assert_eq!(game.state().to_move(), Player::X);
    assert_eq!(game.state().board().empty_positions().count(), 9);
    assert_eq!(game.state().winner(), None);
}

#[test]
fn test_computer_blocks_top_row() {
    let mut game = started();

    game.apply_human_move(0, 0).unwrap();
    assert_eq!(
        game.state().board().get(Position::Center),
        Square::Occupied(COMPUTER)
    );

    game.apply_human_move(0, 1).unwrap();
    assert_eq!(
        game.state().board().get(Position::TopRight),
        Square::Occupied(COMPUTER)
    );

    let before = game.state().clone();
    assert_eq!(
        game.apply_human_move(0, 2),
        Err(GameError::Move(MoveError::SquareOccupied(Position::TopRight)))
    );
    assert_eq!(game.state(), &before);
    assert_ne!(game.state().winner(), Some(Player::X));
}

#[test]
fn test_ai_first_picks_first_square_in_scan_order() {
    let mut game = started();
    game.request_ai_first().unwrap();

    assert_eq!(
        game.observer().events(),
        &[
            GameEvent::Started,
            GameEvent::CellChanged(Position::TopLeft, COMPUTER),
        ]
    );
    assert_eq!(game.state().board().count(COMPUTER), 1);
    assert_eq!(game.state().board().count(HUMAN), 0);
    assert_eq!(game.state().to_move(), HUMAN);
}

#[test]
fn test_ai_first_before_start_is_rejected() {
    let mut game = GameController::new(NullObserver);
    assert_eq!(
        game.request_ai_first(),
        Err(GameError::Transition(TransitionError::NotStarted))
    );
    assert_eq!(game.phase(), Phase::Setup);
}

#[test]
fn test_ai_first_after_game_over_is_rejected() {
    let mut game = started();
    play_until_over(&mut game);
    assert_eq!(
        game.request_ai_first(),
        Err(GameError::Transition(TransitionError::GameOver))
    );
}

#[test]
fn test_repeated_human_move_is_idempotent() {
    let mut game = started();
    game.apply_human_move(1, 1).unwrap();
    let after_first = game.state().clone();
    let events = game.observer().events().len();

    assert!(game.apply_human_move(1, 1).is_err());
    assert_eq!(game.state(), &after_first);
    assert_eq!(game.observer().events().len(), events);
}

#[test]
fn test_human_move_on_computer_square_is_rejected() {
    let mut game = started();
    game.apply_human_move(0, 0).unwrap();
    assert_eq!(
        game.apply_human_move(1, 1),
        Err(GameError::Move(MoveError::SquareOccupied(Position::Center)))
    );
}

#[test]
fn test_moves_after_game_over_are_rejected() {
    let mut game = started();
    play_until_over(&mut game);
    let before = game.state().clone();

    for pos in Position::ALL {
        assert_eq!(
            game.apply_human_move_at(pos),
            Err(GameError::Transition(TransitionError::GameOver))
        );
    }
    assert_eq!(game.state(), &before);
}

#[test]
fn test_observer_sees_every_placement_and_one_game_over() {
    let mut game = started();
    play_until_over(&mut game);

    let events = game.observer().events();
    let placements = events
        .iter()
        .filter(|e| matches!(e, GameEvent::CellChanged(..)))
        .count();
    let game_overs: Vec<_> = events
        .iter()
        .filter_map(|e| match e {
            GameEvent::GameOver(outcome) => Some(*outcome),
            _ => None,
        })
        .collect();

    assert_eq!(placements, game.state().history().len());
    assert_eq!(game_overs.len(), 1);
    assert!(matches!(events.last(), Some(GameEvent::GameOver(_))));
    assert_eq!(Some(game_overs[0]), game.state().outcome());
    assert_ne!(game_overs[0], Outcome::Winner(HUMAN));
}

#[test]
fn test_first_free_square_strategy_loses() {
    // Always taking the first free square lets the computer build a line.
    let mut game = started();
    play_until_over(&mut game);
    assert_eq!(game.state().winner(), Some(COMPUTER));
}
