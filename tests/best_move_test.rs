//! Tests for one-shot best-move queries.

use tictactoe_minimax::{BestMove, Board, Position, SearchResult};

#[test]
fn test_json_for_a_block() {
    let board: Board = "XX./.O./...".parse().unwrap();
    let json = serde_json::to_string(&BestMove::for_board(&board).to_json()).unwrap();
    assert_eq!(json, r#"{"col":2,"position":"TopRight","row":0,"score":0}"#);
}

#[test]
fn test_json_for_a_full_board() {
    let board: Board = "XOX/OXX/OXO".parse().unwrap();
    let json = serde_json::to_string(&BestMove::for_board(&board).to_json()).unwrap();
    assert_eq!(json, r#"{"terminal":true}"#);
}

#[test]
fn test_printed_board_can_be_queried_again() {
    let board: Board = "X../.O./..X".parse().unwrap();
    let printed = BestMove::for_board(&board).describe(&board);
    let grid = printed.split("\n\n").next().unwrap();

    let reparsed: Board = grid.parse().unwrap();
    assert_eq!(reparsed, board);
    assert_eq!(
        BestMove::for_board(&reparsed),
        BestMove::for_board(&board)
    );
}

#[test]
fn test_empty_board_answer() {
    let answer = BestMove::for_board(&Board::new());
    match answer {
        BestMove::Play(SearchResult {
            position, score, ..
        }) => {
            assert_eq!(position, Position::TopLeft);
            assert_eq!(score, 0);
        }
        BestMove::Terminal => panic!("empty board is not terminal"),
    }
}
