//! One-shot best-move queries, as answered by the `best` command.

use crate::{Board, COMPUTER, SearchResult, search};
use serde_json::{Value, json};
use tracing::{debug, instrument};

/// The computer's answer for a single board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BestMove {
    /// The computer would play this search result.
    Play(SearchResult),
    /// The board is already won or full.
    Terminal,
}

impl BestMove {
    /// Runs the search for [`COMPUTER`] on `board`.
    #[instrument(skip_all)]
    pub fn for_board(board: &Board) -> Self {
        let answer = search(board, COMPUTER).map_or(Self::Terminal, Self::Play);
        debug!(?answer, "Answered best-move query");
        answer
    }

    /// JSON form: `{"row","col","position","score"}` for a move,
    /// `{"terminal":true}` for a finished board.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Play(result) => json!({
                "row": result.position.row(),
                "col": result.position.col(),
                "position": result.position,
                "score": result.score,
            }),
            Self::Terminal => json!({ "terminal": true }),
        }
    }

    /// Human-readable form, with the board drawn above the answer.
    pub fn describe(&self, board: &Board) -> String {
        match self {
            Self::Play(result) => format!(
                "{board}\n\n{COMPUTER} plays {} (row {}, col {}), score {}",
                result.position,
                result.position.row(),
                result.position.col(),
                result.score
            ),
            Self::Terminal => format!("{board}\n\nThe game is already over."),
        }
    }
}
