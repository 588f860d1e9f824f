//! Keyboard mapping for the terminal game.

use crate::games::tictactoe::Position;
use crossterm::event::KeyCode;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor by `(rows, cols)`.
    Cursor(isize, isize),
    /// Place X under the cursor.
    PlaceAtCursor,
    /// Place X at a specific square (number keys 1-9).
    PlaceAt(Position),
    /// Start a new game.
    NewGame,
    /// Let the computer open the current game.
    AiFirst,
    /// Leave the program.
    Quit,
    /// Key has no binding.
    None,
}

/// Maps a key to an [`Action`].
pub fn action_for(key: KeyCode) -> Action {
    match key {
        KeyCode::Up | KeyCode::Char('k') => Action::Cursor(-1, 0),
        KeyCode::Down | KeyCode::Char('j') => Action::Cursor(1, 0),
        KeyCode::Left | KeyCode::Char('h') => Action::Cursor(0, -1),
        KeyCode::Right | KeyCode::Char('l') => Action::Cursor(0, 1),
        KeyCode::Enter | KeyCode::Char(' ') => Action::PlaceAtCursor,
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .and_then(|d| Position::from_index(d as usize - 1))
            .map_or(Action::None, Action::PlaceAt),
        KeyCode::Char('s') => Action::NewGame,
        KeyCode::Char('a') => Action::AiFirst,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        _ => Action::None,
    }
}

/// Moves cursor based on arrow keys, staying on the board.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    match action_for(key) {
        Action::Cursor(d_row, d_col) => cursor.step(d_row, d_col),
        _ => cursor,
    }
}
