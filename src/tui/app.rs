//! Application state and logic.

use super::input::{Action, action_for, move_cursor};
use crate::games::tictactoe::{
    COMPUTER, GameController, GameEvent, HUMAN, Outcome, Phase, Position, RecordingObserver,
};
use crossterm::event::KeyCode;
use tracing::debug;

/// Main application state.
pub struct App {
    game: GameController<RecordingObserver>,
    cursor: Position,
    ai_first: bool,
    error: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application. No game is running until the player starts one.
    pub fn new(ai_first: bool) -> Self {
        Self {
            game: GameController::new(RecordingObserver::new()),
            cursor: Position::Center,
            ai_first,
            error: None,
            should_quit: false,
        }
    }

    /// Gets the game controller.
    pub fn game(&self) -> &GameController<RecordingObserver> {
        &self.game
    }

    /// Square under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// True once the player asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Events of the current game, oldest first.
    pub fn events(&self) -> &[GameEvent] {
        self.game.observer().events()
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> String {
        if let Some(error) = &self.error {
            return error.clone();
        }
        match self.game.phase() {
            Phase::Setup => "Press 's' to start a game.".to_string(),
            Phase::WaitingForHumanMove if self.game.state().history().is_empty() => {
                format!("Your move ({HUMAN}). Press 'a' to let the computer start.")
            }
            Phase::WaitingForHumanMove => format!("Your move ({HUMAN})."),
            Phase::ComputerThinking => format!("Computer ({COMPUTER}) is thinking..."),
            Phase::GameOver(Outcome::Winner(player)) if player == HUMAN => {
                "You win! Press 's' to play again.".to_string()
            }
            Phase::GameOver(Outcome::Winner(_)) => {
                "The computer wins. Press 's' to play again.".to_string()
            }
            Phase::GameOver(Outcome::Draw) => "Draw! Press 's' to play again.".to_string(),
        }
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        let action = action_for(key);
        debug!(?key, ?action, "Key pressed");
        match action {
            Action::Cursor(..) => self.cursor = move_cursor(self.cursor, key),
            Action::PlaceAtCursor => self.place(self.cursor),
            Action::PlaceAt(pos) => {
                self.cursor = pos;
                self.place(pos);
            }
            Action::NewGame => self.new_game(),
            Action::AiFirst => self.ai_first_move(),
            Action::Quit => self.should_quit = true,
            Action::None => {}
        }
    }

    /// Starts a new game, letting the computer open if configured to.
    pub fn new_game(&mut self) {
        self.error = None;
        self.game.observer_mut().clear();
        self.game.start_game();
        if self.ai_first {
            self.ai_first_move();
        }
    }

    fn ai_first_move(&mut self) {
        self.error = self.game.request_ai_first().err().map(|e| e.to_string());
    }

    fn place(&mut self, pos: Position) {
        self.error = self
            .game
            .apply_human_move_at(pos)
            .err()
            .map(|e| e.to_string());
    }
}
