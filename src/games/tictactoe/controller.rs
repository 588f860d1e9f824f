//! Turn order and state machine for a human-vs-computer game.
//!
//! The human always plays X and the computer always plays O. Every
//! inbound call runs to completion, including the computer's reply,
//! before it returns.

use super::error::{GameError, TransitionError};
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::minimax::select_move;
use super::rules::{is_full, is_winner};
use super::{GameObserver, GameState, Move, MoveError, Outcome, Phase, Player, Position};
use tracing::{debug, info, instrument, warn};

/// Marker played by the human.
pub const HUMAN: Player = Player::X;

/// Marker played by the computer.
pub const COMPUTER: Player = Player::O;

/// Owns the game state and drives it in response to UI actions.
///
/// Rejected actions return an error and leave the state exactly as it
/// was, so callers are free to ignore them.
#[derive(Debug, Clone)]
pub struct GameController<O: GameObserver> {
    state: GameState,
    observer: O,
}

impl<O: GameObserver> GameController<O> {
    /// Creates a controller with no game started.
    pub fn new(observer: O) -> Self {
        Self {
            state: GameState::new(),
            observer,
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Returns the observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Returns the observer mutably.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Resets the board and waits for X. Allowed in every phase.
    #[instrument(skip(self))]
    pub fn start_game(&mut self) {
        self.state = GameState::started();
        info!("New game started");
        self.observer.on_game_started();
    }

    /// Lets the computer open the current game.
    ///
    /// Only valid while the human is to move and no move has been made.
    ///
    /// # Errors
    ///
    /// Returns a [`TransitionError`] in any other situation.
    #[instrument(skip(self))]
    pub fn request_ai_first(&mut self) -> Result<(), GameError> {
        let result = self.try_ai_first();
        if let Err(err) = &result {
            warn!(%err, phase = ?self.phase(), "AI-first request rejected");
        }
        result
    }

    /// Places X at `(row, col)` and lets the computer reply.
    ///
    /// # Errors
    ///
    /// Returns a [`TransitionError`] unless the human is to move, and a
    /// [`MoveError`] for an occupied square or out-of-range coordinates.
    #[instrument(skip(self))]
    pub fn apply_human_move(&mut self, row: usize, col: usize) -> Result<(), GameError> {
        let result = self.try_human_move(row, col);
        if let Err(err) = &result {
            warn!(%err, phase = ?self.phase(), "Human move rejected");
        }
        result
    }

    /// Same as [`apply_human_move`](Self::apply_human_move), addressed by position.
    #[instrument(skip(self))]
    pub fn apply_human_move_at(&mut self, position: Position) -> Result<(), GameError> {
        self.apply_human_move(position.row(), position.col())
    }

    /// Searches for and plays the computer's move.
    ///
    /// Called automatically whenever the computer becomes the side to
    /// move, so UI code rarely needs it.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::NotComputerTurn`] and friends outside
    /// the `ComputerThinking` phase.
    #[instrument(skip(self))]
    pub fn apply_computer_move(&mut self) -> Result<(), GameError> {
        let result = self.try_computer_move();
        if let Err(err) = &result {
            warn!(%err, phase = ?self.phase(), "Computer move rejected");
        }
        result
    }

    fn try_ai_first(&mut self) -> Result<(), GameError> {
        self.require_phase(Phase::WaitingForHumanMove)?;
        if !self.state.history().is_empty() {
            return Err(TransitionError::MovesAlreadyMade.into());
        }
        debug!("Computer opens the game");
        self.hand_to_computer();
        self.try_computer_move()
    }

    fn try_human_move(&mut self, row: usize, col: usize) -> Result<(), GameError> {
        self.require_phase(Phase::WaitingForHumanMove)?;
        let position =
            Position::from_row_col(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        self.place(Move::new(HUMAN, position))?;
        if self.finish_if_terminal() {
            return Ok(());
        }
        self.hand_to_computer();
        self.try_computer_move()
    }

    fn try_computer_move(&mut self) -> Result<(), GameError> {
        self.require_phase(Phase::ComputerThinking)?;
        let position =
            select_move(self.state.board(), COMPUTER).ok_or(TransitionError::GameOver)?;
        self.place(Move::new(COMPUTER, position))?;
        if !self.finish_if_terminal() {
            self.state.set_to_move(HUMAN);
            self.state.set_phase(Phase::WaitingForHumanMove);
            debug!("Waiting for human move");
        }
        Ok(())
    }

    fn hand_to_computer(&mut self) {
        self.state.set_to_move(COMPUTER);
        self.state.set_phase(Phase::ComputerThinking);
        debug!("Computer thinking");
    }

    fn require_phase(&self, wanted: Phase) -> Result<(), TransitionError> {
        match self.phase() {
            phase if phase == wanted => Ok(()),
            Phase::Setup => Err(TransitionError::NotStarted),
            Phase::GameOver(_) => Err(TransitionError::GameOver),
            Phase::ComputerThinking => Err(TransitionError::NotHumanTurn),
            Phase::WaitingForHumanMove => Err(TransitionError::NotComputerTurn),
        }
    }

    fn place(&mut self, action: Move) -> Result<(), MoveError> {
        self.state.apply_move(action)?;
        debug!(%action, "Mark placed");
        self.observer.on_cell_changed(action.position, action.player);
        self.debug_check_invariants();
        Ok(())
    }

    /// Moves to `GameOver` if the last placement ended the game.
    fn finish_if_terminal(&mut self) -> bool {
        let board = self.state.board();
        let outcome = if is_winner(board, Player::X) {
            Outcome::Winner(Player::X)
        } else if is_winner(board, Player::O) {
            Outcome::Winner(Player::O)
        } else if is_full(board) {
            Outcome::Draw
        } else {
            return false;
        };

        self.state.set_phase(Phase::GameOver(outcome));
        info!(%outcome, moves = self.state.history().len(), "Game over");
        self.observer.on_game_over(outcome);
        true
    }

    fn debug_check_invariants(&self) {
        if cfg!(debug_assertions) {
            let result = TicTacToeInvariants::check_all(&self.state);
            debug_assert!(result.is_ok(), "Invariant violation: {:?}", result);
        }
    }
}
