//! Application state and key handling.

use crossterm::event::KeyCode;
use noughts_core::{GameController, MoveError, Outcome, Round};
use tracing::{debug, info, instrument};

use super::input::{digit_to_cell, move_cursor};
use crate::config::GameConfig;

/// Feedback about the last rejected input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    /// The chosen cell was taken or off the board.
    InvalidMove,
    /// A move was attempted after the game ended.
    GameOver,
}

/// Main application state.
///
/// Holds the single game instance; restarting replaces it with a fresh
/// controller.
#[derive(Debug, Clone)]
pub struct App {
    game: GameController,
    names: [String; 2],
    cursor: (usize, usize),
    notice: Option<Notice>,
    should_quit: bool,
}

impl App {
    /// Creates an application for the configured players.
    pub fn new(config: &GameConfig) -> Self {
        let names = [config.player_one().clone(), config.player_two().clone()];
        Self {
            game: GameController::with_names(&names[0], &names[1]),
            names,
            cursor: (1, 1),
            notice: None,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameController {
        &self.game
    }

    /// Cell under the cursor as `(row, column)`.
    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }

    /// Feedback about the last rejected input, if any.
    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => {
                let (row, column) = self.cursor;
                self.play(row, column);
            }
            KeyCode::Char(c) => {
                if let Some((row, column)) = digit_to_cell(c) {
                    self.select(row, column);
                }
            }
            arrow => self.cursor = move_cursor(self.cursor, arrow),
        }
    }

    /// Moves the cursor to a cell and plays there.
    pub fn select(&mut self, row: usize, column: usize) {
        self.cursor = (row, column);
        self.play(row, column);
    }

    /// Forwards a selection to the game and records the feedback.
    #[instrument(skip(self))]
    pub fn play(&mut self, row: usize, column: usize) {
        match self.game.play_round(row, column) {
            Ok(Round::Continue { next }) => {
                debug!(%next, "Round played");
                self.notice = None;
            }
            Ok(Round::Finished(outcome)) => {
                info!(?outcome, "Game finished");
                self.notice = None;
            }
            Err(MoveError::InvalidMove(_)) => self.notice = Some(Notice::InvalidMove),
            Err(MoveError::GameOver) => self.notice = Some(Notice::GameOver),
        }
    }

    /// Discards the current game and starts a new one.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game = GameController::with_names(&self.names[0], &self.names[1]);
        self.notice = None;
    }

    /// Text for the status line.
    pub fn status_line(&self) -> String {
        let Some(outcome) = self.game.result() else {
            return match self.notice {
                Some(Notice::InvalidMove) => format!(
                    "Invalid move! Try again. {}'s turn",
                    self.game.active_player().name()
                ),
                _ => format!("{}'s turn", self.game.active_player().name()),
            };
        };

        let result = match outcome {
            Outcome::Win(token) => format!("{} wins! Game Over.", self.game.player(token).name()),
            Outcome::Tie => "It's a tie! Game Over.".to_string(),
        };
        match self.notice {
            Some(Notice::GameOver) => format!("{} Press r to start a new game.", result),
            _ => result,
        }
    }
}
