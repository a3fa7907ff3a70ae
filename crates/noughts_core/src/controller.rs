//! Turn state machine driving one board through a game.

use crate::board::Board;
use crate::error::MoveError;
use crate::invariants::{ControllerInvariants, InvariantSet, InvariantViolation};
use crate::outcome::{GameStatus, Outcome};
use crate::types::{DEFAULT_PLAYER_ONE, DEFAULT_PLAYER_TWO, Player, Token, seat_players};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// What happened in an accepted round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Round {
    /// The game goes on; `next` moves now.
    Continue {
        /// Token of the player whose turn it is now.
        next: Token,
    },
    /// The move decided the game.
    Finished(Outcome),
}

/// Owns the board, the two players and the game status.
///
/// The first player moves first. Each accepted move that does not decide the
/// game hands the turn to the other player. Once the game is over every
/// further [`play_round`](Self::play_round) is rejected; start a new
/// controller to play again.
///
/// Deserialized states are checked against the controller invariants and
/// rejected when they could not arise from legal play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SavedGame")]
pub struct GameController {
    board: Board,
    players: [Player; 2],
    active: Token,
    status: GameStatus,
}

impl GameController {
    /// Creates a game between "Player One" and "Player Two".
    pub fn new() -> Self {
        Self::with_names(DEFAULT_PLAYER_ONE, DEFAULT_PLAYER_TWO)
    }

    /// Creates a game between two named players.
    #[instrument(skip_all, fields(first = %first.as_ref(), second = %second.as_ref()))]
    pub fn with_names(first: impl AsRef<str>, second: impl AsRef<str>) -> Self {
        let game = Self {
            board: Board::new(),
            players: seat_players(first, second),
            active: Token::First,
            status: GameStatus::InProgress,
        };
        info!(player = %game.active_player().name(), "New game, {}'s turn", game.active_player().name());
        game
    }

    /// Plays the active player's token at `(row, column)`.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the game already has a result.
    /// - [`MoveError::InvalidMove`] if the cell is occupied or off the board.
    ///
    /// In both cases nothing changes and the same player keeps the turn.
    #[instrument(skip(self), fields(player = %self.active_player().name()))]
    pub fn play_round(&mut self, row: usize, column: usize) -> Result<Round, MoveError> {
        if self.status.is_over() {
            warn!("Game is over. Start a new game to play again.");
            return Err(MoveError::GameOver);
        }

        info!(
            "Placing {}'s token at row {}, column {}...",
            self.active_player().name(),
            row,
            column
        );
        if let Err(err) = self.board.drop_token(row, column, self.active) {
            warn!(error = %err, "Invalid move! Try again.");
            return Err(err.into());
        }
        debug!(board = %self.board, "Board after move");

        let round = match self.board.check_winner() {
            Some(outcome) => {
                self.status = GameStatus::Over(outcome);
                match outcome {
                    Outcome::Win(_) => info!("{} wins!", self.active_player().name()),
                    Outcome::Tie => info!("It's a tie!"),
                }
                Round::Finished(outcome)
            }
            None => {
                self.active = self.active.opponent();
                info!("{}'s turn.", self.active_player().name());
                Round::Continue { next: self.active }
            }
        };

        self.debug_check_invariants();
        Ok(round)
    }

    /// Returns the player whose move is accepted next.
    ///
    /// After a win this stays on the winner.
    pub fn active_player(&self) -> &Player {
        &self.players[self.active.seat()]
    }

    /// Returns both players in seat order.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Returns the player holding `token`.
    pub fn player(&self, token: Token) -> &Player {
        &self.players[token.seat()]
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True once a winner or tie is recorded.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// The recorded result, `None` while the game is in progress.
    pub fn result(&self) -> Option<Outcome> {
        self.status.outcome()
    }

    /// The winning player, if the game was won.
    pub fn winner(&self) -> Option<&Player> {
        self.result()
            .and_then(|outcome| outcome.winner())
            .map(|token| self.player(token))
    }

    /// Asserts the structural invariants in debug builds.
    fn debug_check_invariants(&self) {
        #[cfg(debug_assertions)]
        {
            let checked = ControllerInvariants::check_all(self);
            debug_assert!(checked.is_ok(), "Game invariants violated: {:?}", checked);
        }
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

/// Unchecked field layout of a serialized [`GameController`].
#[derive(Deserialize)]
struct SavedGame {
    board: Board,
    players: [Player; 2],
    active: Token,
    status: GameStatus,
}

impl TryFrom<SavedGame> for GameController {
    type Error = InvariantViolation;

    #[instrument(skip_all)]
    fn try_from(saved: SavedGame) -> Result<Self, Self::Error> {
        let seated = saved
            .players
            .iter()
            .enumerate()
            .all(|(seat, player)| player.token().seat() == seat);
        if !seated {
            warn!("Rejected saved game with swapped player tokens");
            return Err(InvariantViolation::new("players sit in token order"));
        }

        let game = Self {
            board: saved.board,
            players: saved.players,
            active: saved.active,
            status: saved.status,
        };
        ControllerInvariants::check_all(&game).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Rejected saved game");
            InvariantViolation::new(descriptions)
        })?;
        Ok(game)
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}
