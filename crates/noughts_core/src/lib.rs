//! Pure tic-tac-toe game logic.
//!
//! Three layers, composed bottom-up:
//!
//! - [`Cell`]: one square's occupancy.
//! - [`Board`]: the 3x3 grid, move placement and win/tie evaluation.
//! - [`GameController`]: two [`Player`]s, the active player and the game
//!   status, driving one board through a turn sequence.
//!
//! A UI collaborator renders [`GameController::board`] and the status
//! queries, forwards user input to [`GameController::play_round`], and
//! builds a fresh controller to restart.
//!
//! # Example
//!
//! ```
//! use noughts_core::{GameController, Outcome, Round, Token};
//!
//! let mut game = GameController::new();
//! for (row, column) in [(0, 0), (1, 1), (0, 1), (2, 2)] {
//!     game.play_round(row, column)?;
//! }
//! let round = game.play_round(0, 2)?;
//! assert_eq!(round, Round::Finished(Outcome::Win(Token::First)));
//! assert!(game.is_over());
//! # Ok::<(), noughts_core::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod controller;
mod error;
mod invariants;
mod outcome;
pub mod rules;
mod types;

pub use board::{Board, SIZE};
pub use controller::{GameController, Round};
pub use error::{MoveError, PlaceError};
pub use invariants::{
    ControllerInvariants, Invariant, InvariantSet, InvariantViolation, StatusMatchesBoard,
    TokenBalance, TurnConsistent,
};
pub use outcome::{GameStatus, Outcome};
pub use rules::Line;
pub use types::{Cell, DEFAULT_PLAYER_ONE, DEFAULT_PLAYER_TWO, Player, Square, Token};
