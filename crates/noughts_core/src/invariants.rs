//! Structural invariants of a running game.
//!
//! Invariants are logical properties that hold after every accepted move.
//! The controller checks them in debug builds; they are also testable on
//! their own against hand-built states.

use crate::controller::GameController;
use crate::outcome::GameStatus;
use crate::types::Token;
use tracing::{instrument, warn};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
pub trait InvariantSet<S> {
    /// Checks every invariant, collecting the ones that fail.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<InvariantViolation> = [
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// The first player has placed as many tokens as the second, or one more.
pub struct TokenBalance;

impl Invariant<GameController> for TokenBalance {
    #[instrument(skip(game))]
    fn holds(game: &GameController) -> bool {
        let first = game.board().count(Token::First);
        let second = game.board().count(Token::Second);
        let valid = first == second || first == second + 1;
        if !valid {
            warn!(first, second, "Token balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "first player has 0 or 1 more tokens than second"
    }
}

/// While in progress, the active token is the one whose turn the counts imply.
pub struct TurnConsistent;

impl Invariant<GameController> for TurnConsistent {
    #[instrument(skip(game))]
    fn holds(game: &GameController) -> bool {
        if game.is_over() {
            return true;
        }
        let board = game.board();
        let expected = if board.count(Token::First) == board.count(Token::Second) {
            Token::First
        } else {
            Token::Second
        };
        let active = game.active_player().token();
        let valid = active == expected;
        if !valid {
            warn!(%active, %expected, "Turn consistency violated");
        }
        valid
    }

    fn description() -> &'static str {
        "active player matches the token counts"
    }
}

/// The recorded status agrees with what the board shows.
pub struct StatusMatchesBoard;

impl Invariant<GameController> for StatusMatchesBoard {
    #[instrument(skip(game))]
    fn holds(game: &GameController) -> bool {
        let evaluated = game.board().check_winner();
        let valid = match game.status() {
            GameStatus::InProgress => evaluated.is_none(),
            GameStatus::Over(outcome) => evaluated == Some(outcome),
        };
        if !valid {
            warn!(status = ?game.status(), ?evaluated, "Status disagrees with board");
        }
        valid
    }

    fn description() -> &'static str {
        "status matches the board evaluation"
    }
}

/// Every invariant of a game controller.
pub type ControllerInvariants = (TokenBalance, TurnConsistent, StatusMatchesBoard);
