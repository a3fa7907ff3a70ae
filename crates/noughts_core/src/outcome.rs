//! Terminal results of a game.

use crate::Token;
use serde::{Deserialize, Serialize};

/// Result of a decided game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed a line.
    Win(Token),
    /// Board full with no completed line.
    Tie,
}

impl Outcome {
    /// Returns the winning token if there is one.
    pub fn winner(&self) -> Option<Token> {
        match self {
            Outcome::Win(token) => Some(*token),
            Outcome::Tie => None,
        }
    }

    /// Returns true if the game was a tie.
    pub fn is_tie(&self) -> bool {
        matches!(self, Outcome::Tie)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win(token) => write!(f, "Token {} wins", token),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
}

/// Current status of a game.
///
/// A game is over exactly when it carries an [`Outcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are accepted.
    #[default]
    InProgress,
    /// Decided; no further moves are accepted.
    Over(Outcome),
}

impl GameStatus {
    /// The outcome, once decided.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Over(outcome) => Some(*outcome),
        }
    }

    /// True once an outcome is recorded.
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Over(_))
    }
}
