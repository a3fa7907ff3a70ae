//! Core domain types for the game: tokens, cells and players.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Token identifying which player occupies a cell.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Token {
    /// Token of the first player (moves first).
    #[display("1")]
    First,
    /// Token of the second player.
    #[display("2")]
    Second,
}

impl Token {
    /// Returns the other player's token.
    pub fn opponent(self) -> Self {
        match self {
            Token::First => Token::Second,
            Token::Second => Token::First,
        }
    }

    /// Index of the seat holding this token (0 or 1).
    pub fn seat(self) -> usize {
        match self {
            Token::First => 0,
            Token::Second => 1,
        }
    }
}

/// Occupancy of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// No token placed yet.
    #[default]
    Empty,
    /// Square holds a player's token.
    Taken(Token),
}

/// One square of the board.
///
/// A cell does not check whether it is empty before accepting a token;
/// the [`Board`](crate::Board) does that before calling [`Cell::set_token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cell {
    value: Square,
}

impl Cell {
    /// Creates an empty cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites the cell with `token`.
    pub(crate) fn set_token(&mut self, token: Token) {
        self.value = Square::Taken(token);
    }

    /// Returns the current occupancy.
    pub fn value(&self) -> Square {
        self.value
    }

    /// Returns the token in this cell, if any.
    pub fn token(&self) -> Option<Token> {
        match self.value {
            Square::Taken(token) => Some(token),
            Square::Empty => None,
        }
    }

    /// True while no token has been placed.
    pub fn is_empty(&self) -> bool {
        self.value == Square::Empty
    }
}

/// A participant with a display name and a token.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_new::new)]
pub struct Player {
    /// Name shown by the UI.
    #[new(into)]
    name: String,
    /// Token this player places.
    #[getter(copy)]
    token: Token,
}

/// Default name of the first player.
pub const DEFAULT_PLAYER_ONE: &str = "Player One";
/// Default name of the second player.
pub const DEFAULT_PLAYER_TWO: &str = "Player Two";

/// Builds the ordered pair of players for a new game.
#[instrument(skip_all, fields(first = %first.as_ref(), second = %second.as_ref()))]
pub(crate) fn seat_players(first: impl AsRef<str>, second: impl AsRef<str>) -> [Player; 2] {
    [
        Player::new(first.as_ref(), Token::First),
        Player::new(second.as_ref(), Token::Second),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cell_is_empty() {
        let cell = Cell::new();
        assert!(cell.is_empty());
        assert_eq!(cell.value(), Square::Empty);
        assert_eq!(cell.token(), None);
    }

    #[test]
    fn test_set_token_overwrites() {
        let mut cell = Cell::new();
        cell.set_token(Token::First);
        assert_eq!(cell.value(), Square::Taken(Token::First));
        cell.set_token(Token::Second);
        assert_eq!(cell.token(), Some(Token::Second));
    }

    #[test]
    fn test_opponent_alternates() {
        assert_eq!(Token::First.opponent(), Token::Second);
        assert_eq!(Token::Second.opponent().opponent(), Token::Second);
    }

    #[test]
    fn test_seat_players_assigns_distinct_tokens() {
        let [one, two] = seat_players("Ada", "Grace");
        assert_eq!(one.name(), "Ada");
        assert_eq!(one.token(), Token::First);
        assert_eq!(two.token(), Token::Second);
        assert_eq!(two.token().seat(), 1);
    }
}
