//! Errors reported when a move cannot be applied.
//!
//! None of these are fatal: the caller is expected to report them and ask
//! for another move.

use derive_more::{Display, Error, From};

/// Why a token could not be placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum PlaceError {
    /// Coordinates outside the 3x3 grid.
    #[display("Cell ({row}, {column}) is off the board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
    },
    /// The target cell already holds a token.
    #[display("Cell ({row}, {column}) is already occupied")]
    Occupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
    },
}

impl PlaceError {
    /// Coordinates of the rejected placement.
    pub fn coordinates(&self) -> (usize, usize) {
        match *self {
            PlaceError::OutOfBounds { row, column } | PlaceError::Occupied { row, column } => {
                (row, column)
            }
        }
    }
}

/// Why a round could not be played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum MoveError {
    /// The placement was rejected; the game state is unchanged.
    #[display("Invalid move: {_0}")]
    InvalidMove(PlaceError),
    /// The game already has a result.
    #[display("Game is already over")]
    #[from(skip)]
    GameOver,
}

impl MoveError {
    /// True for rejected placements, false after game over.
    pub fn is_invalid_move(&self) -> bool {
        matches!(self, MoveError::InvalidMove(_))
    }
}
