//! Win detection logic.

use crate::{Board, Square, Token};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// One of the eight lines that win the game.
///
/// Variants are declared in scan order: rows top to bottom, columns left to
/// right, then the main diagonal and the anti-diagonal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, strum::Display,
)]
pub enum Line {
    /// Row 0.
    TopRow,
    /// Row 1.
    MiddleRow,
    /// Row 2.
    BottomRow,
    /// Column 0.
    LeftColumn,
    /// Column 1.
    CenterColumn,
    /// Column 2.
    RightColumn,
    /// (0,0) to (2,2).
    MainDiagonal,
    /// (0,2) to (2,0).
    AntiDiagonal,
}

impl Line {
    /// Coordinates `(row, column)` of the three cells on this line.
    pub fn cells(self) -> [(usize, usize); 3] {
        match self {
            Line::TopRow => [(0, 0), (0, 1), (0, 2)],
            Line::MiddleRow => [(1, 0), (1, 1), (1, 2)],
            Line::BottomRow => [(2, 0), (2, 1), (2, 2)],
            Line::LeftColumn => [(0, 0), (1, 0), (2, 0)],
            Line::CenterColumn => [(0, 1), (1, 1), (2, 1)],
            Line::RightColumn => [(0, 2), (1, 2), (2, 2)],
            Line::MainDiagonal => [(0, 0), (1, 1), (2, 2)],
            Line::AntiDiagonal => [(0, 2), (1, 1), (2, 0)],
        }
    }

    /// Returns the token filling all three cells of this line, if any.
    pub fn owner(self, board: &Board) -> Option<Token> {
        let [a, b, c] = self.cells().map(|(row, column)| board.square(row, column));
        match a {
            Some(Square::Taken(token)) if a == b && b == c => Some(token),
            _ => None,
        }
    }
}

/// Returns the first completed line in scan order and its owner.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Line, Token)> {
    Line::iter().find_map(|line| line.owner(board).map(|token| (line, token)))
}

/// Checks if a player has three in a row.
///
/// Returns the token of the first winning line found, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Token> {
    winning_line(board).map(|(_, token)| token)
}
