//! The 3x3 board.

use crate::error::PlaceError;
use crate::outcome::Outcome;
use crate::rules;
use crate::types::{Cell, Square, Token};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Number of rows and columns.
pub const SIZE: usize = 3;

/// 3x3 grid of cells in row-major order.
///
/// Row 0 is the top row and column 0 the left column. Cells are only
/// mutated through [`Board::drop_token`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    grid: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates a board with every cell empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the full grid for rendering.
    pub fn grid(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.grid
    }

    /// Returns the cell at `(row, column)`, or `None` off the board.
    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        self.grid.get(row).and_then(|cells| cells.get(column))
    }

    /// Returns the occupancy at `(row, column)`, or `None` off the board.
    pub fn square(&self, row: usize, column: usize) -> Option<Square> {
        self.cell(row, column).map(Cell::value)
    }

    /// Iterates over all cells, row by row.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.grid.iter().flatten()
    }

    /// Coordinates of the cells still open, row by row.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        (0..SIZE)
            .flat_map(|row| (0..SIZE).map(move |column| (row, column)))
            .filter(|&(row, column)| self.grid[row][column].is_empty())
            .collect()
    }

    /// Places `token` at `(row, column)` if that cell is on the board and empty.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError::OutOfBounds`] for coordinates outside the grid and
    /// [`PlaceError::Occupied`] if the cell already holds a token. The board
    /// is unchanged in both cases.
    #[instrument(skip(self))]
    pub fn drop_token(&mut self, row: usize, column: usize, token: Token) -> Result<(), PlaceError> {
        let cell = self
            .grid
            .get_mut(row)
            .and_then(|cells| cells.get_mut(column))
            .ok_or(PlaceError::OutOfBounds { row, column })?;

        if !cell.is_empty() {
            return Err(PlaceError::Occupied { row, column });
        }

        cell.set_token(token);
        debug!(row, column, %token, "Token placed");
        Ok(())
    }

    /// Evaluates the board.
    ///
    /// Returns the winner of the first completed line (rows, then columns,
    /// then diagonals), [`Outcome::Tie`] when the board is full with no line,
    /// or `None` while the game is still open.
    #[instrument(skip(self))]
    pub fn check_winner(&self) -> Option<Outcome> {
        if let Some(token) = rules::check_winner(self) {
            return Some(Outcome::Win(token));
        }
        if rules::is_full(self) {
            return Some(Outcome::Tie);
        }
        None
    }

    /// Checks if every cell holds a token.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Number of cells holding `token`.
    pub fn count(&self, token: Token) -> usize {
        self.cells().filter(|cell| cell.token() == Some(token)).count()
    }

    /// Mutable cell access for tests that need to build illegal positions.
    #[cfg(test)]
    pub(crate) fn cell_mut(&mut self, row: usize, column: usize) -> &mut Cell {
        &mut self.grid[row][column]
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, row) in self.grid.iter().enumerate() {
            let symbols: Vec<&str> = row
                .iter()
                .map(|cell| match cell.value() {
                    Square::Empty => ".",
                    Square::Taken(Token::First) => "X",
                    Square::Taken(Token::Second) => "O",
                })
                .collect();
            write!(f, "{}", symbols.join("|"))?;
            if index + 1 < SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
