//! Full-board detection.

use crate::Board;
use tracing::instrument;

/// Checks if every cell holds a token.
///
/// A full board with no winning line is a tie.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().all(|cell| !cell.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Token;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.drop_token(1, 1, Token::First).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for row in 0..3 {
            for column in 0..3 {
                board.drop_token(row, column, Token::Second).unwrap();
            }
        }
        assert!(is_full(&board));
    }
}
