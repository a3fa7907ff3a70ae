//! Keyboard mapping onto board coordinates.

use crossterm::event::KeyCode;
use noughts_core::SIZE;

/// Moves the cursor one cell in the arrow's direction, stopping at the edges.
pub fn move_cursor(cursor: (usize, usize), key: KeyCode) -> (usize, usize) {
    let (row, column) = cursor;
    let last = SIZE - 1;

    match key {
        KeyCode::Up => (row.saturating_sub(1), column),
        KeyCode::Down => ((row + 1).min(last), column),
        KeyCode::Left => (row, column.saturating_sub(1)),
        KeyCode::Right => (row, (column + 1).min(last)),
        _ => cursor,
    }
}

/// Maps the digits 1-9 onto cells, row by row from the top-left.
pub fn digit_to_cell(c: char) -> Option<(usize, usize)> {
    let digit = c.to_digit(10)? as usize;
    if (1..=SIZE * SIZE).contains(&digit) {
        let index = digit - 1;
        Some((index / SIZE, index % SIZE))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_grid() {
        assert_eq!(move_cursor((1, 1), KeyCode::Up), (0, 1));
        assert_eq!(move_cursor((1, 1), KeyCode::Down), (2, 1));
        assert_eq!(move_cursor((1, 1), KeyCode::Left), (1, 0));
        assert_eq!(move_cursor((1, 1), KeyCode::Right), (1, 2));
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor((0, 0), KeyCode::Up), (0, 0));
        assert_eq!(move_cursor((0, 0), KeyCode::Left), (0, 0));
        assert_eq!(move_cursor((2, 2), KeyCode::Down), (2, 2));
        assert_eq!(move_cursor((2, 2), KeyCode::Right), (2, 2));
    }

    #[test]
    fn test_other_keys_leave_cursor() {
        assert_eq!(move_cursor((2, 0), KeyCode::Char('x')), (2, 0));
    }

    #[test]
    fn test_digits_map_row_major() {
        assert_eq!(digit_to_cell('1'), Some((0, 0)));
        assert_eq!(digit_to_cell('3'), Some((0, 2)));
        assert_eq!(digit_to_cell('5'), Some((1, 1)));
        assert_eq!(digit_to_cell('7'), Some((2, 0)));
        assert_eq!(digit_to_cell('9'), Some((2, 2)));
        assert_eq!(digit_to_cell('0'), None);
        assert_eq!(digit_to_cell('a'), None);
    }
}
