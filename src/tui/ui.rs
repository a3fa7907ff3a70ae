//! Stateless UI rendering.

use noughts_core::{Board, Square, Token};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::{App, Notice};

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = screen_layout(frame.area());

    let title = Paragraph::new("Noughts - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app.game().board(), app.cursor());

    let status_color = match app.notice() {
        Some(Notice::InvalidMove) | Some(Notice::GameOver) => Color::Red,
        None if app.game().is_over() => Color::Green,
        None => Color::Yellow,
    };
    let status = Paragraph::new(app.status_line())
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("arrows move  enter/click play  1-9 play cell  r restart  q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

/// Maps a terminal position onto the board cell drawn there.
///
/// `area` is the full frame area the screen was drawn into.
pub fn cell_at(area: Rect, x: u16, y: u16) -> Option<(usize, usize)> {
    let rows = board_rows(center_rect(screen_layout(area)[1], 40, 11));
    let position = Position::new(x, y);

    (0..3).find_map(|row| {
        let cols = row_columns(rows[row * 2]);
        (0..3)
            .find(|column| cols[column * 2].contains(position))
            .map(|column| (row, column))
    })
}

/// Title, board, status and help areas.
fn screen_layout(area: Rect) -> [Rect; 4] {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .areas(area)
}

/// Three cell rows with separator lines between them.
fn board_rows(area: Rect) -> [Rect; 5] {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .areas(area)
}

/// Three cells of one row with separator columns between them.
fn row_columns(area: Rect) -> [Rect; 5] {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .areas(area)
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: (usize, usize)) {
    let rows = board_rows(center_rect(area, 40, 11));

    for row in 0..3 {
        draw_row(frame, rows[row * 2], board, cursor, row);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, board: &Board, cursor: (usize, usize), row: usize) {
    let cols = row_columns(area);

    for column in 0..3 {
        draw_cell(frame, cols[column * 2], board, cursor, (row, column));
        if column < 2 {
            draw_separator_vertical(frame, cols[column * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, board: &Board, cursor: (usize, usize), at: (usize, usize)) {
    let (symbol, base_style) = match board.square(at.0, at.1) {
        Some(Square::Taken(Token::First)) => (
            " X ",
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Some(Square::Taken(Token::Second)) => (
            " O ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Some(Square::Empty) | None => ("   ", Style::default().fg(Color::DarkGray)),
    };

    let style = if at == cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Vertically center the glyph in the three-line cell.
    let lines = vec![
        Line::default(),
        Line::from(Span::styled(symbol, style)),
        Line::default(),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_title_and_status() {
        let app = App::new(&GameConfig::default());
        let screen = render(&app);
        assert!(screen.contains("Noughts - Tic Tac Toe"));
        assert!(screen.contains("Player One's turn"));
    }

    #[test]
    fn test_renders_tokens() {
        let mut app = App::new(&GameConfig::default());
        app.play(0, 0);
        app.play(2, 2);
        let screen = render(&app);
        assert_eq!(screen.matches(" X ").count(), 1);
        assert_eq!(screen.matches(" O ").count(), 1);
    }

    #[test]
    fn test_cell_at_matches_drawn_cells() {
        let area = Rect::new(0, 0, 60, 24);
        let rows = board_rows(center_rect(screen_layout(area)[1], 40, 11));
        for row in 0..3 {
            let cols = row_columns(rows[row * 2]);
            for column in 0..3 {
                let cell = cols[column * 2];
                let (x, y) = (cell.x + cell.width / 2, cell.y + cell.height / 2);
                assert_eq!(cell_at(area, x, y), Some((row, column)));
            }
        }
    }

    #[test]
    fn test_cell_at_ignores_chrome() {
        let area = Rect::new(0, 0, 60, 24);
        assert_eq!(cell_at(area, 0, 0), None);
        assert_eq!(cell_at(area, 30, 23), None);

        // Separator line between the first and second rows.
        let rows = board_rows(center_rect(screen_layout(area)[1], 40, 11));
        let separator = rows[1];
        assert_eq!(cell_at(area, separator.x + 5, separator.y), None);
    }

    #[test]
    fn test_click_position_plays_cell() {
        let mut app = App::new(&GameConfig::default());
        let area = Rect::new(0, 0, 60, 24);
        let rows = board_rows(center_rect(screen_layout(area)[1], 40, 11));
        let cell = row_columns(rows[4])[0];

        let (row, column) = cell_at(area, cell.x + 1, cell.y + 1).unwrap();
        app.select(row, column);
        assert_eq!(app.cursor(), (2, 0));
        assert_eq!(app.game().board().square(2, 0), Some(Square::Taken(Token::First)));
    }
}
