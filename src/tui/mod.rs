//! Terminal UI: renders the game and forwards key presses and clicks into it.

mod app;
mod input;
mod ui;

pub use app::{App, Notice};
pub use input::{digit_to_cell, move_cursor};
pub use ui::{cell_at, draw};

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, error, info, instrument};

use crate::config::GameConfig;

/// Runs the terminal game until the user quits.
#[instrument(skip_all, fields(player_one = %config.player_one(), player_two = %config.player_two()))]
pub fn run_tui(config: &GameConfig) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(config));

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Terminal UI closed");
    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        let area = terminal.draw(|f| draw(f, &app))?.area;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                match cell_at(area, mouse.column, mouse.row) {
                    Some((row, column)) => app.select(row, column),
                    None => debug!(x = mouse.column, y = mouse.row, "Click outside the board"),
                }
            }
            _ => {}
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
