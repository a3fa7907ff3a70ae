//! Noughts - two-player tic-tac-toe in the terminal.
//!
//! The game rules live in [`noughts_core`] and are re-exported here. This
//! crate adds the terminal UI that renders a game and forwards key presses
//! into it, plus the command line and configuration layers.
//!
//! # Architecture
//!
//! - **Core**: board, rules and turn controller ([`GameController`])
//! - **TUI**: [`App`] state, key handling and ratatui rendering
//! - **Config**: defaults, `noughts.toml` and CLI overrides ([`GameConfig`])
//!
//! # Example
//!
//! ```
//! use noughts::{App, GameConfig};
//! use crossterm::event::KeyCode;
//!
//! let mut app = App::new(&GameConfig::default());
//! app.handle_key(KeyCode::Char('5'));
//! assert_eq!(app.status_line(), "Player Two's turn");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod tui;

// Crate-level exports - CLI
pub use cli::{Cli, Command, PlayArgs};

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, GameConfig};

// Crate-level exports - Terminal UI
pub use tui::{App, Notice, cell_at, digit_to_cell, draw, move_cursor, run_tui};

// Crate-level exports - Game types
pub use noughts_core::{
    Board, Cell, GameController, GameStatus, Line, MoveError, Outcome, PlaceError, Player, Round,
    Square, Token,
};
