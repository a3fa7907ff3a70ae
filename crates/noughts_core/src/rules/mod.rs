//! Game rules for tic-tac-toe.
//!
//! Pure functions that evaluate a [`Board`](crate::Board). Rules are kept
//! apart from board storage so they can be tested and reused on their own.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{Line, check_winner};
