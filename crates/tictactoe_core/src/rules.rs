//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board) snapshot, kept apart
//! from history and presentation.

pub mod win;

pub use win::{LINES, check_winner};
