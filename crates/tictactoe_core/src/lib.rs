//! Tic-tac-toe with move history and time travel.
//!
//! Pure game logic with no terminal or I/O code.
//!
//! # Architecture
//!
//! - **Rules**: [`check_winner`] scans the eight lines of a [`Board`]
//! - **Board view**: [`BoardView`] derives the status line and turns a
//!   cell click into the next snapshot, or ignores it
//! - **History**: [`History`] keeps every snapshot plus the current move
//!   pointer, overwriting the future when playing from the past
//! - **Controller**: [`GameController`] owns the history and notifies
//!   [`GameObserver`]s after each transition
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameController, Position};
//!
//! let mut game = GameController::new();
//! game.click(Position::TopLeft);
//! game.click(Position::Center);
//! assert_eq!(game.view().status().to_string(), "Next player: X");
//!
//! game.jump_to(0).unwrap();
//! assert_eq!(game.history().len(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board_view;
mod controller;
mod error;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod types;

pub use board_view::{BoardView, Status};
pub use controller::{GameController, GameEvent, GameObserver};
pub use error::HistoryError;
pub use history::{History, MoveEntry};
pub use position::Position;
pub use rules::check_winner;
pub use types::{Board, Player, Square};
