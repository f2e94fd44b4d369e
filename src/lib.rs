//! Terminal front end for tic-tac-toe with time travel.
//!
//! Game rules and history live in [`tictactoe_core`]; this crate draws
//! them with ratatui and feeds key presses back in.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod logging;
pub mod tui;

pub use cli::Cli;
pub use logging::init_logging;
pub use tui::{Action, App, Direction, Focus, run, run_app};
