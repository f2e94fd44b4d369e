//! Command-line interface for tictactoe_tui.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe in the terminal, with a move list you can jump back through
#[derive(Parser, Debug, Clone)]
#[command(name = "tictactoe_tui")]
#[command(about = "Terminal tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// File that receives log output (the terminal is owned by the UI)
    #[arg(long, default_value = "tictactoe.log")]
    pub log_file: PathBuf,

    /// Log filter used when RUST_LOG is unset (e.g. "debug" or "tictactoe_core=trace")
    #[arg(long, default_value = "info")]
    pub log_filter: String,
}
