//! tictactoe_tui - terminal tic-tac-toe with move history.

use anyhow::Result;
use clap::Parser;
use tictactoe_tui::{Cli, init_logging};
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(&cli)?;

    info!(log_file = %cli.log_file.display(), "Starting tic-tac-toe TUI");

    tictactoe_tui::run().await
}
