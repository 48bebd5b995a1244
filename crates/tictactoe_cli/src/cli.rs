//! Command-line interface for tictactoe.

use clap::Parser;
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a friend in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to tictactoe.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Append each screen instead of clearing the terminal
    #[arg(long)]
    pub no_clear: bool,

    /// Log filter directive, e.g. "debug" or "tictactoe_core=trace"
    #[arg(long)]
    pub log_filter: Option<String>,
}
