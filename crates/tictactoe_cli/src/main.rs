//! Tic-tac-toe in the terminal.
//!
//! Wires the engine to stdout, stdin and crossterm screen clearing.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::ConsoleConfig;
use console::{LineReader, StdoutSink, TerminalClear};
use std::io;
use tictactoe_core::{ClearScreen, GameStatus, OutputSink};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ConsoleConfig::load(cli.config.as_deref())?.with_overrides(cli.no_clear, cli.log_filter);

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(io::stderr)
        .init();

    let status = play(&config)?;
    info!(?status, "Game finished");
    Ok(())
}

/// Plays one game on the terminal.
#[instrument(skip_all, fields(clear_screen = *config.clear_screen()))]
fn play(config: &ConsoleConfig) -> Result<GameStatus> {
    let mut output = StdoutSink::new();
    let mut input = LineReader::new(io::stdin().lock());
    let mut terminal = TerminalClear;
    let clear: Option<&mut dyn ClearScreen> = if *config.clear_screen() {
        Some(&mut terminal)
    } else {
        None
    };

    let status = tictactoe_core::run(&mut output, &mut input, clear)?;
    // The announcement leaves the cursor on its line.
    output.write("\n")?;
    Ok(status)
}
