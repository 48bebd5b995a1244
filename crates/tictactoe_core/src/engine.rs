//! The game loop.

use super::game::Game;
use super::io::{ClearScreen, InputSource, OutputSink, TransportError};
use super::render::{announce, render};
use super::GameStatus;
use tracing::{info, instrument};

/// Plays one game from an empty board to a win or draw.
///
/// Each iteration renders the board with the turn prompt, reads one line
/// and submits it. Rejected input re-prompts the same player. When the game
/// ends, the final board is rendered without a prompt and the result is
/// announced.
///
/// Returns the final status, or the first transport failure.
#[instrument(skip_all)]
pub fn run(
    output: &mut dyn OutputSink,
    input: &mut dyn InputSource,
    mut clear: Option<&mut dyn ClearScreen>,
) -> Result<GameStatus, TransportError> {
    let mut game = Game::new();
    info!("Game started");

    while !game.status().is_over() {
        render(output, game.board(), Some(game.to_move()), clear.as_deref_mut())?;
        let line = input.read_line()?;
        game.submit(&line);
    }

    render(output, game.board(), None, clear.as_deref_mut())?;
    announce(output, game.status())?;
    Ok(game.status())
}
