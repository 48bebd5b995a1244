//! Text rendering of the board and the final announcement.

use super::io::{ClearScreen, OutputSink, TransportError};
use super::{Board, GameStatus, Player};
use tracing::instrument;

/// Title line printed above the board.
pub const TITLE: &str = "Tic Tac Toe";

/// Row separator: eleven dashes.
const SEPARATOR: &str = "-----------";

/// Writes the board, one row per line, each cell padded by a space.
///
/// ```text
///  1 | 2 | 3
/// -----------
///  4 | 5 | 6
/// ```
pub fn render_board(output: &mut dyn OutputSink, board: &Board) -> Result<(), TransportError> {
    for (y, row) in board.rows().iter().enumerate() {
        if y > 0 {
            output.write(&format!("{}\n", SEPARATOR))?;
        }

        for (x, cell) in row.iter().enumerate() {
            if x > 0 {
                output.write("|")?;
            }
            output.write(&format!(" {} ", cell.symbol()))?;
        }

        output.write("\n")?;
    }
    Ok(())
}

/// Clears the display if possible, then writes the title, the board and,
/// when `turn` is given, the turn prompt.
#[instrument(skip(output, board, clear))]
pub fn render(
    output: &mut dyn OutputSink,
    board: &Board,
    turn: Option<Player>,
    clear: Option<&mut (dyn ClearScreen + '_)>,
) -> Result<(), TransportError> {
    if let Some(clear) = clear {
        clear.clear()?;
    }

    output.write(&format!("{}\n\n", TITLE))?;
    render_board(output, board)?;

    if let Some(player) = turn {
        output.write(&format!("\nTurn: {}\n", player))?;
    }
    Ok(())
}

/// Writes the result line for a finished game, without a trailing newline.
///
/// Nothing is written while the game is still in progress.
pub fn announce(output: &mut dyn OutputSink, status: GameStatus) -> Result<(), TransportError> {
    match status {
        GameStatus::Won(mark) => output.write(&format!("\nWinner is: {}.", mark.player())),
        GameStatus::Draw => output.write("\nWinner is: No one."),
        GameStatus::InProgress => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{ClearCounter, Transcript};
    use crate::{Mark, Position};

    #[test]
    fn test_render_empty_board_with_turn() {
        let mut out = Transcript::new();
        render(&mut out, &Board::new(), Some(Player::One), None).unwrap();
        assert_eq!(
            out.as_str(),
            "Tic Tac Toe\n\n 1 | 2 | 3 \n-----------\n 4 | 5 | 6 \n-----------\n 7 | 8 | 9 \n\nTurn: Player 1\n"
        );
    }

    #[test]
    fn test_render_without_turn_omits_prompt() {
        let mut board = Board::new();
        board.set(Position::Center, Mark::X);
        board.set(Position::TopLeft, Mark::O);
        let mut out = Transcript::new();
        render(&mut out, &board, None, None).unwrap();
        assert_eq!(
            out.as_str(),
            "Tic Tac Toe\n\n O | 2 | 3 \n-----------\n 4 | X | 6 \n-----------\n 7 | 8 | 9 \n"
        );
    }

    #[test]
    fn test_render_clears_first() {
        let mut out = Transcript::new();
        let mut clear = ClearCounter::default();
        render(&mut out, &Board::new(), Some(Player::Two), Some(&mut clear)).unwrap();
        assert_eq!(clear.count(), 1);
        assert!(out.as_str().ends_with("Turn: Player 2\n"));
    }

    #[test]
    fn test_announcements() {
        let mut out = Transcript::new();
        announce(&mut out, GameStatus::Won(Mark::O)).unwrap();
        announce(&mut out, GameStatus::Draw).unwrap();
        announce(&mut out, GameStatus::InProgress).unwrap();
        assert_eq!(out.as_str(), "\nWinner is: Player 2.\nWinner is: No one.");
    }
}
