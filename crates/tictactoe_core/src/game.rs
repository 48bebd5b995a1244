//! Turn-by-turn game state machine.

use super::action::{Move, MoveRejection};
use super::rules;
use super::{Board, GameStatus, Player, Position};
use tracing::{debug, info, instrument};

/// Tic-tac-toe game: board, active player, status and history.
///
/// The turn flips only after an accepted move that leaves the game in
/// progress. Once won or drawn, every further move is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    to_move: Player,
    status: GameStatus,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game with player one to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::One,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Submits a raw move for the player to move, returning whether it was accepted.
    pub fn submit(&mut self, raw: &str) -> bool {
        self.try_submit(raw).is_ok()
    }

    /// Submits a raw move for the player to move.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn try_submit(&mut self, raw: &str) -> Result<Position, MoveRejection> {
        if self.status.is_over() {
            return Err(MoveRejection::GameOver);
        }

        let player = self.to_move;
        let position = self.board.try_apply_move(raw, player).inspect_err(|rejection| {
            debug!(%rejection, "Move rejected");
        })?;
        self.history.push(Move::new(player, position));

        self.status = rules::evaluate(&self.board);
        match self.status {
            GameStatus::InProgress => self.to_move = player.opponent(),
            GameStatus::Won(mark) => info!(%mark, moves = self.history.len(), "Game won"),
            GameStatus::Draw => info!(moves = self.history.len(), "Game drawn"),
        }

        Ok(position)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Mark};

    #[test]
    fn test_non_numeric_move_keeps_turn() {
        let mut game = Game::new();
        assert!(!game.submit("a"));
        assert_eq!(game.to_move(), Player::One);
        assert_eq!(game.board(), &Board::new());
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_same_cell_twice_rejected() {
        let mut game = Game::new();
        assert!(game.submit("5"));
        assert_eq!(game.to_move(), Player::Two);
        assert!(!game.submit("5"));
        assert_eq!(game.to_move(), Player::Two);
        assert_eq!(game.board().get(Position::Center), Cell::Marked(Mark::X));
    }

    #[test]
    fn test_win_is_terminal() {
        let mut game = Game::new();
        for raw in ["1", "2", "4", "3", "7"] {
            assert!(game.submit(raw));
        }
        assert_eq!(game.status(), GameStatus::Won(Mark::X));
        // The winner stays on move; the turn no longer flips.
        assert_eq!(game.to_move(), Player::One);
        assert_eq!(game.try_submit("9"), Err(MoveRejection::GameOver));
        assert_eq!(game.history().len(), 5);
    }

    #[test]
    fn test_nine_moves_without_line_is_draw() {
        let mut game = Game::new();
        for raw in ["1", "2", "3", "5", "4", "6", "8", "7", "9"] {
            assert_eq!(game.status(), GameStatus::InProgress);
            assert!(game.submit(raw));
        }
        assert_eq!(game.status(), GameStatus::Draw);
        assert_eq!(game.status().winner(), None);
    }

    #[test]
    fn test_history_records_players_and_positions() {
        let mut game = Game::new();
        assert!(game.submit("5"));
        assert!(!game.submit("0"));
        assert!(game.submit("1"));
        assert_eq!(
            game.history(),
            &[
                Move::new(Player::One, Position::Center),
                Move::new(Player::Two, Position::TopLeft),
            ]
        );
    }
}
