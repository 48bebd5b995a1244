//! Core domain types for tic-tac-toe.

use super::action::MoveRejection;
use super::position::Position;
use tracing::{debug, instrument};

/// Mark placed on the board by a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Mark {
    /// Mark of player one.
    X,
    /// Mark of player two.
    O,
}

impl Mark {
    /// Character written into a cell.
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    /// The player who places this mark.
    pub fn player(self) -> Player {
        match self {
            Mark::X => Player::One,
            Mark::O => Player::Two,
        }
    }
}

/// Player whose turn it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    /// Player one (goes first, plays X).
    One,
    /// Player two (plays O).
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Turn number shown to the players (1 or 2).
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Mark this player places.
    pub fn mark(self) -> Mark {
        match self {
            Player::One => Mark::X,
            Player::Two => Mark::O,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Unoccupied cell showing the label players type to claim it.
    Open(char),
    /// Cell claimed by a mark. Never reverts to `Open`.
    Marked(Mark),
}

impl Cell {
    /// Character rendered for this cell.
    pub fn symbol(self) -> char {
        match self {
            Cell::Open(label) => label,
            Cell::Marked(mark) => mark.symbol(),
        }
    }

    /// The mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Open(_) => None,
            Cell::Marked(mark) => Some(mark),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Rows top to bottom, cells left to right.
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates a board with labels '1' through '9' in row-major order.
    pub fn new() -> Self {
        let mut cells = [[Cell::Open('1'); 3]; 3];
        for pos in Position::ALL {
            cells[pos.row()][pos.col()] = Cell::Open(pos.label());
        }
        Self { cells }
    }

    /// Gets the cell at the given position.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.col()]
    }

    /// Returns the rows top to bottom.
    pub fn rows(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }

    /// Number of cells holding a mark.
    pub fn occupied(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.mark().is_some())
            .count()
    }

    /// Applies a raw textual move for `player`, returning whether it was accepted.
    ///
    /// A rejected move leaves the board untouched.
    pub fn apply_move(&mut self, raw: &str, player: Player) -> bool {
        self.try_apply_move(raw, player).is_ok()
    }

    /// Applies a raw textual move for `player`, reporting why it was rejected.
    ///
    /// The input must parse as an integer in `0..=9` (surrounding tabs, line
    /// breaks and spaces allowed) and its first character must name a label still on the board.
    #[instrument(skip(self))]
    pub fn try_apply_move(&mut self, raw: &str, player: Player) -> Result<Position, MoveRejection> {
        let digits = trim_number_whitespace(raw);
        if digits.is_empty() {
            return Err(MoveRejection::Blank);
        }

        let number: i64 = digits
            .parse()
            .map_err(|_| MoveRejection::NotANumber(raw.to_string()))?;
        if !(0..=9).contains(&number) {
            return Err(MoveRejection::OutOfRange(number));
        }

        // Non-blank input always has a first character.
        let first = raw.chars().next().ok_or(MoveRejection::Blank)?;
        let pos = Position::ALL
            .into_iter()
            .find(|&pos| self.get(pos) == Cell::Open(first))
            .ok_or(MoveRejection::LabelNotFound(first))?;

        self.cells[pos.row()][pos.col()] = Cell::Marked(player.mark());
        debug!(%player, %pos, "Mark placed");
        Ok(pos)
    }

    /// Places a mark directly, bypassing label validation.
    #[cfg(test)]
    pub(crate) fn set(&mut self, pos: Position, mark: Mark) {
        self.cells[pos.row()][pos.col()] = Cell::Marked(mark);
    }
}

/// Strips the whitespace an integer parse tolerates: U+0009 to U+000D and space.
fn trim_number_whitespace(raw: &str) -> &str {
    raw.trim_matches(|c: char| matches!(c, '\t'..='\r' | ' '))
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Current status of the game, derived from the board after every move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// A line holds three of this mark.
    Won(Mark),
    /// All nine cells are marked and no line is won.
    Draw,
}

impl GameStatus {
    /// Returns true once the game is won or drawn.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winning player, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(mark) => Some(mark.player()),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}
