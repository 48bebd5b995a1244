//! Moves and move rejections.
//!
//! A rejected move is not a failure: the same player is simply asked again.
//! The rejection reason exists for logging and for callers that want it.

use super::{Player, Position};

/// An accepted move: a player's mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_new::new)]
pub struct Move {
    /// The player who made the move.
    pub player: Player,
    /// The position the player claimed.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// Why a raw move was not applied.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveRejection {
    /// Input was empty or whitespace.
    #[display("Move is blank")]
    Blank,

    /// Input is not an integer.
    #[display("Move {:?} is not a number", _0)]
    NotANumber(String),

    /// Input is an integer outside 0-9.
    #[display("Move {} is out of range", _0)]
    OutOfRange(i64),

    /// No open cell carries this label.
    #[display("No open cell is labelled {:?}", _0)]
    LabelNotFound(char),

    /// The game is already won or drawn.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveRejection {}
