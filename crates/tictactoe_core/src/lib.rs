//! Text-driven tic-tac-toe.
//!
//! Two players alternate placing X and O on a 3x3 board by typing the
//! label of an open cell. The engine owns the board for the whole game and
//! talks to the players only through injected capabilities.
//!
//! # Architecture
//!
//! - **Types**: marks, players, cells, the board and its positions
//! - **Rules**: win and draw detection, evaluated fresh after every move
//! - **Game**: the turn state machine and move history
//! - **Render**: exact text layout of the board and result
//! - **Engine**: the loop tying rendering, input and the game together
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameStatus, Mark, ScriptedInput, Transcript, run};
//!
//! let mut output = Transcript::new();
//! let mut input = ScriptedInput::new(["1", "2", "4", "3", "7"]);
//! let status = run(&mut output, &mut input, None)?;
//! assert_eq!(status, GameStatus::Won(Mark::X));
//! # Ok::<(), tictactoe_core::TransportError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod game;
mod io;
mod memory;
mod position;
mod render;
pub mod rules;
mod types;

pub use action::{Move, MoveRejection};
pub use engine::run;
pub use game::Game;
pub use io::{ClearScreen, InputSource, OutputSink, TransportError};
pub use memory::{ClearCounter, ScriptedInput, Transcript};
pub use position::Position;
pub use render::{TITLE, announce, render, render_board};
pub use types::{Board, Cell, GameStatus, Mark, Player};
