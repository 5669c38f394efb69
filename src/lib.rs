//! Rules and a robot opponent for the pencil-and-paper game 'Dots and Boxes'
//!
//! Players take turns drawing one edge on a grid of dots and claim a box
//! when they draw its fourth edge, which also grants them another turn.
//! The robot plays a shallow one-move heuristic: close a box if it can,
//! otherwise avoid handing one to the opponent.
//!
//! # Basic Usage
//!
//! ```
//! use dots_and_boxes::{Edge, GameController, GameState};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut game = GameController::new(6);
//! let outcome = game.submit_move(Edge::horizontal(0, 0))?;
//!
//! assert!(outcome.claimed.is_empty());
//! assert!(outcome.state == GameState::PlayerTwoTurn);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod game;

pub mod input;

pub mod movegen;

pub mod robot;


pub use board::{Board, Edge, EdgeKind, InvalidMove, Player};
pub use game::{GameController, GameState, MoveOutcome};
pub use movegen::legal_moves;
pub use robot::{NoMovesAvailable, Robot};

/// The number of dots per side of the standard game board
pub const DOTS: usize = 6;

// ensure that the board can enclose at least one box
const_assert!(DOTS >= 2);
