//! The robot opponent

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::board::{Board, Edge};
use crate::movegen::legal_moves;

/// Returned when move selection is requested on a finished board
///
/// Callers prevent this by checking for game over first, so hitting it is
/// a contract violation rather than a recoverable condition.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Error)]
#[error("no legal moves available")]
pub struct NoMovesAvailable;

/// A one-move-lookahead opponent
///
/// # Notes
/// The robot plays a deliberately shallow heuristic in two passes over the
/// legal moves:
///
/// 1. take the first move that completes a box, in move-generation order
/// 2. otherwise pick uniformly at random among the moves that leave no box
///    one edge away from completion, falling back to all moves when every
///    move does
///
/// It looks no further than the immediate move: no chains, no end-game
/// parity play. A stronger opponent can exploit it, and that is intended.
///
/// The random source is supplied by the caller via [`with_rng`] so that
/// tie-breaks can be made deterministic; [`new`] seeds one from entropy.
///
/// [`with_rng`]: #method.with_rng
/// [`new`]: #method.new
pub struct Robot<R = StdRng> {
    rng: R,
}

impl Robot<StdRng> {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for Robot<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Robot<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Picks one move for the player about to act
    ///
    /// The board is only borrowed for speculation: every candidate edge is
    /// applied, judged and removed again, so the board compares equal to
    /// its input state when this returns. The chosen move is applied by
    /// the caller, not here.
    pub fn select_move(&mut self, board: &mut Board) -> Result<Edge, NoMovesAvailable> {
        let moves: Vec<Edge> = legal_moves(board).collect();
        if moves.is_empty() {
            return Err(NoMovesAvailable);
        }

        // completion pass: grab the first move that closes a box
        for &candidate in moves.iter() {
            if probe(board, candidate, closes_box) {
                return Ok(candidate);
            }
        }

        // safety pass: prefer moves that leave nothing for the opponent
        let safe: Vec<Edge> = moves
            .iter()
            .copied()
            .filter(|&candidate| !probe(board, candidate, leaves_third_edge))
            .collect();

        let pool = if safe.is_empty() { &moves } else { &safe };
        Ok(pool[self.rng.gen_range(0..pool.len())])
    }
}

// applies the edge, evaluates the predicate, then restores the edge
fn probe(board: &mut Board, edge: Edge, check: fn(&Board) -> bool) -> bool {
    board.set_edge(edge, true);
    let hit = check(board);
    board.set_edge(edge, false);
    hit
}

fn closes_box(board: &Board) -> bool {
    board
        .boxes()
        .any(|(row, col)| board.owner(row, col).is_none() && board.edge_count(row, col) == 4)
}

fn leaves_third_edge(board: &Board) -> bool {
    board
        .boxes()
        .any(|(row, col)| board.owner(row, col).is_none() && board.edge_count(row, col) == 3)
}
