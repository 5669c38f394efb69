use anyhow::Result;
use rand::Rng;

use crate::board::{Board, Edge, InvalidMove, Player};
use crate::robot::Robot;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameState {
    PlayerOneTurn,
    PlayerTwoTurn,
    GameOver,
}

/// The result of a successfully applied move
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct MoveOutcome {
    /// The edge that was drawn
    pub edge: Edge,
    /// Boxes newly claimed by this move, in row-major order
    pub claimed: Vec<(usize, usize)>,
    /// The game state after the turn-transition decision
    pub state: GameState,
}

/// The turn state machine for one game session
///
/// The controller owns the only live [`Board`] and is the sole mutator of
/// canonical game state: every move, human or robot, funnels through
/// [`submit_move`]. Drawing the fourth edge of a box claims it for the
/// acting player and grants another turn; otherwise the turn passes. Once
/// every box is owned the game is over and further moves are rejected.
/// Restarting a game means constructing a fresh controller.
///
/// [`Board`]: ../board/struct.Board.html
/// [`submit_move`]: #method.submit_move
pub struct GameController {
    board: Board,
    state: GameState,
}

impl GameController {
    /// Starts a new game on an empty board with `dots` dots per side
    ///
    /// Player one always moves first.
    pub fn new(dots: usize) -> Self {
        Self {
            board: Board::new(dots),
            state: GameState::PlayerOneTurn,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Read-only view of the board for rendering
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Option<Player> {
        match self.state {
            GameState::PlayerOneTurn => Some(Player::One),
            GameState::PlayerTwoTurn => Some(Player::Two),
            GameState::GameOver => None,
        }
    }

    pub fn score(&self, player: Player) -> usize {
        self.board.score(player)
    }

    /// Draws an edge for the player whose turn it is
    ///
    /// An [`InvalidMove`] leaves the game untouched: no edge, no claim, no
    /// turn change. On success the claim scan runs for the acting player;
    /// claiming at least one box retains the turn, claiming none passes
    /// it, and completing the board ends the game either way.
    ///
    /// [`InvalidMove`]: ../board/enum.InvalidMove.html
    pub fn submit_move(&mut self, edge: Edge) -> Result<MoveOutcome, InvalidMove> {
        let player = match self.current_player() {
            Some(player) => player,
            None => return Err(InvalidMove::GameFinished),
        };

        self.board.place_edge(edge)?;
        let claimed = self.board.claim_boxes(player);

        self.state = if self.board.is_complete() {
            GameState::GameOver
        } else if claimed.is_empty() {
            match player.opponent() {
                Player::One => GameState::PlayerOneTurn,
                Player::Two => GameState::PlayerTwoTurn,
            }
        } else {
            // the claiming player moves again
            self.state
        };

        Ok(MoveOutcome {
            edge,
            claimed,
            state: self.state,
        })
    }

    /// Lets the robot take the current turn
    ///
    /// Selection and application go through the same [`submit_move`] path
    /// as human moves, so the extra-turn and game-over rules apply
    /// identically. Must not be called once the game is over; the robot
    /// then has no legal moves and the error is a contract violation.
    ///
    /// [`submit_move`]: #method.submit_move
    pub fn request_ai_move<R: Rng>(&mut self, robot: &mut Robot<R>) -> Result<MoveOutcome> {
        let edge = robot.select_move(&mut self.board)?;
        let outcome = self.submit_move(edge)?;
        Ok(outcome)
    }
}
