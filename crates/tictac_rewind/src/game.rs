//! History-indexed game engine.
//!
//! `Game` keeps every board since the start of the game as a snapshot
//! and a cursor (`step`) into that history. Step 0 is always the empty
//! board; snapshot N is the board after N moves. The player to move is
//! derived from the cursor parity, never stored, so jumping to an
//! earlier step also rewinds the turn order.

use crate::action::{Move, MoveError};
use crate::position::Position;
use crate::rules;
use crate::types::{Board, GameStatus, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Tic-tac-toe game with a rewindable linear history.
///
/// Invariants:
/// - `snapshots` is never empty; entry 0 is the empty board.
/// - `step < snapshots.len()`.
/// - Consecutive snapshots differ in exactly one square, filled in
///   alternating order starting with X.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Board snapshots, one per move plus the initial empty board.
    snapshots: Vec<Board>,
    /// Cursor into `snapshots`.
    step: usize,
}

impl Game {
    /// Creates a new game at step 0 with an empty board.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Board::new()],
            step: 0,
        }
    }

    /// The board at the current step.
    pub fn board(&self) -> &Board {
        &self.snapshots[self.step]
    }

    /// The player to move: X on even steps, O on odd steps.
    pub fn to_move(&self) -> Player {
        if self.step % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// The status of the current board.
    pub fn status(&self) -> GameStatus {
        rules::status(self.board())
    }

    /// Number of snapshots in history, including the empty board.
    pub fn steps(&self) -> usize {
        self.snapshots.len()
    }

    /// The current cursor position.
    pub fn step(&self) -> usize {
        self.step
    }

    /// The board snapshot at `step`, if it exists.
    pub fn snapshot(&self, step: usize) -> Option<&Board> {
        self.snapshots.get(step)
    }

    /// Places the current player's mark at `pos`.
    ///
    /// Playing from a past step discards the snapshots after it before
    /// extending the history. A rejected move leaves the history
    /// untouched, abandoned future included. Returns the applied move.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the current board is won or full.
    /// - [`MoveError::SquareOccupied`] if the square is taken.
    #[instrument(skip(self), fields(step = self.step, player = %self.to_move()))]
    pub fn play(&mut self, pos: Position) -> Result<Move, MoveError> {
        if self.status().is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.board().is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.to_move();
        let mut board = self.board().clone();
        board.set(pos, Square::Occupied(player));

        self.snapshots.truncate(self.step + 1);
        self.snapshots.push(board);
        self.step = self.snapshots.len() - 1;

        let applied = Move::new(player, pos);
        debug!(%applied, step = self.step, "move applied");
        Ok(applied)
    }

    /// Moves the cursor to an existing step.
    ///
    /// The snapshots after `step` are kept until the next call to
    /// [`Game::play`] overwrites them.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::NoSuchStep`] if `step` is past the end
    /// of the history.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), HistoryError> {
        if step >= self.snapshots.len() {
            return Err(HistoryError::NoSuchStep {
                step,
                steps: self.snapshots.len(),
            });
        }
        self.step = step;
        debug!(step, "jumped to step");
        Ok(())
    }

    /// The move that produced snapshot `step`, recovered by diffing it
    /// against its predecessor. Step 0 has no move.
    pub fn move_at(&self, step: usize) -> Option<Move> {
        let before = self.snapshots.get(step.checked_sub(1)?)?;
        let after = self.snapshots.get(step)?;
        Position::ALL
            .into_iter()
            .find_map(|pos| match (before.get(pos), after.get(pos)) {
                (Square::Empty, Square::Occupied(player)) => Some(Move::new(player, pos)),
                _ => None,
            })
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors from history navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum HistoryError {
    /// The requested step does not exist.
    #[display("no step {step} in a history of {steps} steps")]
    NoSuchStep {
        /// The requested step.
        step: usize,
        /// Number of steps in the history.
        steps: usize,
    },
}

impl std::error::Error for HistoryError {}
