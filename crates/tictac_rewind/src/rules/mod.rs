//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board according to the rules. Rules
//! are separated from board storage so the history engine and the UI
//! can both evaluate snapshots directly.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, winning_line};

use crate::types::{Board, GameStatus};

/// Evaluates the combined status of a board.
pub fn status(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        GameStatus::Won(winner)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
