//! Tic-tac-toe with a rewindable move history.
//!
//! The engine keeps every board snapshot since the start of the game
//! plus a cursor into that history. The player to move is derived from
//! the cursor, so jumping to an earlier step also rewinds the turn
//! order. Playing from a past step discards the abandoned future,
//! keeping the history linear.
//!
//! # Example
//!
//! ```
//! use tictac_rewind::{Game, GameStatus, Player, Position};
//!
//! let mut game = Game::new();
//! game.play(Position::Center)?;
//! game.play(Position::TopLeft)?;
//! assert_eq!(game.to_move(), Player::X);
//!
//! // Rewind to the start and branch off.
//! game.jump_to(0)?;
//! assert_eq!(game.to_move(), Player::X);
//! game.play(Position::TopRight)?;
//! assert_eq!(game.steps(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use game::{Game, HistoryError};
pub use position::Position;
pub use types::{Board, GameStatus, Player, Square};
