//! Strictly Minimax - exhaustive move search for tic-tac-toe.
//!
//! Given every move made so far, keyed by cell identifier (`c1`..`c9`),
//! computes the computer's best reply with a full-depth minimax search.
//!
//! # Architecture
//!
//! - **Board model**: [`Board`] of [`Square`]s in row-major order
//! - **Coordinates**: [`Coordinates`] maps identifiers to board indices
//! - **Rules**: [`is_winner`] and [`available_moves`]
//! - **Search**: [`Minimax`] yields a [`MoveCandidate`]
//! - **Entry point**: [`best_move`] / [`ComputerPlayer`]
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{MoveSet, Player, best_move};
//!
//! let mut moves = MoveSet::new();
//! moves.insert("c5".to_string(), Player::X);
//! assert_eq!(best_move(&moves).unwrap(), "c1");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod computer;
mod config;
mod coordinates;
mod error;
mod rules;
mod search;
mod types;

pub use computer::{ComputerPlayer, best_move};
pub use config::{ConfigError, GameConfig};
pub use coordinates::{CELL_PREFIX, Coordinates, MoveSet, NormalizedMoves};
pub use error::{CoordinateError, MoveError};
pub use rules::{available_moves, is_full, is_winner};
pub use search::{DRAW_SCORE, LOSS_SCORE, Minimax, MoveCandidate, WIN_SCORE, minimax};
pub use types::{BOARD_SIZE, Board, Player, Roles, Square};
