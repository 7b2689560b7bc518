//! Game rules for the move search.
//!
//! Pure functions over a [`Board`](crate::Board): they never mutate it, so
//! the search can call them at every node.

pub mod moves;
pub mod win;

pub use moves::{available_moves, is_full};
pub use win::is_winner;
