//! Translation between external cell identifiers and board indices.
//!
//! Identifiers are a fixed prefix followed by a one-based position, so the
//! first cell of the default layout is `c1` and its board index is `0`.

use crate::error::{CoordinateError, MoveError};
use crate::types::{Board, Player};
use std::collections::BTreeMap;
use tracing::{instrument, trace};

/// Default prefix of cell identifiers.
pub const CELL_PREFIX: &str = "c";

/// Moves made so far, keyed by cell identifier.
pub type MoveSet = BTreeMap<String, Player>;

/// Moves made so far, keyed by zero-based board index.
pub type NormalizedMoves = BTreeMap<usize, Player>;

/// Converts between cell identifiers and board indices.
#[derive(Debug, Clone, PartialEq, Eq, derive_new::new)]
pub struct Coordinates {
    #[new(into)]
    prefix: String,
}

impl Coordinates {
    /// Returns the identifier prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Adds the prefix and converts to a one-based position.
    pub fn index_to_identifier(&self, index: usize) -> String {
        format!("{}{}", self.prefix, index + 1)
    }

    /// Strips the prefix and converts to a zero-based index.
    ///
    /// # Errors
    ///
    /// Fails if the identifier is not `<prefix><positive integer>`.
    pub fn identifier_to_index(&self, identifier: &str) -> Result<usize, CoordinateError> {
        let number = identifier
            .strip_prefix(self.prefix.as_str())
            .ok_or_else(|| CoordinateError::MissingPrefix {
                identifier: identifier.to_string(),
                prefix: self.prefix.clone(),
            })?;

        let position: usize = number
            .parse()
            .map_err(|_| CoordinateError::InvalidNumber(identifier.to_string()))?;

        position
            .checked_sub(1)
            .ok_or_else(|| CoordinateError::ZeroPosition(identifier.to_string()))
    }

    /// Re-keys a move set by board index.
    ///
    /// Two identifiers naming the same cell (`c1` and `c01`) collapse to one
    /// entry; the one iterated last wins.
    #[instrument(skip(self, moves), fields(moves = moves.len()))]
    pub fn normalize(&self, moves: &MoveSet) -> Result<NormalizedMoves, CoordinateError> {
        let mut normalized = NormalizedMoves::new();
        for (cell, &player) in moves {
            let index = self.identifier_to_index(cell)?;
            trace!(%cell, index, %player, "Normalized move");
            normalized.insert(index, player);
        }
        Ok(normalized)
    }

    /// Builds a board of `cells` squares from normalized moves.
    pub fn materialize(&self, moves: &NormalizedMoves, cells: usize) -> Result<Board, MoveError> {
        Board::from_moves(cells, moves)
    }
}

impl Default for Coordinates {
    fn default() -> Self {
        Self::new(CELL_PREFIX)
    }
}
