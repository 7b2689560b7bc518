//! Top-level move selection for the computer player.

use crate::config::GameConfig;
use crate::coordinates::MoveSet;
use crate::error::MoveError;
use crate::search::Minimax;
use tracing::{info, instrument};

/// Computer opponent that answers a move set with its best cell.
#[derive(Debug, Clone, Default, derive_new::new)]
pub struct ComputerPlayer {
    config: GameConfig,
}

impl ComputerPlayer {
    /// Returns the configuration in use.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Finds the best cell for the computer given every move made so far.
    ///
    /// The move set is not modified, and identical input always yields the
    /// same cell.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidCoordinate`] for malformed identifiers,
    /// [`MoveError::OutOfBounds`] for cells past the end of the board, and
    /// [`MoveError::GameOver`] when the board is full or already won.
    #[instrument(skip(self, moves), fields(moves = moves.len(), board_size = self.config.board_size()))]
    pub fn best_move(&self, moves: &MoveSet) -> Result<String, MoveError> {
        let coordinates = self.config.coordinates();
        let normalized = coordinates.normalize(moves)?;
        let mut board = coordinates.materialize(&normalized, *self.config.board_size())?;

        let roles = self.config.roles();
        let best = Minimax::new(roles).evaluate(&mut board, roles.computer());
        let index = best.index.ok_or(MoveError::GameOver)?;

        let cell = coordinates.index_to_identifier(index);
        info!(%cell, score = best.score, "Computer chose move");
        Ok(cell)
    }
}

/// Finds the best cell for the computer on the canonical 3x3 game.
///
/// See [`ComputerPlayer::best_move`].
pub fn best_move(moves: &MoveSet) -> Result<String, MoveError> {
    ComputerPlayer::default().best_move(moves)
}
