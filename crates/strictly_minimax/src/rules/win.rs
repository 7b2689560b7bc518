//! Win detection for square boards of any size.

use crate::types::{Board, Player, Square};

/// Checks whether `player` holds a full row, column or diagonal.
///
/// The board is read as a `side * side` grid. Rows and columns are checked
/// together in one pass, then both diagonals in a second.
pub fn is_winner(board: &Board, player: Player) -> bool {
    let side = board.side();
    let owns = |index: usize| board.get(index) == Some(Square::Occupied(player));

    for i in 0..side {
        let row = (0..side).all(|j| owns(i * side + j));
        let col = (0..side).all(|j| owns(j * side + i));
        if row || col {
            return true;
        }
    }

    let mut diag = true;
    let mut anti_diag = true;
    for i in 0..side {
        diag = diag && owns(i * side + i);
        anti_diag = anti_diag && owns(i * side + (side - i - 1));
    }

    diag || anti_diag
}
