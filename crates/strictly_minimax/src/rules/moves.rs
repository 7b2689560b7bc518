//! Move enumeration.

use crate::types::{Board, Square};

/// Returns the indices of unoccupied squares in ascending order.
///
/// Recomputed on every call since the search mutates the board between calls.
pub fn available_moves(board: &Board) -> Vec<usize> {
    board
        .squares()
        .iter()
        .enumerate()
        .filter(|(_, square)| **square == Square::Empty)
        .map(|(index, _)| index)
        .collect()
}

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_all_available() {
        assert_eq!(available_moves(&Board::new(9)), (0..9).collect::<Vec<_>>());
        assert!(!is_full(&Board::new(9)));
    }

    #[test]
    fn test_filters_occupied() {
        let board: Board = "... .ox ...".parse().unwrap();
        assert_eq!(available_moves(&board), vec![0, 1, 2, 3, 6, 7, 8]);
    }

    #[test]
    fn test_full_board() {
        let board: Board = "xox oxx oxo".parse().unwrap();
        assert!(available_moves(&board).is_empty());
        assert!(is_full(&board));
    }
}
