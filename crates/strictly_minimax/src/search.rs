//! Exhaustive minimax search.
//!
//! The computer maximizes, the human minimizes. Every reachable position is
//! visited, which is only tractable for small boards such as 3x3.

use crate::rules::{available_moves, is_winner};
use crate::types::{Board, Player, Roles, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score of a position the computer has won.
pub const WIN_SCORE: i32 = 10;

/// Score of a position the human has won.
pub const LOSS_SCORE: i32 = -WIN_SCORE;

/// Score of a drawn position.
pub const DRAW_SCORE: i32 = 0;

/// An option considered at one level of the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct MoveCandidate {
    /// Board index of the move, `None` for terminal positions.
    pub index: Option<usize>,
    /// Evaluation of the position after the move.
    pub score: i32,
}

impl MoveCandidate {
    /// Candidate reporting only the evaluation of a finished position.
    pub fn terminal(score: i32) -> Self {
        Self::new(None, score)
    }
}

/// Minimax evaluator for a fixed assignment of roles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_new::new)]
pub struct Minimax {
    roles: Roles,
}

impl Minimax {
    /// Returns the roles this evaluator scores against.
    pub fn roles(&self) -> Roles {
        self.roles
    }

    /// Computes the best move for `to_move` on `board`.
    ///
    /// The board is mutated during the search and restored before returning.
    /// Ties keep the candidate with the lowest index.
    #[instrument(skip(self, board), fields(cells = board.cells(), computer = %self.roles.computer()))]
    pub fn evaluate(&self, board: &mut Board, to_move: Player) -> MoveCandidate {
        #[cfg(debug_assertions)]
        let snapshot = board.clone();

        let best = self.search(board, to_move);

        #[cfg(debug_assertions)]
        debug_assert_eq!(*board, snapshot, "search must restore the board");

        debug!(index = ?best.index, score = best.score, "Search complete");
        best
    }

    fn search(&self, board: &mut Board, to_move: Player) -> MoveCandidate {
        if is_winner(board, self.roles.human()) {
            return MoveCandidate::terminal(LOSS_SCORE);
        }
        if is_winner(board, self.roles.computer()) {
            return MoveCandidate::terminal(WIN_SCORE);
        }

        let moves = available_moves(board);
        if moves.is_empty() {
            return MoveCandidate::terminal(DRAW_SCORE);
        }

        let maximizing = to_move == self.roles.computer();
        let mut best: Option<MoveCandidate> = None;

        for index in moves {
            let previous = board.replace(index, Square::Occupied(to_move));
            let reply = self.search(board, to_move.opponent());
            board.replace(index, previous);

            let candidate = MoveCandidate::new(Some(index), reply.score);
            best = match best {
                Some(current) if !improves(candidate.score, current.score, maximizing) => Some(current),
                _ => Some(candidate),
            };
        }

        best.unwrap_or(MoveCandidate::terminal(DRAW_SCORE))
    }
}

/// Strict comparison, so the first-found candidate wins ties.
fn improves(score: i32, best: i32, maximizing: bool) -> bool {
    if maximizing { score > best } else { score < best }
}

/// Evaluates `board` for `to_move` with the default roles (computer plays `O`).
pub fn minimax(board: &mut Board, to_move: Player) -> MoveCandidate {
    Minimax::default().evaluate(board, to_move)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_empty_board_is_a_draw() {
        let mut b = Board::new(9);
        assert_eq!(minimax(&mut b, Player::O), MoveCandidate::new(Some(0), 0));
        assert_eq!(b, Board::new(9));
    }

    #[test]
    fn test_blocks_diagonal_threat() {
        let mut b = board("oox .x. ...");
        assert_eq!(minimax(&mut b, Player::O), MoveCandidate::new(Some(6), 0));
    }

    #[test]
    fn test_takes_immediate_win() {
        let mut b = board("oo. xx. x..");
        assert_eq!(minimax(&mut b, Player::O), MoveCandidate::new(Some(2), WIN_SCORE));
    }

    #[test]
    fn test_human_takes_immediate_win() {
        let mut b = board("oo. xx. o..");
        assert_eq!(minimax(&mut b, Player::X), MoveCandidate::new(Some(5), LOSS_SCORE));
    }

    #[test]
    fn test_terminal_positions() {
        assert_eq!(minimax(&mut board("xxx oo. ..."), Player::O), MoveCandidate::terminal(LOSS_SCORE));
        assert_eq!(minimax(&mut board("ooo xx. x.."), Player::X), MoveCandidate::terminal(WIN_SCORE));
        assert_eq!(minimax(&mut board("xox oxx oxo"), Player::O), MoveCandidate::terminal(DRAW_SCORE));
    }

    #[test]
    fn test_human_win_checked_before_computer_win() {
        // Both marks hold a line; the human's line is scored first.
        let mut b = board("xxx ooo ...");
        assert_eq!(minimax(&mut b, Player::O), MoveCandidate::terminal(LOSS_SCORE));
    }

    #[test]
    fn test_swapped_roles() {
        let search = Minimax::new(Roles::new(Player::X));
        let mut b = board("xx. oo. ...");
        assert_eq!(search.evaluate(&mut b, Player::X), MoveCandidate::new(Some(2), WIN_SCORE));
    }

    #[test]
    fn test_board_restored_after_search() {
        let mut b = board("o.. .x. ...");
        let before = b.clone();
        minimax(&mut b, Player::O);
        assert_eq!(b, before);
    }
}
