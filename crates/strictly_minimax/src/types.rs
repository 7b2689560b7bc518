//! Core domain types for the move search.

use crate::error::MoveError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use tracing::instrument;

/// Number of cells on the canonical 3x3 board.
pub const BOARD_SIZE: usize = 9;

/// A mark placed on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Player {
    /// Player X.
    X,
    /// Player O.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// Which mark the computer plays. The human always plays the other one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Roles {
    computer: Player,
}

impl Roles {
    /// Creates roles with the given computer mark.
    pub fn new(computer: Player) -> Self {
        Self { computer }
    }

    /// Mark played by the computer (the maximizing side).
    pub fn computer(&self) -> Player {
        self.computer
    }

    /// Mark played by the human (the minimizing side).
    pub fn human(&self) -> Player {
        self.computer.opponent()
    }
}

impl Default for Roles {
    fn default() -> Self {
        Self::new(Player::O)
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// Square board of `side * side` cells in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    squares: Vec<Square>,
    side: usize,
}

impl Board {
    /// Creates an empty board with `cells` squares.
    ///
    /// `cells` is expected to be a perfect square; the win check interprets
    /// the board as a grid whose side is the integer square root.
    #[instrument]
    pub fn new(cells: usize) -> Self {
        Self {
            squares: vec![Square::Empty; cells],
            side: cells.isqrt(),
        }
    }

    /// Builds a board of `cells` squares from index-keyed moves.
    ///
    /// Indices not present in `moves` stay empty.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::OutOfBounds`] if a move index does not fit the board.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn from_moves(cells: usize, moves: &BTreeMap<usize, Player>) -> Result<Self, MoveError> {
        let mut board = Self::new(cells);
        for (&index, &player) in moves {
            board.set(index, Square::Occupied(player))?;
        }
        Ok(board)
    }

    /// Total number of cells.
    pub fn cells(&self) -> usize {
        self.squares.len()
    }

    /// Length of one row.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Gets the square at the given index.
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Sets the square at the given index.
    pub fn set(&mut self, index: usize, square: Square) -> Result<(), MoveError> {
        let cells = self.cells();
        let slot = self
            .squares
            .get_mut(index)
            .ok_or(MoveError::OutOfBounds { index, cells })?;
        *slot = square;
        Ok(())
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Overwrites a square during search, returning its previous contents.
    ///
    /// Callers pass indices produced by the move enumerator, so they are in range.
    pub(crate) fn replace(&mut self, index: usize, square: Square) -> Square {
        std::mem::replace(&mut self.squares[index], square)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_SIZE)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let side = self.side.max(1);
        let separator = vec!["-"; side].join("+");
        for (row, chunk) in self.squares.chunks(side).enumerate() {
            if row > 0 {
                write!(f, "\n{}\n", separator)?;
            }
            for (col, square) in chunk.iter().enumerate() {
                if col > 0 {
                    write!(f, "|")?;
                }
                match square {
                    Square::Empty => write!(f, "{}", row * side + col + 1)?,
                    Square::Occupied(player) => write!(f, "{}", player.to_string().to_uppercase())?,
                }
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = MoveError;

    /// Parses compact notation: `x`/`o` for marks, `.` or a digit for empty
    /// cells. Whitespace and `|` are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squares = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .map(|c| match c {
                '.' | '0'..='9' => Ok(Square::Empty),
                other => Player::from_str(&other.to_string())
                    .map(Square::Occupied)
                    .map_err(|_| MoveError::BoardParse(format!("unexpected cell '{}'", other))),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let side = squares.len().isqrt();
        if squares.is_empty() || side * side != squares.len() {
            return Err(MoveError::BoardParse(format!(
                "{} cells do not form a square board",
                squares.len()
            )));
        }

        Ok(Self { squares, side })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(9);
        assert_eq!(board.cells(), 9);
        assert_eq!(board.side(), 3);
        assert!((0..9).all(|i| board.is_empty(i)));
    }

    #[test]
    fn test_from_moves_leaves_unlisted_cells_empty() {
        let moves = BTreeMap::from([(0, Player::O), (4, Player::X)]);
        let board = Board::from_moves(9, &moves).unwrap();
        assert_eq!(board.get(0), Some(Square::Occupied(Player::O)));
        assert_eq!(board.get(4), Some(Square::Occupied(Player::X)));
        assert_eq!(board.squares().iter().filter(|s| **s == Square::Empty).count(), 7);
    }

    #[test]
    fn test_from_moves_rejects_out_of_bounds() {
        let moves = BTreeMap::from([(9, Player::X)]);
        assert_eq!(
            Board::from_moves(9, &moves),
            Err(MoveError::OutOfBounds { index: 9, cells: 9 })
        );
    }

    #[test]
    fn test_parse_compact_notation() {
        let board: Board = "xxx|oox|o7o".parse().unwrap();
        assert_eq!(board.get(0), Some(Square::Occupied(Player::X)));
        assert_eq!(board.get(3), Some(Square::Occupied(Player::O)));
        assert_eq!(board.get(7), Some(Square::Empty));
    }

    #[test]
    fn test_parse_rejects_non_square() {
        assert!(matches!("xo.".parse::<Board>(), Err(MoveError::BoardParse(_))));
        assert!(matches!("".parse::<Board>(), Err(MoveError::BoardParse(_))));
    }

    #[test]
    fn test_parse_rejects_unknown_mark() {
        assert!(matches!("xoz......".parse::<Board>(), Err(MoveError::BoardParse(_))));
    }

    #[test]
    fn test_display() {
        let board: Board = "x.. .o. ...".parse().unwrap();
        assert_eq!(board.to_string(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_player_parses_lowercase_and_uppercase() {
        assert_eq!("x".parse::<Player>(), Ok(Player::X));
        assert_eq!("O".parse::<Player>(), Ok(Player::O));
        assert_eq!(Player::X.to_string(), "x");
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_roles_default() {
        let roles = Roles::default();
        assert_eq!(roles.computer(), Player::O);
        assert_eq!(roles.human(), Player::X);
    }
}
