//! Error types for coordinates and move selection.

/// Error converting an external cell identifier to a board index.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum CoordinateError {
    /// The identifier does not start with the configured prefix.
    #[display("Cell {:?} does not start with prefix {:?}", identifier, prefix)]
    MissingPrefix {
        /// The offending identifier.
        identifier: String,
        /// The prefix that was expected.
        prefix: String,
    },

    /// The part after the prefix is not a positive integer.
    #[display("Cell {:?} does not end in a position number", _0)]
    InvalidNumber(String),

    /// Positions are one-based, so `0` names no cell.
    #[display("Cell {:?} has position 0; positions start at 1", _0)]
    ZeroPosition(String),
}

impl std::error::Error for CoordinateError {}

/// Error that can occur when computing a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// A cell identifier in the move set was malformed.
    #[display("Invalid coordinate: {}", _0)]
    InvalidCoordinate(CoordinateError),

    /// A move index does not fit the board.
    #[display("Index {} is out of bounds for a board of {} cells", index, cells)]
    OutOfBounds {
        /// The offending index.
        index: usize,
        /// Number of cells on the board.
        cells: usize,
    },

    /// The board is full or already won.
    #[display("No move available: the game is already over")]
    GameOver,

    /// A compact board string could not be parsed.
    #[display("Invalid board: {}", _0)]
    BoardParse(String),
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::InvalidCoordinate(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CoordinateError> for MoveError {
    fn from(err: CoordinateError) -> Self {
        MoveError::InvalidCoordinate(err)
    }
}
