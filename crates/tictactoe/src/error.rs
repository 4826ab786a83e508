//! Error types for board construction and notation parsing.

use crate::types::{Coordinate, Piece};

/// Error that can occur when building or mutating a board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// Board size must be at least 1.
    #[display("Board size must be at least 1")]
    ZeroSize,

    /// N² does not fit in `usize`.
    #[display("Board size {} is too large", _0)]
    TooLarge(usize),

    /// A player role was assigned the blank piece.
    #[display("Player roles must be non-blank pieces")]
    BlankRole,

    /// Both roles were assigned the same piece.
    #[display("Player and opponent cannot both be {}", _0)]
    SameRoles(Piece),

    /// Coordinate lies outside the board.
    #[display("Coordinate {} is outside a {}x{} board", coord, size, size)]
    OutOfBounds {
        /// The offending coordinate.
        coord: Coordinate,
        /// Board dimension.
        size: usize,
    },

    /// Stored cell count does not match the board dimension.
    #[display("Expected {} cells, found {}", expected, found)]
    CellCount {
        /// N² for the declared size.
        expected: usize,
        /// Cells actually present.
        found: usize,
    },
}

impl std::error::Error for BoardError {}

/// Error that can occur when reading board notation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum NotationError {
    /// Notation length does not match N².
    #[display("Expected {} symbols, found {}", expected, found)]
    Length {
        /// N² for the requested size.
        expected: usize,
        /// Symbols in the input.
        found: usize,
    },

    /// Length is not a perfect square, so no size can be inferred.
    #[display("{} symbols do not form a square board", _0)]
    NotSquare(usize),

    /// Symbol is not one of `x`, `o`, `_`.
    #[display("Unknown symbol {:?} at index {}", symbol, index)]
    UnknownSymbol {
        /// The unrecognized character.
        symbol: char,
        /// Position in the notation string.
        index: usize,
    },

    /// The parsed board was rejected.
    #[display("Invalid board: {}", _0)]
    Board(BoardError),
}

impl std::error::Error for NotationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NotationError::Board(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BoardError> for NotationError {
    fn from(err: BoardError) -> Self {
        NotationError::Board(err)
    }
}
