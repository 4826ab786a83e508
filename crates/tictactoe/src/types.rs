//! Core domain types for the board.

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// Content of a single cell.
///
/// `X` and `O` are the two marks a game can be played with; which one is
/// the player and which the opponent is decided by the [`Board`](crate::Board).
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    Serialize,
    Deserialize,
)]
pub enum Piece {
    /// Empty cell.
    #[default]
    #[display("_")]
    Blank,
    /// The X mark.
    #[display("x")]
    X,
    /// The O mark.
    #[display("o")]
    O,
}

impl Piece {
    /// Returns the opposing mark. Blank has no opponent and maps to itself.
    pub fn opponent(self) -> Self {
        match self {
            Piece::X => Piece::O,
            Piece::O => Piece::X,
            Piece::Blank => Piece::Blank,
        }
    }

    /// Returns true for the empty-cell sentinel.
    pub fn is_blank(self) -> bool {
        matches!(self, Piece::Blank)
    }

    /// Single-character symbol used by board notation.
    pub fn symbol(self) -> char {
        match self {
            Piece::Blank => '_',
            Piece::X => 'x',
            Piece::O => 'o',
        }
    }

    /// Parses a notation symbol (case-insensitive).
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol.to_ascii_lowercase() {
            '_' => Some(Piece::Blank),
            'x' => Some(Piece::X),
            'o' => Some(Piece::O),
            _ => None,
        }
    }
}

/// A cell address on the board: `(row, col)`, both zero-based.
///
/// Ordering is row-major, matching the enumeration order of every
/// coordinate-producing operation.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    From,
    Serialize,
    Deserialize,
)]
#[display("({row}, {col})")]
pub struct Coordinate {
    /// Row index, top to bottom.
    pub row: usize,
    /// Column index, left to right.
    pub col: usize,
}

impl Coordinate {
    /// Creates a new coordinate.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// True when both indices fall inside an N×N board.
    pub fn is_within(&self, size: usize) -> bool {
        self.row < size && self.col < size
    }
}

/// Current status of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Status {
    /// No line is owned and moves remain.
    #[display("In progress")]
    InProgress,
    /// A line is fully owned by the piece.
    #[display("{_0} wins")]
    Won(Piece),
    /// Board is full with no owned line.
    #[display("Draw")]
    Draw,
}

impl Status {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Piece> {
        match self {
            Status::Won(piece) => Some(*piece),
            _ => None,
        }
    }

    /// True for won and drawn boards.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Status::InProgress)
    }
}
