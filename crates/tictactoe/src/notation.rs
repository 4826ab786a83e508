//! Compact text notation for boards.
//!
//! A board is written as its cells in row-major order, one symbol per
//! cell: `x`, `o`, or `_` for blank. `"xxxo_o___"` is a 3×3 board with X
//! owning the top row.

use crate::board::Board;
use crate::error::NotationError;
use crate::grid::cell_count;
use crate::types::{Coordinate, Piece};
use tracing::instrument;

impl Board {
    /// Builds a `size`×`size` board from notation.
    ///
    /// # Errors
    ///
    /// Fails if the notation has the wrong length, contains an unknown
    /// symbol, or the roles are invalid.
    #[instrument]
    pub fn from_notation(
        code: &str,
        size: usize,
        player_piece: Piece,
        opponent_piece: Piece,
    ) -> Result<Self, NotationError> {
        let symbols: Vec<char> = code.chars().collect();
        let expected = cell_count(size)?;
        if symbols.len() != expected {
            return Err(NotationError::Length {
                expected,
                found: symbols.len(),
            });
        }

        let mut board = Board::new(size, player_piece, opponent_piece)?;
        for (index, symbol) in symbols.into_iter().enumerate() {
            let piece =
                Piece::from_symbol(symbol).ok_or(NotationError::UnknownSymbol { symbol, index })?;
            board.place_piece(piece, Coordinate::new(index / size, index % size));
        }
        Ok(board)
    }

    /// Builds a board from notation, inferring N from its length.
    ///
    /// X is the player and O the opponent.
    ///
    /// # Errors
    ///
    /// Fails if the length is not a perfect square or a symbol is unknown.
    pub fn parse_notation(code: &str) -> Result<Self, NotationError> {
        let len = code.chars().count();
        let size = len.isqrt();
        if size == 0 || size * size != len {
            return Err(NotationError::NotSquare(len));
        }
        Self::from_notation(code, size, Piece::X, Piece::O)
    }

    /// Renders the board in notation.
    pub fn to_notation(&self) -> String {
        self.grid().cells().map(|(_, piece)| piece.symbol()).collect()
    }
}

impl std::str::FromStr for Board {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_notation(s)
    }
}

/// Grid rendering: cells separated by `|`, rows by `-+-` rules.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let size = self.size();
        let rule = vec!["-"; size].join("+");
        for row in 0..size {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "{}", rule)?;
            }
            for col in 0..size {
                if col > 0 {
                    write!(f, "|")?;
                }
                write!(f, "{}", self.grid().get(Coordinate::new(row, col)))?;
            }
        }
        Ok(())
    }
}
