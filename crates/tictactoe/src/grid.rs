//! N×N cell storage.

use crate::error::BoardError;
use crate::types::{Coordinate, Piece};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Square grid of pieces stored in row-major order.
///
/// Every coordinate in `[0, size)²` has exactly one cell. Cloning copies
/// the cells by value, so a clone never observes later writes to the
/// original (and vice versa).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "GridCells")]
pub struct Grid {
    size: usize,
    cells: Vec<Piece>,
}

#[derive(Deserialize)]
struct GridCells {
    size: usize,
    cells: Vec<Piece>,
}

impl TryFrom<GridCells> for Grid {
    type Error = BoardError;

    fn try_from(raw: GridCells) -> Result<Self, Self::Error> {
        let expected = cell_count(raw.size)?;
        if raw.cells.len() != expected {
            return Err(BoardError::CellCount {
                expected,
                found: raw.cells.len(),
            });
        }
        Ok(Self {
            size: raw.size,
            cells: raw.cells,
        })
    }
}

impl Grid {
    /// Creates a grid with every cell blank.
    ///
    /// # Panics
    ///
    /// Panics if N² overflows `usize`. [`Board::new`](crate::Board::new)
    /// checks this first and reports [`BoardError::TooLarge`].
    #[instrument]
    pub fn new(size: usize) -> Self {
        let Some(count) = size.checked_mul(size) else {
            panic!("{}x{} grid overflows usize", size, size);
        };
        Self {
            size,
            cells: vec![Piece::Blank; count],
        }
    }

    /// Board dimension N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total cell count, N².
    pub fn number_of_spaces(&self) -> usize {
        self.cells.len()
    }

    /// True if the coordinate addresses a cell of this grid.
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.is_within(self.size)
    }

    /// Writes a piece unconditionally.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is outside the grid.
    pub fn set(&mut self, coord: Coordinate, piece: Piece) {
        let index = self.index(coord);
        self.cells[index] = piece;
    }

    /// Reads the piece at `coord`.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is outside the grid.
    pub fn get(&self, coord: Coordinate) -> Piece {
        self.cells[self.index(coord)]
    }

    /// Reads the piece at `coord`, or `None` when out of range.
    pub fn try_get(&self, coord: Coordinate) -> Option<Piece> {
        self.contains(coord).then(|| self.get(coord))
    }

    /// Every coordinate of the grid in row-major order.
    ///
    /// The iterator is lazy and `Clone`, so a sequence can be restarted.
    pub fn all_coordinates(&self) -> impl Iterator<Item = Coordinate> + Clone + use<> {
        row_major(self.size)
    }

    /// Coordinates paired with their pieces, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Coordinate, Piece)> + '_ {
        self.all_coordinates().zip(self.cells.iter().copied())
    }

    /// Returns an independent copy of this grid.
    pub fn deep_copy(&self) -> Self {
        self.clone()
    }

    fn index(&self, coord: Coordinate) -> usize {
        assert!(
            self.contains(coord),
            "coordinate {} is outside a {}x{} grid",
            coord,
            self.size,
            self.size
        );
        coord.row * self.size + coord.col
    }
}

/// Number of cells on a valid N×N board.
///
/// # Errors
///
/// Fails for a zero size or when N² overflows `usize`.
pub fn cell_count(size: usize) -> Result<usize, BoardError> {
    if size == 0 {
        return Err(BoardError::ZeroSize);
    }
    size.checked_mul(size).ok_or(BoardError::TooLarge(size))
}

/// Row-major enumeration of all coordinates of an N×N board.
pub fn row_major(size: usize) -> impl Iterator<Item = Coordinate> + Clone {
    (0..size).flat_map(move |row| (0..size).map(move |col| Coordinate::new(row, col)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_blank() {
        let grid = Grid::new(3);
        assert_eq!(grid.number_of_spaces(), 9);
        assert!(grid.cells().all(|(_, piece)| piece == Piece::Blank));
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::new(3);
        grid.set(Coordinate::new(1, 2), Piece::X);
        assert_eq!(grid.get(Coordinate::new(1, 2)), Piece::X);
        assert_eq!(grid.get(Coordinate::new(2, 1)), Piece::Blank);
    }

    #[test]
    fn test_try_get_out_of_range() {
        let grid = Grid::new(2);
        assert_eq!(grid.try_get(Coordinate::new(2, 0)), None);
        assert_eq!(grid.try_get(Coordinate::new(1, 1)), Some(Piece::Blank));
    }

    #[test]
    #[should_panic(expected = "outside a 3x3 grid")]
    fn test_set_out_of_range_panics() {
        let mut grid = Grid::new(3);
        grid.set(Coordinate::new(0, 3), Piece::O);
    }

    #[test]
    fn test_all_coordinates_row_major_and_restartable() {
        let grid = Grid::new(2);
        let coords = grid.all_coordinates();
        let expected = vec![
            Coordinate::new(0, 0),
            Coordinate::new(0, 1),
            Coordinate::new(1, 0),
            Coordinate::new(1, 1),
        ];
        assert_eq!(coords.clone().collect::<Vec<_>>(), expected);
        assert_eq!(coords.collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_deep_copy_is_independent() {
        let mut original = Grid::new(3);
        let mut copy = original.deep_copy();
        copy.set(Coordinate::new(0, 0), Piece::X);
        original.set(Coordinate::new(2, 2), Piece::O);
        assert_eq!(original.get(Coordinate::new(0, 0)), Piece::Blank);
        assert_eq!(copy.get(Coordinate::new(2, 2)), Piece::Blank);
    }

    #[test]
    fn test_cell_count_rejects_overflow() {
        assert_eq!(cell_count(3), Ok(9));
        assert_eq!(cell_count(0), Err(BoardError::ZeroSize));
        assert_eq!(cell_count(usize::MAX), Err(BoardError::TooLarge(usize::MAX)));
    }

    #[test]
    fn test_deserialize_rejects_overflowing_size() {
        let json = format!(r#"{{"size":{},"cells":[]}}"#, usize::MAX);
        assert!(serde_json::from_str::<Grid>(&json).is_err());
    }

    #[test]
    #[should_panic(expected = "overflows usize")]
    fn test_new_panics_on_overflow() {
        Grid::new(usize::MAX);
    }

    #[test]
    fn test_deserialize_rejects_wrong_cell_count() {
        let json = r#"{"size":2,"cells":["X","O","Blank"]}"#;
        assert!(serde_json::from_str::<Grid>(json).is_err());
    }
}
