//! Line enumeration and N-in-a-row detection.

use crate::grid::Grid;
use crate::types::{Coordinate, Piece};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Which family a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, Serialize, Deserialize)]
pub enum LineKind {
    /// Row `i`, read left to right.
    #[display("row {_0}")]
    Row(usize),
    /// Column `j`, read top to bottom.
    #[display("column {_0}")]
    Column(usize),
    /// `(0,0)` through `(N-1,N-1)`.
    #[display("diagonal")]
    Diagonal,
    /// `(0,N-1)` through `(N-1,0)`.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

/// An ordered run of N coordinates that wins when fully owned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    kind: LineKind,
    coordinates: Vec<Coordinate>,
}

impl Line {
    /// Builds the line of the given kind on an N×N board.
    pub fn new(kind: LineKind, size: usize) -> Self {
        let coordinates = (0..size)
            .map(|i| match kind {
                LineKind::Row(row) => Coordinate::new(row, i),
                LineKind::Column(col) => Coordinate::new(i, col),
                LineKind::Diagonal => Coordinate::new(i, i),
                LineKind::AntiDiagonal => Coordinate::new(i, size - 1 - i),
            })
            .collect();
        Self { kind, coordinates }
    }

    /// Returns the line family.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// Coordinates in scan order.
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    /// Number of cells, always N.
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// True only for the degenerate zero-size board.
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [", self.kind)?;
        for (i, coord) in self.coordinates.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", coord)?;
        }
        write!(f, "]")
    }
}

/// All 2N+2 winning lines of an N×N board.
///
/// Order: rows top to bottom, columns left to right, main diagonal,
/// anti-diagonal. Scanners rely on this order to break ties.
pub fn candidate_lines(size: usize) -> impl Iterator<Item = Line> + Clone {
    let rows = (0..size).map(LineKind::Row);
    let columns = (0..size).map(LineKind::Column);
    rows.chain(columns)
        .chain([LineKind::Diagonal, LineKind::AntiDiagonal])
        .map(move |kind| Line::new(kind, size))
}

/// Returns the piece owning every cell of `line`, if any.
///
/// A line of blanks has no owner.
pub fn line_owner(grid: &Grid, line: &Line) -> Option<Piece> {
    let (first, rest) = line.coordinates().split_first()?;
    let piece = grid.get(*first);
    if piece.is_blank() {
        return None;
    }
    rest.iter()
        .all(|coord| grid.get(*coord) == piece)
        .then_some(piece)
}

/// Finds the first fully owned line in candidate order.
#[instrument(skip(grid), fields(size = grid.size()))]
pub fn find_winning_line(grid: &Grid) -> Option<(Line, Piece)> {
    candidate_lines(grid.size()).find_map(|line| {
        let owner = line_owner(grid, &line)?;
        trace!(line = %line, owner = %owner, "Line owned");
        Some((line, owner))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(pairs: &[(usize, usize)]) -> Vec<Coordinate> {
        pairs.iter().copied().map(Coordinate::from).collect()
    }

    #[test]
    fn test_candidate_count_scales_with_size() {
        for size in 1..=6 {
            let lines: Vec<_> = candidate_lines(size).collect();
            assert_eq!(lines.len(), 2 * size + 2);
            assert!(lines.iter().all(|line| line.len() == size));
        }
    }

    #[test]
    fn test_candidate_order() {
        let kinds: Vec<_> = candidate_lines(2).map(|line| line.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                LineKind::Row(0),
                LineKind::Row(1),
                LineKind::Column(0),
                LineKind::Column(1),
                LineKind::Diagonal,
                LineKind::AntiDiagonal,
            ]
        );
    }

    #[test]
    fn test_diagonal_coordinates() {
        assert_eq!(
            Line::new(LineKind::Diagonal, 4).coordinates(),
            coords(&[(0, 0), (1, 1), (2, 2), (3, 3)]).as_slice()
        );
        assert_eq!(
            Line::new(LineKind::AntiDiagonal, 4).coordinates(),
            coords(&[(0, 3), (1, 2), (2, 1), (3, 0)]).as_slice()
        );
    }

    #[test]
    fn test_line_owner_requires_every_cell() {
        let mut grid = Grid::new(3);
        let column = Line::new(LineKind::Column(1), 3);
        assert_eq!(line_owner(&grid, &column), None);

        grid.set(Coordinate::new(0, 1), Piece::O);
        grid.set(Coordinate::new(1, 1), Piece::O);
        assert_eq!(line_owner(&grid, &column), None);

        grid.set(Coordinate::new(2, 1), Piece::X);
        assert_eq!(line_owner(&grid, &column), None);

        grid.set(Coordinate::new(2, 1), Piece::O);
        assert_eq!(line_owner(&grid, &column), Some(Piece::O));
    }

    #[test]
    fn test_no_winner_empty_grid() {
        assert_eq!(find_winning_line(&Grid::new(5)), None);
    }

    #[test]
    fn test_single_cell_board_wins_on_first_move() {
        let mut grid = Grid::new(1);
        grid.set(Coordinate::new(0, 0), Piece::X);
        let (line, owner) = find_winning_line(&grid).expect("one-cell line is owned");
        assert_eq!(owner, Piece::X);
        assert_eq!(line.kind(), LineKind::Row(0));
    }

    #[test]
    fn test_rows_take_precedence_over_columns() {
        // Full board of X: every line is owned, the first row is reported.
        let mut grid = Grid::new(3);
        for coord in grid.all_coordinates() {
            grid.set(coord, Piece::X);
        }
        let (line, _) = find_winning_line(&grid).expect("winner");
        assert_eq!(line.kind(), LineKind::Row(0));
    }

    #[test]
    fn test_line_display() {
        let line = Line::new(LineKind::Row(1), 2);
        assert_eq!(line.to_string(), "row 1 [(1, 0), (1, 1)]");
    }
}
