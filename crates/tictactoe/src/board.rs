//! Board facade: storage, move application, terminal queries and hand-off.

use crate::error::BoardError;
use crate::grid::{Grid, cell_count};
use crate::rules::{Line, find_winning_line};
use crate::types::{Coordinate, Piece, Status};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// An N×N tic-tac-toe board seen from one player's perspective.
///
/// The board records which mark is the player and which the opponent, but
/// does not enforce turn order: either mark may be placed at any time.
/// Placing onto an occupied cell overwrites it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardParts")]
pub struct Board {
    grid: Grid,
    player_piece: Piece,
    opponent_piece: Piece,
}

#[derive(Deserialize)]
struct BoardParts {
    grid: Grid,
    player_piece: Piece,
    opponent_piece: Piece,
}

impl TryFrom<BoardParts> for Board {
    type Error = BoardError;

    fn try_from(parts: BoardParts) -> Result<Self, Self::Error> {
        check_roles(parts.player_piece, parts.opponent_piece)?;
        Ok(Self {
            grid: parts.grid,
            player_piece: parts.player_piece,
            opponent_piece: parts.opponent_piece,
        })
    }
}

fn check_roles(player_piece: Piece, opponent_piece: Piece) -> Result<(), BoardError> {
    if player_piece.is_blank() || opponent_piece.is_blank() {
        return Err(BoardError::BlankRole);
    }
    if player_piece.opponent() != opponent_piece {
        return Err(BoardError::SameRoles(player_piece));
    }
    Ok(())
}

impl Board {
    /// Creates an empty `size`×`size` board.
    ///
    /// # Errors
    ///
    /// Fails if `size` is zero, N² overflows `usize`, either role is
    /// blank, or both roles are the same piece.
    #[instrument]
    pub fn new(size: usize, player_piece: Piece, opponent_piece: Piece) -> Result<Self, BoardError> {
        cell_count(size)?;
        check_roles(player_piece, opponent_piece)?;
        Ok(Self {
            grid: Grid::new(size),
            player_piece,
            opponent_piece,
        })
    }

    /// Board dimension N.
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Total cell count, N².
    pub fn number_of_spaces(&self) -> usize {
        self.grid.number_of_spaces()
    }

    /// The piece this board's owner plays.
    pub fn player_piece(&self) -> Piece {
        self.player_piece
    }

    /// The piece the other side plays.
    pub fn opponent_piece(&self) -> Piece {
        self.opponent_piece
    }

    /// Returns the underlying grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Reads the piece at `coord`, or `None` when out of range.
    pub fn piece_at(&self, coord: Coordinate) -> Option<Piece> {
        self.grid.try_get(coord)
    }

    /// Places `piece` at `coord` and returns the board for chaining.
    ///
    /// Blank placements are ignored.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is outside the board. Use
    /// [`try_place_piece`](Self::try_place_piece) to get an error instead.
    #[instrument(skip(self), fields(size = self.size()))]
    pub fn place_piece(&mut self, piece: Piece, coord: Coordinate) -> &mut Self {
        if piece.is_blank() {
            return self;
        }
        debug!(%piece, %coord, "Placing piece");
        self.grid.set(coord, piece);
        self
    }

    /// Like [`place_piece`](Self::place_piece), but reports out-of-range
    /// coordinates as an error.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if `coord` is outside the board.
    #[instrument(skip(self), fields(size = self.size()))]
    pub fn try_place_piece(&mut self, piece: Piece, coord: Coordinate) -> Result<&mut Self, BoardError> {
        if !self.grid.contains(coord) {
            return Err(BoardError::OutOfBounds {
                coord,
                size: self.size(),
            });
        }
        Ok(self.place_piece(piece, coord))
    }

    /// Coordinates of all blank cells in row-major order.
    pub fn available_moves(&self) -> Vec<Coordinate> {
        self.grid
            .cells()
            .filter(|(_, piece)| piece.is_blank())
            .map(|(coord, _)| coord)
            .collect()
    }

    /// The four corners: top-left, top-right, bottom-left, bottom-right.
    ///
    /// On a 1×1 board all four entries are the same cell.
    pub fn corner_spaces(&self) -> [Coordinate; 4] {
        let last = self.size() - 1;
        [
            Coordinate::new(0, 0),
            Coordinate::new(0, last),
            Coordinate::new(last, 0),
            Coordinate::new(last, last),
        ]
    }

    /// True if no piece has been placed.
    pub fn is_blank(&self) -> bool {
        self.grid.cells().all(|(_, piece)| piece.is_blank())
    }

    /// True if exactly one cell remains blank.
    pub fn is_last_move(&self) -> bool {
        self.blank_count() == 1
    }

    /// The first fully owned line, if any.
    pub fn winning_line(&self) -> Option<Line> {
        find_winning_line(&self.grid).map(|(line, _)| line)
    }

    /// The owner of the winning line, if any.
    pub fn winner(&self) -> Option<Piece> {
        find_winning_line(&self.grid).map(|(_, owner)| owner)
    }

    /// True if some line is fully owned.
    pub fn winner_exists(&self) -> bool {
        self.winner().is_some()
    }

    /// True if `piece` owns the winning line.
    pub fn is_won(&self, piece: Piece) -> bool {
        self.winner() == Some(piece)
    }

    /// True if someone other than `piece` owns the winning line.
    pub fn is_lost(&self, piece: Piece) -> bool {
        self.winner().is_some_and(|winner| winner != piece)
    }

    /// True if the board is full and nobody won.
    pub fn is_draw(&self) -> bool {
        self.blank_count() == 0 && !self.winner_exists()
    }

    /// True once the board is won or drawn.
    pub fn is_over(&self) -> bool {
        self.is_draw() || self.winner_exists()
    }

    /// Summarizes the terminal state in one value.
    #[instrument(skip(self), fields(size = self.size()))]
    pub fn status(&self) -> Status {
        match self.winner() {
            Some(piece) => Status::Won(piece),
            None if self.blank_count() == 0 => Status::Draw,
            None => Status::InProgress,
        }
    }

    /// Returns an independent board with the player roles swapped.
    ///
    /// The new board owns its own copy of the grid: later placements on
    /// either board are never visible on the other.
    #[instrument(skip(self), fields(size = self.size(), player = %self.player_piece))]
    pub fn hand_off(&self) -> Self {
        debug!(next_player = %self.opponent_piece, "Handing off board");
        Self {
            grid: self.grid.deep_copy(),
            player_piece: self.opponent_piece,
            opponent_piece: self.player_piece,
        }
    }

    fn blank_count(&self) -> usize {
        self.grid.cells().filter(|(_, piece)| piece.is_blank()).count()
    }
}

impl Default for Board {
    /// Standard 3×3 board with X as the player.
    fn default() -> Self {
        Self {
            grid: Grid::new(3),
            player_piece: Piece::X,
            opponent_piece: Piece::O,
        }
    }
}
