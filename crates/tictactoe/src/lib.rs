//! Generalized N×N tic-tac-toe board.
//!
//! # Architecture
//!
//! - **Grid**: N×N cell storage with row-major coordinate enumeration
//! - **Rules**: candidate-line enumeration and N-in-a-row detection
//! - **Board**: move application, terminal queries, and turn hand-off
//!
//! # Example
//!
//! ```
//! use tictactoe::{Board, Coordinate, Piece};
//!
//! let mut board = Board::new(3, Piece::X, Piece::O)?;
//! board
//!     .place_piece(Piece::X, Coordinate::new(0, 0))
//!     .place_piece(Piece::X, Coordinate::new(1, 1))
//!     .place_piece(Piece::X, Coordinate::new(2, 2));
//! assert!(board.is_won(Piece::X));
//!
//! let next = board.hand_off();
//! assert_eq!(next.player_piece(), Piece::O);
//! # Ok::<(), tictactoe::BoardError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod config;
mod error;
mod grid;
mod notation;
mod types;

pub mod rules;

pub use board::Board;
pub use config::{BoardConfig, ConfigError};
pub use error::{BoardError, NotationError};
pub use grid::{Grid, row_major};
pub use rules::{Line, LineKind};
pub use types::{Coordinate, Piece, Status};
