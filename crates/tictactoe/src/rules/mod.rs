//! Rules for evaluating board state.
//!
//! Pure functions over a [`Grid`](crate::Grid), kept separate from the
//! board facade so they can be reused by search code.

pub mod lines;

pub use lines::{Line, LineKind, candidate_lines, find_winning_line, line_owner};
