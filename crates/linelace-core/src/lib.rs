//! Core data structures for linelace puzzles.
//!
//! This crate provides the value types shared by the engine and its frontends.
//! A linelace puzzle is a rectangular grid of cells; a numbered cell anchors a
//! straight line that must be stretched to exactly that many cells, and every
//! `.` cell must end up covered by some line.
//!
//! # Overview
//!
//! 1. **Coordinates** - [`position`]: immutable `(row, col)` cell addresses
//! 2. **Cell contents** - [`digit`] and [`cell`]: target lengths 1-9 and the
//!    three kinds of cell a puzzle definition can contain
//! 3. **Containers** - [`grid`]: a dense row-major 2D container indexed by
//!    [`Position`]
//! 4. **Definitions** - [`puzzle`]: parsing the row-string puzzle format,
//!    failing with [`PuzzleError`] on malformed input
//!
//! # Examples
//!
//! ```
//! use linelace_core::{CellValue, Digit, Position, Puzzle};
//!
//! let puzzle = Puzzle::from_rows(["3..", "   "]).unwrap();
//! assert_eq!(puzzle.height(), 2);
//! assert_eq!(puzzle.width(), 3);
//! assert_eq!(puzzle[Position::new(0, 0)], CellValue::Anchor(Digit::D3));
//! assert_eq!(puzzle.required_cells().count(), 2);
//! ```

pub mod cell;
pub mod digit;
pub mod grid;
pub mod position;
pub mod puzzle;

pub use self::{
    cell::CellValue,
    digit::Digit,
    grid::Grid,
    position::Position,
    puzzle::{Puzzle, PuzzleError},
};
