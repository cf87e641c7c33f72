//! Cell coordinates.

use std::fmt::{self, Display};

/// A cell address on the puzzle grid.
///
/// Positions are plain `Copy` values: every operation that "moves" a position
/// returns a new one instead of mutating shared state.
///
/// # Examples
///
/// ```
/// use linelace_core::Position;
///
/// let origin = Position::new(2, 2);
/// let handle = Position::new(2, 5);
///
/// assert!(handle.is_aligned_with(origin));
/// assert_eq!(handle.step_toward(origin), Position::new(2, 4));
/// assert_eq!(handle.transpose(), Position::new(5, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Creates a position from a row and column.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Returns the row (0-based, top to bottom).
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column (0-based, left to right).
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the position with row and column swapped.
    #[must_use]
    pub const fn transpose(self) -> Self {
        Self::new(self.col, self.row)
    }

    /// Returns `true` if `other` shares this position's row or column.
    #[must_use]
    pub const fn is_aligned_with(self, other: Self) -> bool {
        self.row == other.row || self.col == other.col
    }

    /// Returns the Chebyshev distance between two positions.
    #[must_use]
    pub fn distance(self, other: Self) -> u8 {
        u8::max(self.row.abs_diff(other.row), self.col.abs_diff(other.col))
    }

    /// Moves at most one step on each axis toward `target`.
    ///
    /// Returns `self` unchanged when it already equals `target`.
    #[must_use]
    pub fn step_toward(self, target: Self) -> Self {
        Self::new(
            step_axis(self.row, target.row),
            step_axis(self.col, target.col),
        )
    }
}

fn step_axis(from: u8, to: u8) -> u8 {
    match from.cmp(&to) {
        std::cmp::Ordering::Less => from + 1,
        std::cmp::Ordering::Equal => from,
        std::cmp::Ordering::Greater => from - 1,
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
