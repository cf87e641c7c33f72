//! Puzzle definitions and their text format.
//!
//! A puzzle is an ordered sequence of equal-length row strings. Each
//! character is a digit `1`-`9` (an anchor with that target length), `.` (a
//! cell that must be covered) or a space (an unconstrained cell).
//!
//! Parsing is all-or-nothing: a malformed definition yields a
//! [`PuzzleError`] and never a partially loaded puzzle.

use std::{
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use crate::{CellValue, Digit, Grid, Position};

/// Errors produced when a puzzle definition is malformed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PuzzleError {
    /// The definition has no rows, or its rows are empty.
    #[display("puzzle definition is empty")]
    Empty,
    /// A row's length differs from the first row's.
    #[display("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// A character outside the definition alphabet.
    #[display("unknown character {ch:?} at row {row}, column {col}")]
    UnknownCharacter {
        /// Row of the character.
        row: usize,
        /// Column of the character.
        col: usize,
        /// The offending character.
        ch: char,
    },
    /// The grid exceeds 255 rows or columns.
    #[display("puzzle of {height}x{width} cells exceeds the 255x255 limit")]
    TooLarge {
        /// Number of rows.
        height: usize,
        /// Number of columns.
        width: usize,
    },
}

/// A parsed puzzle definition.
///
/// # Examples
///
/// ```
/// use linelace_core::{Puzzle, PuzzleError};
///
/// let puzzle: Puzzle = "1 2\n. .\n".parse().unwrap();
/// assert_eq!(puzzle.anchors().count(), 2);
/// assert_eq!(puzzle.to_string(), "1 2\n. .\n");
///
/// let ragged = Puzzle::from_rows(["12", "3"]);
/// assert!(matches!(ragged, Err(PuzzleError::RaggedRow { row: 1, .. })));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Puzzle {
    cells: Grid<CellValue>,
}

impl Puzzle {
    /// Parses a puzzle from its row strings.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::Empty`] if there are no rows or the rows are
    /// empty, [`PuzzleError::RaggedRow`] if row lengths differ,
    /// [`PuzzleError::UnknownCharacter`] for characters other than `1`-`9`,
    /// `.` and space, and [`PuzzleError::TooLarge`] past 255 rows or columns.
    pub fn from_rows<I>(rows: I) -> Result<Self, PuzzleError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut parsed: Vec<Vec<CellValue>> = Vec::new();
        for (row, text) in rows.into_iter().enumerate() {
            let values = text
                .as_ref()
                .chars()
                .enumerate()
                .map(|(col, ch)| {
                    CellValue::from_char(ch).ok_or(PuzzleError::UnknownCharacter { row, col, ch })
                })
                .collect::<Result<Vec<_>, _>>()?;
            if let Some(first) = parsed.first()
                && first.len() != values.len()
            {
                return Err(PuzzleError::RaggedRow {
                    row,
                    expected: first.len(),
                    found: values.len(),
                });
            }
            parsed.push(values);
        }

        let height = parsed.len();
        let width = parsed.first().map_or(0, Vec::len);
        if height == 0 || width == 0 {
            return Err(PuzzleError::Empty);
        }
        let (Ok(h), Ok(w)) = (u8::try_from(height), u8::try_from(width)) else {
            return Err(PuzzleError::TooLarge { height, width });
        };

        let cells = Grid::from_fn(h, w, |pos| {
            parsed[usize::from(pos.row())][usize::from(pos.col())]
        });
        Ok(Self { cells })
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn height(&self) -> u8 {
        self.cells.height()
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn width(&self) -> u8 {
        self.cells.width()
    }

    /// Returns the underlying cell grid.
    #[must_use]
    pub fn cells(&self) -> &Grid<CellValue> {
        &self.cells
    }

    /// Iterates over anchor cells and their target lengths in row-major order.
    pub fn anchors(&self) -> impl Iterator<Item = (Position, Digit)> + '_ {
        self.cells
            .iter()
            .filter_map(|(pos, value)| value.as_digit().map(|digit| (pos, digit)))
    }

    /// Iterates over cells that must be covered by some line.
    pub fn required_cells(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .filter_map(|(pos, value)| value.is_required().then_some(pos))
    }

    /// Returns the puzzle with rows and columns swapped.
    #[must_use]
    pub fn transpose(&self) -> Self {
        Self {
            cells: self.cells.transpose(),
        }
    }
}

impl Index<Position> for Puzzle {
    type Output = CellValue;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos]
    }
}

impl FromStr for Puzzle {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_rows(s.lines())
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height() {
            for value in self.cells.row(row) {
                write!(f, "{}", value.to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
