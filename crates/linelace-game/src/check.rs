//! Completion check results.

use std::fmt::{self, Display};

use linelace_core::Position;

use crate::LineId;

/// Outcome of [`Board::check`](crate::Board::check).
///
/// Lists every element that keeps the puzzle from being solved, so a UI can
/// highlight exactly those.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    wrong_lines: Vec<LineId>,
    uncovered: Vec<Position>,
}

impl CheckReport {
    pub(crate) fn new(wrong_lines: Vec<LineId>, uncovered: Vec<Position>) -> Self {
        Self {
            wrong_lines,
            uncovered,
        }
    }

    /// Returns `true` if nothing is in error.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.wrong_lines.is_empty() && self.uncovered.is_empty()
    }

    /// Lines whose committed length differs from their target.
    #[must_use]
    pub fn wrong_lines(&self) -> &[LineId] {
        &self.wrong_lines
    }

    /// Required cells not covered by any line, in row-major order.
    #[must_use]
    pub fn uncovered(&self) -> &[Position] {
        &self.uncovered
    }

    /// Returns `true` if the line is listed as wrong.
    #[must_use]
    pub fn is_line_wrong(&self, id: LineId) -> bool {
        self.wrong_lines.contains(&id)
    }

    /// Returns `true` if the cell is listed as uncovered.
    #[must_use]
    pub fn is_uncovered(&self, pos: Position) -> bool {
        self.uncovered.contains(&pos)
    }
}

impl Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_solved() {
            return write!(f, "solved");
        }
        write!(
            f,
            "{} wrong line(s), {} uncovered cell(s)",
            self.wrong_lines.len(),
            self.uncovered.len()
        )
    }
}
