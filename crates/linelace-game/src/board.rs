//! Live puzzle state.

use std::collections::HashSet;

use linelace_core::{CellValue, Position, Puzzle, PuzzleError};

use crate::{CheckReport, Drag, Line};

/// Index of a line within a [`Board`].
///
/// Lines are numbered in row-major order of their anchors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("#{_0}")]
pub struct LineId(usize);

impl LineId {
    /// Creates an id from a zero-based index.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Returns the zero-based index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// One live puzzle: its cells and one line per anchor.
///
/// The board answers coordinate queries and routes drag steps to a single
/// line while handing it every other line for overlap avoidance.
///
/// # Example
///
/// ```
/// use linelace_core::Position;
/// use linelace_game::{Board, Drag};
///
/// let mut board = Board::load(["3.."]).unwrap();
/// let id = board.find_line_at(Position::new(0, 0)).unwrap();
///
/// let drag = Drag::new(Position::new(0, 0), Position::new(0, 2), true);
/// assert!(board.commit_line(id, drag));
/// assert!(board.check().is_solved());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    puzzle: Puzzle,
    lines: Vec<Line>,
}

impl Board {
    /// Creates a board with every line collapsed onto its anchor.
    #[must_use]
    pub fn new(puzzle: Puzzle) -> Self {
        let lines = puzzle
            .anchors()
            .map(|(pos, digit)| Line::new(pos, digit))
            .collect();
        Self { puzzle, lines }
    }

    /// Parses row strings and builds a board from them.
    ///
    /// # Errors
    ///
    /// Returns a [`PuzzleError`] if the definition is malformed; nothing is
    /// loaded in that case.
    pub fn load<I>(rows: I) -> Result<Self, PuzzleError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Ok(Self::new(Puzzle::from_rows(rows)?))
    }

    /// Returns `(height, width)` in cells.
    #[must_use]
    pub fn dimensions(&self) -> (u8, u8) {
        (self.puzzle.height(), self.puzzle.width())
    }

    /// Returns `true` if `pos` lies on the board.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.puzzle.cells().contains(pos)
    }

    /// Returns the underlying puzzle definition.
    #[must_use]
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Returns the value of the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board.
    #[must_use]
    pub fn cell(&self, pos: Position) -> CellValue {
        self.puzzle[pos]
    }

    /// Returns all lines in [`LineId`] order.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Iterates over lines with their ids.
    pub fn iter_lines(&self) -> impl Iterator<Item = (LineId, &Line)> {
        self.lines.iter().enumerate().map(|(i, line)| (LineId(i), line))
    }

    /// Returns the line with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this board.
    #[must_use]
    pub fn line(&self, id: LineId) -> &Line {
        &self.lines[id.0]
    }

    /// Finds the line whose origin or committed endpoint is at `pos`.
    ///
    /// Committed lines never share cells, so at most one line matches.
    #[must_use]
    pub fn find_line_at(&self, pos: Position) -> Option<LineId> {
        self.iter_lines()
            .find(|(_, line)| line.touches(pos))
            .map(|(id, _)| id)
    }

    fn split_line(&mut self, id: LineId) -> (&mut Line, impl Iterator<Item = &Line>) {
        let (before, rest) = self.lines.split_at_mut(id.0);
        let (line, after) = rest
            .split_first_mut()
            .unwrap_or_else(|| panic!("line {id} out of range"));
        (line, before.iter().chain(after.iter()))
    }

    /// Previews a drag step on one line; see [`Line::preview`].
    pub fn preview_line(&mut self, id: LineId, drag: Drag) -> bool {
        let (line, others) = self.split_line(id);
        line.preview(drag, others)
    }

    /// Commits a drag on one line; see [`Line::commit`].
    pub fn commit_line(&mut self, id: LineId, drag: Drag) -> bool {
        let (line, others) = self.split_line(id);
        line.commit(drag, others)
    }

    /// Drops the preview of one line.
    pub fn discard_preview(&mut self, id: LineId) {
        self.lines[id.0].discard_preview();
    }

    /// Collapses every line back onto its anchor.
    pub fn reset(&mut self) {
        for line in &mut self.lines {
            line.reset();
        }
    }

    /// Swaps rows and columns of every cell and line.
    ///
    /// Lines keep their ids; puzzle semantics are unchanged.
    pub fn transpose(&mut self) {
        self.puzzle = self.puzzle.transpose();
        for line in &mut self.lines {
            line.transpose();
        }
    }

    /// Returns the set of cells covered by committed lines.
    #[must_use]
    pub fn covered_cells(&self) -> HashSet<Position> {
        self.lines.iter().flat_map(Line::covered_cells).collect()
    }

    /// Returns `true` if some committed line covers `pos`.
    #[must_use]
    pub fn is_covered(&self, pos: Position) -> bool {
        self.lines
            .iter()
            .any(|line| line.covered_cells().any(|cell| cell == pos))
    }

    /// Checks the committed state against the completion condition.
    ///
    /// The puzzle is solved when every line has exactly its target length
    /// and every `.` cell is covered by some line. Offending lines and cells
    /// are reported individually.
    #[must_use]
    pub fn check(&self) -> CheckReport {
        let covered = self.covered_cells();
        let wrong_lines = self
            .iter_lines()
            .filter(|(_, line)| !line.committed_status().is_matched())
            .map(|(id, _)| id)
            .collect();
        let uncovered = self
            .puzzle
            .required_cells()
            .filter(|pos| !covered.contains(pos))
            .collect();
        let report = CheckReport::new(wrong_lines, uncovered);
        log::debug!("check: {report}");
        report
    }
}
