//! Render-ready projection of a board.
//!
//! A [`BoardView`] is rebuilt after every mutation and never feeds back into
//! the engine. It carries everything a renderer needs: per cell its value and
//! visual flags, per line its displayed endpoints and status.

use std::fmt::Write as _;

use linelace_core::{CellValue, Digit, Grid, Position};

use crate::{Board, CheckReport, DragController, LineId, LineStatus};

bitflags::bitflags! {
    /// Visual state of one cell.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CellFlags: u8 {
        /// The cell anchors a line.
        const ANCHOR = 0b0000_0001;
        /// The cell must be covered.
        const REQUIRED = 0b0000_0010;
        /// A displayed line covers the cell.
        const COVERED = 0b0000_0100;
        /// The last check reported this cell as uncovered.
        const ERROR = 0b0000_1000;
    }
}

bitflags::bitflags! {
    /// Visual state of one line.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LineFlags: u8 {
        /// The displayed length equals the target.
        const MATCHED = 0b0000_0001;
        /// The displayed length exceeds the target.
        const TOO_LONG = 0b0000_0010;
        /// The line shows an uncommitted preview.
        const PREVIEW = 0b0000_0100;
        /// The line is being dragged.
        const ACTIVE = 0b0000_1000;
        /// The last check reported this line as wrong.
        const ERROR = 0b0001_0000;
    }
}

/// Render state of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellView {
    /// The cell's fixed content.
    pub value: CellValue,
    /// The cell's visual flags.
    pub flags: CellFlags,
    /// The line drawn over the cell, if any.
    pub line: Option<LineId>,
}

/// Render state of one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineView {
    /// The line's id.
    pub id: LineId,
    /// The anchor cell.
    pub origin: Position,
    /// Displayed endpoints.
    pub ends: (Position, Position),
    /// Displayed length.
    pub length: usize,
    /// Target length.
    pub target: Digit,
    /// Displayed status.
    pub status: LineStatus,
    /// Visual flags.
    pub flags: LineFlags,
}

/// Render-ready snapshot of a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    cells: Grid<CellView>,
    lines: Vec<LineView>,
}

impl BoardView {
    /// Builds a view of a controller's board, marking its active line.
    #[must_use]
    pub fn of_controller(controller: &DragController, report: Option<&CheckReport>) -> Self {
        Self::build(controller.board(), controller.active_line(), report)
    }

    /// Builds a view of `board`.
    ///
    /// `report` is the most recent check, if its errors should be shown.
    #[must_use]
    pub fn build(board: &Board, active: Option<LineId>, report: Option<&CheckReport>) -> Self {
        let values = board.puzzle().cells();
        let mut cells = Grid::from_fn(values.height(), values.width(), |pos| {
            let value = values[pos];
            let mut flags = CellFlags::empty();
            match value {
                CellValue::Anchor(_) => flags |= CellFlags::ANCHOR,
                CellValue::Required => flags |= CellFlags::REQUIRED,
                CellValue::Blank => {}
            }
            if report.is_some_and(|report| report.is_uncovered(pos)) {
                flags |= CellFlags::ERROR;
            }
            CellView {
                value,
                flags,
                line: None,
            }
        });

        let lines = board
            .iter_lines()
            .map(|(id, line)| {
                let displayed = line.displayed();
                for pos in displayed.cells() {
                    cells[pos].flags |= CellFlags::COVERED;
                    cells[pos].line = Some(id);
                }

                let status = line.status();
                let mut flags = LineFlags::empty();
                match status {
                    LineStatus::Short => {}
                    LineStatus::Matched => flags |= LineFlags::MATCHED,
                    LineStatus::TooLong => flags |= LineFlags::TOO_LONG,
                }
                if line.has_preview() {
                    flags |= LineFlags::PREVIEW;
                }
                if active == Some(id) {
                    flags |= LineFlags::ACTIVE;
                }
                if report.is_some_and(|report| report.is_line_wrong(id)) {
                    flags |= LineFlags::ERROR;
                }
                LineView {
                    id,
                    origin: line.origin(),
                    ends: displayed.ends(),
                    length: displayed.length(),
                    target: line.target(),
                    status,
                    flags,
                }
            })
            .collect();

        Self { cells, lines }
    }

    /// Returns `(height, width)` in cells.
    #[must_use]
    pub fn dimensions(&self) -> (u8, u8) {
        (self.cells.height(), self.cells.width())
    }

    /// Returns the view of one cell.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board.
    #[must_use]
    pub fn cell(&self, pos: Position) -> &CellView {
        &self.cells[pos]
    }

    /// Returns the line views in [`LineId`] order.
    #[must_use]
    pub fn lines(&self) -> &[LineView] {
        &self.lines
    }

    fn cell_char(&self, pos: Position) -> char {
        let cell = &self.cells[pos];
        if let CellValue::Anchor(digit) = cell.value {
            return digit.to_char();
        }
        if cell.flags.contains(CellFlags::ERROR) {
            return '!';
        }
        match cell.line.map(|id| self.lines[id.index()].ends) {
            Some((a, b)) if a.row() == b.row() => '-',
            Some(_) => '|',
            None => cell.value.to_char(),
        }
    }

    /// Draws the board as text, followed by one status row per line.
    ///
    /// Anchors show their digit, covered cells show `-` or `|` along the
    /// covering line, uncovered `.` cells reported by a check show `!`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linelace_game::{Board, BoardView};
    ///
    /// let board = Board::load(["2 ."]).unwrap();
    /// let report = board.check();
    /// let text = BoardView::build(&board, None, Some(&report)).render_text();
    /// assert_eq!(text, "+---+\n|2 !|\n+---+\n#0 (0, 0) 1/2 short !\n");
    /// ```
    #[must_use]
    pub fn render_text(&self) -> String {
        let (height, width) = self.dimensions();
        let border = format!("+{}+\n", "-".repeat(usize::from(width)));
        let mut out = border.clone();
        for row in 0..height {
            out.push('|');
            for col in 0..width {
                out.push(self.cell_char(Position::new(row, col)));
            }
            out.push_str("|\n");
        }
        out.push_str(&border);

        for line in &self.lines {
            let status = match line.status {
                LineStatus::Short => "short",
                LineStatus::Matched => "ok",
                LineStatus::TooLong => "too long",
            };
            let _ = write!(
                out,
                "{} {} {}/{} {status}",
                line.id, line.origin, line.length, line.target
            );
            if line.flags.contains(LineFlags::ACTIVE) {
                out.push_str(" *");
            }
            if line.flags.contains(LineFlags::ERROR) {
                out.push_str(" !");
            }
            out.push('\n');
        }
        out
    }
}
