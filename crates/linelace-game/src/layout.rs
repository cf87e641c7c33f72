//! Screen-space geometry of a board.
//!
//! Frontends that receive raw pointer or touch coordinates use
//! [`BoardLayout::cell_at`] to hit-test them against the grid, and
//! [`BoardLayout::segment_rect`] to place a line on screen.

use linelace_core::Position;

use crate::{Board, Segment};

/// An axis-aligned rectangle in screen units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Left edge.
    pub left: f32,
    /// Top edge.
    pub top: f32,
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

/// Maps between grid cells and screen coordinates.
///
/// # Examples
///
/// ```
/// use linelace_core::Position;
/// use linelace_game::{Board, BoardLayout};
///
/// let board = Board::load(["1 ", " 2"]).unwrap();
/// let layout = BoardLayout::for_board(&board, 50.0).with_offset(10.0, 20.0);
///
/// assert_eq!(layout.cell_at(15.0, 25.0), Some(Position::new(0, 0)));
/// assert_eq!(layout.cell_at(109.0, 119.0), Some(Position::new(1, 1)));
/// assert_eq!(layout.cell_at(111.0, 25.0), None);
/// assert_eq!(layout.cell_at(5.0, 25.0), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardLayout {
    cell_size: f32,
    left: f32,
    top: f32,
    height: u8,
    width: u8,
}

impl BoardLayout {
    /// Gap between a line's drawn rectangle and the cell borders.
    pub const LINE_INSET: f32 = 4.0;

    /// Creates a layout for a board drawn at the screen origin.
    ///
    /// # Panics
    ///
    /// Panics if `cell_size` is not a positive finite number.
    #[must_use]
    pub fn for_board(board: &Board, cell_size: f32) -> Self {
        assert!(
            cell_size.is_finite() && cell_size > 0.0,
            "invalid cell size {cell_size}"
        );
        let (height, width) = board.dimensions();
        Self {
            cell_size,
            left: 0.0,
            top: 0.0,
            height,
            width,
        }
    }

    /// Moves the board's top-left corner to `(left, top)`.
    #[must_use]
    pub fn with_offset(self, left: f32, top: f32) -> Self {
        Self { left, top, ..self }
    }

    /// Returns the edge length of one cell.
    #[must_use]
    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Returns the board's `(width, height)` on screen.
    #[must_use]
    pub fn display_size(&self) -> (f32, f32) {
        (
            f32::from(self.width) * self.cell_size,
            f32::from(self.height) * self.cell_size,
        )
    }

    /// Returns the cell under a screen point, or `None` off the board.
    #[must_use]
    pub fn cell_at(&self, x: f32, y: f32) -> Option<Position> {
        let row = Self::index_at(y - self.top, self.cell_size, self.height)?;
        let col = Self::index_at(x - self.left, self.cell_size, self.width)?;
        Some(Position::new(row, col))
    }

    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn index_at(offset: f32, cell_size: f32, count: u8) -> Option<u8> {
        if !offset.is_finite() || offset < 0.0 {
            return None;
        }
        let index = (offset / cell_size).floor();
        (index < f32::from(count)).then_some(index as u8)
    }

    /// Returns the screen rectangle of one cell.
    #[must_use]
    pub fn cell_rect(&self, pos: Position) -> Rect {
        Rect {
            left: self.left + f32::from(pos.col()) * self.cell_size,
            top: self.top + f32::from(pos.row()) * self.cell_size,
            width: self.cell_size,
            height: self.cell_size,
        }
    }

    /// Returns the rectangle a line segment is drawn in, inset from the
    /// cell borders by [`Self::LINE_INSET`].
    #[must_use]
    pub fn segment_rect(&self, segment: Segment) -> Rect {
        let (a, b) = segment.ends();
        let top_left = Position::new(a.row().min(b.row()), a.col().min(b.col()));
        let rows = f32::from(a.row().abs_diff(b.row())) + 1.0;
        let cols = f32::from(a.col().abs_diff(b.col())) + 1.0;
        let corner = self.cell_rect(top_left);
        Rect {
            left: corner.left + Self::LINE_INSET,
            top: corner.top + Self::LINE_INSET,
            width: cols * self.cell_size - 2.0 * Self::LINE_INSET,
            height: rows * self.cell_size - 2.0 * Self::LINE_INSET,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(rows: &[&str]) -> BoardLayout {
        BoardLayout::for_board(&Board::load(rows).expect("valid puzzle"), 50.0)
    }

    #[test]
    fn test_cell_at_edges() {
        let layout = layout(&["1  ", "   "]);
        assert_eq!(layout.display_size(), (150.0, 100.0));
        assert_eq!(layout.cell_at(0.0, 0.0), Some(Position::new(0, 0)));
        assert_eq!(layout.cell_at(49.9, 49.9), Some(Position::new(0, 0)));
        assert_eq!(layout.cell_at(50.0, 50.0), Some(Position::new(1, 1)));
        assert_eq!(layout.cell_at(149.9, 99.9), Some(Position::new(1, 2)));
        assert_eq!(layout.cell_at(150.0, 10.0), None);
        assert_eq!(layout.cell_at(10.0, 100.0), None);
        assert_eq!(layout.cell_at(-0.1, 10.0), None);
        assert_eq!(layout.cell_at(f32::NAN, 10.0), None);
    }

    #[test]
    fn test_cell_at_follows_transposed_board() {
        let mut board = Board::load(["1  "]).expect("valid puzzle");
        board.transpose();
        let layout = BoardLayout::for_board(&board, 50.0);
        assert_eq!(layout.display_size(), (50.0, 150.0));
        assert_eq!(layout.cell_at(10.0, 120.0), Some(Position::new(2, 0)));
        assert_eq!(layout.cell_at(60.0, 10.0), None);
    }

    #[test]
    fn test_segment_rect() {
        let layout = layout(&["1   ", "    "]).with_offset(100.0, 0.0);
        let rect = layout.segment_rect(Segment::new(Position::new(0, 3), Position::new(0, 1)));
        assert_eq!(
            rect,
            Rect {
                left: 154.0,
                top: 4.0,
                width: 142.0,
                height: 42.0,
            }
        );
    }

    #[test]
    #[should_panic(expected = "invalid cell size")]
    fn test_zero_cell_size_panics() {
        let _ = BoardLayout::for_board(&Board::load(["1"]).expect("valid puzzle"), 0.0);
    }
}
