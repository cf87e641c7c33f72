//! Dense 2D container addressed by [`Position`].

use std::ops::{Index, IndexMut};

use crate::Position;

/// A rectangular grid of values stored in row-major order.
///
/// Indexing with a [`Position`] outside the grid is a precondition violation
/// and panics; callers are expected to check [`Grid::contains`] first.
///
/// # Examples
///
/// ```
/// use linelace_core::{Grid, Position};
///
/// let mut grid = Grid::from_fn(2, 3, |pos| pos.row() * 10 + pos.col());
/// assert_eq!(grid[Position::new(1, 2)], 12);
///
/// grid[Position::new(0, 1)] = 99;
/// let transposed = grid.transpose();
/// assert_eq!(transposed.height(), 3);
/// assert_eq!(transposed[Position::new(1, 0)], 99);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    height: u8,
    width: u8,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Builds a grid by calling `f` for every position in row-major order.
    #[must_use]
    pub fn from_fn(height: u8, width: u8, mut f: impl FnMut(Position) -> T) -> Self {
        let cells = positions(height, width).map(&mut f).collect();
        Self {
            height,
            width,
            cells,
        }
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Returns `true` if `pos` lies inside the grid.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row() < self.height && pos.col() < self.width
    }

    /// Returns the value at `pos`, or `None` when out of range.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&T> {
        self.contains(pos).then(|| &self.cells[self.offset(pos)])
    }

    /// Iterates over all positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<T> {
        positions(self.height, self.width)
    }

    /// Iterates over `(position, value)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &T)> {
        self.positions().zip(&self.cells)
    }

    /// Returns a row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of range.
    #[must_use]
    pub fn row(&self, row: u8) -> &[T] {
        assert!(row < self.height, "row {row} out of range");
        let start = usize::from(row) * usize::from(self.width);
        &self.cells[start..start + usize::from(self.width)]
    }

    /// Returns a new grid with rows and columns swapped.
    #[must_use]
    pub fn transpose(&self) -> Self
    where
        T: Clone,
    {
        Self::from_fn(self.width, self.height, |pos| self[pos.transpose()].clone())
    }

    fn offset(&self, pos: Position) -> usize {
        assert!(
            self.contains(pos),
            "position {pos} out of range for {}x{} grid",
            self.height,
            self.width
        );
        usize::from(pos.row()) * usize::from(self.width) + usize::from(pos.col())
    }
}

fn positions(height: u8, width: u8) -> impl Iterator<Item = Position> {
    (0..height).flat_map(move |row| (0..width).map(move |col| Position::new(row, col)))
}

impl<T> Index<Position> for Grid<T> {
    type Output = T;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[self.offset(pos)]
    }
}

impl<T> IndexMut<Position> for Grid<T> {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        let offset = self.offset(pos);
        &mut self.cells[offset]
    }
}
