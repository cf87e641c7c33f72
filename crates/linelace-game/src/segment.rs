//! Axis-aligned segment geometry.

use linelace_core::Position;

/// A straight run of cells between two endpoints, inclusive.
///
/// The engine only ever builds segments whose endpoints share a row or a
/// column; the bounding-box helpers below do not depend on that, but
/// [`Segment::cells`] does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    a: Position,
    b: Position,
}

impl Segment {
    /// Creates a segment between two endpoints.
    #[must_use]
    pub const fn new(a: Position, b: Position) -> Self {
        Self { a, b }
    }

    /// Creates a single-cell segment.
    #[must_use]
    pub const fn point(pos: Position) -> Self {
        Self::new(pos, pos)
    }

    /// Returns both endpoints in construction order.
    #[must_use]
    pub const fn ends(self) -> (Position, Position) {
        (self.a, self.b)
    }

    /// Returns `true` if both endpoints are the same cell.
    #[must_use]
    pub fn is_point(self) -> bool {
        self.a == self.b
    }

    /// Returns the number of cells spanned: `max(|Δrow|, |Δcol|) + 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linelace_core::Position;
    /// use linelace_game::Segment;
    ///
    /// let seg = Segment::new(Position::new(2, 1), Position::new(2, 4));
    /// assert_eq!(seg.length(), 4);
    /// assert_eq!(Segment::point(Position::new(0, 0)).length(), 1);
    /// ```
    #[must_use]
    pub fn length(self) -> usize {
        usize::from(self.a.distance(self.b)) + 1
    }

    /// Returns `true` if the endpoints share a row or a column.
    #[must_use]
    pub fn is_axis_aligned(self) -> bool {
        self.a.is_aligned_with(self.b)
    }

    fn row_range(self) -> (u8, u8) {
        (
            u8::min(self.a.row(), self.b.row()),
            u8::max(self.a.row(), self.b.row()),
        )
    }

    fn col_range(self) -> (u8, u8) {
        (
            u8::min(self.a.col(), self.b.col()),
            u8::max(self.a.col(), self.b.col()),
        )
    }

    /// Returns `true` if `pos` lies inside the segment's bounding box.
    #[must_use]
    pub fn contains(self, pos: Position) -> bool {
        let (min_r, max_r) = self.row_range();
        let (min_c, max_c) = self.col_range();
        (min_r..=max_r).contains(&pos.row()) && (min_c..=max_c).contains(&pos.col())
    }

    /// Returns `true` if the bounding boxes of both segments share a cell.
    ///
    /// Row ranges and column ranges must both overlap.
    ///
    /// # Examples
    ///
    /// ```
    /// use linelace_core::Position;
    /// use linelace_game::Segment;
    ///
    /// let horizontal = Segment::new(Position::new(1, 0), Position::new(1, 4));
    /// let vertical = Segment::new(Position::new(0, 2), Position::new(3, 2));
    /// let apart = Segment::new(Position::new(0, 5), Position::new(3, 5));
    ///
    /// assert!(horizontal.intersects(vertical));
    /// assert!(!horizontal.intersects(apart));
    /// ```
    #[must_use]
    pub fn intersects(self, other: Self) -> bool {
        ranges_overlap(self.row_range(), other.row_range())
            && ranges_overlap(self.col_range(), other.col_range())
    }

    /// Iterates over every cell from `a` to `b`, inclusive.
    ///
    /// # Panics
    ///
    /// Panics if the segment is not axis-aligned.
    pub fn cells(self) -> impl Iterator<Item = Position> {
        assert!(self.is_axis_aligned(), "diagonal segment {self:?}");
        let (a, b) = (self.a, self.b);
        let mut next = Some(a);
        std::iter::from_fn(move || {
            let current = next?;
            next = (current != b).then(|| current.step_toward(b));
            Some(current)
        })
    }

    /// Returns the segment with row and column swapped on both endpoints.
    #[must_use]
    pub fn transpose(self) -> Self {
        Self::new(self.a.transpose(), self.b.transpose())
    }
}

fn ranges_overlap((a_min, a_max): (u8, u8), (b_min, b_max): (u8, u8)) -> bool {
    a_min <= b_max && b_min <= a_max
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(r1: u8, c1: u8, r2: u8, c2: u8) -> Segment {
        Segment::new(Position::new(r1, c1), Position::new(r2, c2))
    }

    #[test]
    fn test_length() {
        assert_eq!(seg(0, 0, 0, 0).length(), 1);
        assert_eq!(seg(0, 5, 0, 2).length(), 4);
        assert_eq!(seg(7, 3, 1, 3).length(), 7);
    }

    #[test]
    fn test_intersects_is_bounding_box_based() {
        // touching at a single shared cell
        assert!(seg(0, 0, 0, 3).intersects(seg(0, 3, 4, 3)));
        // adjacent but disjoint
        assert!(!seg(0, 0, 0, 3).intersects(seg(1, 0, 1, 3)));
        assert!(!seg(0, 0, 0, 2).intersects(seg(0, 3, 0, 5)));
        // crossing
        assert!(seg(2, 0, 2, 6).intersects(seg(0, 4, 5, 4)));
        // symmetric
        assert!(seg(0, 4, 5, 4).intersects(seg(2, 0, 2, 6)));
        // containment
        assert!(seg(0, 0, 0, 9).intersects(seg(0, 4, 0, 4)));
    }

    #[test]
    fn test_contains() {
        let s = seg(3, 1, 3, 4);
        assert!(s.contains(Position::new(3, 1)));
        assert!(s.contains(Position::new(3, 3)));
        assert!(!s.contains(Position::new(3, 5)));
        assert!(!s.contains(Position::new(2, 2)));
    }

    #[test]
    fn test_cells() {
        let cells: Vec<_> = seg(1, 4, 1, 2).cells().collect();
        assert_eq!(
            cells,
            [Position::new(1, 4), Position::new(1, 3), Position::new(1, 2)]
        );
        let point: Vec<_> = seg(2, 2, 2, 2).cells().collect();
        assert_eq!(point, [Position::new(2, 2)]);
    }

    #[test]
    #[should_panic(expected = "diagonal segment")]
    fn test_cells_rejects_diagonal() {
        let _ = seg(0, 0, 1, 1).cells();
    }

    #[test]
    fn test_transpose() {
        assert_eq!(seg(1, 2, 1, 5).transpose(), seg(2, 1, 5, 1));
    }
}
