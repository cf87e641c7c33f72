//! Lines and drag resolution.
//!
//! A [`Line`] is rooted at an anchor cell and is edited only by dragging one
//! of its ends. Every drag step is resolved by [`Line::resolve`], a pure
//! function of the line's committed geometry, the drag, and the committed
//! geometry of every other line. [`Line::preview`] and [`Line::commit`] store
//! the result either as a temporary preview or as the new committed segment.

use linelace_core::{Digit, Position};

use crate::Segment;

/// How a line's length compares to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum LineStatus {
    /// Shorter than the target length.
    Short,
    /// Exactly the target length.
    Matched,
    /// Longer than the target length.
    TooLong,
}

impl LineStatus {
    fn of(length: usize, target: Digit) -> Self {
        match length.cmp(&usize::from(target)) {
            std::cmp::Ordering::Less => Self::Short,
            std::cmp::Ordering::Equal => Self::Matched,
            std::cmp::Ordering::Greater => Self::TooLong,
        }
    }
}

/// One step of a drag gesture, in grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drag {
    /// Cell the gesture grabbed.
    pub from: Position,
    /// Cell the pointer is currently over.
    pub to: Position,
    /// Whether the gesture has visited any cell other than `from`.
    pub left_origin: bool,
}

impl Drag {
    /// Creates a drag step.
    #[must_use]
    pub const fn new(from: Position, to: Position, left_origin: bool) -> Self {
        Self {
            from,
            to,
            left_origin,
        }
    }
}

/// A line anchored at a numbered cell.
///
/// # Examples
///
/// ```
/// use linelace_core::{Digit, Position};
/// use linelace_game::{Drag, Line, LineStatus};
///
/// let mut line = Line::new(Position::new(0, 0), Digit::D3);
/// assert_eq!(line.length(), 1);
///
/// let drag = Drag::new(Position::new(0, 0), Position::new(0, 2), true);
/// assert!(line.commit(drag, []));
/// assert_eq!(line.length(), 3);
/// assert_eq!(line.status(), LineStatus::Matched);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    origin: Position,
    target: Digit,
    committed: Segment,
    preview: Option<Segment>,
}

impl Line {
    /// Creates a zero-length line (a single cell) at its anchor.
    #[must_use]
    pub const fn new(origin: Position, target: Digit) -> Self {
        Self {
            origin,
            target,
            committed: Segment::point(origin),
            preview: None,
        }
    }

    /// Returns the anchor cell.
    #[must_use]
    pub fn origin(&self) -> Position {
        self.origin
    }

    /// Returns the target length.
    #[must_use]
    pub fn target(&self) -> Digit {
        self.target
    }

    /// Returns the committed segment.
    #[must_use]
    pub fn segment(&self) -> Segment {
        self.committed
    }

    /// Returns the committed endpoints.
    #[must_use]
    pub fn endpoints(&self) -> (Position, Position) {
        self.committed.ends()
    }

    /// Returns the segment a renderer should draw: the preview while one is
    /// active, the committed segment otherwise.
    #[must_use]
    pub fn displayed(&self) -> Segment {
        self.preview.unwrap_or(self.committed)
    }

    /// Returns `true` while an uncommitted preview is displayed.
    #[must_use]
    pub fn has_preview(&self) -> bool {
        self.preview.is_some()
    }

    /// Returns the committed length in cells.
    #[must_use]
    pub fn length(&self) -> usize {
        self.committed.length()
    }

    /// Returns the length of the displayed segment.
    #[must_use]
    pub fn displayed_length(&self) -> usize {
        self.displayed().length()
    }

    /// Returns the status of the displayed segment.
    #[must_use]
    pub fn status(&self) -> LineStatus {
        LineStatus::of(self.displayed_length(), self.target)
    }

    /// Returns the status of the committed segment.
    #[must_use]
    pub fn committed_status(&self) -> LineStatus {
        LineStatus::of(self.length(), self.target)
    }

    /// Returns `true` if `pos` is the origin or a committed endpoint.
    #[must_use]
    pub fn touches(&self, pos: Position) -> bool {
        let (a, b) = self.committed.ends();
        pos == self.origin || pos == a || pos == b
    }

    /// Iterates over the cells covered by the committed segment.
    ///
    /// The origin comes first, followed by the cells swept from each endpoint
    /// back toward the origin. Every cell is yielded exactly once.
    pub fn covered_cells(&self) -> impl Iterator<Item = Position> {
        let origin = self.origin;
        let (a, b) = self.committed.ends();
        let toward_origin = move |end: Position| {
            Segment::new(end, origin)
                .cells()
                .take_while(move |&pos| pos != origin)
        };
        // the origin splits the segment into two disjoint halves
        std::iter::once(origin)
            .chain(toward_origin(a))
            .chain(toward_origin(b))
    }

    fn is_anchor_click(&self, drag: Drag) -> bool {
        drag.from == self.origin && drag.to == self.origin && !drag.left_origin
    }

    fn same_side_of_origin(&self, p: Position, q: Position) -> bool {
        let o = self.origin;
        (p.row() < o.row() && q.row() < o.row())
            || (p.row() > o.row() && q.row() > o.row())
            || (p.col() < o.col() && q.col() < o.col())
            || (p.col() > o.col() && q.col() > o.col())
    }

    /// Resolves the segment a drag from `from` to `to` would produce.
    ///
    /// Returns `None` when the drag does not apply: the target is not on the
    /// origin's row or column, or `from` is neither an endpoint nor the
    /// origin. Otherwise the grabbed end moves to `to` while the other end
    /// stays put, except that a target off the fixed end's axis restarts the
    /// line from the origin, and a target on the fixed end's side of the
    /// origin pulls the grabbed end back onto the origin.
    ///
    /// Both resulting ends are then pulled toward the origin until the
    /// half-segment between each end and the origin clears every line in
    /// `others`.
    pub fn resolve<'a, I>(&self, from: Position, to: Position, others: I) -> Option<Segment>
    where
        I: IntoIterator<Item = &'a Line>,
    {
        if !to.is_aligned_with(self.origin) {
            log::trace!("line at {}: diagonal target {to} rejected", self.origin);
            return None;
        }

        let (a, b) = self.committed.ends();
        let fixed = if from == a {
            Some(b)
        } else if from == b {
            Some(a)
        } else {
            None
        };

        let (mut head, mut tail) = match fixed {
            Some(fixed) if !to.is_aligned_with(fixed) => (to, self.origin),
            Some(fixed) if self.same_side_of_origin(to, fixed) => (self.origin, fixed),
            Some(fixed) => (to, fixed),
            None if from == self.origin => (to, self.origin),
            None => {
                log::trace!("line at {}: {from} is not a handle", self.origin);
                return None;
            }
        };

        for other in others {
            head = self.clear_of(head, other)?;
            tail = self.clear_of(tail, other)?;
        }

        Some(Segment::new(head, tail))
    }

    /// Pulls `end` toward the origin until `[end, origin]` no longer
    /// intersects `other`.
    ///
    /// The walk stops at the origin. An origin that still intersects means
    /// another line covers this line's anchor, which committed states never
    /// allow; the drag is rejected.
    fn clear_of(&self, mut end: Position, other: &Line) -> Option<Position> {
        while Segment::new(end, self.origin).intersects(other.committed) {
            if end == self.origin {
                log::error!(
                    "line at {} overlaps the anchor of line at {}",
                    other.origin,
                    self.origin
                );
                return None;
            }
            end = end.step_toward(self.origin);
        }
        Some(end)
    }

    /// Updates the displayed geometry for an in-progress drag.
    ///
    /// Returns `false` and drops any preview (the line snaps back to its
    /// committed geometry) when the drag does not resolve. Pressing the
    /// anchor without moving keeps the committed geometry displayed.
    pub fn preview<'a, I>(&mut self, drag: Drag, others: I) -> bool
    where
        I: IntoIterator<Item = &'a Line>,
    {
        if self.is_anchor_click(drag) {
            self.preview = None;
            return true;
        }
        self.preview = self.resolve(drag.from, drag.to, others);
        self.preview.is_some()
    }

    /// Commits the result of a drag.
    ///
    /// A drag that starts and ends on the anchor without ever leaving it
    /// collapses the line back to a single cell. Any preview is dropped.
    /// Returns `false` and leaves the committed geometry untouched when the
    /// drag does not resolve.
    pub fn commit<'a, I>(&mut self, drag: Drag, others: I) -> bool
    where
        I: IntoIterator<Item = &'a Line>,
    {
        self.preview = None;
        if self.is_anchor_click(drag) {
            self.committed = Segment::point(self.origin);
            return true;
        }
        match self.resolve(drag.from, drag.to, others) {
            Some(segment) => {
                self.committed = segment;
                true
            }
            None => false,
        }
    }

    /// Drops any preview, returning to the committed geometry.
    pub fn discard_preview(&mut self) {
        self.preview = None;
    }

    /// Collapses the line back to its anchor.
    pub fn reset(&mut self) {
        self.committed = Segment::point(self.origin);
        self.preview = None;
    }

    /// Swaps rows and columns of the origin and all geometry.
    pub fn transpose(&mut self) {
        self.origin = self.origin.transpose();
        self.committed = self.committed.transpose();
        self.preview = self.preview.map(Segment::transpose);
    }

    #[cfg(test)]
    pub(crate) fn with_segment(origin: Position, target: Digit, segment: Segment) -> Self {
        Self {
            origin,
            target,
            committed: segment,
            preview: None,
        }
    }
}
