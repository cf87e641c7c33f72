//! Pointer-driven drag state machine.
//!
//! [`DragController`] owns the live [`Board`] and at most one
//! [`DragSession`]. Frontends resolve pointer positions to grid cells and
//! call the `press`/`move_to`/`release`/`cancel` transitions (or their touch
//! counterparts); after each call they re-render from the board.
//!
//! ```text
//! IDLE --press--> DRAGGING --release--> IDLE   (commit)
//!                 DRAGGING --cancel---> IDLE   (preview discarded)
//! ```

use linelace_core::Position;

use crate::{Board, Drag, LineId};

/// Axis a touch drag is locked to after its first move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Axis {
    /// The drag stays on the row it started in.
    Row,
    /// The drag stays in the column it started in.
    Column,
}

impl Axis {
    fn project(self, anchor: Position, pos: Position) -> Position {
        match self {
            Self::Row => Position::new(anchor.row(), pos.col()),
            Self::Column => Position::new(pos.row(), anchor.col()),
        }
    }
}

/// State of the gesture in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    line: LineId,
    from: Position,
    left_origin: bool,
    axis: Option<Axis>,
}

impl DragSession {
    fn new(line: LineId, from: Position) -> Self {
        Self {
            line,
            from,
            left_origin: false,
            axis: None,
        }
    }

    /// The line being dragged.
    #[must_use]
    pub fn line(&self) -> LineId {
        self.line
    }

    /// The cell the drag is measured from.
    #[must_use]
    pub fn from(&self) -> Position {
        self.from
    }

    /// Whether the gesture has visited a cell other than its start.
    #[must_use]
    pub fn left_origin(&self) -> bool {
        self.left_origin
    }

    /// The locked axis of a touch drag, once known.
    #[must_use]
    pub fn axis(&self) -> Option<Axis> {
        self.axis
    }

    fn drag_to(&mut self, to: Position) -> Drag {
        if to != self.from {
            self.left_origin = true;
        }
        Drag::new(self.from, to, self.left_origin)
    }
}

/// Drives line edits from pointer and touch events.
///
/// # Example
///
/// ```
/// use linelace_core::Position;
/// use linelace_game::{Board, DragController};
///
/// let board = Board::load(["3.."]).unwrap();
/// let mut controller = DragController::new(board);
///
/// assert!(controller.press(Position::new(0, 0)));
/// controller.move_to(Position::new(0, 1));
/// controller.move_to(Position::new(0, 2));
/// assert!(controller.release(Position::new(0, 2)));
///
/// assert!(!controller.is_dragging());
/// assert!(controller.board().check().is_solved());
/// ```
#[derive(Debug, Clone)]
pub struct DragController {
    board: Board,
    session: Option<DragSession>,
}

impl DragController {
    /// Creates an idle controller for a freshly loaded board.
    #[must_use]
    pub fn new(board: Board) -> Self {
        Self {
            board,
            session: None,
        }
    }

    /// Returns the live board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Consumes the controller, returning its board.
    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Returns the active session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Returns the line being dragged.
    #[must_use]
    pub fn active_line(&self) -> Option<LineId> {
        self.session.map(|session| session.line)
    }

    fn assert_on_board(&self, pos: Position) {
        let (height, width) = self.board.dimensions();
        assert!(
            self.board.contains(pos),
            "position {pos} outside {height}x{width} board"
        );
    }

    /// Starts a drag if a line is anchored at or ends on `pos`.
    ///
    /// Any drag still in progress is cancelled first. Returns `true` if a
    /// line was grabbed.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board.
    pub fn press(&mut self, pos: Position) -> bool {
        self.assert_on_board(pos);
        self.cancel();
        let Some(line) = self.board.find_line_at(pos) else {
            return false;
        };
        log::debug!("drag start: line {line} at {pos}");
        self.session = Some(DragSession::new(line, pos));
        true
    }

    /// Previews the active drag with the pointer over `pos`.
    ///
    /// Never commits; repeated calls with the same position have no further
    /// effect. Returns `false` when idle or when the target does not resolve,
    /// in which case the line shows its committed geometry.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board.
    pub fn move_to(&mut self, pos: Position) -> bool {
        self.assert_on_board(pos);
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let drag = session.drag_to(pos);
        self.board.preview_line(session.line, drag)
    }

    /// Ends the active drag at `pos`, committing it if it resolves.
    ///
    /// Returns `true` if new geometry was committed. The session ends either
    /// way and the line shows its committed geometry.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board.
    pub fn release(&mut self, pos: Position) -> bool {
        self.assert_on_board(pos);
        let Some(mut session) = self.session.take() else {
            return false;
        };
        let drag = session.drag_to(pos);
        let committed = self.board.commit_line(session.line, drag);
        log::debug!(
            "drag end: line {} at {pos}, committed={committed}",
            session.line
        );
        committed
    }

    /// Abandons the active drag, restoring the committed geometry.
    pub fn cancel(&mut self) {
        if let Some(session) = self.session.take() {
            log::debug!("drag cancelled: line {}", session.line);
            self.board.discard_preview(session.line);
        }
    }

    /// Starts a touch drag; see [`DragController::press`].
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board.
    pub fn touch_start(&mut self, pos: Position) -> bool {
        self.press(pos)
    }

    /// Extends a touch drag toward `pos`, committing incrementally.
    ///
    /// Touch input has no hover phase, so each step is committed as soon as
    /// it resolves. The first step away from the start cell locks the drag
    /// to that row or column; later positions are projected onto it. After a
    /// commit the drag continues from wherever the dragged end actually
    /// landed.
    ///
    /// Returns `true` if the step committed new geometry.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board.
    pub fn touch_move(&mut self, pos: Position) -> bool {
        self.assert_on_board(pos);
        let Some(session) = self.session.as_mut() else {
            return false;
        };

        let axis = match session.axis {
            Some(axis) => axis,
            None if pos == session.from => return false,
            None => {
                let axis = if pos.row() == session.from.row() {
                    Axis::Row
                } else {
                    Axis::Column
                };
                log::trace!("touch drag locked to {axis:?}");
                session.axis = Some(axis);
                axis
            }
        };
        let target = axis.project(session.from, pos);
        if target == session.from {
            return false;
        }

        let drag = session.drag_to(target);
        if !self.board.commit_line(session.line, drag) {
            return false;
        }
        let (handle, _) = self.board.line(session.line).endpoints();
        session.from = handle;
        true
    }

    /// Ends a touch drag at `pos`, honouring the axis lock.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the board.
    pub fn touch_end(&mut self, pos: Position) -> bool {
        let target = match self.session {
            Some(DragSession {
                from,
                axis: Some(axis),
                ..
            }) => axis.project(from, pos),
            _ => pos,
        };
        self.release(target)
    }

    /// Cancels any drag and collapses every line onto its anchor.
    pub fn reset(&mut self) {
        self.cancel();
        self.board.reset();
    }

    /// Cancels any drag and transposes the board.
    pub fn transpose(&mut self) {
        self.cancel();
        self.board.transpose();
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;
    use crate::Segment;

    fn pos(row: u8, col: u8) -> Position {
        Position::new(row, col)
    }

    fn controller(rows: &[&str]) -> DragController {
        DragController::new(Board::load(rows).expect("valid puzzle"))
    }

    fn first_line(c: &DragController) -> Segment {
        c.board().lines()[0].segment()
    }

    #[test]
    fn test_press_on_empty_cell_stays_idle() {
        let mut c = controller(&["3  "]);
        assert!(!c.press(pos(0, 2)));
        assert!(!c.is_dragging());
        assert!(!c.move_to(pos(0, 1)));
        assert!(!c.release(pos(0, 1)));
    }

    #[test]
    fn test_mouse_drag_commits() {
        let mut c = controller(&["3.."]);
        assert!(c.press(pos(0, 0)));
        assert_eq!(c.active_line(), Some(LineId::from_index(0)));
        assert!(c.move_to(pos(0, 1)));
        assert!(c.session().expect("dragging").left_origin());
        assert!(c.move_to(pos(0, 2)));
        // only previewed so far
        assert_eq!(c.board().lines()[0].length(), 1);
        assert_eq!(c.board().lines()[0].displayed_length(), 3);

        assert!(c.release(pos(0, 2)));
        assert!(!c.is_dragging());
        assert_eq!(first_line(&c), Segment::new(pos(0, 2), pos(0, 0)));
        assert!(!c.board().lines()[0].has_preview());
    }

    #[test]
    fn test_move_is_idempotent() {
        let mut c = controller(&["4   "]);
        c.press(pos(0, 0));
        assert!(c.move_to(pos(0, 2)));
        let once = c.board().clone();
        assert!(c.move_to(pos(0, 2)));
        assert!(c.move_to(pos(0, 2)));
        assert_eq!(c.board(), &once);
    }

    #[test]
    fn test_cancel_restores_committed_geometry() {
        let mut c = controller(&["4   ", "    "]);
        c.press(pos(0, 0));
        c.move_to(pos(0, 3));
        assert!(c.release(pos(0, 3)));
        let committed = c.board().clone();

        c.press(pos(0, 3));
        c.move_to(pos(0, 1));
        assert_eq!(c.board().lines()[0].displayed_length(), 2);
        c.cancel();
        assert!(!c.is_dragging());
        assert_eq!(c.board(), &committed);
    }

    #[test]
    fn test_click_on_anchor_resets_line() {
        let mut c = controller(&["3  "]);
        c.press(pos(0, 0));
        c.move_to(pos(0, 2));
        c.release(pos(0, 2));
        assert_eq!(c.board().lines()[0].length(), 3);

        assert!(c.press(pos(0, 0)));
        assert!(c.move_to(pos(0, 0)));
        assert!(c.release(pos(0, 0)));
        assert_eq!(c.board().lines()[0].length(), 1);
    }

    #[test]
    fn test_returning_to_anchor_keeps_line() {
        let mut c = controller(&["3  "]);
        c.press(pos(0, 0));
        c.move_to(pos(0, 2));
        c.release(pos(0, 2));

        c.press(pos(0, 0));
        c.move_to(pos(0, 1));
        c.move_to(pos(0, 0));
        c.release(pos(0, 0));
        assert_eq!(c.board().lines()[0].length(), 3);
    }

    #[test]
    fn test_release_without_move_elsewhere_commits() {
        let mut c = controller(&["3  "]);
        c.press(pos(0, 0));
        assert!(c.release(pos(0, 2)));
        assert_eq!(c.board().lines()[0].length(), 3);
    }

    #[test]
    fn test_diagonal_release_is_rejected() {
        let mut c = controller(&["2  ", "   ", "   "]);
        c.press(pos(0, 0));
        assert!(!c.move_to(pos(1, 1)));
        assert!(!c.release(pos(2, 2)));
        assert_eq!(first_line(&c), Segment::point(pos(0, 0)));
    }

    #[test]
    fn test_press_while_dragging_cancels_previous() {
        let mut c = controller(&["2 2 "]);
        c.press(pos(0, 0));
        c.move_to(pos(0, 1));
        assert!(c.board().lines()[0].has_preview());
        assert!(c.press(pos(0, 2)));
        assert!(!c.board().lines()[0].has_preview());
        assert_eq!(c.active_line(), Some(LineId::from_index(1)));
    }

    #[test]
    fn test_touch_locks_axis_and_commits_incrementally() {
        let mut c = controller(&["4   ", "    ", "    "]);
        assert!(c.touch_start(pos(0, 0)));
        assert!(c.touch_move(pos(0, 1)));
        assert_eq!(c.session().and_then(DragSession::axis), Some(Axis::Row));
        assert_eq!(c.board().lines()[0].length(), 2);

        // wobbling off the row is projected back onto it
        assert!(c.touch_move(pos(1, 2)));
        assert_eq!(first_line(&c), Segment::new(pos(0, 2), pos(0, 0)));

        assert!(c.touch_end(pos(2, 3)));
        assert_eq!(first_line(&c), Segment::new(pos(0, 3), pos(0, 0)));
    }

    #[test]
    fn test_touch_continues_from_clipped_end() {
        let mut c = controller(&["4  1", "    "]);
        c.touch_start(pos(0, 0));
        assert!(c.touch_move(pos(0, 3)));
        assert_eq!(first_line(&c), Segment::new(pos(0, 2), pos(0, 0)));
        assert_eq!(c.session().map(|session| session.from()), Some(pos(0, 2)));
        // shrinking from the clipped end still works
        assert!(c.touch_move(pos(0, 1)));
        assert_eq!(first_line(&c), Segment::new(pos(0, 1), pos(0, 0)));
        c.touch_end(pos(0, 1));
        assert_eq!(c.board().lines()[0].length(), 2);
    }

    #[test]
    fn test_touch_tap_on_anchor_resets() {
        let mut c = controller(&["3  "]);
        c.touch_start(pos(0, 0));
        c.touch_move(pos(0, 2));
        c.touch_end(pos(0, 2));
        assert_eq!(c.board().lines()[0].length(), 3);

        c.touch_start(pos(0, 0));
        c.touch_end(pos(0, 0));
        assert_eq!(c.board().lines()[0].length(), 1);
    }

    #[test]
    fn test_transpose_cancels_drag() {
        let mut c = controller(&["2 ", "  "]);
        c.press(pos(0, 0));
        c.move_to(pos(0, 1));
        c.transpose();
        assert!(!c.is_dragging());
        assert!(!c.board().lines()[0].has_preview());
        assert_eq!(c.board().dimensions(), (2, 2));
    }

    #[test]
    fn test_reset_cancels_and_collapses() {
        let mut c = controller(&["3  "]);
        c.press(pos(0, 0));
        c.release(pos(0, 2));
        c.press(pos(0, 2));
        c.reset();
        assert!(!c.is_dragging());
        assert_eq!(first_line(&c), Segment::point(pos(0, 0)));
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_out_of_range_press_panics() {
        let mut c = controller(&["1"]);
        c.press(pos(3, 3));
    }

    const PUZZLE: [&str; 5] = ["3 . 2", " 4   ", ".  1 ", "  2 .", "5   ."];

    #[derive(Debug, Clone, Copy)]
    enum Op {
        Press(Position),
        Move(Position),
        Release(Position),
        Cancel,
        TouchStart(Position),
        TouchMove(Position),
        TouchEnd(Position),
    }

    fn apply(c: &mut DragController, op: Op) {
        match op {
            Op::Press(p) => _ = c.press(p),
            Op::Move(p) => _ = c.move_to(p),
            Op::Release(p) => _ = c.release(p),
            Op::Cancel => c.cancel(),
            Op::TouchStart(p) => _ = c.touch_start(p),
            Op::TouchMove(p) => _ = c.touch_move(p),
            Op::TouchEnd(p) => _ = c.touch_end(p),
        }
    }

    fn position() -> impl Strategy<Value = Position> {
        (0u8..5, 0u8..5).prop_map(|(row, col)| Position::new(row, col))
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            2 => position().prop_map(Op::Press),
            4 => position().prop_map(Op::Move),
            2 => position().prop_map(Op::Release),
            1 => Just(Op::Cancel),
            1 => position().prop_map(Op::TouchStart),
            2 => position().prop_map(Op::TouchMove),
            1 => position().prop_map(Op::TouchEnd),
        ]
    }

    fn check_geometry(board: &Board) -> Result<(), TestCaseError> {
        let mut covered = HashSet::new();
        for line in board.lines() {
            for segment in [line.segment(), line.displayed()] {
                let (a, b) = segment.ends();
                prop_assert!(segment.is_axis_aligned());
                prop_assert!(segment.contains(line.origin()));
                prop_assert_eq!(segment.length(), usize::from(a.distance(b)) + 1);
            }
            let cells: Vec<_> = line.covered_cells().collect();
            prop_assert_eq!(cells.len(), line.length());
            for cell in cells {
                prop_assert!(covered.insert(cell), "{} covered twice", cell);
            }
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn test_random_gestures_keep_geometry_valid(
            ops in prop::collection::vec(op(), 0..40),
        ) {
            let mut c = controller(&PUZZLE);
            for op in ops {
                apply(&mut c, op);
                check_geometry(c.board())?;
                prop_assert_eq!(c.is_dragging(), c.active_line().is_some());
            }
        }

        #[test]
        fn test_preview_then_cancel_restores_board(
            setup in prop::collection::vec(op(), 0..20),
            start in position(),
            moves in prop::collection::vec(position(), 0..8),
        ) {
            let mut c = controller(&PUZZLE);
            for op in setup {
                apply(&mut c, op);
            }
            c.cancel();
            let before = c.board().clone();

            c.press(start);
            for pos in moves {
                c.move_to(pos);
            }
            c.cancel();
            prop_assert_eq!(c.board(), &before);
        }

        #[test]
        fn test_diagonal_release_changes_nothing(
            row in 0u8..5,
            col in 0u8..5,
        ) {
            let mut c = controller(&PUZZLE);
            let origin = pos(1, 1);
            prop_assume!(row != origin.row() && col != origin.col());
            let before = c.board().clone();
            prop_assert!(c.press(origin));
            prop_assert!(!c.release(pos(row, col)));
            prop_assert_eq!(c.board(), &before);
        }
    }
}
