//! Line-placement engine for linelace puzzles.
//!
//! Every numbered cell of a puzzle anchors a [`Line`] that the player
//! stretches horizontally or vertically by dragging one of its ends. A
//! puzzle is solved when every line is exactly as long as its number and
//! every `.` cell is covered.
//!
//! # Overview
//!
//! - [`segment`] and [`line`]: line geometry and drag resolution, including
//!   overlap avoidance against every other line
//! - [`board`]: one live puzzle with its lines, plus the completion check
//!   reported as a [`CheckReport`]
//! - [`controller`]: the pointer and touch drag state machine
//! - [`layout`] and [`view`]: screen hit-testing and a render-ready snapshot
//! - [`catalog`] and [`progress`]: tiered puzzle sets and per-tier unlocks
//!
//! # Examples
//!
//! ```
//! use linelace_core::Position;
//! use linelace_game::{Board, BoardView, DragController};
//!
//! let board = Board::load(["2. ", " 1."]).unwrap();
//! let mut controller = DragController::new(board);
//!
//! controller.press(Position::new(0, 0));
//! controller.move_to(Position::new(0, 1));
//! controller.release(Position::new(0, 1));
//!
//! let report = controller.board().check();
//! assert!(!report.is_solved());
//! assert_eq!(report.uncovered(), [Position::new(1, 2)]);
//!
//! let view = BoardView::of_controller(&controller, Some(&report));
//! assert_eq!(view.lines().len(), 2);
//! ```

pub mod board;
pub mod catalog;
pub mod check;
pub mod controller;
pub mod layout;
pub mod line;
pub mod progress;
pub mod segment;
pub mod view;

pub use self::{
    board::{Board, LineId},
    catalog::{Catalog, CatalogError, Entry, PuzzleId, PuzzleIdError},
    check::CheckReport,
    controller::{Axis, DragController, DragSession},
    layout::{BoardLayout, Rect},
    line::{Drag, Line, LineStatus},
    progress::{MemoryProgress, ProgressStore},
    segment::Segment,
    view::{BoardView, CellFlags, CellView, LineFlags, LineView},
};
