//! Interactive play through one tier of a catalog.

use std::io::{BufRead, Write};

use linelace_core::Position;
use linelace_game::{
    Board, BoardLayout, BoardView, Catalog, CatalogError, CheckReport, DragController,
    ProgressStore, PuzzleId,
};

use crate::{
    command::{Command, Gesture, HELP},
    error::CliError,
    progress_file::ProgressFile,
};

enum Screen {
    Message(String),
    Puzzle {
        controller: DragController,
        caption: Option<String>,
        report: Option<CheckReport>,
    },
}

impl Screen {
    fn load(catalog: &Catalog, id: &PuzzleId) -> Result<Self, CliError> {
        let entry = catalog.entry(id)?;
        let puzzle = entry
            .parse_puzzle()
            .map_err(|source| CatalogError::Malformed {
                id: id.clone(),
                source,
            })?;
        let caption = entry.message().map(str::to_owned);
        Ok(match puzzle {
            Some(puzzle) => Self::Puzzle {
                controller: DragController::new(Board::new(puzzle)),
                caption,
                report: None,
            },
            None => Self::Message(caption.unwrap_or_default()),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Finished,
}

pub struct Session<'a> {
    catalog: &'a Catalog,
    progress: ProgressFile,
    cell_size: f32,
    current: PuzzleId,
    screen: Screen,
}

impl<'a> Session<'a> {
    pub fn start(
        catalog: &'a Catalog,
        progress: ProgressFile,
        cell_size: f32,
        id: PuzzleId,
    ) -> Result<Self, CliError> {
        let screen = Screen::load(catalog, &id)?;
        log::info!("starting at {id}");
        Ok(Self {
            catalog,
            progress,
            cell_size,
            current: id,
            screen,
        })
    }

    /// Reads commands until `quit`, end of input, or the end of the tier.
    pub fn run(&mut self, input: impl BufRead, mut out: impl Write) -> Result<(), CliError> {
        self.show(&mut out)?;
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<Command>() {
                Ok(command) => {
                    if self.execute(command, &mut out)? == Flow::Finished {
                        break;
                    }
                }
                Err(err) => writeln!(out, "error: {err}")?,
            }
        }
        Ok(())
    }

    fn execute(&mut self, command: Command, out: &mut impl Write) -> Result<Flow, CliError> {
        log::trace!("command: {command:?}");
        match command {
            Command::Quit => return Ok(Flow::Finished),
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Show => self.show(out)?,
            Command::Done => return self.done(out),
            Command::Check => {
                if let Some(report) = self.check() {
                    writeln!(out, "{report}")?;
                }
                self.show(out)?;
            }
            Command::Reset => self.edit(out, |controller, _| {
                controller.reset();
                Ok(())
            })?,
            Command::Transpose => self.edit(out, |controller, _| {
                controller.transpose();
                Ok(())
            })?,
            Command::Gesture(gesture) => self.edit(out, |controller, cell_size| {
                apply(controller, cell_size, gesture)
            })?,
        }
        Ok(Flow::Continue)
    }

    fn edit<F>(&mut self, out: &mut impl Write, f: F) -> Result<(), CliError>
    where
        F: FnOnce(&mut DragController, f32) -> Result<(), String>,
    {
        let Screen::Puzzle {
            controller, report, ..
        } = &mut self.screen
        else {
            writeln!(out, "nothing to play here; type `done` to continue")?;
            return Ok(());
        };
        *report = None;
        if let Err(message) = f(controller, self.cell_size) {
            writeln!(out, "error: {message}")?;
        }
        self.show(out)
    }

    fn check(&mut self) -> Option<&CheckReport> {
        let Screen::Puzzle {
            controller, report, ..
        } = &mut self.screen
        else {
            return None;
        };
        Some(report.insert(controller.board().check()))
    }

    fn done(&mut self, out: &mut impl Write) -> Result<Flow, CliError> {
        if let Some(report) = self.check() {
            if !report.is_solved() {
                writeln!(out, "{report}")?;
                self.show(out)?;
                return Ok(Flow::Continue);
            }
            writeln!(out, "solved {}", self.current)?;
        }
        self.progress.record_completed(&self.current);
        self.progress.save()?;

        let next = self.current.next();
        match self.catalog.entry(&next) {
            Ok(_) => {
                self.screen = Screen::load(self.catalog, &next)?;
                log::info!("advanced to {next}");
                self.current = next;
                self.show(out)?;
                Ok(Flow::Continue)
            }
            Err(CatalogError::IndexOutOfRange { .. }) => {
                writeln!(out, "tier {} complete", next.tier())?;
                Ok(Flow::Finished)
            }
            Err(err) => Err(err.into()),
        }
    }

    fn show(&self, out: &mut impl Write) -> Result<(), CliError> {
        writeln!(out, "== {} ==", self.current)?;
        match &self.screen {
            Screen::Message(message) => {
                writeln!(out, "{message}")?;
                writeln!(out, "(type `done` to continue)")?;
            }
            Screen::Puzzle {
                controller,
                caption,
                report,
            } => {
                if let Some(caption) = caption {
                    writeln!(out, "{caption}")?;
                }
                let view = BoardView::of_controller(controller, report.as_ref());
                write!(out, "{}", view.render_text())?;
            }
        }
        Ok(())
    }
}

fn apply(controller: &mut DragController, cell_size: f32, gesture: Gesture) -> Result<(), String> {
    let (height, width) = controller.board().dimensions();
    let layout = BoardLayout::for_board(controller.board(), cell_size);
    let on_board = |pos: Position| {
        if pos.row() < height && pos.col() < width {
            Ok(pos)
        } else {
            Err(format!("{pos} is outside the {height}x{width} board"))
        }
    };
    let under = |x: f32, y: f32| {
        layout
            .cell_at(x, y)
            .ok_or_else(|| format!("point ({x}, {y}) is off the board"))
    };
    let no_line = |pos: Position| format!("no line starts or ends at {pos}");

    match gesture {
        Gesture::Press(pos) => {
            let pos = on_board(pos)?;
            if !controller.press(pos) {
                return Err(no_line(pos));
            }
        }
        Gesture::Move(pos) => _ = controller.move_to(on_board(pos)?),
        Gesture::Release(pos) => _ = controller.release(on_board(pos)?),
        Gesture::Cancel => controller.cancel(),
        Gesture::Drag(from, to) => {
            let (from, to) = (on_board(from)?, on_board(to)?);
            if !controller.press(from) {
                return Err(no_line(from));
            }
            controller.move_to(to);
            controller.release(to);
        }
        Gesture::TouchStart(x, y) => {
            let pos = under(x, y)?;
            if !controller.touch_start(pos) {
                return Err(no_line(pos));
            }
        }
        // touches sliding off the board are ignored until they come back
        Gesture::TouchMove(x, y) => {
            if let Some(pos) = layout.cell_at(x, y) {
                controller.touch_move(pos);
            }
        }
        Gesture::TouchEnd(x, y) => match layout.cell_at(x, y) {
            Some(pos) => _ = controller.touch_end(pos),
            None => controller.cancel(),
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"{
        "tutorial": [
            { "message": "Stretch each number." },
            { "puzzle": ["3.."], "message": "Drag the 3 to the right." },
            { "puzzle": ["2.", "  "] }
        ]
    }"#;

    fn play(start: &str, input: &str) -> (String, ProgressFile) {
        let catalog = Catalog::from_json(CATALOG).expect("valid catalog");
        let id = start.parse().expect("valid id");
        let mut session =
            Session::start(&catalog, ProgressFile::default(), 40.0, id).expect("entry exists");
        let mut out = Vec::new();
        session.run(input.as_bytes(), &mut out).expect("session runs");
        let progress = session.progress;
        (String::from_utf8(out).expect("utf-8 output"), progress)
    }

    #[test]
    fn test_message_then_solve() {
        let (out, progress) = play(
            "tutorial.1",
            "done\ndrag 0 0 0 2\ndone\nquit\nshow\n",
        );
        assert!(out.contains("Stretch each number.\n(type `done` to continue)\n"));
        assert!(out.contains("== tutorial.2 ==\nDrag the 3 to the right.\n"));
        assert!(out.contains("|3--|\n"));
        assert!(out.contains("solved tutorial.2\n== tutorial.3 ==\n"));
        assert!(out.ends_with("#0 (0, 0) 1/2 short\n"));
        assert_eq!(progress.furthest_unlocked("tutorial"), 3);
    }

    #[test]
    fn test_unsolved_done_reports_errors() {
        let (out, progress) = play("tutorial.2", "done\n");
        assert!(out.contains("1 wrong line(s), 2 uncovered cell(s)\n"));
        assert!(out.contains("|3!!|\n"));
        assert!(out.contains("#0 (0, 0) 1/3 short !\n"));
        assert_eq!(progress.furthest_unlocked("tutorial"), 1);
    }

    #[test]
    fn test_touch_gestures_use_screen_points() {
        let (out, _) = play(
            "tutorial.2",
            "tstart 20 20\ntmove 60 25\ntmove 100 30\ntend 110 30\ncheck\n",
        );
        assert!(out.contains("solved\n"));
    }

    #[test]
    fn test_finishing_the_tier() {
        let (out, progress) = play("tutorial.3", "drag 0 0 1 0\ndone\ndrag 0 0 0 1\ndone\n");
        assert!(out.contains("0 wrong line(s), 1 uncovered cell(s)\n"));
        assert!(out.ends_with("solved tutorial.3\ntier tutorial complete\n"));
        assert_eq!(progress.furthest_unlocked("tutorial"), 4);
    }

    #[test]
    fn test_bad_input_is_reported_and_skipped() {
        let (out, _) = play(
            "tutorial.2",
            "fly\npress 5 5\npress 0 2\ntransposee\n",
        );
        assert!(out.contains("error: unknown command `fly` (try `help`)\n"));
        assert!(out.contains("error: (5, 5) is outside the 1x3 board\n"));
        assert!(out.contains("error: no line starts or ends at (0, 2)\n"));
    }

    #[test]
    fn test_gestures_on_message_screen() {
        let (out, _) = play("tutorial.1", "press 0 0\n");
        assert!(out.contains("nothing to play here"));
    }
}
