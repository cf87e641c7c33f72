//! Commands read from stdin during `linelace play`.

use std::{num::ParseIntError, str::FromStr};

use linelace_core::Position;

/// Pointer input, in cells for the mouse and screen units for touch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Press(Position),
    Move(Position),
    Release(Position),
    Cancel,
    Drag(Position, Position),
    TouchStart(f32, f32),
    TouchMove(f32, f32),
    TouchEnd(f32, f32),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Gesture(Gesture),
    Reset,
    Transpose,
    Check,
    Done,
    Show,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  press R C | move R C | release R C | cancel    mouse drag on cell (R, C)
  drag R1 C1 R2 C2                              press, move and release
  tstart X Y | tmove X Y | tend X Y             touch drag at screen point
  reset | transpose | check | show
  done                                          check and go to the next entry
  help | quit";

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum CommandError {
    #[display("empty command")]
    Empty,
    #[display("unknown command `{_0}` (try `help`)")]
    Unknown(#[error(not(source))] String),
    #[display("`{command}` takes {expected} argument(s), got {found}")]
    Arity {
        command: &'static str,
        expected: usize,
        found: usize,
    },
    #[display("invalid cell coordinate `{text}`: {source}")]
    Coordinate { text: String, source: ParseIntError },
    #[display("invalid screen coordinate `{text}`")]
    Point { text: String },
}

fn args<const N: usize>(
    command: &'static str,
    words: &[&str],
) -> Result<[String; N], CommandError> {
    <[String; N]>::try_from(words.iter().map(|&w| w.to_owned()).collect::<Vec<_>>()).map_err(
        |words| CommandError::Arity {
            command,
            expected: N,
            found: words.len(),
        },
    )
}

fn coordinate(text: &str) -> Result<u8, CommandError> {
    text.parse().map_err(|source| CommandError::Coordinate {
        text: text.to_owned(),
        source,
    })
}

fn cell(command: &'static str, words: &[&str]) -> Result<Position, CommandError> {
    let [row, col] = args::<2>(command, words)?;
    Ok(Position::new(coordinate(&row)?, coordinate(&col)?))
}

fn point(command: &'static str, words: &[&str]) -> Result<(f32, f32), CommandError> {
    let [x, y] = args::<2>(command, words)?;
    let parse = |text: &str| {
        text.parse::<f32>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| CommandError::Point {
                text: text.to_owned(),
            })
    };
    Ok((parse(&x)?, parse(&y)?))
}

fn bare(command: &'static str, words: &[&str], value: Command) -> Result<Command, CommandError> {
    args::<0>(command, words)?;
    Ok(value)
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = s.split_whitespace().collect();
        let Some((&name, rest)) = words.split_first() else {
            return Err(CommandError::Empty);
        };
        match name.to_ascii_lowercase().as_str() {
            "press" => cell("press", rest).map(|pos| Self::Gesture(Gesture::Press(pos))),
            "move" => cell("move", rest).map(|pos| Self::Gesture(Gesture::Move(pos))),
            "release" => cell("release", rest).map(|pos| Self::Gesture(Gesture::Release(pos))),
            "cancel" => bare("cancel", rest, Self::Gesture(Gesture::Cancel)),
            "drag" => {
                let [r1, c1, r2, c2] = args::<4>("drag", rest)?;
                Ok(Self::Gesture(Gesture::Drag(
                    Position::new(coordinate(&r1)?, coordinate(&c1)?),
                    Position::new(coordinate(&r2)?, coordinate(&c2)?),
                )))
            }
            "tstart" => point("tstart", rest).map(|(x, y)| Self::Gesture(Gesture::TouchStart(x, y))),
            "tmove" => point("tmove", rest).map(|(x, y)| Self::Gesture(Gesture::TouchMove(x, y))),
            "tend" => point("tend", rest).map(|(x, y)| Self::Gesture(Gesture::TouchEnd(x, y))),
            "reset" => bare("reset", rest, Self::Reset),
            "transpose" => bare("transpose", rest, Self::Transpose),
            "check" => bare("check", rest, Self::Check),
            "done" => bare("done", rest, Self::Done),
            "show" => bare("show", rest, Self::Show),
            "help" | "?" => bare("help", rest, Self::Help),
            "quit" | "exit" => bare("quit", rest, Self::Quit),
            _ => Err(CommandError::Unknown(name.to_owned())),
        }
    }
}
