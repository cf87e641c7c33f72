//! Cell contents of a puzzle definition.

use crate::Digit;

/// The fixed content of one puzzle cell.
///
/// Cell values never change after a puzzle is loaded; lines are tracked
/// separately by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum CellValue {
    /// An anchor cell: a line starts here and must reach this length.
    Anchor(Digit),
    /// A cell that some line must cover (`.` in the definition format).
    Required,
    /// An unconstrained floor cell (space in the definition format).
    Blank,
}

impl CellValue {
    /// Character used for required cells.
    pub const REQUIRED_CHAR: char = '.';
    /// Character used for blank cells.
    pub const BLANK_CHAR: char = ' ';

    /// Parses one definition character.
    ///
    /// Returns `None` for characters outside `1`-`9`, `.` and space.
    ///
    /// # Examples
    ///
    /// ```
    /// use linelace_core::{CellValue, Digit};
    ///
    /// assert_eq!(CellValue::from_char('5'), Some(CellValue::Anchor(Digit::D5)));
    /// assert_eq!(CellValue::from_char('.'), Some(CellValue::Required));
    /// assert_eq!(CellValue::from_char(' '), Some(CellValue::Blank));
    /// assert_eq!(CellValue::from_char('0'), None);
    /// ```
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            Self::REQUIRED_CHAR => Some(Self::Required),
            Self::BLANK_CHAR => Some(Self::Blank),
            _ => Digit::try_from_char(ch).map(Self::Anchor),
        }
    }

    /// Returns the definition character for this value.
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Anchor(digit) => digit.to_char(),
            Self::Required => Self::REQUIRED_CHAR,
            Self::Blank => Self::BLANK_CHAR,
        }
    }

    /// Returns the anchored digit, if any.
    #[must_use]
    pub const fn as_digit(self) -> Option<Digit> {
        match self {
            Self::Anchor(digit) => Some(digit),
            Self::Required | Self::Blank => None,
        }
    }
}
