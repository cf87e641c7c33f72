//! Target-length digits.

use std::fmt::{self, Display};

/// A line's target length in the range 1-9.
///
/// Each anchor cell of a puzzle holds one digit; the line rooted there is
/// satisfied once it spans exactly that many cells.
///
/// # Examples
///
/// ```
/// use linelace_core::Digit;
///
/// let digit = Digit::from_value(4);
/// assert_eq!(digit, Digit::D4);
/// assert_eq!(digit.value(), 4);
///
/// assert_eq!(Digit::try_from_char('7'), Some(Digit::D7));
/// assert_eq!(Digit::try_from_char('0'), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit 1.
    D1 = 1,
    /// The digit 2.
    D2 = 2,
    /// The digit 3.
    D3 = 3,
    /// The digit 4.
    D4 = 4,
    /// The digit 5.
    D5 = 5,
    /// The digit 6.
    D6 = 6,
    /// The digit 7.
    D7 = 7,
    /// The digit 8.
    D8 = 8,
    /// The digit 9.
    D9 = 9,
}

impl Digit {
    /// Array containing all digits from 1 to 9.
    pub const ALL: [Self; 9] = [
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Creates a digit from a u8 value in the range 1-9.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9.
    ///
    /// ```should_panic
    /// use linelace_core::Digit;
    ///
    /// let _ = Digit::from_value(0);
    /// ```
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        Self::try_from_value(value).unwrap_or_else(|| panic!("Invalid digit value: {value}"))
    }

    /// Creates a digit from a u8 value, returning `None` outside 1-9.
    #[must_use]
    pub const fn try_from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::D1),
            2 => Some(Self::D2),
            3 => Some(Self::D3),
            4 => Some(Self::D4),
            5 => Some(Self::D5),
            6 => Some(Self::D6),
            7 => Some(Self::D7),
            8 => Some(Self::D8),
            9 => Some(Self::D9),
            _ => None,
        }
    }

    /// Parses an ASCII digit character `'1'`-`'9'`.
    #[must_use]
    pub fn try_from_char(ch: char) -> Option<Self> {
        let value = ch.to_digit(10)?;
        u8::try_from(value).ok().and_then(Self::try_from_value)
    }

    /// Returns the numeric value of this digit (1-9).
    #[must_use]
    pub const fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the ASCII character for this digit.
    #[must_use]
    pub const fn to_char(self) -> char {
        (b'0' + self.value()) as char
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}

impl From<Digit> for usize {
    fn from(digit: Digit) -> usize {
        usize::from(digit.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        assert_eq!(Digit::from_value(1), Digit::D1);
        assert_eq!(Digit::from_value(9), Digit::D9);
        assert_eq!(Digit::ALL.len(), 9);

        for digit in Digit::ALL {
            assert_eq!(Digit::from_value(digit.value()), digit);
            assert_eq!(Digit::try_from_char(digit.to_char()), Some(digit));
        }

        assert_eq!(format!("{}", Digit::D6), "6");
        let value: usize = Digit::D5.into();
        assert_eq!(value, 5);
    }

    #[test]
    fn test_try_from_char_rejects_non_digits() {
        for ch in ['0', '.', ' ', 'a', '\u{0663}'] {
            assert_eq!(Digit::try_from_char(ch), None, "{ch:?}");
        }
    }

    #[test]
    #[should_panic(expected = "Invalid digit value: 10")]
    fn test_from_value_ten_panics() {
        let _ = Digit::from_value(10);
    }
}
