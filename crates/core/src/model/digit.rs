use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DigitError {
    #[error("not a decimal digit: {0:?}")]
    NotADigit(char),

    #[error("digit value out of range: {0}")]
    OutOfRange(u8),
}

/// A single decimal digit, as produced by the keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    /// Creates a digit from its numeric value.
    ///
    /// # Errors
    ///
    /// Returns `DigitError::OutOfRange` for values above 9.
    pub fn new(value: u8) -> Result<Self, DigitError> {
        if value > 9 {
            return Err(DigitError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }
}

impl TryFrom<char> for Digit {
    type Error = DigitError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        ch.to_digit(10)
            .and_then(|value| u8::try_from(value).ok())
            .map(Self)
            .ok_or(DigitError::NotADigit(ch))
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ascii_digits_only() {
        assert_eq!(Digit::try_from('7').unwrap().value(), 7);
        assert_eq!(Digit::try_from('a'), Err(DigitError::NotADigit('a')));
        assert_eq!(Digit::try_from('٣'), Err(DigitError::NotADigit('٣')));
    }

    #[test]
    fn rejects_values_above_nine() {
        assert_eq!(Digit::new(10), Err(DigitError::OutOfRange(10)));
        assert_eq!(Digit::new(0).unwrap().as_char(), '0');
        assert_eq!(Digit::new(9).unwrap().as_char(), '9');
    }
}
