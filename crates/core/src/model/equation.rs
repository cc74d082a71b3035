use thiserror::Error;

use crate::model::PartialSlot;

/// Smallest number that can be practiced.
pub const MIN_BASE_NUMBER: i64 = 10;
/// Largest number that can be practiced.
pub const MAX_BASE_NUMBER: i64 = 99;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EquationError {
    #[error("no number entered")]
    Empty,

    #[error("not a number: {0:?}")]
    NotANumber(String),

    #[error("{0} is not a two-digit number")]
    OutOfRange(i64),
}

/// The expanded square of a two-digit number.
///
/// For `n = 10a + b` the three parts are `(10a)²`, `2·10a·b` and `b²`, and
/// they always add up to `n²`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Equation {
    number: u8,
    parts: [u32; 3],
}

impl Equation {
    /// Expands the square of `number`.
    ///
    /// # Errors
    ///
    /// Returns `EquationError::OutOfRange` unless `number` is in `10..=99`.
    pub fn new(number: i64) -> Result<Self, EquationError> {
        if !(MIN_BASE_NUMBER..=MAX_BASE_NUMBER).contains(&number) {
            return Err(EquationError::OutOfRange(number));
        }
        let number = u8::try_from(number).map_err(|_| EquationError::OutOfRange(number))?;

        let tens = u32::from(number / 10) * 10;
        let ones = u32::from(number % 10);
        Ok(Self {
            number,
            parts: [tens * tens, tens * ones * 2, ones * ones],
        })
    }

    /// Parses typed text and expands its square.
    ///
    /// # Errors
    ///
    /// Returns `EquationError::Empty` for blank text, `EquationError::NotANumber`
    /// when the text is not an integer, and `EquationError::OutOfRange` when it
    /// is not a two-digit number.
    pub fn parse(text: &str) -> Result<Self, EquationError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(EquationError::Empty);
        }
        let number = trimmed
            .parse::<i64>()
            .map_err(|_| EquationError::NotANumber(trimmed.to_string()))?;
        Self::new(number)
    }

    #[must_use]
    pub fn number(&self) -> u8 {
        self.number
    }

    /// The tens part of the number, e.g. `20` for `23`.
    #[must_use]
    pub fn tens(&self) -> u32 {
        u32::from(self.number / 10) * 10
    }

    /// The ones digit, e.g. `3` for `23`.
    #[must_use]
    pub fn ones(&self) -> u32 {
        u32::from(self.number % 10)
    }

    #[must_use]
    pub fn parts(&self) -> [u32; 3] {
        self.parts
    }

    #[must_use]
    pub fn part(&self, slot: PartialSlot) -> u32 {
        self.parts[slot.index()]
    }

    #[must_use]
    pub fn sum(&self) -> u32 {
        self.parts.iter().sum()
    }
}
