//! # Decimal Value Model
//!
//! A decimal value is an ordered sequence of digit values, most-significant
//! first. Digits are stored as small integers (0-9), never as character
//! codes, so arithmetic needs no offset correction anywhere.

use std::fmt::{self, Write};
use std::str::FromStr;

use thiserror::Error;

/// Rejected textual or raw-digit input for a decimal value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseDigitsError {
    /// A value has at least one digit; "" denotes nothing.
    #[error("empty digit sequence")]
    Empty,
    /// Only the ten decimal digit characters are meaningful here.
    #[error("invalid digit {character:?} at position {index}")]
    NonDigit { character: char, index: usize },
    /// Raw digit values must already be reduced into 0-9.
    #[error("digit value {value} at position {index} exceeds 9")]
    OutOfRange { value: u8, index: usize },
}

/// An arbitrary-precision decimal value.
///
/// Leading zeros are structural, not canonical: reversing "120" yields
/// "021", and that zero stays put because the reversed form is only ever
/// consumed as an addition operand, never re-read as a number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DigitSeq(Vec<u8>);

impl DigitSeq {
    /// Decomposes a native integer into its decimal digits.
    pub fn from_seed(seed: u64) -> Self {
        if seed == 0 {
            return Self(vec![0]);
        }

        let mut digits = Vec::new();
        let mut rest = seed;
        while rest > 0 {
            digits.push((rest % 10) as u8);
            rest /= 10;
        }
        digits.reverse();

        Self(digits)
    }

    /// Builds a value from raw digit values, most-significant first.
    pub fn from_digits<I>(digits: I) -> Result<Self, ParseDigitsError>
    where
        I: IntoIterator<Item = u8>,
    {
        let digits: Vec<u8> = digits.into_iter().collect();

        if digits.is_empty() {
            return Err(ParseDigitsError::Empty);
        }
        for (index, &value) in digits.iter().enumerate() {
            if value > 9 {
                return Err(ParseDigitsError::OutOfRange { value, index });
            }
        }

        Ok(Self(digits))
    }

    /// Wraps digits the caller has already reduced into 0-9.
    pub(crate) fn from_raw(digits: Vec<u8>) -> Self {
        debug_assert!(!digits.is_empty());
        debug_assert!(digits.iter().all(|&digit| digit <= 9));
        Self(digits)
    }

    /// The digits, most-significant first.
    pub fn digits(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The same digits read back to front: "196" becomes "691".
    pub fn reversed(&self) -> Self {
        let mut digits = self.0.clone();
        digits.reverse();
        Self(digits)
    }

    /// True when the digit sequence equals its own reversal.
    pub fn is_palindrome(&self) -> bool {
        self.0.iter().eq(self.0.iter().rev())
    }
}

impl FromStr for DigitSeq {
    type Err = ParseDigitsError;

    /// Parses a plain decimal string; leading zeros are kept as given.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseDigitsError::Empty);
        }

        let mut digits = Vec::with_capacity(s.len());
        for (index, character) in s.chars().enumerate() {
            let digit = character
                .to_digit(10)
                .ok_or(ParseDigitsError::NonDigit { character, index })?;
            digits.push(digit as u8);
        }

        Ok(Self(digits))
    }
}

impl fmt::Display for DigitSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &digit in &self.0 {
            f.write_char(char::from(b'0' + digit))?;
        }
        Ok(())
    }
}
