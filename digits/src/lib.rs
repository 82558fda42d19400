//! # Decimal Digit Arithmetic
//!
//! Arbitrary-precision decimal values for the reverse-and-add process.
//!
//! Values under repeated reverse-and-add outgrow every native integer
//! width, so a value here is a plain sequence of digit values (each 0-9),
//! most-significant first, and addition is performed positionally with
//! explicit carry propagation.
//!
//! ## Contents
//! * **[`seq`]**: The [`DigitSeq`] value model with its parsing,
//!   reversal, and palindrome test.
//! * **[`sum`]**: Positional decimal addition with carry.

pub mod seq;
pub mod sum;

pub use seq::{DigitSeq, ParseDigitsError};
pub use sum::add;
