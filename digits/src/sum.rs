//! # Decimal Addition
//!
//! Digit-by-digit addition with explicit carry propagation. This is the
//! half of a reverse-and-add step where all the edge cases live.

use crate::seq::DigitSeq;

/// Adds two decimal values positionally, least-significant digits first.
///
/// Both operands of a reverse-and-add step share one length, but the walk
/// tolerates mismatched lengths anyway: an exhausted operand contributes
/// zeros while remaining digits and carries keep flowing. A final carry
/// prepends a 1, so the result is never more than one digit longer than
/// the wider operand.
pub fn add(a: &DigitSeq, b: &DigitSeq) -> DigitSeq {
    let mut lhs = a.digits().iter().rev();
    let mut rhs = b.digits().iter().rev();
    let mut out: Vec<u8> = Vec::with_capacity(a.len().max(b.len()) + 1);
    let mut carry: u8 = 0;

    loop {
        let (next_a, next_b) = (lhs.next(), rhs.next());
        if next_a.is_none() && next_b.is_none() {
            break;
        }

        // An exhausted operand (`None`) is not a zero digit; it simply
        // contributes nothing at this position.
        let sum = next_a.copied().unwrap_or(0) + next_b.copied().unwrap_or(0) + carry;

        // Positional sum caps at 9 + 9 + 1 = 19: one digit out, carry 0 or 1.
        out.push(sum % 10);
        carry = sum / 10;
    }

    if carry > 0 {
        out.push(carry);
    }

    out.reverse();
    DigitSeq::from_raw(out)
}
