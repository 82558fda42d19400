//! Property-based invariant tests for digit sequences, reversal, and
//! positional decimal addition.
//!
//! These tests verify structural invariants that must hold for any valid
//! inputs:
//!
//! 1. Reversal is an involution.
//! 2. Reversal preserves length.
//! 3. Display/parse round-trips exactly (leading zeros included).
//! 4. Addition is commutative.
//! 5. Addition agrees with native integer arithmetic in native range.
//! 6. Addition output is at most one digit wider than the widest operand.
//! 7. Every digit of a sum is a valid digit value.
//! 8. Palindrome detection matches the reversal definition.
//! 9. No panics on arbitrary operand length combinations.

use proptest::prelude::*;
use revadd_digits::{DigitSeq, add};

// ── Helpers ─────────────────────────────────────────────────────────────

fn digit_seq_strategy() -> impl Strategy<Value = DigitSeq> {
    proptest::collection::vec(0u8..=9, 1..=64)
        .prop_map(|digits| DigitSeq::from_digits(digits).expect("digits are in range"))
}

fn seed_strategy() -> impl Strategy<Value = u64> {
    1u64..=u64::MAX
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Reversal is an involution
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn reversal_involution(value in digit_seq_strategy()) {
        prop_assert_eq!(value.reversed().reversed(), value);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Reversal preserves length
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn reversal_preserves_length(value in digit_seq_strategy()) {
        prop_assert_eq!(value.reversed().len(), value.len());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Display/parse round-trips exactly
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn display_parse_roundtrip(value in digit_seq_strategy()) {
        let rendered = value.to_string();
        let reparsed: DigitSeq = rendered.parse().expect("rendering is parseable");
        prop_assert_eq!(reparsed, value);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Addition is commutative
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn addition_commutative(a in digit_seq_strategy(), b in digit_seq_strategy()) {
        prop_assert_eq!(add(&a, &b), add(&b, &a));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Addition agrees with native integer arithmetic
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn addition_matches_native(a in seed_strategy(), b in seed_strategy()) {
        let digit_sum = add(&DigitSeq::from_seed(a), &DigitSeq::from_seed(b));
        let native_sum = u128::from(a) + u128::from(b);
        prop_assert_eq!(
            digit_sum.to_string().parse::<u128>().expect("sum is numeric"),
            native_sum,
            "digit addition of {} + {} diverged from native arithmetic",
            a, b
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Addition output is at most one digit wider than the widest operand
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn addition_width_bound(a in digit_seq_strategy(), b in digit_seq_strategy()) {
        let widest = a.len().max(b.len());
        let result = add(&a, &b);
        prop_assert!(
            result.len() == widest || result.len() == widest + 1,
            "{} + {} produced width {} from operand widths {}/{}",
            a, b, result.len(), a.len(), b.len()
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Every digit of a sum is a valid digit value
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn addition_digits_stay_reduced(a in digit_seq_strategy(), b in digit_seq_strategy()) {
        let result = add(&a, &b);
        prop_assert!(result.digits().iter().all(|&digit| digit <= 9));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 8. Palindrome detection matches the reversal definition
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn palindrome_matches_definition(value in digit_seq_strategy()) {
        prop_assert_eq!(value.is_palindrome(), value == value.reversed());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 9. No panics on arbitrary operand length combinations
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn addition_total_over_mismatched_widths(
        a in proptest::collection::vec(0u8..=9, 1..=4),
        b in proptest::collection::vec(0u8..=9, 1..=64),
    ) {
        let a = DigitSeq::from_digits(a).expect("digits are in range");
        let b = DigitSeq::from_digits(b).expect("digits are in range");
        let result = add(&a, &b);
        prop_assert!(result.len() >= a.len().max(b.len()));
    }
}
