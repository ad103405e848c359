//! # Digit vectors
//!
//! Magnitudes are little-endian sequences of base `2^64` digits without trailing (most
//! significant) zeros. The empty sequence represents zero.
use std::cmp::Ordering;

pub mod digit;
pub mod division;
pub mod radix;
pub mod signed;
pub mod unsigned;

/// A single digit of a magnitude.
pub type UnsignedDigit = u64;
/// Holds the product of two digits plus two carries without loss.
pub type DoubleDigit = u128;

/// Number of bits in a digit.
pub const DIGIT_BITS: u32 = UnsignedDigit::BITS;

/// Compare two normalized magnitudes.
///
/// Lengths are compared first, digits are only inspected from the most significant side when the
/// lengths are equal.
pub(crate) fn cmp_slice(a: &[UnsignedDigit], b: &[UnsignedDigit]) -> Ordering {
    debug_assert!(a.last() != Some(&0));
    debug_assert!(b.last() != Some(&0));

    match Ord::cmp(&a.len(), &b.len()) {
        Ordering::Equal => Iterator::cmp(a.iter().rev(), b.iter().rev()),
        other => other,
    }
}

/// Length of the slice once trailing zero digits are removed.
pub(crate) fn normalized_len(digits: &[UnsignedDigit]) -> usize {
    digits.iter().rposition(|&digit| digit != 0).map_or(0, |index| index + 1)
}
