//! # Double width digit operations
//!
//! Exact primitives on single digits. Products and quotients are computed in the double width
//! type, so no result is ever rounded.
use crate::integer::big::{DIGIT_BITS, DoubleDigit, UnsignedDigit};

/// Computes `a * b + carry` as a `(low, high)` digit pair.
///
/// The result always fits: `(B - 1)^2 + (B - 1) < B^2`.
#[inline]
pub fn mul_with_carry(
    carry: UnsignedDigit,
    a: UnsignedDigit,
    b: UnsignedDigit,
) -> (UnsignedDigit, UnsignedDigit) {
    let wide = a as DoubleDigit * b as DoubleDigit + carry as DoubleDigit;

    (wide as UnsignedDigit, (wide >> DIGIT_BITS) as UnsignedDigit)
}

/// Computes `a * b + addend + carry` as a `(low, high)` digit pair.
///
/// Still fits in two digits: `(B - 1)^2 + 2 (B - 1) = B^2 - 1`.
#[inline]
pub fn mul_add_with_carry(
    carry: UnsignedDigit,
    a: UnsignedDigit,
    b: UnsignedDigit,
    addend: UnsignedDigit,
) -> (UnsignedDigit, UnsignedDigit) {
    let wide = a as DoubleDigit * b as DoubleDigit + addend as DoubleDigit + carry as DoubleDigit;

    (wide as UnsignedDigit, (wide >> DIGIT_BITS) as UnsignedDigit)
}

/// Divides the two digit value `high * B + low` by `divisor`.
///
/// Returns the quotient digit and the remainder.
///
/// # Panics
///
/// When `high >= divisor`, as the quotient would not fit in a single digit. This also covers a zero
/// divisor.
#[inline]
pub fn div_with_carry(
    high: UnsignedDigit,
    low: UnsignedDigit,
    divisor: UnsignedDigit,
) -> (UnsignedDigit, UnsignedDigit) {
    assert!(high < divisor, "quotient digit overflow: {} >= {}", high, divisor);

    let wide = (high as DoubleDigit) << DIGIT_BITS | low as DoubleDigit;
    let divisor = divisor as DoubleDigit;

    ((wide / divisor) as UnsignedDigit, (wide % divisor) as UnsignedDigit)
}

/// Computes `a + b + carry`, returning the sum digit and the outgoing carry.
#[inline]
pub fn add_with_carry(a: UnsignedDigit, b: UnsignedDigit, carry: bool) -> (UnsignedDigit, bool) {
    let (sum, first) = a.overflowing_add(b);
    let (sum, second) = sum.overflowing_add(carry as UnsignedDigit);

    (sum, first || second)
}

/// Computes `a - b - borrow`, returning the difference digit and the outgoing borrow.
#[inline]
pub fn sub_with_borrow(a: UnsignedDigit, b: UnsignedDigit, borrow: bool) -> (UnsignedDigit, bool) {
    let (difference, first) = a.overflowing_sub(b);
    let (difference, second) = difference.overflowing_sub(borrow as UnsignedDigit);

    (difference, first || second)
}

#[cfg(test)]
mod test {
    use crate::integer::big::digit::{
        add_with_carry, div_with_carry, mul_add_with_carry, mul_with_carry, sub_with_borrow,
    };

    const MAX: u64 = u64::MAX;

    #[test]
    fn multiply() {
        assert_eq!(mul_with_carry(0, 0, MAX), (0, 0));
        assert_eq!(mul_with_carry(5, 3, 4), (17, 0));
        assert_eq!(mul_with_carry(0, 1 << 32, 1 << 32), (0, 1));
        // (B - 1)^2 + (B - 1) = B^2 - B
        assert_eq!(mul_with_carry(MAX, MAX, MAX), (0, MAX));
        assert_eq!(mul_add_with_carry(MAX, MAX, MAX, MAX), (MAX, MAX));
    }

    #[test]
    fn divide() {
        assert_eq!(div_with_carry(0, 100, 7), (14, 2));
        assert_eq!(div_with_carry(1, 0, 2), (1 << 63, 0));
        assert_eq!(div_with_carry(MAX - 1, MAX, MAX), (MAX, MAX - 1));
    }

    #[test]
    #[should_panic]
    fn divide_overflow() {
        div_with_carry(7, 0, 7);
    }

    #[test]
    #[should_panic]
    fn divide_by_zero() {
        div_with_carry(0, 1, 0);
    }

    #[test]
    fn carries() {
        assert_eq!(add_with_carry(MAX, 0, true), (0, true));
        assert_eq!(add_with_carry(MAX, MAX, true), (MAX, true));
        assert_eq!(add_with_carry(1, 2, false), (3, false));
        assert_eq!(sub_with_borrow(0, 0, true), (MAX, true));
        assert_eq!(sub_with_borrow(0, MAX, true), (0, true));
        assert_eq!(sub_with_borrow(5, 3, true), (1, false));
    }
}
