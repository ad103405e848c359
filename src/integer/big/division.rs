//! # Long division
//!
//! Knuth's normalized long division (The Art of Computer Programming, Vol. 2, 4.3.1, Algorithm D).
//!
//! The divisor is scaled such that its leading digit is at least half the base. Under that
//! condition, a trial quotient digit computed from the leading digits of the running remainder is
//! never too small and at most two too large; the rare overestimate is repaired by adding the
//! divisor back.
use std::cmp::Ordering;

use num::{One, Zero};
use smallvec::smallvec;

use crate::error::Error;
use crate::integer::big::{DIGIT_BITS, DoubleDigit, normalized_len, UnsignedDigit};
use crate::integer::big::digit::{add_with_carry, div_with_carry, mul_with_carry, sub_with_borrow};
use crate::integer::big::unsigned::{Digits, Unsigned};

/// Which results of a division should be materialized.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Keep {
    Quotient,
    Remainder,
    Both,
}

impl Keep {
    fn quotient(self) -> bool {
        self != Keep::Remainder
    }

    fn remainder(self) -> bool {
        self != Keep::Quotient
    }
}

/// Divide two magnitudes.
///
/// Results that were not asked for are `None`. Results that were asked for are always `Some`.
///
/// # Errors
///
/// `Error::DivisionByZero` if the divisor is zero.
pub fn divide(
    dividend: &Unsigned,
    divisor: &Unsigned,
    keep: Keep,
) -> Result<(Option<Unsigned>, Option<Unsigned>), Error> {
    if divisor.is_zero() {
        return Err(Error::DivisionByZero);
    }

    let wrap = |quotient: Unsigned, remainder: Unsigned| (
        if keep.quotient() { Some(quotient) } else { None },
        if keep.remainder() { Some(remainder) } else { None },
    );

    if dividend.is_zero() {
        return Ok(wrap(Unsigned::zero(), Unsigned::zero()));
    }
    if divisor.is_one() {
        return Ok(wrap(dividend.clone(), Unsigned::zero()));
    }
    match dividend.cmp(divisor) {
        Ordering::Less => return Ok(wrap(Unsigned::zero(), dividend.clone())),
        Ordering::Equal => return Ok(wrap(Unsigned::one(), Unsigned::zero())),
        Ordering::Greater => {},
    }

    if let [digit] = divisor.digits()[..] {
        let mut quotient = Digits::from_slice(dividend.digits());
        let remainder = divide_digit_in_place(&mut quotient, digit);
        return Ok(wrap(Unsigned::from_raw(quotient), Unsigned::from_digit(remainder)));
    }

    let (quotient, remainder) = algorithm_d(dividend.digits(), divisor.digits(), keep);
    Ok((quotient, remainder))
}

/// Divide digits in place by a single nonzero digit, returning the remainder.
///
/// Digits are processed from the most significant one down. The slice is not normalized
/// afterwards.
pub(crate) fn divide_digit_in_place(digits: &mut [UnsignedDigit], divisor: UnsignedDigit) -> UnsignedDigit {
    debug_assert_ne!(divisor, 0);

    let mut remainder = 0;
    for digit in digits.iter_mut().rev() {
        let (quotient, next) = div_with_carry(remainder, *digit, divisor);
        *digit = quotient;
        remainder = next;
    }

    remainder
}

/// Scale digits by a single digit factor, returning the outgoing carry.
fn scale_in_place(digits: &mut [UnsignedDigit], factor: UnsignedDigit) -> UnsignedDigit {
    let mut carry = 0;
    for digit in digits.iter_mut() {
        let (low, high) = mul_with_carry(carry, *digit, factor);
        *digit = low;
        carry = high;
    }

    carry
}

/// Algorithm D proper.
///
/// Requires a divisor of at least two digits and a dividend that is not smaller than the divisor.
fn algorithm_d(
    dividend: &[UnsignedDigit],
    divisor: &[UnsignedDigit],
    keep: Keep,
) -> (Option<Unsigned>, Option<Unsigned>) {
    let n = divisor.len();
    let m = dividend.len();
    debug_assert!(n >= 2 && m >= n);

    // D1. Normalize.
    let lambda: UnsignedDigit = 1 << divisor[n - 1].leading_zeros();
    let mut divisor = Digits::from_slice(divisor);
    let carry = scale_in_place(&mut divisor, lambda);
    debug_assert_eq!(carry, 0);
    // One digit extra for the carry of the scaled dividend.
    let mut remainder: Digits = smallvec![0; m + 1];
    remainder[..m].copy_from_slice(dividend);
    remainder[m] = scale_in_place(&mut remainder[..m], lambda);

    let top = divisor[n - 1];
    let second = divisor[n - 2];
    assert!(top >= 1 << (DIGIT_BITS - 1), "divisor was not normalized");
    log::trace!("Long division of {} by {} digits, normalized with factor {}", m, n, lambda);

    // Low zero digits of the divisor leave the remainder unchanged when subtracting.
    let first_nonzero = divisor.iter().position(|&digit| digit != 0).unwrap_or(n - 1);

    let mut quotient: Option<Digits> = None;
    for i in (0..=(m - n)).rev() {
        let t = i + n;

        // D3. Estimate the quotient digit from the top of the running remainder.
        let (mut estimate, mut rest) = if remainder[t] < top {
            let (estimate, rest) = div_with_carry(remainder[t], remainder[t - 1], top);
            (estimate, rest as DoubleDigit)
        } else {
            debug_assert_eq!(remainder[t], top);
            (UnsignedDigit::MAX, remainder[t - 1] as DoubleDigit + top as DoubleDigit)
        };
        while rest >> DIGIT_BITS == 0
            && estimate as DoubleDigit * second as DoubleDigit > rest << DIGIT_BITS | remainder[t - 2] as DoubleDigit
        {
            estimate -= 1;
            rest += top as DoubleDigit;
        }

        // D4. Multiply and subtract.
        let mut multiply_carry = 0;
        let mut borrow = false;
        for k in first_nonzero..n {
            let (low, high) = mul_with_carry(multiply_carry, estimate, divisor[k]);
            multiply_carry = high;
            let (difference, next) = sub_with_borrow(remainder[i + k], low, borrow);
            remainder[i + k] = difference;
            borrow = next;
        }
        let (difference, next) = sub_with_borrow(remainder[t], multiply_carry, borrow);
        remainder[t] = difference;
        borrow = next;

        // D6. Add back while the estimate was too large.
        while borrow {
            log::trace!("Add back at quotient position {}", i);
            estimate -= 1;
            let mut carry = false;
            for k in first_nonzero..n {
                let (sum, next) = add_with_carry(remainder[i + k], divisor[k], carry);
                remainder[i + k] = sum;
                carry = next;
            }
            let (sum, next) = add_with_carry(remainder[t], 0, carry);
            remainder[t] = sum;
            // A carry out of the top digit cancels the earlier borrow.
            borrow = !next;
        }

        // D5. Quotient digits are only stored from the first nonzero one onwards.
        if keep.quotient() && estimate != 0 {
            quotient.get_or_insert_with(|| smallvec![0; i + 1])[i] = estimate;
        }
    }

    let quotient = if keep.quotient() {
        Some(quotient.map_or_else(Unsigned::zero, Unsigned::from_raw))
    } else {
        None
    };

    let remainder = if keep.remainder() {
        // D8. Unnormalize.
        remainder.truncate(normalized_len(&remainder));
        let leftover = divide_digit_in_place(&mut remainder, lambda);
        assert_eq!(leftover, 0, "unnormalized remainder is not a multiple of {}", lambda);
        Some(Unsigned::from_raw(remainder))
    } else {
        None
    };

    (quotient, remainder)
}

#[cfg(test)]
mod test {
    use num::Zero;

    use crate::integer::big::division::{divide, divide_digit_in_place, Keep};
    use crate::integer::big::unsigned::Unsigned;
    use crate::error::Error;

    const MAX: u64 = u64::MAX;

    fn u(digits: &[u64]) -> Unsigned {
        Unsigned::from_digits(digits.iter().copied())
    }

    fn check(dividend: &Unsigned, divisor: &Unsigned) {
        let (quotient, remainder) = dividend.div_rem(divisor).unwrap();
        assert!(remainder < *divisor);
        assert_eq!(&(&quotient * divisor) + &remainder, *dividend);
        assert_eq!(dividend.quotient(divisor).unwrap(), quotient);
        assert_eq!(dividend.remainder(divisor).unwrap(), remainder);
    }

    #[test]
    fn by_zero() {
        assert_eq!(divide(&u(&[1]), &Unsigned::zero(), Keep::Both), Err(Error::DivisionByZero));
        assert_eq!(divide(&Unsigned::zero(), &Unsigned::zero(), Keep::Quotient), Err(Error::DivisionByZero));
    }

    #[test]
    fn shortcuts() {
        assert_eq!(u(&[100]).div_rem(&u(&[7])).unwrap(), (u(&[14]), u(&[2])));
        assert_eq!(u(&[3, 4]).div_rem(&u(&[1])).unwrap(), (u(&[3, 4]), Unsigned::zero()));
        assert_eq!(u(&[3, 4]).div_rem(&u(&[3, 5])).unwrap(), (Unsigned::zero(), u(&[3, 4])));
        assert_eq!(u(&[3, 4]).div_rem(&u(&[3, 4])).unwrap(), (u(&[1]), Unsigned::zero()));
        assert_eq!(Unsigned::zero().div_rem(&u(&[3, 4])).unwrap(), (Unsigned::zero(), Unsigned::zero()));
    }

    #[test]
    fn keep() {
        assert_eq!(divide(&u(&[0, 5]), &u(&[1, 2]), Keep::Quotient).unwrap().1, None);
        assert_eq!(divide(&u(&[0, 5]), &u(&[1, 2]), Keep::Remainder).unwrap().0, None);
        assert!(divide(&u(&[7]), &u(&[1]), Keep::Both).unwrap().1.unwrap().is_zero());
    }

    #[test]
    fn single_digit() {
        check(&u(&[0, 0, 1]), &u(&[3]));
        check(&u(&[MAX, MAX, MAX]), &u(&[MAX]));
        check(&u(&[12345, 0, 987654321]), &u(&[10_000_000_000_000_000_000]));
    }

    #[test]
    fn multi_digit() {
        check(&u(&[0, 0, 1]), &u(&[1, 1]));
        check(&u(&[MAX, MAX, MAX, MAX]), &u(&[MAX, MAX]));
        check(&u(&[1, 2, 3, 4, 5]), &u(&[6, 7]));
        check(&u(&[0, 0, 0, 1 << 63]), &u(&[1, 1 << 63]));
        // Divisor with low zero digits
        check(&u(&[5, 6, 7, 8]), &u(&[0, 0, 3]));
        check(&u(&[1, 2, 3]), &u(&[0, 1 << 40]));
        // Leading zero quotient digits
        check(&u(&[MAX, MAX, 1]), &u(&[MAX, MAX]));
    }

    #[test]
    fn add_back() {
        const HALF: u64 = 1 << 63;

        check(&u(&[0, 0, HALF, HALF - 1]), &u(&[1, 0, HALF]));
        check(&u(&[0, MAX - 1, HALF]), &u(&[MAX, HALF]));
        check(&u(&[3, 0, HALF]), &u(&[1, 0, HALF >> 2]));

        let (quotient, remainder) = u(&[0, 0, HALF, HALF - 1]).div_rem(&u(&[1, 0, HALF])).unwrap();
        assert_eq!(quotient, u(&[MAX - 1]));
        assert_eq!(remainder, u(&[2, MAX, HALF - 1]));
    }

    #[test]
    fn exact_multiple() {
        let divisor = u(&[MAX, 12, 1 << 20]);
        let quotient = u(&[7, 0, MAX]);
        let (q, r) = (&quotient * &divisor).div_rem(&divisor).unwrap();
        assert_eq!(q, quotient);
        assert!(r.is_zero());
    }

    #[test]
    fn short_division() {
        let mut digits = [0, 1];
        assert_eq!(divide_digit_in_place(&mut digits, 2), 0);
        assert_eq!(digits, [1 << 63, 0]);

        let mut digits = [7];
        assert_eq!(divide_digit_in_place(&mut digits, 10), 7);
        assert_eq!(digits, [0]);
    }
}
