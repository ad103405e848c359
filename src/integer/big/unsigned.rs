use std::cmp::Ordering;
use std::ops::{Add, Mul, Sub};

use itertools::{EitherOrBoth, Itertools};
use num::{One, Zero};
use smallvec::{smallvec, SmallVec};

use crate::error::Error;
use crate::integer::big::{cmp_slice, normalized_len, UnsignedDigit};
use crate::integer::big::digit::{add_with_carry, mul_add_with_carry, sub_with_borrow};
use crate::integer::big::division;

/// Digit storage, inline up to four digits.
pub(crate) type Digits = SmallVec<[UnsignedDigit; 4]>;

/// A big unsigned integer type.
///
/// Digits are stored least significant first and the most significant digit is never zero.
#[derive(Debug, Clone, Hash)]
pub struct Unsigned {
    data: Digits,
}

impl Unsigned {
    /// Create a magnitude from little-endian digits.
    ///
    /// Trailing zero digits are removed.
    pub fn from_digits<I: IntoIterator<Item = UnsignedDigit>>(digits: I) -> Self {
        Self::from_raw(digits.into_iter().collect())
    }

    pub(crate) fn from_raw(mut data: Digits) -> Self {
        data.truncate(normalized_len(&data));

        Self { data }
    }

    pub fn from_digit(digit: UnsignedDigit) -> Self {
        if digit == 0 {
            Self::zero()
        } else {
            Self { data: smallvec![digit] }
        }
    }

    /// Digits, least significant first, without trailing zeros.
    pub fn digits(&self) -> &[UnsignedDigit] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Value as a single digit, if it fits in one.
    pub fn to_digit(&self) -> Option<UnsignedDigit> {
        match self.data[..] {
            [] => Some(0),
            [digit] => Some(digit),
            _ => None,
        }
    }

    /// Compute `|self| - |rhs|`.
    ///
    /// # Panics
    ///
    /// When `rhs` is larger than `self`, as the difference has no magnitude.
    pub fn sub_smaller(&self, rhs: &Self) -> Self {
        assert!(*self >= *rhs, "attempt to subtract a larger magnitude");

        // Equal high digits cancel, they need not be visited.
        let mut length = self.len();
        if rhs.len() == length {
            while length > 0 && self.data[length - 1] == rhs.data[length - 1] {
                length -= 1;
            }
        }
        if length == 0 {
            return Self::zero();
        }

        let mut borrow = false;
        let mut data = self.data[..length].iter()
            .zip_longest(&rhs.data[..length.min(rhs.len())])
            .map(|pair| {
                let (left, right) = match pair {
                    EitherOrBoth::Both(&left, &right) => (left, right),
                    EitherOrBoth::Left(&left) => (left, 0),
                    EitherOrBoth::Right(_) => unreachable!("the subtrahend is not longer"),
                };
                let (difference, next) = sub_with_borrow(left, right, borrow);
                borrow = next;
                difference
            })
            .collect::<Digits>();
        debug_assert!(!borrow);

        data.truncate(normalized_len(&data));
        Self { data }
    }

    /// Compute `self * digit + addend` in place.
    ///
    /// Used to accumulate digits when reading text, one group at a time.
    pub(crate) fn mul_digit_add_assign(&mut self, digit: UnsignedDigit, addend: UnsignedDigit) {
        let mut carry = addend;
        for value in self.data.iter_mut() {
            let (low, high) = mul_add_with_carry(carry, *value, digit, 0);
            *value = low;
            carry = high;
        }
        if carry != 0 {
            self.data.push(carry);
        }
        self.data.truncate(normalized_len(&self.data));
    }

    /// Quotient and remainder of truncating division.
    ///
    /// # Errors
    ///
    /// `Error::DivisionByZero` when `divisor` is zero.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), Error> {
        let (quotient, remainder) = division::divide(self, divisor, division::Keep::Both)?;

        Ok((quotient.unwrap_or_default(), remainder.unwrap_or_default()))
    }

    /// Quotient of truncating division, the remainder is not materialized.
    ///
    /// # Errors
    ///
    /// `Error::DivisionByZero` when `divisor` is zero.
    pub fn quotient(&self, divisor: &Self) -> Result<Self, Error> {
        division::divide(self, divisor, division::Keep::Quotient)
            .map(|(quotient, _)| quotient.unwrap_or_default())
    }

    /// Remainder of truncating division, the quotient is not materialized.
    ///
    /// # Errors
    ///
    /// `Error::DivisionByZero` when `divisor` is zero.
    pub fn remainder(&self, divisor: &Self) -> Result<Self, Error> {
        division::divide(self, divisor, division::Keep::Remainder)
            .map(|(_, remainder)| remainder.unwrap_or_default())
    }

    pub(crate) fn is_even(&self) -> bool {
        self.data.first().map_or(true, |digit| digit % 2 == 0)
    }
}

impl Default for Unsigned {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq<Unsigned> for Unsigned {
    fn eq(&self, other: &Unsigned) -> bool {
        debug_assert!(self.data.last() != Some(&0));
        debug_assert!(other.data.last() != Some(&0));

        self.data == other.data
    }
}
impl Eq for Unsigned {}

impl PartialOrd for Unsigned {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Unsigned {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_slice(&self.data, &other.data)
    }
}

impl Add<&Unsigned> for &Unsigned {
    type Output = Unsigned;

    fn add(self, rhs: &Unsigned) -> Self::Output {
        if rhs.is_zero() {
            return self.clone();
        }
        if self.is_zero() {
            return rhs.clone();
        }

        let mut carry = false;
        let mut data = self.data.iter()
            .zip_longest(rhs.data.iter())
            .map(|pair| {
                let (left, right) = match pair {
                    EitherOrBoth::Both(&left, &right) => (left, right),
                    EitherOrBoth::Left(&value) | EitherOrBoth::Right(&value) => (value, 0),
                };
                let (sum, next) = add_with_carry(left, right, carry);
                carry = next;
                sum
            })
            .collect::<Digits>();
        if carry {
            data.push(1);
        }

        Unsigned { data }
    }
}

impl Add for Unsigned {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Sub<&Unsigned> for &Unsigned {
    type Output = Unsigned;

    /// # Panics
    ///
    /// When the result would be negative.
    fn sub(self, rhs: &Unsigned) -> Self::Output {
        self.sub_smaller(rhs)
    }
}

impl Mul<&Unsigned> for &Unsigned {
    type Output = Unsigned;

    fn mul(self, rhs: &Unsigned) -> Self::Output {
        if self.is_zero() || rhs.is_zero() {
            return Unsigned::zero();
        }
        if self.is_one() {
            return rhs.clone();
        }
        if rhs.is_one() {
            return self.clone();
        }

        let mut data: Digits = smallvec![0; self.len() + rhs.len()];
        for (i, &factor) in rhs.data.iter().enumerate() {
            // Multiplications by a power of the base leave whole rows empty.
            if factor == 0 {
                continue;
            }

            let mut carry = 0;
            for (j, &digit) in self.data.iter().enumerate() {
                let (low, high) = mul_add_with_carry(carry, digit, factor, data[i + j]);
                data[i + j] = low;
                carry = high;
            }
            data[i + self.len()] = carry;
        }

        data.truncate(normalized_len(&data));
        Unsigned { data }
    }
}

impl Mul for Unsigned {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl Zero for Unsigned {
    fn zero() -> Self {
        Self { data: Default::default(), }
    }

    fn set_zero(&mut self) {
        self.data.clear()
    }

    fn is_zero(&self) -> bool {
        self.data.is_empty()
    }
}

impl One for Unsigned {
    fn one() -> Self {
        Self { data: smallvec![1], }
    }

    fn set_one(&mut self) {
        self.data.clear();
        self.data.push(1);
    }

    fn is_one(&self) -> bool {
        self.data[..] == [1]
    }
}
