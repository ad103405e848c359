//! # Integers
//!
//! Arbitrary precision integers with a fast path: values that fit an `i64` are stored as one, and
//! arithmetic on them uses the native checked operations. Only when such an operation overflows,
//! or when an operand is already big, the digit vector representation of the `big` module is used.
//! Results are moved back to the native representation whenever they fit.
use std::borrow::Cow;
use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};
use std::str::FromStr;

use num::{Num, One, ToPrimitive, Zero};

use crate::error::Error;
use crate::integer::big::radix;
use crate::integer::big::signed::Signed;
use crate::integer::sign::Sign;

pub mod big;
pub mod sign;
mod power;

/// Largest integer `n` such that all integers in `[-n, n]` are exactly representable as an `f64`.
pub const MAX_EXACT_F64: i64 = (1 << f64::MANTISSA_DIGITS) - 1;

/// An arbitrary precision signed integer.
///
/// Immutable: every operation creates a new value.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Integer {
    repr: Repr,
}

/// Values that fit an `i64` are always `Small`, which makes the representation unique.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
enum Repr {
    Small(i64),
    Big(Signed),
}

impl Integer {
    const fn small(value: i64) -> Self {
        Self { repr: Repr::Small(value) }
    }

    /// Whether the value is stored as a native integer rather than as a digit vector.
    pub fn is_small(&self) -> bool {
        matches!(self.repr, Repr::Small(_))
    }

    /// Digit vector form, borrowed when the value is already big.
    pub fn to_signed(&self) -> Cow<'_, Signed> {
        match &self.repr {
            Repr::Small(value) => Cow::Owned(Signed::from(*value)),
            Repr::Big(value) => Cow::Borrowed(value),
        }
    }

    /// Read an optional sign followed by digits in the given radix.
    ///
    /// Letters are case insensitive. No `0x`-style prefix is recognized.
    ///
    /// # Errors
    ///
    /// `Error::InvalidRadix` if the radix is not in `[2, 36]`, `Error::MalformedLiteral` if there
    /// are no digits or a character is not a digit in the radix.
    pub fn from_str_radix(text: &str, radix: u32) -> Result<Self, Error> {
        Signed::from_str_radix(text, radix).map(Self::from)
    }

    /// Write the value in the given radix, with lowercase letters and a leading `-` if negative.
    ///
    /// # Errors
    ///
    /// `Error::InvalidRadix` if the radix is not in `[2, 36]`.
    pub fn to_str_radix(&self, radix: u32) -> Result<String, Error> {
        self.to_signed().to_str_radix(radix)
    }

    /// Truncating division, rounding towards zero.
    ///
    /// # Errors
    ///
    /// `Error::DivisionByZero` if `divisor` is zero.
    pub fn checked_div(&self, divisor: &Self) -> Result<Self, Error> {
        if let (Repr::Small(a), Repr::Small(b)) = (&self.repr, &divisor.repr) {
            if *b == 0 {
                return Err(Error::DivisionByZero);
            }
            if let Some(quotient) = a.checked_div(*b) {
                return Ok(Self::small(quotient));
            }
            overflowed("division", *a, *b);
        }

        self.to_signed().quotient(&divisor.to_signed()).map(Self::from)
    }

    /// Remainder of truncating division, it has the sign of `self`.
    ///
    /// # Errors
    ///
    /// `Error::DivisionByZero` if `divisor` is zero.
    pub fn checked_rem(&self, divisor: &Self) -> Result<Self, Error> {
        if let (Repr::Small(a), Repr::Small(b)) = (&self.repr, &divisor.repr) {
            if *b == 0 {
                return Err(Error::DivisionByZero);
            }
            // Only `i64::MIN % -1` overflows, its remainder is zero.
            return Ok(Self::small(a.checked_rem(*b).unwrap_or(0)));
        }

        self.to_signed().remainder(&divisor.to_signed()).map(Self::from)
    }

    /// Quotient and remainder of truncating division.
    ///
    /// # Errors
    ///
    /// `Error::DivisionByZero` if `divisor` is zero.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), Error> {
        if let (Repr::Small(a), Repr::Small(b)) = (&self.repr, &divisor.repr) {
            if *b == 0 {
                return Err(Error::DivisionByZero);
            }
            if let (Some(quotient), Some(remainder)) = (a.checked_div(*b), a.checked_rem(*b)) {
                return Ok((Self::small(quotient), Self::small(remainder)));
            }
            overflowed("division", *a, *b);
        }

        let (quotient, remainder) = self.to_signed().div_rem(&divisor.to_signed())?;
        Ok((Self::from(quotient), Self::from(remainder)))
    }

    /// Whether `x < 0`.
    pub fn is_negative(&self) -> bool {
        match &self.repr {
            Repr::Small(value) => *value < 0,
            Repr::Big(value) => value.sign() == Sign::Negative,
        }
    }

    /// Whether `x > 0`.
    pub fn is_positive(&self) -> bool {
        !self.is_negative() && !self.is_zero()
    }

    /// Sign of the value, `Positive` for zero.
    pub fn sign(&self) -> Sign {
        if self.is_negative() { Sign::Negative } else { Sign::Positive }
    }

    pub fn abs(&self) -> Self {
        if self.is_negative() { -self } else { self.clone() }
    }

    pub fn signum(&self) -> Self {
        match &self.repr {
            Repr::Small(value) => Self::small(value.signum()),
            Repr::Big(value) => match value.sign() {
                Sign::Positive => Self::one(),
                Sign::Negative => Self::small(-1),
            },
        }
    }

    fn add_ref(&self, rhs: &Self) -> Self {
        if let (Repr::Small(a), Repr::Small(b)) = (&self.repr, &rhs.repr) {
            match a.checked_add(*b) {
                Some(sum) => return Self::small(sum),
                None => overflowed("addition", *a, *b),
            }
        }

        Self::from(&*self.to_signed() + &*rhs.to_signed())
    }

    fn sub_ref(&self, rhs: &Self) -> Self {
        if let (Repr::Small(a), Repr::Small(b)) = (&self.repr, &rhs.repr) {
            match a.checked_sub(*b) {
                Some(difference) => return Self::small(difference),
                None => overflowed("subtraction", *a, *b),
            }
        }

        Self::from(&*self.to_signed() - &*rhs.to_signed())
    }

    fn mul_ref(&self, rhs: &Self) -> Self {
        if let (Repr::Small(a), Repr::Small(b)) = (&self.repr, &rhs.repr) {
            match a.checked_mul(*b) {
                Some(product) => return Self::small(product),
                None => overflowed("multiplication", *a, *b),
            }
        }

        Self::from(&*self.to_signed() * &*rhs.to_signed())
    }

    /// # Panics
    ///
    /// When dividing by zero, like the primitive integer types.
    fn div_ref(&self, rhs: &Self) -> Self {
        match self.checked_div(rhs) {
            Ok(quotient) => quotient,
            Err(error) => panic!("{}", error),
        }
    }

    /// # Panics
    ///
    /// When dividing by zero, like the primitive integer types.
    fn rem_ref(&self, rhs: &Self) -> Self {
        match self.checked_rem(rhs) {
            Ok(remainder) => remainder,
            Err(error) => panic!("{}", error),
        }
    }
}

fn overflowed(operation: &str, a: i64, b: i64) {
    log::trace!("{} of {} and {} overflows i64, using digit vectors", operation, a, b);
}

impl From<Signed> for Integer {
    fn from(value: Signed) -> Self {
        match value.to_i64() {
            Some(small) => Self::small(small),
            None => Self { repr: Repr::Big(value) },
        }
    }
}

macro_rules! from_small {
    ($t:ty) => {
        impl From<$t> for Integer {
            fn from(value: $t) -> Self {
                Self::small(value as i64)
            }
        }
    }
}

from_small!(i8);
from_small!(u8);
from_small!(i16);
from_small!(u16);
from_small!(i32);
from_small!(u32);
from_small!(i64);

macro_rules! from_wide {
    ($t:ty, $via:ty) => {
        impl From<$t> for Integer {
            fn from(value: $t) -> Self {
                Self::from(Signed::from(value as $via))
            }
        }
    }
}

from_wide!(u64, u64);
from_wide!(isize, i64);
from_wide!(usize, u64);
from_wide!(i128, i128);
from_wide!(u128, u128);

impl TryFrom<f64> for Integer {
    type Error = Error;

    /// Accepts finite integral values with a magnitude of at most `MAX_EXACT_F64`.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value.is_finite() && value.trunc() == value && value.abs() <= MAX_EXACT_F64 as f64 {
            Ok(Self::small(value as i64))
        } else {
            Err(Error::InexactNumber(value))
        }
    }
}

impl ToPrimitive for Integer {
    fn to_i64(&self) -> Option<i64> {
        match &self.repr {
            Repr::Small(value) => Some(*value),
            Repr::Big(_) => None,
        }
    }

    fn to_u64(&self) -> Option<u64> {
        match &self.repr {
            Repr::Small(value) => u64::try_from(*value).ok(),
            Repr::Big(value) => value.to_u64(),
        }
    }

    /// Lossy for magnitudes beyond `MAX_EXACT_F64`, but correctly rounded.
    fn to_f64(&self) -> Option<f64> {
        Some(match &self.repr {
            Repr::Small(value) => *value as f64,
            Repr::Big(value) => value.to_f64(),
        })
    }
}

impl FromStr for Integer {
    type Err = Error;

    /// Read an optional sign, an optional `0b`, `0o` or `0x` prefix and digits.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Signed::from_str_prefixed(text).map(Self::from)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Small(value) => fmt::Display::fmt(value, f),
            Repr::Big(value) => {
                let digits = radix::format_magnitude(value.magnitude(), 10).map_err(|_| fmt::Error)?;
                f.pad_integral(value.sign() == Sign::Positive, "", &digits)
            },
        }
    }
}

macro_rules! format_radix {
    ($t:ident, $radix:expr, $prefix:expr, $uppercase:expr) => {
        impl fmt::$t for Integer {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let signed = self.to_signed();
                let mut digits = radix::format_magnitude(signed.magnitude(), $radix)
                    .map_err(|_| fmt::Error)?;
                if $uppercase {
                    digits.make_ascii_uppercase();
                }
                f.pad_integral(signed.sign() == Sign::Positive, $prefix, &digits)
            }
        }
    }
}

format_radix!(Binary, 2, "0b", false);
format_radix!(Octal, 8, "0o", false);
format_radix!(LowerHex, 16, "0x", false);
format_radix!(UpperHex, 16, "0x", true);

impl PartialOrd for Integer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Integer {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.repr, &other.repr) {
            (Repr::Small(a), Repr::Small(b)) => a.cmp(b),
            _ => Ord::cmp(&*self.to_signed(), &*other.to_signed()),
        }
    }
}

macro_rules! binary_operation {
    ($t:ident, $method:ident, $assign_t:ident, $assign_method:ident, $implementation:ident) => {
        impl $t<&Integer> for &Integer {
            type Output = Integer;

            fn $method(self, rhs: &Integer) -> Self::Output {
                self.$implementation(rhs)
            }
        }

        impl $t<Integer> for &Integer {
            type Output = Integer;

            fn $method(self, rhs: Integer) -> Self::Output {
                self.$implementation(&rhs)
            }
        }

        impl $t<&Integer> for Integer {
            type Output = Integer;

            fn $method(self, rhs: &Integer) -> Self::Output {
                self.$implementation(rhs)
            }
        }

        impl $t for Integer {
            type Output = Integer;

            fn $method(self, rhs: Integer) -> Self::Output {
                self.$implementation(&rhs)
            }
        }

        impl $t<i64> for Integer {
            type Output = Integer;

            fn $method(self, rhs: i64) -> Self::Output {
                self.$implementation(&Integer::small(rhs))
            }
        }

        impl $t<i64> for &Integer {
            type Output = Integer;

            fn $method(self, rhs: i64) -> Self::Output {
                self.$implementation(&Integer::small(rhs))
            }
        }

        impl $assign_t<&Integer> for Integer {
            fn $assign_method(&mut self, rhs: &Integer) {
                *self = self.$implementation(rhs);
            }
        }

        impl $assign_t for Integer {
            fn $assign_method(&mut self, rhs: Integer) {
                *self = self.$implementation(&rhs);
            }
        }
    }
}

binary_operation!(Add, add, AddAssign, add_assign, add_ref);
binary_operation!(Sub, sub, SubAssign, sub_assign, sub_ref);
binary_operation!(Mul, mul, MulAssign, mul_assign, mul_ref);
binary_operation!(Div, div, DivAssign, div_assign, div_ref);
binary_operation!(Rem, rem, RemAssign, rem_assign, rem_ref);

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Self::Output {
        match &self.repr {
            Repr::Small(value) => negate_small(*value),
            Repr::Big(value) => Integer::from(-value),
        }
    }
}

impl Neg for Integer {
    type Output = Integer;

    fn neg(self) -> Self::Output {
        match self.repr {
            Repr::Small(value) => negate_small(value),
            Repr::Big(value) => Integer::from(-value),
        }
    }
}

fn negate_small(value: i64) -> Integer {
    match value.checked_neg() {
        Some(negated) => Integer::small(negated),
        None => Integer::from(-Signed::from(value)),
    }
}

impl Sum for Integer {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |total, value| total + value)
    }
}

impl<'a> Sum<&'a Integer> for Integer {
    fn sum<I: Iterator<Item = &'a Integer>>(iter: I) -> Self {
        iter.fold(Self::zero(), |total, value| total + value)
    }
}

impl Product for Integer {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |total, value| total * value)
    }
}

impl<'a> Product<&'a Integer> for Integer {
    fn product<I: Iterator<Item = &'a Integer>>(iter: I) -> Self {
        iter.fold(Self::one(), |total, value| total * value)
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self::small(0)
    }

    fn is_zero(&self) -> bool {
        self.repr == Repr::Small(0)
    }
}

impl One for Integer {
    fn one() -> Self {
        Self::small(1)
    }

    fn is_one(&self) -> bool {
        self.repr == Repr::Small(1)
    }
}

impl Num for Integer {
    type FromStrRadixErr = Error;

    fn from_str_radix(text: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        Signed::from_str_radix(text, radix).map(Self::from)
    }
}

impl Default for Integer {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod test {
    use std::convert::TryFrom;

    use num::{Num, One, ToPrimitive, Zero};

    use crate::error::Error;
    use crate::integer::{Integer, MAX_EXACT_F64};
    use crate::integer::sign::Sign;

    fn i(text: &str) -> Integer {
        text.parse().unwrap()
    }

    #[test]
    fn representation() {
        assert!(i("9223372036854775807").is_small());
        assert!(i("-9223372036854775808").is_small());
        assert!(!i("9223372036854775808").is_small());
        assert!(!i("-9223372036854775809").is_small());
        assert!(Integer::from(u64::MAX).to_signed().magnitude().len() == 1);
    }

    #[test]
    fn promote_and_demote() {
        let max = Integer::from(i64::MAX);
        let sum = &max + 1;
        assert!(!sum.is_small());
        assert_eq!(sum.to_string(), "9223372036854775808");
        let back = sum - 1;
        assert!(back.is_small());
        assert_eq!(back, max);

        let min = Integer::from(i64::MIN);
        assert!(!(-&min).is_small());
        assert_eq!((-&min).to_string(), "9223372036854775808");
        assert_eq!(-(-&min), min);
        assert_eq!((&min * -1).to_string(), "9223372036854775808");
        assert_eq!((&min / -1).to_string(), "9223372036854775808");
        assert_eq!(&min % -1, Integer::zero());
        assert_eq!(min.div_rem(&Integer::from(-1)).unwrap().0.to_string(), "9223372036854775808");
    }

    #[test]
    fn scenarios() {
        assert_eq!((i("9007199254740991") + i("1")).to_string(), "9007199254740992");
        assert_eq!(
            (i("123456789012345678901234567890") * i("2")).to_string(),
            "246913578024691357802469135780",
        );
        assert_eq!(i("100") / i("7"), Integer::from(14));
        assert_eq!(i("100") % i("7"), Integer::from(2));
        assert_eq!(Integer::from_str_radix("-ff", 16).unwrap().to_string(), "-255");
        assert_eq!(i("5").checked_div(&i("0")), Err(Error::DivisionByZero));
        assert_eq!(i("5").checked_rem(&i("0")), Err(Error::DivisionByZero));
        assert_eq!(i("2").checked_pow(&i("10")).unwrap().to_string(), "1024");
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn divide_by_zero_operator() {
        let _ = i("18446744073709551616") / i("0");
    }

    #[test]
    fn mixed_division() {
        let big = i("-340282366920938463463374607431768211457");
        assert_eq!(big.checked_div(&i("18446744073709551616")).unwrap().to_string(), "-18446744073709551616");
        assert_eq!(big.checked_rem(&i("18446744073709551616")).unwrap(), Integer::from(-1));
        assert_eq!(i("7").checked_div(&big), Ok(Integer::zero()));
        assert_eq!(i("-7").checked_rem(&big), Ok(Integer::from(-7)));
    }

    #[test]
    fn order() {
        let mut values = vec![
            i("18446744073709551616"), i("-1"), i("0"), i("-18446744073709551616"), i("5"),
            i("-9223372036854775809"),
        ];
        values.sort();
        let texts = values.iter().map(ToString::to_string).collect::<Vec<_>>();
        assert_eq!(texts, [
            "-18446744073709551616", "-9223372036854775809", "-1", "0", "5", "18446744073709551616",
        ]);
        assert!(i("-0") == i("0"));
    }

    #[test]
    fn formatting() {
        let big = i("-18446744073709551616");
        assert_eq!(format!("{:>25}", big), "    -18446744073709551616");
        assert_eq!(format!("{:x}", big), "-10000000000000000");
        assert_eq!(format!("{:#X}", i("-255")), "-0xFF");
        assert_eq!(format!("{:#b}", i("5")), "0b101");
        assert_eq!(format!("{:o}", i("8")), "10");
        assert_eq!(format!("{:05}", i("-42")), "-0042");
        assert_eq!(i("-255").to_str_radix(36), Ok("-73".to_string()));
        assert_eq!(i("1").to_str_radix(1), Err(Error::InvalidRadix(1)));
    }

    #[test]
    fn parsing() {
        assert_eq!(i("-0x10"), Integer::from(-16));
        assert_eq!(i("+0b11"), Integer::from(3));
        assert_eq!(i("-0"), Integer::zero());
        assert!(!i("-0").is_negative());
        assert!("".parse::<Integer>().is_err());
        assert!("12a".parse::<Integer>().is_err());
        assert_eq!(<Integer as Num>::from_str_radix("Zz", 36), Ok(Integer::from(35 * 36 + 35)));
    }

    #[test]
    fn native_numbers() {
        assert_eq!(Integer::try_from(9007199254740991_f64), Ok(Integer::from(MAX_EXACT_F64)));
        assert_eq!(Integer::try_from(-3_f64), Ok(Integer::from(-3)));
        assert_eq!(Integer::try_from(-0_f64), Ok(Integer::zero()));
        assert_eq!(Integer::try_from(9007199254740992_f64), Err(Error::InexactNumber(9007199254740992_f64)));
        assert_eq!(Integer::try_from(0.5), Err(Error::InexactNumber(0.5)));
        assert!(Integer::try_from(f64::NAN).is_err());
        assert!(Integer::try_from(f64::INFINITY).is_err());

        assert_eq!(i("-12").to_f64(), Some(-12_f64));
        assert_eq!(i("18446744073709551616").to_f64(), Some(18446744073709551616_f64));
        assert_eq!(i("18446744073709551615").to_u64(), Some(u64::MAX));
        assert_eq!(i("18446744073709551616").to_u64(), None);
        assert_eq!(i("-1").to_u64(), None);
        assert_eq!(i("18446744073709551615").to_i64(), None);
        assert_eq!(Integer::from(u128::MAX).to_string(), "340282366920938463463374607431768211455");
        assert_eq!(Integer::from(-5_i128), Integer::from(-5));
        assert!(Integer::from(-5_i128).is_small());
    }

    #[test]
    fn signs() {
        assert_eq!(i("-18446744073709551616").signum(), Integer::from(-1));
        assert_eq!(i("0").signum(), Integer::zero());
        assert_eq!(i("-18446744073709551616").abs().to_string(), "18446744073709551616");
        assert_eq!(Integer::from(i64::MIN).abs().to_string(), "9223372036854775808");
        assert_eq!(i("-3").sign(), Sign::Negative);
        assert!(i("18446744073709551616").is_positive());
        assert!(!Integer::zero().is_positive());
    }

    #[test]
    fn assign_and_fold() {
        let mut value = Integer::one();
        for _ in 0..100 {
            value *= Integer::from(3);
        }
        value -= &Integer::one();
        value /= Integer::from(2);
        value %= i("1000000000000000000000");
        assert_eq!(value.to_string(), "882810636351053761000");

        let total: Integer = (1..=30).map(Integer::from).product();
        assert_eq!(total.to_string(), "265252859812191058636308480000000");
        let total: Integer = [i("18446744073709551615"), i("1"), i("-2")].iter().sum();
        assert_eq!(total.to_string(), "18446744073709551614");
    }
}
