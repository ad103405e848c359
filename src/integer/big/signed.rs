use std::cmp::Ordering;
use std::convert::TryFrom;
use std::ops::{Add, Mul, Neg, Sub};

use num::{One, Zero};

use crate::error::Error;
use crate::integer::big::division::{self, Keep};
use crate::integer::big::radix;
use crate::integer::big::unsigned::Unsigned;
use crate::integer::big::UnsignedDigit;
use crate::integer::sign::Sign;

/// A big signed integer type.
///
/// Zero always has a `Positive` sign.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Signed {
    sign: Sign,
    magnitude: Unsigned,
}

impl Signed {
    /// Combine a sign and a magnitude.
    ///
    /// The sign is ignored when the magnitude is zero.
    pub fn new(sign: Sign, magnitude: Unsigned) -> Self {
        let sign = if magnitude.is_zero() { Sign::Positive } else { sign };

        Self { sign, magnitude }
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    pub fn magnitude(&self) -> &Unsigned {
        &self.magnitude
    }

    /// Read an optional sign followed by digits in the given radix.
    ///
    /// # Errors
    ///
    /// `Error::InvalidRadix` or `Error::MalformedLiteral`.
    pub fn from_str_radix(text: &str, radix: u32) -> Result<Self, Error> {
        let (sign, offset) = split_sign(text);

        radix::parse_magnitude(text, offset, radix)
            .map(|magnitude| Self::new(sign, magnitude))
    }

    /// Read an optional sign, an optional `0b`, `0o` or `0x` prefix and then digits in radix 10,
    /// or the radix implied by the prefix.
    ///
    /// # Errors
    ///
    /// `Error::MalformedLiteral`.
    pub fn from_str_prefixed(text: &str) -> Result<Self, Error> {
        let (sign, offset) = split_sign(text);
        let (radix, offset) = match &text.as_bytes()[offset..] {
            [b'0', b'b', ..] => (2, offset + 2),
            [b'0', b'o', ..] => (8, offset + 2),
            [b'0', b'x', ..] => (16, offset + 2),
            _ => (10, offset),
        };

        radix::parse_magnitude(text, offset, radix)
            .map(|magnitude| Self::new(sign, magnitude))
    }

    /// Write in the given radix, with a leading `-` for negative values.
    ///
    /// # Errors
    ///
    /// `Error::InvalidRadix` for a radix outside of `[2, 36]`.
    pub fn to_str_radix(&self, radix: u32) -> Result<String, Error> {
        let digits = radix::format_magnitude(&self.magnitude, radix)?;

        Ok(match self.sign {
            Sign::Positive => digits,
            Sign::Negative => format!("-{}", digits),
        })
    }

    /// Quotient and remainder of truncating division.
    ///
    /// The quotient is rounded towards zero, the remainder has the sign of the dividend.
    ///
    /// # Errors
    ///
    /// `Error::DivisionByZero` when `divisor` is zero.
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), Error> {
        let (quotient, remainder) = division::divide(&self.magnitude, &divisor.magnitude, Keep::Both)?;

        Ok((
            Self::new(self.sign * divisor.sign, quotient.unwrap_or_default()),
            Self::new(self.sign, remainder.unwrap_or_default()),
        ))
    }

    /// Quotient of truncating division.
    ///
    /// # Errors
    ///
    /// `Error::DivisionByZero` when `divisor` is zero.
    pub fn quotient(&self, divisor: &Self) -> Result<Self, Error> {
        let (quotient, _) = division::divide(&self.magnitude, &divisor.magnitude, Keep::Quotient)?;

        Ok(Self::new(self.sign * divisor.sign, quotient.unwrap_or_default()))
    }

    /// Remainder of truncating division, it has the sign of the dividend.
    ///
    /// # Errors
    ///
    /// `Error::DivisionByZero` when `divisor` is zero.
    pub fn remainder(&self, divisor: &Self) -> Result<Self, Error> {
        let (_, remainder) = division::divide(&self.magnitude, &divisor.magnitude, Keep::Remainder)?;

        Ok(Self::new(self.sign, remainder.unwrap_or_default()))
    }

    /// Binary exponentiation, scanning the exponent from the least significant bit.
    pub fn pow(&self, mut exponent: u64) -> Self {
        let mut accumulator = Self::one();
        if exponent == 0 {
            return accumulator;
        }

        let mut power = self.clone();
        while exponent >= 2 {
            if exponent % 2 == 1 {
                accumulator = &accumulator * &power;
            }
            exponent /= 2;
            power = &power * &power;
        }

        &accumulator * &power
    }

    pub(crate) fn is_odd(&self) -> bool {
        !self.magnitude.is_even()
    }

    /// Value as an `i64`, if it fits.
    pub fn to_i64(&self) -> Option<i64> {
        let digit = self.magnitude.to_digit()?;
        match self.sign {
            Sign::Positive => i64::try_from(digit).ok(),
            Sign::Negative if digit <= i64::MIN.unsigned_abs() => Some((digit as i64).wrapping_neg()),
            Sign::Negative => None,
        }
    }

    /// Value as a `u64`, if it fits.
    pub fn to_u64(&self) -> Option<u64> {
        match self.sign {
            Sign::Positive => self.magnitude.to_digit(),
            Sign::Negative => None,
        }
    }

    /// Nearest `f64`.
    ///
    /// Correctly rounded: the two most significant digits hold more bits than the mantissa, and the
    /// remaining digits only matter for rounding, so they are folded into a single sticky bit.
    /// Values beyond the range of `f64` become infinite.
    pub fn to_f64(&self) -> f64 {
        let digits = self.magnitude.digits();
        let magnitude = match digits.len() {
            0 => 0_f64,
            1 => digits[0] as f64,
            length => {
                let high = digits[length - 1] as u128;
                let low = digits[length - 2] as u128;
                let sticky = digits[..length - 2].iter().any(|&digit| digit != 0) as u128;
                let top = (high << UnsignedDigit::BITS | low) | sticky;

                let exponent = (UnsignedDigit::BITS as usize * (length - 2)).min(i32::MAX as usize);
                (top as f64) * 2_f64.powi(exponent as i32)
            },
        };

        match self.sign {
            Sign::Positive => magnitude,
            Sign::Negative => -magnitude,
        }
    }

    /// Add or subtract, comparing the magnitudes once.
    fn add_or_subtract(&self, rhs: &Self, rhs_sign: Sign) -> Self {
        let (larger, larger_sign, smaller) = match self.magnitude.cmp(&rhs.magnitude) {
            Ordering::Less => (&rhs.magnitude, rhs_sign, &self.magnitude),
            Ordering::Equal | Ordering::Greater => (&self.magnitude, self.sign, &rhs.magnitude),
        };

        let magnitude = if self.sign == rhs_sign {
            larger + smaller
        } else {
            larger.sub_smaller(smaller)
        };

        Self::new(larger_sign, magnitude)
    }
}

impl From<i64> for Signed {
    fn from(value: i64) -> Self {
        let sign = if value < 0 { Sign::Negative } else { Sign::Positive };

        Self::new(sign, Unsigned::from_digit(value.unsigned_abs()))
    }
}

impl From<u64> for Signed {
    fn from(value: u64) -> Self {
        Self::new(Sign::Positive, Unsigned::from_digit(value))
    }
}

impl From<i128> for Signed {
    fn from(value: i128) -> Self {
        let sign = if value < 0 { Sign::Negative } else { Sign::Positive };
        let magnitude = value.unsigned_abs();

        Self::new(sign, Unsigned::from_digits([magnitude as UnsignedDigit, (magnitude >> UnsignedDigit::BITS) as UnsignedDigit]))
    }
}

impl From<u128> for Signed {
    fn from(value: u128) -> Self {
        Self::new(
            Sign::Positive,
            Unsigned::from_digits([value as UnsignedDigit, (value >> UnsignedDigit::BITS) as UnsignedDigit]),
        )
    }
}

impl PartialOrd for Signed {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Signed {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.sign.cmp(&other.sign) {
            Ordering::Equal => match self.sign {
                Sign::Positive => self.magnitude.cmp(&other.magnitude),
                Sign::Negative => other.magnitude.cmp(&self.magnitude),
            },
            unequal => unequal,
        }
    }
}

impl Add<&Signed> for &Signed {
    type Output = Signed;

    fn add(self, rhs: &Signed) -> Self::Output {
        self.add_or_subtract(rhs, rhs.sign)
    }
}

impl Sub<&Signed> for &Signed {
    type Output = Signed;

    fn sub(self, rhs: &Signed) -> Self::Output {
        self.add_or_subtract(rhs, -rhs.sign)
    }
}

impl Mul<&Signed> for &Signed {
    type Output = Signed;

    fn mul(self, rhs: &Signed) -> Self::Output {
        Signed::new(self.sign * rhs.sign, &self.magnitude * &rhs.magnitude)
    }
}

impl Neg for &Signed {
    type Output = Signed;

    fn neg(self) -> Self::Output {
        Signed::new(-self.sign, self.magnitude.clone())
    }
}

impl Neg for Signed {
    type Output = Signed;

    fn neg(self) -> Self::Output {
        Signed::new(-self.sign, self.magnitude)
    }
}

impl Add for Signed {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

impl Mul for Signed {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}

impl Zero for Signed {
    fn zero() -> Self {
        Self {
            sign: Sign::Positive,
            magnitude: Unsigned::zero(),
        }
    }

    fn set_zero(&mut self) {
        self.sign = Sign::Positive;
        self.magnitude.set_zero();
    }

    fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }
}

impl One for Signed {
    fn one() -> Self {
        Self {
            sign: Sign::Positive,
            magnitude: Unsigned::one(),
        }
    }
}

/// Strip a leading `+` or `-`, returning the sign and the offset of the remaining text.
fn split_sign(text: &str) -> (Sign, usize) {
    match text.as_bytes().first() {
        Some(b'-') => (Sign::Negative, 1),
        Some(b'+') => (Sign::Positive, 1),
        _ => (Sign::Positive, 0),
    }
}
