//! # Exponentiation
use std::convert::TryFrom;

use num::One;
use num::traits::Pow;

use crate::error::Error;
use crate::integer::{Integer, Repr};
use crate::integer::sign::Sign;

impl Integer {
    /// Raise to a non-negative power of arbitrary size.
    ///
    /// For exponents that are known to fit a `u32`, `num::traits::Pow` avoids the `Result`.
    ///
    /// `x^0` is one for every `x`, including zero.
    ///
    /// # Errors
    ///
    /// `Error::NegativeExponent` for a negative exponent. `Error::ExponentTooLarge` if the exponent
    /// doesn't fit an `i64` and the base is not `-1`, `0` or `1`: the result would not fit in
    /// memory.
    pub fn checked_pow(&self, exponent: &Integer) -> Result<Integer, Error> {
        match &exponent.repr {
            Repr::Small(exponent) => match u64::try_from(*exponent) {
                Ok(exponent) => Ok(self.pow_u64(exponent)),
                Err(_) => Err(Error::NegativeExponent),
            },
            Repr::Big(exponent) if exponent.sign() == Sign::Negative => Err(Error::NegativeExponent),
            Repr::Big(exponent) => match self.repr {
                Repr::Small(0) | Repr::Small(1) => Ok(self.clone()),
                Repr::Small(-1) if exponent.is_odd() => Ok(self.clone()),
                Repr::Small(-1) => Ok(Integer::one()),
                _ => Err(Error::ExponentTooLarge),
            },
        }
    }

    fn pow_u64(&self, exponent: u64) -> Integer {
        if let Repr::Small(base) = self.repr {
            if let Some(power) = u32::try_from(exponent).ok().and_then(|exponent| base.checked_pow(exponent)) {
                return Integer::small(power);
            }
        }

        Integer::from(self.to_signed().pow(exponent))
    }
}

impl Pow<u32> for &Integer {
    type Output = Integer;

    fn pow(self, exponent: u32) -> Self::Output {
        self.pow_u64(exponent as u64)
    }
}

impl Pow<u32> for Integer {
    type Output = Integer;

    fn pow(self, exponent: u32) -> Self::Output {
        self.pow_u64(exponent as u64)
    }
}
