//! # Signs
use std::cmp::Ordering;
use std::ops::{Mul, Neg};

/// Sign of an integer.
///
/// Existing `Sign` types, such as the one in `num`, typically have a third value for the sign of
/// 0. Here, zero is always `Positive`, so that there is exactly one representation of it.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum Sign {
    /// `x >= 0`
    Positive,
    /// `x < 0`
    Negative,
}

impl PartialOrd for Sign {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Sign {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Sign::Positive, Sign::Positive) => Ordering::Equal,
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Negative, Sign::Negative) => Ordering::Equal,
        }
    }
}

impl Mul for Sign {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Sign::Positive, Sign::Positive) => Sign::Positive,
            (Sign::Positive, Sign::Negative) => Sign::Negative,
            (Sign::Negative, Sign::Positive) => Sign::Negative,
            (Sign::Negative, Sign::Negative) => Sign::Positive,
        }
    }
}

impl Neg for Sign {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
}
