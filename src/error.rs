//! # Errors
//!
//! All errors are deterministic: they describe malformed input or a violated precondition and are
//! never worth retrying.
use std::fmt;

use thiserror::Error;

/// Errors surfaced by parsing, formatting and arithmetic.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Text could not be read as an integer.
    #[error("malformed integer literal {literal:?}: {malformation}")]
    MalformedLiteral {
        /// The complete text that was being parsed.
        literal: String,
        /// What is wrong with it.
        malformation: Malformation,
    },
    /// Radices are integers in `[2, 36]`.
    #[error("radix must be an integer between 2 and 36, got {0}")]
    InvalidRadix(u32),
    /// The divisor of a division or remainder was zero.
    #[error("attempt to divide by zero")]
    DivisionByZero,
    /// Exponentiation only supports non-negative exponents.
    #[error("exponent can't be negative")]
    NegativeExponent,
    /// The exponent doesn't fit a native integer while the base is not -1, 0 or 1.
    #[error("exponent is too large for a base other than -1, 0 or 1")]
    ExponentTooLarge,
    /// A floating point value is not an integer within the exactly representable range.
    #[error("{0} is not an integer in the exactly representable range of f64")]
    InexactNumber(f64),
}

/// Reason a literal was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Malformation {
    /// No digits after the sign and prefix.
    Empty,
    /// A character that isn't a digit in the radix of the literal.
    InvalidDigit {
        /// Offending character.
        character: char,
        /// Byte offset in the literal.
        position: usize,
        /// Radix the literal was read in.
        radix: u32,
    },
}

impl fmt::Display for Malformation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Malformation::Empty => f.write_str("no digits"),
            Malformation::InvalidDigit { character, position, radix } => write!(
                f, "{:?} at position {} is not a digit in radix {}", character, position, radix,
            ),
        }
    }
}

impl Error {
    pub(crate) fn malformed(literal: &str, malformation: Malformation) -> Self {
        log::debug!("Rejected literal {:?}: {}", literal, malformation);

        Error::MalformedLiteral { literal: literal.to_string(), malformation }
    }
}

#[cfg(test)]
mod test {
    use crate::error::{Error, Malformation};

    #[test]
    fn display() {
        assert_eq!(Error::DivisionByZero.to_string(), "attempt to divide by zero");
        assert_eq!(
            Error::InvalidRadix(37).to_string(),
            "radix must be an integer between 2 and 36, got 37",
        );
        assert_eq!(
            Error::malformed("12z", Malformation::InvalidDigit { character: 'z', position: 2, radix: 10 })
                .to_string(),
            "malformed integer literal \"12z\": 'z' at position 2 is not a digit in radix 10",
        );
        assert_eq!(
            Error::malformed("-", Malformation::Empty).to_string(),
            "malformed integer literal \"-\": no digits",
        );
    }
}
