//! # relp-num
//!
//! Arbitrary precision signed integers.
//!
//! Values that fit a native `i64` are kept as such; only results that overflow are moved to a
//! little-endian vector of 64-bit digits, on which addition, subtraction, schoolbook multiplication
//! and Knuth's normalized long division operate. Every operation returns a fresh value, operands are
//! never modified.
//!
//! ```
//! use relp_num::Integer;
//!
//! let a: Integer = "123456789012345678901234567890".parse().unwrap();
//! assert_eq!((a * Integer::from(2)).to_string(), "246913578024691357802469135780");
//! ```
pub use error::{Error, Malformation};
pub use integer::Integer;
pub use integer::big::signed::Signed;
pub use integer::big::unsigned::Unsigned;
pub use integer::sign::Sign;

mod error;
pub mod integer;
