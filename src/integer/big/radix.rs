//! # Radix conversion
//!
//! Text is converted in groups of characters. A group is the longest run of characters whose value
//! is guaranteed to fit in one digit, such that only one multiplication (when reading) or one
//! division (when writing) by a single digit is needed per group.
use std::iter;

use num::Zero;

use crate::error::{Error, Malformation};
use crate::integer::big::division::divide_digit_in_place;
use crate::integer::big::unsigned::{Digits, Unsigned};
use crate::integer::big::{normalized_len, UnsignedDigit};

pub const MIN_RADIX: u32 = 2;
/// Largest supported radix, digits `0-9` followed by letters `a-z`.
pub const MAX_RADIX: u32 = 36;

/// Characters per group and the value of a group with a one followed by only zeros.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Group {
    /// Number of characters in a group.
    pub length: usize,
    /// `radix^length`, the largest power of the radix that fits in one digit.
    pub radix: UnsignedDigit,
}

const fn group(radix: u32) -> Group {
    let radix = radix as UnsignedDigit;
    let mut length = 0;
    let mut power: UnsignedDigit = 1;
    while power <= UnsignedDigit::MAX / radix {
        length += 1;
        power *= radix;
    }

    Group { length, radix: power }
}

const fn groups() -> [Group; MAX_RADIX as usize + 1] {
    let mut table = [Group { length: 0, radix: 1 }; MAX_RADIX as usize + 1];
    let mut radix = MIN_RADIX;
    while radix <= MAX_RADIX {
        table[radix as usize] = group(radix);
        radix += 1;
    }

    table
}

const GROUPS: [Group; MAX_RADIX as usize + 1] = groups();

/// Group parameters for a radix.
///
/// # Errors
///
/// `Error::InvalidRadix` for a radix outside of `[2, 36]`.
pub fn group_for(radix: u32) -> Result<Group, Error> {
    if (MIN_RADIX..=MAX_RADIX).contains(&radix) {
        Ok(GROUPS[radix as usize])
    } else {
        Err(Error::InvalidRadix(radix))
    }
}

/// Read digits in the given radix into a magnitude.
///
/// `literal` and `offset` are only used to report errors: `digits` is `literal[offset..]`.
///
/// # Errors
///
/// When `digits` is empty or contains a character that is not a digit in `radix`.
pub(crate) fn parse_magnitude(
    literal: &str,
    offset: usize,
    radix: u32,
) -> Result<Unsigned, Error> {
    let Group { length: group_length, radix: group_radix } = group_for(radix)?;
    let digits = &literal[offset..];
    if digits.is_empty() {
        return Err(Error::malformed(literal, Malformation::Empty));
    }

    // Validate up front, after this all characters are ASCII and slicing by bytes is safe.
    if let Some((position, character)) = digits.char_indices()
        .find(|(_, character)| character.to_digit(radix).is_none()) {
        return Err(Error::malformed(literal, Malformation::InvalidDigit {
            character,
            position: offset + position,
            radix,
        }));
    }

    let bytes = digits.as_bytes();
    let first_length = match bytes.len() % group_length {
        0 => group_length,
        remaining => remaining,
    };
    let (first, rest) = bytes.split_at(first_length);

    let mut magnitude = Unsigned::zero();
    for group in iter::once(first).chain(rest.chunks(group_length)) {
        let value = group.iter()
            .map(|&byte| (byte as char).to_digit(radix).unwrap_or_default() as UnsignedDigit)
            .fold(0, |total, digit| total * radix as UnsignedDigit + digit);
        magnitude.mul_digit_add_assign(group_radix, value);
    }

    Ok(magnitude)
}

/// Write a magnitude in the given radix, without sign.
///
/// Letters are lowercase; zero is written as `"0"`.
///
/// # Errors
///
/// `Error::InvalidRadix` for a radix outside of `[2, 36]`.
pub fn format_magnitude(magnitude: &Unsigned, radix: u32) -> Result<String, Error> {
    let Group { length: group_length, radix: group_radix } = group_for(radix)?;
    log::trace!(
        "Formatting {} digits in radix {} using groups of {} characters",
        magnitude.len(), radix, group_length,
    );

    let mut remaining = Digits::from_slice(magnitude.digits());
    // Least significant group first
    let mut groups = Vec::with_capacity(magnitude.len() * (64 / group_length + 1));
    while !remaining.is_empty() {
        groups.push(divide_digit_in_place(&mut remaining, group_radix));
        remaining.truncate(normalized_len(&remaining));
    }

    let mut text = String::with_capacity(groups.len() * group_length);
    match groups.split_last() {
        None => text.push('0'),
        Some((most_significant, rest)) => {
            push_group(&mut text, *most_significant, radix, 0);
            for &group in rest.iter().rev() {
                push_group(&mut text, group, radix, group_length);
            }
        },
    }

    Ok(text)
}

/// Append a single group, left padded with zeros to `width` characters.
fn push_group(text: &mut String, mut value: UnsignedDigit, radix: u32, width: usize) {
    let mut buffer = [b'0'; UnsignedDigit::BITS as usize];
    let mut start = buffer.len();
    while value > 0 {
        start -= 1;
        let digit = (value % radix as UnsignedDigit) as u32;
        buffer[start] = std::char::from_digit(digit, radix).map_or(b'?', |character| character as u8);
        value /= radix as UnsignedDigit;
    }
    let start = start.min(buffer.len() - width.max(1));

    text.extend(buffer[start..].iter().map(|&byte| byte as char));
}
