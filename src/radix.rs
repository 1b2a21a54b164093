// Positional-notation decoding for untrusted share values.
//
// The digit alphabet is '0'..'9' then 'a'..'z', case-insensitive, and a
// digit's value must be strictly less than the base.  Anything else --
// sign prefixes, whitespace, trailing garbage, an empty string -- is
// rejected rather than truncated.

use num::bigint::BigInt;
use num::traits::Zero;
use thiserror::Error;

pub const MIN_BASE: i64 = 2;
pub const MAX_BASE: i64 = 36;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid base {0}: must be between {MIN_BASE} and {MAX_BASE}")]
    InvalidBase(i64),
    #[error("empty value")]
    EmptyValue,
    #[error("invalid digit {digit:?} for base {base}")]
    InvalidDigit { digit: char, base: u32 },
}

// Decode `value` as an unsigned integer written in `base`.
pub fn decode(base: i64, value: &str) -> Result<BigInt, DecodeError> {
    if !(MIN_BASE..=MAX_BASE).contains(&base) {
        return Err(DecodeError::InvalidBase(base));
    }
    let base = base as u32;
    if value.is_empty() {
        return Err(DecodeError::EmptyValue);
    }

    let mut acc = BigInt::zero();
    for c in value.chars() {
        let digit = match c {
            '0'..='9' => c as u32 - '0' as u32,
            'a'..='z' => c as u32 - 'a' as u32 + 10,
            'A'..='Z' => c as u32 - 'A' as u32 + 10,
            _ => return Err(DecodeError::InvalidDigit { digit: c, base }),
        };
        if digit >= base {
            return Err(DecodeError::InvalidDigit { digit: c, base });
        }
        acc = acc * base + digit;
    }
    Ok(acc)
}
