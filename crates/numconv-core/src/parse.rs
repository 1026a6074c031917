//! Input parsing: a raw string under a declared type to a canonical integer.
//!
//! Digit grammar for the positional bases is `-?[digits]+` after trimming
//! surrounding whitespace. Anything else is rejected rather than guessed at:
//! `+` signs, radix prefixes, underscores and inner whitespace all fail.

use num_bigint::{BigInt, BigUint, Sign};

use crate::codec::base64_to_integer;
use crate::error::ConvertError;
use crate::number_type::{NumberType, Radix};
use crate::words::words_to_number;

/// Parse `raw` as a number of type `ty`.
pub fn parse_integer(raw: &str, ty: NumberType) -> Result<BigInt, ConvertError> {
    match ty {
        NumberType::Text => words_to_number(raw),
        NumberType::Base64 => base64_to_integer(raw),
        NumberType::Decimal => parse_digits(raw, Radix::Decimal),
        NumberType::Binary => parse_digits(raw, Radix::Binary),
        NumberType::Octal => parse_digits(raw, Radix::Octal),
        NumberType::Hexadecimal => parse_digits(raw, Radix::Hexadecimal),
    }
}

/// Parse a signed digit string in `radix`. Leading zeros are insignificant.
pub fn parse_digits(raw: &str, radix: Radix) -> Result<BigInt, ConvertError> {
    let fail = |reason: String| ConvertError::Parse {
        radix,
        input: raw.to_string(),
        reason,
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(fail("input is empty".into()));
    }

    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (Sign::Minus, rest),
        None => (Sign::Plus, trimmed),
    };
    if digits.is_empty() {
        return Err(fail("sign without digits".into()));
    }
    if let Some(prefix) = radix_prefix(digits, radix) {
        return Err(fail(format!("radix prefix {prefix:?} is not allowed")));
    }
    if let Some(c) = digits.chars().find(|c| !c.is_digit(radix.base())) {
        let reason = if c.is_whitespace() {
            "whitespace inside the number is not allowed".to_string()
        } else {
            format!("{c:?} is not a valid digit in base {}", radix.base())
        };
        return Err(fail(reason));
    }

    let magnitude = BigUint::parse_bytes(digits.as_bytes(), radix.base())
        .ok_or_else(|| fail("not a number".into()))?;
    // from_biguint folds "-0" into zero
    Ok(BigInt::from_biguint(sign, magnitude))
}

/// The base's own prefix (`0b`, `0o`, `0x`, any case) if `digits` starts with it.
fn radix_prefix(digits: &str, radix: Radix) -> Option<&str> {
    let marker = match radix {
        Radix::Binary => 'b',
        Radix::Octal => 'o',
        Radix::Hexadecimal => 'x',
        Radix::Decimal => return None,
    };
    let mut chars = digits.chars();
    match (chars.next(), chars.next()) {
        (Some('0'), Some(c)) if c.eq_ignore_ascii_case(&marker) => Some(&digits[..2]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(n: i64) -> BigInt {
        BigInt::from(n)
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_digits("10", Radix::Decimal).unwrap(), int(10));
        assert_eq!(parse_digits("0005", Radix::Decimal).unwrap(), int(5));
        assert_eq!(parse_digits("-255", Radix::Decimal).unwrap(), int(-255));
        assert_eq!(parse_digits("-0", Radix::Decimal).unwrap(), int(0));
        assert_eq!(parse_digits("000", Radix::Decimal).unwrap(), int(0));
    }

    #[test]
    fn test_parse_trims_surrounding_whitespace() {
        assert_eq!(parse_digits("   00101  ", Radix::Binary).unwrap(), int(5));
        assert_eq!(parse_digits("\t-ff\n", Radix::Hexadecimal).unwrap(), int(-255));
    }

    #[test]
    fn test_parse_hex_is_case_insensitive() {
        assert_eq!(parse_digits("a", Radix::Hexadecimal).unwrap(), int(10));
        assert_eq!(parse_digits("A", Radix::Hexadecimal).unwrap(), int(10));
        assert_eq!(parse_digits("00a", Radix::Hexadecimal).unwrap(), int(10));
        assert_eq!(parse_digits("FfFf", Radix::Hexadecimal).unwrap(), int(65535));
    }

    #[test]
    fn test_parse_negative_bases() {
        assert_eq!(parse_digits("-101", Radix::Binary).unwrap(), int(-5));
        assert_eq!(parse_digits("-377", Radix::Octal).unwrap(), int(-255));
        assert_eq!(parse_digits("-ff", Radix::Hexadecimal).unwrap(), int(-255));
    }

    #[test]
    fn test_reject_invalid_binary() {
        for bad in ["2", "102", "10a01", "", " ", "0b1010", "-", "1 0", "+1", "--1", "1_0"] {
            assert!(parse_digits(bad, Radix::Binary).is_err(), "{bad:?} accepted");
        }
    }

    #[test]
    fn test_reject_invalid_octal() {
        for bad in ["8", "9", "77a", " ", "0o12", "0O12"] {
            assert!(parse_digits(bad, Radix::Octal).is_err(), "{bad:?} accepted");
        }
    }

    #[test]
    fn test_reject_invalid_hex() {
        for bad in ["xz", "g", "1x", " ", "0xFF", "0Xff", "-0x1"] {
            assert!(parse_digits(bad, Radix::Hexadecimal).is_err(), "{bad:?} accepted");
        }
    }

    #[test]
    fn test_reject_reason_names_prefix() {
        match parse_digits("0xFF", Radix::Hexadecimal) {
            Err(ConvertError::Parse { reason, input, .. }) => {
                assert!(reason.contains("0x"));
                assert_eq!(input, "0xFF");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_hex_digits_after_zero_are_not_a_prefix() {
        // "0b" is valid hex; only the base's own prefix is rejected
        assert_eq!(parse_digits("0b1", Radix::Hexadecimal).unwrap(), int(0xb1));
    }

    #[test]
    fn test_parse_integer_dispatches_by_type() {
        assert_eq!(parse_integer("ten", NumberType::Text).unwrap(), int(10));
        assert_eq!(parse_integer("Cg==", NumberType::Base64).unwrap(), int(10));
        assert_eq!(parse_integer("1010", NumberType::Binary).unwrap(), int(10));
        assert_eq!(parse_integer("12", NumberType::Octal).unwrap(), int(10));
        assert_eq!(parse_integer("10", NumberType::Decimal).unwrap(), int(10));
        assert_eq!(parse_integer("a", NumberType::Hexadecimal).unwrap(), int(10));
    }
}
