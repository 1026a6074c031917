//! Error type shared by every conversion stage.

use num_bigint::BigInt;

use crate::number_type::Radix;

/// Why a conversion could not produce a result.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// Malformed numeral for the stated base.
    Parse {
        radix: Radix,
        input: String,
        reason: String,
    },
    /// Text outside the number-word vocabulary.
    UnknownWord(String),
    /// Number has no word form (only 0-99 do).
    OutOfRange(BigInt),
    /// Malformed base64 payload.
    Decode(String),
    /// Negative numbers have no minimal unsigned byte encoding.
    NegativeBase64(BigInt),
    /// Type name outside the supported set.
    UnknownType(String),
    /// Request body missing fields or not decodable.
    BadRequest(String),
}

impl std::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvertError::Parse {
                radix,
                input,
                reason,
            } => write!(f, "invalid {radix} number {input:?}: {reason}"),
            ConvertError::UnknownWord(text) => write!(f, "unrecognized number words: {text:?}"),
            ConvertError::OutOfRange(n) => {
                write!(f, "{n} cannot be written as words (supported range is 0 to 99)")
            }
            ConvertError::Decode(reason) => write!(f, "invalid base64: {reason}"),
            ConvertError::NegativeBase64(n) => {
                write!(f, "negative numbers cannot be encoded as base64: {n}")
            }
            ConvertError::UnknownType(name) => write!(
                f,
                "unknown number type {name:?} (expected one of: text, decimal, binary, octal, hexadecimal, base64)"
            ),
            ConvertError::BadRequest(reason) => write!(f, "bad request: {reason}"),
        }
    }
}

impl std::error::Error for ConvertError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_never_empty() {
        let errors = [
            ConvertError::Parse {
                radix: Radix::Hexadecimal,
                input: "0xFF".into(),
                reason: "radix prefixes are not allowed".into(),
            },
            ConvertError::UnknownWord("abc".into()),
            ConvertError::OutOfRange(BigInt::from(255)),
            ConvertError::Decode("invalid padding".into()),
            ConvertError::NegativeBase64(BigInt::from(-1)),
            ConvertError::UnknownType("DECIMAL".into()),
            ConvertError::BadRequest("missing field `input`".into()),
        ];
        for e in errors {
            assert!(!e.to_string().is_empty());
        }
    }

    #[test]
    fn test_parse_error_message() {
        let e = ConvertError::Parse {
            radix: Radix::Binary,
            input: "102".into(),
            reason: "digit '2' is not valid in base 2".into(),
        };
        assert_eq!(
            e.to_string(),
            "invalid binary number \"102\": digit '2' is not valid in base 2"
        );
    }
}
