//! Base64 of the minimal big-endian byte representation of a number.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use num_bigint::{BigInt, BigUint, Sign};

use crate::error::ConvertError;

const DATA_URL_SCHEME: &str = "data:";
const BASE64_MARKER: &str = ";base64";

/// Encode a non-negative integer as padded standard base64.
///
/// Zero is one `0x00` byte (`"AA=="`), never an empty string.
pub fn integer_to_base64(n: &BigInt) -> Result<String, ConvertError> {
    if n.sign() == Sign::Minus {
        return Err(ConvertError::NegativeBase64(n.clone()));
    }
    Ok(STANDARD.encode(minimal_be_bytes(n.magnitude())))
}

/// Decode base64, bare or as a `data:...;base64,` URL, into an integer.
///
/// Decoding is strict: standard alphabet, canonical `=` padding. Leading zero
/// bytes do not change the value.
pub fn base64_to_integer(s: &str) -> Result<BigInt, ConvertError> {
    let payload = strip_data_url(s.trim())?;
    if payload.is_empty() {
        return Err(ConvertError::Decode("input is empty".into()));
    }
    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| ConvertError::Decode(e.to_string()))?;
    if bytes.is_empty() {
        return Err(ConvertError::Decode("no bytes decoded".into()));
    }
    Ok(BigInt::from(BigUint::from_bytes_be(&bytes)))
}

/// Shortest non-empty big-endian byte sequence for `n`.
fn minimal_be_bytes(n: &BigUint) -> Vec<u8> {
    let bytes = n.to_bytes_be();
    if bytes.is_empty() { vec![0] } else { bytes }
}

/// `data:[<mediatype>];base64,<payload>` -> `<payload>`; anything else is
/// returned as is.
///
/// The `;base64` marker is required: a data URL without it carries
/// percent-encoded text, not base64.
fn strip_data_url(s: &str) -> Result<&str, ConvertError> {
    let Some(rest) = s.strip_prefix(DATA_URL_SCHEME) else {
        return Ok(s);
    };
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| ConvertError::Decode("data URL has no ',' before the payload".into()))?;
    if !header.to_ascii_lowercase().ends_with(BASE64_MARKER) {
        return Err(ConvertError::Decode(
            "data URL is not marked ;base64".into(),
        ));
    }
    Ok(payload)
}
