//! Conversion dispatcher and its uniform result shape.

use num_bigint::BigInt;
use serde::Serialize;
use tracing::debug;

use crate::codec::integer_to_base64;
use crate::error::ConvertError;
use crate::format::format_integer;
use crate::number_type::{NumberType, Radix};
use crate::parse::parse_integer;
use crate::words::number_to_words;

/// Outcome of one conversion: a result or an error message, never both.
///
/// Serializes as `{"result": ..., "error": ...}` with the unused side `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "api", derive(utoipa::ToSchema))]
pub struct ConversionResult {
    result: Option<String>,
    error: Option<String>,
}

impl ConversionResult {
    pub fn success(result: impl Into<String>) -> Self {
        Self {
            result: Some(result.into()),
            error: None,
        }
    }

    pub fn failure(error: &ConvertError) -> Self {
        Self {
            result: None,
            error: Some(error.to_string()),
        }
    }

    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_success(&self) -> bool {
        self.result.is_some()
    }
}

impl From<Result<String, ConvertError>> for ConversionResult {
    fn from(res: Result<String, ConvertError>) -> Self {
        match res {
            Ok(s) => ConversionResult::success(s),
            Err(e) => ConversionResult::failure(&e),
        }
    }
}

/// Convert `input` between two types named by their wire names.
///
/// Every failure, including unknown type names, comes back as a
/// [`ConversionResult`] with `error` set.
pub fn convert(input: &str, input_type: &str, output_type: &str) -> ConversionResult {
    let res = resolve_and_convert(input, input_type, output_type);
    if let Err(ref e) = res {
        debug!(input_type, output_type, error = %e, "conversion failed");
    }
    res.into()
}

fn resolve_and_convert(
    input: &str,
    input_type: &str,
    output_type: &str,
) -> Result<String, ConvertError> {
    let from: NumberType = input_type.parse()?;
    let to: NumberType = output_type.parse()?;
    convert_typed(input, from, to)
}

/// Parse `input` as `from`, then render it as `to`.
///
/// Same-type conversions still go through the integer, so they normalize.
pub fn convert_typed(input: &str, from: NumberType, to: NumberType) -> Result<String, ConvertError> {
    let n = parse_integer(input, from)?;
    encode_integer(&n, to)
}

/// Render a canonical integer as `ty`.
pub fn encode_integer(n: &BigInt, ty: NumberType) -> Result<String, ConvertError> {
    match ty {
        NumberType::Text => number_to_words(n),
        NumberType::Base64 => integer_to_base64(n),
        NumberType::Decimal => Ok(format_integer(n, Radix::Decimal)),
        NumberType::Binary => Ok(format_integer(n, Radix::Binary)),
        NumberType::Octal => Ok(format_integer(n, Radix::Octal)),
        NumberType::Hexadecimal => Ok(format_integer(n, Radix::Hexadecimal)),
    }
}
