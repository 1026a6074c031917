//! numconv-core: number representation conversion engine.
//!
//! Provides:
//! - `number_type`: the closed set of representations and their radices
//! - `parse`: input string + type -> canonical integer
//! - `words`: English number words (closed vocabulary, 0-99)
//! - `codec`: base64 of minimal big-endian bytes
//! - `format`: canonical binary/octal/decimal/hex rendering
//! - `convert`: the dispatcher that folds every stage into a [`ConversionResult`]
//!
//! With `api` feature:
//! - `utoipa::ToSchema` on the wire types

pub mod codec;
pub mod convert;
pub mod error;
pub mod format;
pub mod number_type;
pub mod parse;
pub mod words;

pub use convert::{ConversionResult, convert, convert_typed, encode_integer};
pub use error::ConvertError;
pub use number_type::{NumberType, Radix};

/// Crate version with the short git SHA it was built from.
pub const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("NUMCONV_GIT_SHA"),
    ")"
);
