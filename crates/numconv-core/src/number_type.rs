//! The closed set of number representations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConvertError;

/// A representation a number can be converted from or to.
///
/// Names are matched exactly: `"decimal"` is a type, `"DECIMAL"` is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "api", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum NumberType {
    Text,
    Decimal,
    Binary,
    Octal,
    Hexadecimal,
    Base64,
}

impl NumberType {
    pub const ALL: [NumberType; 6] = [
        NumberType::Text,
        NumberType::Decimal,
        NumberType::Binary,
        NumberType::Octal,
        NumberType::Hexadecimal,
        NumberType::Base64,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NumberType::Text => "text",
            NumberType::Decimal => "decimal",
            NumberType::Binary => "binary",
            NumberType::Octal => "octal",
            NumberType::Hexadecimal => "hexadecimal",
            NumberType::Base64 => "base64",
        }
    }

    /// Positional radix for the digit-string types, `None` for text and base64.
    pub fn radix(self) -> Option<Radix> {
        match self {
            NumberType::Decimal => Some(Radix::Decimal),
            NumberType::Binary => Some(Radix::Binary),
            NumberType::Octal => Some(Radix::Octal),
            NumberType::Hexadecimal => Some(Radix::Hexadecimal),
            NumberType::Text | NumberType::Base64 => None,
        }
    }
}

impl fmt::Display for NumberType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NumberType {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NumberType::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| ConvertError::UnknownType(s.to_string()))
    }
}

/// Positional bases the formatter and digit parser work in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Radix {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
}

impl Radix {
    pub fn base(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
        }
    }

    pub fn number_type(self) -> NumberType {
        match self {
            Radix::Binary => NumberType::Binary,
            Radix::Octal => NumberType::Octal,
            Radix::Decimal => NumberType::Decimal,
            Radix::Hexadecimal => NumberType::Hexadecimal,
        }
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.number_type().as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_every_name() {
        for ty in NumberType::ALL {
            assert_eq!(ty.as_str().parse::<NumberType>().unwrap(), ty);
        }
    }

    #[test]
    fn test_names_are_case_sensitive() {
        for name in ["DECIMAL", "Binary", "HEXADECIMAL", "Base64", " text", ""] {
            assert_eq!(
                name.parse::<NumberType>(),
                Err(ConvertError::UnknownType(name.to_string()))
            );
        }
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&NumberType::Hexadecimal).unwrap();
        assert_eq!(json, "\"hexadecimal\"");
        let ty: NumberType = serde_json::from_str("\"base64\"").unwrap();
        assert_eq!(ty, NumberType::Base64);
    }

    #[test]
    fn test_radix_round_trip() {
        for ty in NumberType::ALL {
            if let Some(radix) = ty.radix() {
                assert_eq!(radix.number_type(), ty);
            }
        }
        assert_eq!(NumberType::Text.radix(), None);
        assert_eq!(NumberType::Base64.radix(), None);
        assert_eq!(Radix::Hexadecimal.base(), 16);
    }
}
