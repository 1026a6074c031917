//! Canonical digit rendering for the positional bases.

use num_bigint::BigInt;

use crate::number_type::Radix;

/// Format `n` in `radix`.
///
/// Canonical form: `-` only for negatives, no prefix, no leading zeros,
/// lowercase hex digits. Zero is `"0"` in every base.
pub fn format_integer(n: &BigInt, radix: Radix) -> String {
    n.to_str_radix(radix.base())
}
