//! English number words for 0-99.
//!
//! The vocabulary is a fixed table, not a grammar: single words for 0-19 and
//! the tens, plus `<tens> <one>` compounds for everything else below 100.

use num_bigint::BigInt;
use num_traits::ToPrimitive;

use crate::error::ConvertError;

/// Words for 0-19, indexed by value.
static ONES: [&str; 20] = [
    "zero",
    "one",
    "two",
    "three",
    "four",
    "five",
    "six",
    "seven",
    "eight",
    "nine",
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

/// Words for the multiples of ten, indexed by tens digit (0 and 1 unused).
static TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Accepted on input only; never produced.
static ALIASES: [(&str, u8); 1] = [("nil", 0)];

/// Parse number words into an integer.
///
/// Case and surrounding whitespace are ignored, as is punctuation at either
/// end. Runs of whitespace and hyphens separate words, so `"forty two"`,
/// `"Forty-Two"` and `" forty--two! "` all read as 42. Any other character,
/// digits included, makes the text unrecognized.
pub fn words_to_number(text: &str) -> Result<BigInt, ConvertError> {
    let unknown = || ConvertError::UnknownWord(text.to_string());

    let lowered = text.to_lowercase();
    let body = lowered.trim().trim_matches(is_edge_punctuation).trim();
    let tokens: Vec<&str> = body
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|t| !t.is_empty())
        .collect();
    if tokens.iter().any(|t| !t.chars().all(char::is_alphabetic)) {
        return Err(unknown());
    }

    let value = match tokens.as_slice() {
        [word] => lookup_single(word),
        [tens, one] => lookup_compound(tens, one),
        _ => None,
    }
    .ok_or_else(unknown)?;

    Ok(BigInt::from(value))
}

/// Render an integer as words. Fails outside 0-99.
pub fn number_to_words(n: &BigInt) -> Result<String, ConvertError> {
    let value = n
        .to_u8()
        .filter(|v| *v < 100)
        .ok_or_else(|| ConvertError::OutOfRange(n.clone()))?;

    let (tens, ones) = (usize::from(value / 10), usize::from(value % 10));
    let words = match (tens, ones) {
        (0 | 1, _) => ONES[usize::from(value)].to_string(),
        (_, 0) => TENS[tens].to_string(),
        _ => format!("{}-{}", TENS[tens], ONES[ones]),
    };
    Ok(words)
}

/// Punctuation tolerated around the words; `-` is a separator, not decoration.
fn is_edge_punctuation(c: char) -> bool {
    c.is_ascii_punctuation() && c != '-'
}

fn lookup_single(word: &str) -> Option<u8> {
    if let Some(i) = ONES.iter().position(|w| *w == word) {
        return Some(i as u8);
    }
    if let Some(i) = tens_index(word) {
        return Some(i * 10);
    }
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == word)
        .map(|(_, v)| *v)
}

fn lookup_compound(tens: &str, one: &str) -> Option<u8> {
    let tens = tens_index(tens)?;
    let one = ONES[1..10].iter().position(|w| *w == one)? as u8 + 1;
    Some(tens * 10 + one)
}

fn tens_index(word: &str) -> Option<u8> {
    TENS.iter()
        .skip(2)
        .position(|w| *w == word)
        .map(|i| i as u8 + 2)
}
