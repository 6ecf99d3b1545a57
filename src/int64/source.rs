//! Construction of [`Int64`] values from heterogeneous inputs.

use log::{debug, trace};
use strum::IntoStaticStr;

use super::Int64;
use crate::{
    bitview::{BitView, ElementWidth, ScratchElement},
    Error::StringTooLong,
    Result,
};

/// 2^32 as a native number
const TWO_POW_32: f64 = 4_294_967_296.0;

/// -2^31 as a native number
const SIGNED_WORD_MIN: f64 = -2_147_483_648.0;

/// Largest magnitude a double represents without gaps between integers
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Hex digits that fit into 64 bits
const MAX_HEX_DIGITS: usize = 16;

/// Input shapes accepted by [`Int64::from_source`].
///
/// | Shape | Interpretation |
/// |-------|----------------|
/// | [`Int64Source::Value`] | copied as is |
/// | [`Int64Source::Number`] integral, in `[-2^31, 2^32)` | sign- or zero-extended 32-bit value |
/// | [`Int64Source::Number`] integral, outside | `low = v mod 2^32`, `high = floor(v / 2^32) mod 2^32` |
/// | [`Int64Source::Number`] fractional, NaN or infinite | IEEE-754 bits reinterpreted |
/// | [`Int64Source::Integer`] | exact two's complement, `[-2^63, 2^64)` only |
/// | [`Int64Source::Str`] with `0x` prefix | up to 16 hex digits |
/// | [`Int64Source::Str`] otherwise | decimal, then as [`Int64Source::Number`] |
/// | [`Int64Source::Bytes`], [`Int64Source::Words`], [`Int64Source::Doubles`] | up to 8 little-endian bytes, zero padded |
#[derive(Debug, Clone, Copy, PartialEq, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Int64Source<'a> {
    /// An existing value
    Value(Int64),
    /// A native number (an IEEE-754 double)
    ///
    /// Integral values beyond 2^53 are already rounded by the time they are a double,
    /// this path is best effort for them.
    Number(f64),
    /// An exact integer
    Integer(i128),
    /// A hex literal (`0x...`) or a decimal number
    Str(&'a str),
    /// Up to 8 bytes
    Bytes(&'a [u8]),
    /// Up to 2 words, low half first
    Words(&'a [u32]),
    /// At most 1 double
    Doubles(&'a [f64]),
}

impl From<Int64> for Int64Source<'_> {
    fn from(value: Int64) -> Self {
        Int64Source::Value(value)
    }
}

impl From<f64> for Int64Source<'_> {
    fn from(value: f64) -> Self {
        Int64Source::Number(value)
    }
}

impl From<i128> for Int64Source<'_> {
    fn from(value: i128) -> Self {
        Int64Source::Integer(value)
    }
}

impl<'a> From<&'a str> for Int64Source<'a> {
    fn from(value: &'a str) -> Self {
        Int64Source::Str(value)
    }
}

impl<'a> From<&'a [u8]> for Int64Source<'a> {
    fn from(value: &'a [u8]) -> Self {
        Int64Source::Bytes(value)
    }
}

impl<'a> From<&'a [u32]> for Int64Source<'a> {
    fn from(value: &'a [u32]) -> Self {
        Int64Source::Words(value)
    }
}

impl<'a> From<&'a [f64]> for Int64Source<'a> {
    fn from(value: &'a [f64]) -> Self {
        Int64Source::Doubles(value)
    }
}

pub(crate) fn parse(source: Int64Source<'_>) -> Result<Int64> {
    let kind: &'static str = (&source).into();
    trace!("building Int64 from {kind} source");

    match source {
        Int64Source::Value(value) => Ok(value),
        Int64Source::Number(value) => Ok(from_number(value)),
        Int64Source::Integer(value) => from_integer(value),
        Int64Source::Str(text) => from_str(text),
        Int64Source::Bytes(bytes) => from_elements(bytes),
        Int64Source::Words(words) => from_elements(words),
        Int64Source::Doubles(doubles) => from_elements(doubles),
    }
}

#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
fn from_number(value: f64) -> Int64 {
    if !value.is_finite() || value.fract() != 0.0 {
        return Int64::from_double(value);
    }

    if (SIGNED_WORD_MIN..TWO_POW_32).contains(&value) {
        // value is integral and in range, both casts are exact
        return if value < 0.0 {
            Int64::new(value as i32 as u32, u32::MAX)
        } else {
            Int64::new(value as u32, 0)
        };
    }

    if value.abs() > MAX_SAFE_INTEGER {
        debug!("{value} exceeds the exact integer range of a double, result is best effort");
    }

    // rem_euclid and the power of two division are exact on integral doubles
    let low = value.rem_euclid(TWO_POW_32);
    let high = (value / TWO_POW_32).floor().rem_euclid(TWO_POW_32);
    Int64::new(low as u32, high as u32)
}

#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_sign_loss)]
fn from_integer(value: i128) -> Result<Int64> {
    if value < i128::from(i64::MIN) || value > i128::from(u64::MAX) {
        return Err(unrepresentable!("integer {} does not fit into 64 bits", value));
    }

    Ok(Int64::from_u64(value as u64))
}

fn from_str(text: &str) -> Result<Int64> {
    let text = text.trim();
    if let Some(digits) = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
    {
        return from_hex(digits);
    }

    match text.parse::<f64>() {
        Ok(value) => Ok(from_number(value)),
        Err(_) => Err(unrepresentable!("'{}' is neither hex nor a number", text)),
    }
}

fn from_hex(digits: &str) -> Result<Int64> {
    let count = digits.chars().count();
    if count > MAX_HEX_DIGITS {
        return Err(StringTooLong(count));
    }
    if count == 0 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(unrepresentable!("'0x{}' is not a hex literal", digits));
    }

    let (high_digits, low_digits) = digits.split_at(count.saturating_sub(8));
    let low = parse_hex_word(low_digits)?;
    let high = if high_digits.is_empty() {
        0
    } else {
        parse_hex_word(high_digits)?
    };

    Ok(Int64::new(low, high))
}

fn parse_hex_word(digits: &str) -> Result<u32> {
    u32::from_str_radix(digits, 16)
        .map_err(|err| unrepresentable!("'{}' is not a hex word: {}", digits, err))
}

fn from_elements<T: ScratchElement>(elements: &[T]) -> Result<Int64> {
    let width = ElementWidth::of::<T>()?;
    if elements.len() > width.per_region() {
        return Err(unrepresentable!(
            "{} {} elements do not fit into 64 bits",
            elements.len(),
            width
        ));
    }

    BitView::with_shared(|view| {
        view.load_from(elements)?;
        let (low, high) = view.read_words();
        Ok(Int64::new(low, high))
    })
}
