//! Exact-width 64-bit values built from two 32-bit halves.
//!
//! [`Int64`] is the value type exploit code passes around for addresses, tagged engine
//! values and raw bit patterns. It never loses precision: every operation works on the
//! two `u32` halves directly, and conversions to and from `f64` are bit reinterpretations
//! through [`crate::bitview`], not numeric conversions.
//!
//! # Key Components
//!
//! - [`Int64`] - The value itself
//! - [`Int64Source`] - The input shapes [`Int64::from_source`] accepts
//!
//! # Signedness
//!
//! An `Int64` is a bit pattern. Signedness is decided by the operation, never stored:
//! [`Int64::unsigned_cmp`] and [`Int64::signed_cmp`] order the same values differently,
//! and call sites have to pick one. `Int64` deliberately does not implement `PartialOrd`.
//!
//! # Examples
//!
//! ```rust
//! use quadword::Int64;
//!
//! let base: Int64 = "0x00007feeaf0b8080".parse()?;
//! let field = base.add(&Int64::new(0x10, 0));
//! assert_eq!(field.to_string(), "0x00007feeaf0b8090");
//!
//! let slot = base.to_double();
//! assert_eq!(Int64::from_double(slot), base);
//! # Ok::<(), quadword::Error>(())
//! ```

mod arith;
mod encoding;
mod source;

use std::{fmt, str::FromStr};

pub use source::Int64Source;

use crate::{
    bitview::{double_to_words, words_to_double},
    Error, Result,
};

/// A 64-bit bit pattern stored as two unsigned 32-bit halves.
///
/// `low` holds bits 0-31, `high` holds bits 32-63. Both halves are always in
/// `[0, 2^32)`; every carry or borrow between them is folded back by the arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Int64 {
    low: u32,
    high: u32,
}

impl Int64 {
    /// All bits clear
    pub const ZERO: Int64 = Int64::new(0, 0);
    /// The value one
    pub const ONE: Int64 = Int64::new(1, 0);
    /// All bits set
    pub const MAX: Int64 = Int64::new(u32::MAX, u32::MAX);

    /// Creates a value from its two halves.
    #[must_use]
    pub const fn new(low: u32, high: u32) -> Self {
        Int64 { low, high }
    }

    /// Creates a value from an unsigned 64-bit integer.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_u64(value: u64) -> Self {
        Int64::new(value as u32, (value >> 32) as u32)
    }

    /// Creates a value from the two's complement pattern of a signed 64-bit integer.
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub const fn from_i64(value: i64) -> Self {
        Int64::from_u64(value as u64)
    }

    /// Reinterprets the IEEE-754 bit pattern of `value`.
    ///
    /// This is the address leak direction: a pointer read out of a float-typed slot comes
    /// back with all 64 bits intact.
    #[must_use]
    pub fn from_double(value: f64) -> Self {
        let (low, high) = double_to_words(value);
        Int64::new(low, high)
    }

    /// Creates a value from any supported [`Int64Source`].
    ///
    /// See [`Int64Source`] for how every shape is interpreted.
    ///
    /// # Errors
    /// - [`crate::Error::StringTooLong`] for hex literals longer than 16 digits
    /// - [`crate::Error::UnrepresentableInput`] for input that does not describe a 64-bit value
    ///
    /// # Examples
    ///
    /// ```rust
    /// use quadword::Int64;
    ///
    /// assert_eq!(Int64::from_source(-1.0)?, Int64::MAX);
    /// assert_eq!(Int64::from_source("0x41424344")?, Int64::new(0x4142_4344, 0));
    /// assert_eq!(Int64::from_source(&[0x11u8, 0x22][..])?, Int64::new(0x2211, 0));
    /// # Ok::<(), quadword::Error>(())
    /// ```
    pub fn from_source<'a>(source: impl Into<Int64Source<'a>>) -> Result<Self> {
        source::parse(source.into())
    }

    /// Bits 0-31.
    #[must_use]
    pub const fn low(&self) -> u32 {
        self.low
    }

    /// Bits 32-63.
    #[must_use]
    pub const fn high(&self) -> u32 {
        self.high
    }

    /// The pattern as an unsigned 64-bit integer.
    #[must_use]
    pub const fn to_u64(&self) -> u64 {
        ((self.high as u64) << 32) | self.low as u64
    }

    /// The pattern as a two's complement signed 64-bit integer.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn to_i64(&self) -> i64 {
        self.to_u64() as i64
    }

    /// The pattern as little-endian bytes, least significant byte of `low` first.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; 8] {
        self.to_u64().to_le_bytes()
    }

    /// Reinterprets the pattern as an IEEE-754 double.
    ///
    /// This is the fake object direction: the double can be written into a float-typed
    /// slot and is read back by the engine as the original 64 bits.
    #[must_use]
    pub fn to_double(&self) -> f64 {
        words_to_double(self.low, self.high)
    }

    /// Returns `true` if all bits are clear.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.low == 0 && self.high == 0
    }
}

impl fmt::Display for Int64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}{:08x}", self.high, self.low)
    }
}

impl FromStr for Int64 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Int64::from_source(s)
    }
}

impl From<u64> for Int64 {
    fn from(value: u64) -> Self {
        Int64::from_u64(value)
    }
}

impl From<i64> for Int64 {
    fn from(value: i64) -> Self {
        Int64::from_i64(value)
    }
}

impl From<u32> for Int64 {
    fn from(value: u32) -> Self {
        Int64::new(value, 0)
    }
}

impl From<Int64> for u64 {
    fn from(value: Int64) -> Self {
        value.to_u64()
    }
}
