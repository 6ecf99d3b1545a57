//! Engine value encodings: small-integer tags, pointer tags and NaN-boxing.
//!
//! Every encoding is a pure transform that checks its precondition first and fails
//! instead of producing a value the target engine would misread.
//!
//! | Encoding | Encode | Decode |
//! |----------|--------|--------|
//! | Small integer | [`Int64::encode_small_integer`] | [`Int64::decode_small_integer`] |
//! | Pointer tag | [`Int64::tag_pointer`] | [`Int64::untag_pointer`] |
//! | NaN-box | [`Int64::encode_nan_boxed`] | [`Int64::decode_nan_boxed`] |

use crate::{
    config::EncodingConfig,
    Error::{NotSmallIntegerEncodable, NotSmallIntegerTagged, ValueNotEncodable},
    Result,
};

use super::Int64;

/// Bit 0 of the low half marks a heap pointer
const POINTER_TAG: u32 = 1;

impl Int64 {
    /// Moves the low half into the high half, leaving a zero tag in the low half.
    ///
    /// # Errors
    /// Returns [`crate::Error::NotSmallIntegerEncodable`] if the high half is not zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use quadword::Int64;
    ///
    /// let tagged = Int64::new(0x41, 0).encode_small_integer()?;
    /// assert_eq!(tagged, Int64::new(0, 0x41));
    /// assert_eq!(tagged.decode_small_integer()?, Int64::new(0x41, 0));
    /// # Ok::<(), quadword::Error>(())
    /// ```
    pub fn encode_small_integer(&self) -> Result<Int64> {
        if self.high != 0 {
            return Err(NotSmallIntegerEncodable(*self));
        }

        Ok(Int64::new(0, self.low))
    }

    /// Moves the high half back into the low half.
    ///
    /// # Errors
    /// Returns [`crate::Error::NotSmallIntegerTagged`] if the low half is not the zero tag.
    pub fn decode_small_integer(&self) -> Result<Int64> {
        if self.low != 0 {
            return Err(NotSmallIntegerTagged(*self));
        }

        Ok(Int64::new(self.high, 0))
    }

    /// Sets the pointer tag bit.
    #[must_use]
    pub fn tag_pointer(&self) -> Int64 {
        Int64::new(self.low | POINTER_TAG, self.high)
    }

    /// Clears the pointer tag bit.
    #[must_use]
    pub fn untag_pointer(&self) -> Int64 {
        Int64::new(self.low & !POINTER_TAG, self.high)
    }

    /// Returns `true` if the pointer tag bit is set.
    #[must_use]
    pub fn is_pointer_tagged(&self) -> bool {
        self.low & POINTER_TAG != 0
    }

    /// NaN-boxes the value using the default (JavaScriptCore) layout.
    ///
    /// # Errors
    /// Returns [`crate::Error::ValueNotEncodable`] if the high half is outside
    /// `[0x10000, 0xFFFF0000)`.
    pub fn encode_nan_boxed(&self) -> Result<f64> {
        self.encode_nan_boxed_with(&EncodingConfig::default())
    }

    /// NaN-boxes the value: removes the configured offset from the high half and
    /// reinterprets the result as a double.
    ///
    /// The receiver is left unchanged.
    ///
    /// # Errors
    /// Returns [`crate::Error::ValueNotEncodable`] if the high half is outside the range
    /// `config` accepts.
    pub fn encode_nan_boxed_with(&self, config: &EncodingConfig) -> Result<f64> {
        if !config.accepts(self.high) {
            return Err(ValueNotEncodable(*self));
        }

        let mut shifted = *self;
        shifted.subtract_in_place(&Int64::new(0, config.offset_high));
        Ok(shifted.to_double())
    }

    /// Unboxes a double produced by [`Int64::encode_nan_boxed`].
    ///
    /// # Errors
    /// Returns [`crate::Error::ValueNotEncodable`] if the unboxed value lies outside
    /// `[0x10000, 0xFFFF0000)`, i.e. `boxed` was never produced by the encoder.
    pub fn decode_nan_boxed(boxed: f64) -> Result<Int64> {
        Int64::decode_nan_boxed_with(boxed, &EncodingConfig::default())
    }

    /// Unboxes a double: reinterprets it and adds the configured offset back onto the
    /// high half.
    ///
    /// # Errors
    /// Returns [`crate::Error::ValueNotEncodable`] if the unboxed value lies outside the
    /// range `config` accepts.
    pub fn decode_nan_boxed_with(boxed: f64, config: &EncodingConfig) -> Result<Int64> {
        let mut value = Int64::from_double(boxed);
        value.add_in_place(&Int64::new(0, config.offset_high));
        if !config.accepts(value.high) {
            return Err(ValueNotEncodable(value));
        }

        Ok(value)
    }
}
