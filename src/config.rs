//! Encoding configuration for NaN-boxed values
//!
//! NaN-boxing engines shift non-double values by a fixed offset so that real doubles
//! and boxed values occupy disjoint parts of the 64-bit space. The offset and the range
//! of upper halves that may be boxed differ between engines and engine builds, so they
//! are kept out of the encoding routines.

/// Configuration for [`crate::Int64::encode_nan_boxed_with`] and
/// [`crate::Int64::decode_nan_boxed_with`]
///
/// All values are expressed on the upper 32-bit half. A value is encodable when
/// `min_high <= high < max_high`; encoding subtracts `offset_high` from the upper half,
/// decoding adds it back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EncodingConfig {
    /// Offset removed from the upper half when boxing (JavaScriptCore: `2^48 >> 32`)
    pub offset_high: u32,

    /// Smallest upper half that may be boxed (inclusive)
    pub min_high: u32,

    /// Upper bound for the upper half (exclusive)
    pub max_high: u32,
}

impl Default for EncodingConfig {
    fn default() -> Self {
        Self::javascriptcore()
    }
}

impl EncodingConfig {
    /// Creates the JavaScriptCore 64-bit value layout
    ///
    /// Doubles are stored offset by `2^48`, which leaves the upper halves
    /// `0x0000_0000..0x0001_0000` for pointers and `0xFFFF_0000..` for int32 values.
    #[must_use]
    pub fn javascriptcore() -> Self {
        Self {
            offset_high: 0x0001_0000,
            min_high: 0x0001_0000,
            max_high: 0xFFFF_0000,
        }
    }

    /// Creates a JavaScriptCore layout that keeps encoded doubles out of the negative
    /// infinity and NaN space
    ///
    /// The upper bound is lowered so that an encoded upper half never reaches `0xFFF0_0000`.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            offset_high: 0x0001_0000,
            min_high: 0x0001_0000,
            max_high: 0xFFF1_0000,
        }
    }

    /// Returns `true` if `high` lies in the encodable tag range
    #[must_use]
    pub fn accepts(&self, high: u32) -> bool {
        (self.min_high..self.max_high).contains(&high)
    }
}
