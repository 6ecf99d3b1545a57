//! Element types that can be copied in and out of the scratch region.
//!
//! External sequences handed to [`crate::bitview::BitView::load_from`] and
//! [`crate::bitview::BitView::store_into`] are typed slices. The element type decides how
//! many little-endian bytes every element contributes. Only 1, 4 and 8 byte wide
//! elements map cleanly onto the 8 byte region, everything else is rejected with
//! [`crate::Error::UnsupportedElementWidth`].

use strum::{Display, EnumCount, EnumIter};

use crate::{Error::UnsupportedElementWidth, Result};

/// The element widths the scratch region accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCount, Display)]
pub enum ElementWidth {
    /// One byte per element (`u8`, `i8`)
    #[strum(serialize = "byte")]
    Byte,
    /// Four bytes per element (`u32`, `i32`, `f32`)
    #[strum(serialize = "word")]
    Word,
    /// Eight bytes per element (`u64`, `i64`, `f64`)
    #[strum(serialize = "double")]
    Double,
}

impl ElementWidth {
    /// Maps a width in bytes onto one of the supported widths.
    ///
    /// # Errors
    /// Returns [`crate::Error::UnsupportedElementWidth`] for anything but 1, 4 or 8.
    pub fn from_bytes(width: usize) -> Result<Self> {
        match width {
            1 => Ok(ElementWidth::Byte),
            4 => Ok(ElementWidth::Word),
            8 => Ok(ElementWidth::Double),
            _ => Err(UnsupportedElementWidth(width)),
        }
    }

    /// Width of the element type `T`.
    ///
    /// # Errors
    /// Returns [`crate::Error::UnsupportedElementWidth`] if `T` is not 1, 4 or 8 bytes wide.
    pub fn of<T: ScratchElement>() -> Result<Self> {
        Self::from_bytes(std::mem::size_of::<T>())
    }

    /// Number of bytes a single element occupies.
    #[must_use]
    pub fn bytes(self) -> usize {
        match self {
            ElementWidth::Byte => 1,
            ElementWidth::Word => 4,
            ElementWidth::Double => 8,
        }
    }

    /// Number of elements needed to cover the full 8 byte region.
    #[must_use]
    pub fn per_region(self) -> usize {
        8 / self.bytes()
    }
}

/// Trait for primitive types that can be moved between a typed slice and raw bytes.
///
/// Modelled on a classic endian-aware IO trait, restricted to little-endian since the
/// scratch region has a single fixed byte order: byte 0 is the least significant byte
/// of the low half.
pub trait ScratchElement: Copy + Sized {
    /// Byte array type holding one element.
    type Bytes: Sized + AsRef<[u8]> + for<'a> TryFrom<&'a [u8]>;

    /// Read `Self` from little-endian bytes
    fn from_le_bytes(bytes: Self::Bytes) -> Self;
    /// Write `Self` as little-endian bytes
    fn to_le_bytes(self) -> Self::Bytes;
}

macro_rules! impl_scratch_element {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ScratchElement for $ty {
                type Bytes = [u8; std::mem::size_of::<$ty>()];

                fn from_le_bytes(bytes: Self::Bytes) -> Self {
                    <$ty>::from_le_bytes(bytes)
                }

                fn to_le_bytes(self) -> Self::Bytes {
                    <$ty>::to_le_bytes(self)
                }
            }
        )*
    };
}

// 16-bit types are implemented so such buffers can be named, they are rejected on use
impl_scratch_element!(u8, i8, u16, i16, u32, i32, f32, u64, i64, f64);
