//! Bit-exact reinterpretation between bytes, 32-bit words and `f64`.
//!
//! A [`crate::bitview::BitView`] is an 8 byte scratch region with three co-located typed
//! accessors. A value written through one accessor and read back through another keeps
//! every bit: no numeric conversion happens, the same storage is only viewed differently.
//! This is the only channel through which a raw 64-bit pattern can be moved into or out
//! of a float-typed memory slot.
//!
//! # Layout
//!
//! The region has a single fixed byte order, independent of the host:
//!
//! | Bytes | Word view | Double view |
//! |-------|-----------|-------------|
//! | `0..4` | low half | mantissa bits 0-31 |
//! | `4..8` | high half | mantissa bits 32-51, exponent, sign |
//!
//! # Shared Instance
//!
//! [`crate::bitview::BitView::with_shared`] hands out a thread-local instance for the
//! duration of one closure call. A write followed by a read inside that closure forms one
//! exclusive conversion unit; no other caller can observe or clobber the region in between.
//!
//! # Examples
//!
//! ```rust
//! use quadword::bitview::{double_to_words, words_to_double};
//!
//! let (low, high) = double_to_words(1.0);
//! assert_eq!((low, high), (0, 0x3FF0_0000));
//! assert_eq!(words_to_double(low, high), 1.0);
//! ```

mod element;

use std::cell::RefCell;

pub use element::{ElementWidth, ScratchElement};

use crate::{
    Error::{OutOfBounds, UnalignedOffset},
    Result,
};

thread_local! {
    static SHARED: RefCell<BitView> = const { RefCell::new(BitView::new()) };
}

/// An 8 byte scratch region viewable as bytes, two words or one double.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BitView {
    bytes: [u8; 8],
}

impl BitView {
    /// Creates a zeroed region.
    #[must_use]
    pub const fn new() -> Self {
        BitView { bytes: [0; 8] }
    }

    /// Runs `f` with exclusive access to the calling thread's shared region.
    ///
    /// # Panics
    /// Panics if called again from inside `f`; a conversion unit can not be nested.
    pub fn with_shared<R>(f: impl FnOnce(&mut BitView) -> R) -> R {
        SHARED.with(|cell| f(&mut cell.borrow_mut()))
    }

    /// Stores the IEEE-754 bit pattern of `value`.
    pub fn write_double(&mut self, value: f64) {
        self.bytes = value.to_le_bytes();
    }

    /// Reads the region as an IEEE-754 double.
    #[must_use]
    pub fn read_double(&self) -> f64 {
        f64::from_le_bytes(self.bytes)
    }

    /// Stores the low and the high 32-bit half.
    pub fn write_words(&mut self, low: u32, high: u32) {
        self.bytes[..4].copy_from_slice(&low.to_le_bytes());
        self.bytes[4..].copy_from_slice(&high.to_le_bytes());
    }

    /// Reads the region as `(low, high)`.
    #[must_use]
    pub fn read_words(&self) -> (u32, u32) {
        let [b0, b1, b2, b3, b4, b5, b6, b7] = self.bytes;
        (
            u32::from_le_bytes([b0, b1, b2, b3]),
            u32::from_le_bytes([b4, b5, b6, b7]),
        )
    }

    /// Stores 8 raw bytes.
    pub fn write_bytes(&mut self, bytes: [u8; 8]) {
        self.bytes = bytes;
    }

    /// Reads the region as 8 raw bytes.
    #[must_use]
    pub fn read_bytes(&self) -> [u8; 8] {
        self.bytes
    }

    /// Copies an external sequence into the region.
    ///
    /// Every element contributes its little-endian bytes. The region is cleared first, so a
    /// sequence shorter than 8 bytes leaves the remaining bytes zero.
    ///
    /// # Errors
    /// - [`crate::Error::UnsupportedElementWidth`] if `T` is not 1, 4 or 8 bytes wide
    /// - [`crate::Error::OutOfBounds`] if the sequence spans more than 8 bytes
    pub fn load_from<T: ScratchElement>(&mut self, elements: &[T]) -> Result<()> {
        let width = ElementWidth::of::<T>()?;
        if elements.len() > width.per_region() {
            return Err(OutOfBounds);
        }

        self.bytes = [0; 8];
        for (chunk, element) in self.bytes.chunks_exact_mut(width.bytes()).zip(elements) {
            chunk.copy_from_slice(element.to_le_bytes().as_ref());
        }

        Ok(())
    }

    /// Writes the 8 byte pattern of `(low, high)` into `buffer`, starting at byte `offset`.
    ///
    /// The region itself is overwritten with the pattern as a side effect.
    ///
    /// # Errors
    /// - [`crate::Error::UnsupportedElementWidth`] if `T` is not 1, 4 or 8 bytes wide
    /// - [`crate::Error::UnalignedOffset`] if `offset` is not a multiple of the element width
    /// - [`crate::Error::OutOfBounds`] if the pattern does not fit at `offset`
    pub fn store_into<T: ScratchElement>(
        &mut self,
        low: u32,
        high: u32,
        buffer: &mut [T],
        offset: usize,
    ) -> Result<()> {
        let width = ElementWidth::of::<T>()?;
        if offset % width.bytes() != 0 {
            return Err(UnalignedOffset {
                offset,
                width: width.bytes(),
            });
        }

        let first = offset / width.bytes();
        let Some(last) = first.checked_add(width.per_region()) else {
            return Err(OutOfBounds);
        };
        let Some(targets) = buffer.get_mut(first..last) else {
            return Err(OutOfBounds);
        };

        self.write_words(low, high);
        for (target, chunk) in targets.iter_mut().zip(self.bytes.chunks_exact(width.bytes())) {
            let Ok(bytes) = chunk.try_into() else {
                return Err(OutOfBounds);
            };
            *target = T::from_le_bytes(bytes);
        }

        Ok(())
    }
}

/// Reinterprets a double as `(low, high)` through the shared region.
#[must_use]
pub fn double_to_words(value: f64) -> (u32, u32) {
    BitView::with_shared(|view| {
        view.write_double(value);
        view.read_words()
    })
}

/// Reinterprets `(low, high)` as a double through the shared region.
#[must_use]
pub fn words_to_double(low: u32, high: u32) -> f64 {
    BitView::with_shared(|view| {
        view.write_words(low, high);
        view.read_double()
    })
}
