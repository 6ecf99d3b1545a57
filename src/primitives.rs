//! Boundary to the memory primitives built on top of this crate.
//!
//! Exploits that corrupt a float-typed array typically end up with exactly one channel
//! into engine memory: reading and writing double-sized slots next to that array. An
//! object reference read through such a slot arrives as a double, an address planted
//! through it has to be one. This module only describes that channel and converts
//! addresses across it; the slots themselves come from the host.
//!
//! # Examples
//!
//! ```rust
//! use quadword::{primitives::{leak_address, plant_address}, Int64};
//!
//! // A plain vector stands in for the corrupted array
//! let mut slots = vec![1.1; 8];
//! let target: Int64 = "0x00007feeaf0b8080".parse()?;
//!
//! plant_address(&mut slots, 6, &target)?;
//! assert_eq!(leak_address(&slots, 6)?, target);
//! # Ok::<(), quadword::Error>(())
//! ```

use crate::{Error::OutOfBounds, Int64, Result};

/// Host capability to access double-typed memory slots.
pub trait DoubleSlots {
    /// Reads the slot at `index`.
    ///
    /// # Errors
    /// Implementation defined, [`crate::Error::OutOfBounds`] for unreachable slots.
    fn read_slot(&self, index: usize) -> Result<f64>;

    /// Writes `value` into the slot at `index`.
    ///
    /// # Errors
    /// Implementation defined, [`crate::Error::OutOfBounds`] for unreachable slots.
    fn write_slot(&mut self, index: usize, value: f64) -> Result<()>;
}

impl DoubleSlots for Vec<f64> {
    fn read_slot(&self, index: usize) -> Result<f64> {
        self.get(index).copied().ok_or(OutOfBounds)
    }

    fn write_slot(&mut self, index: usize, value: f64) -> Result<()> {
        let Some(slot) = self.get_mut(index) else {
            return Err(OutOfBounds);
        };
        *slot = value;
        Ok(())
    }
}

/// Reads the slot at `index` and returns its raw 64 bits.
///
/// # Errors
/// Propagates the error of [`DoubleSlots::read_slot`].
pub fn leak_address<S: DoubleSlots + ?Sized>(slots: &S, index: usize) -> Result<Int64> {
    let value = slots.read_slot(index)?;
    Ok(Int64::from_double(value))
}

/// Writes the raw 64 bits of `address` into the slot at `index`.
///
/// # Errors
/// Propagates the error of [`DoubleSlots::write_slot`].
pub fn plant_address<S: DoubleSlots + ?Sized>(
    slots: &mut S,
    index: usize,
    address: &Int64,
) -> Result<()> {
    slots.write_slot(index, address.to_double())
}
