//! Shared value factories for unit tests.

use crate::Int64;

/// Values sitting on the carry, sign and tag boundaries of both halves.
pub(crate) fn boundary_values() -> Vec<Int64> {
    vec![
        Int64::ZERO,
        Int64::ONE,
        Int64::MAX,
        Int64::new(0xFFFF_FFFF, 0),
        Int64::new(0, 1),
        Int64::new(0, 0xFFFF_FFFF),
        Int64::new(0, 0x8000_0000),
        Int64::new(0xFFFF_FFFF, 0x7FFF_FFFF),
        Int64::new(0x8000_0000, 0x7FFF_FFFF),
        Int64::new(0, 0x0001_0000),
        Int64::new(0xFFFF_FFFF, 0xFFFE_FFFF),
        Int64::new(0xDEAD_BEEF, 0xCAFE_BABE),
        Int64::new(0xAF0B_8080, 0x0000_7FEE),
    ]
}

/// Values a JavaScriptCore NaN-box accepts.
pub(crate) fn nan_boxable_values() -> Vec<Int64> {
    boundary_values()
        .into_iter()
        .filter(|value| (0x0001_0000..0xFFFF_0000).contains(&value.high()))
        .collect()
}
