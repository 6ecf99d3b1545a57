//! # quadword Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the quadword library.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all quadword operations
pub use crate::Error;

/// The result type used throughout quadword
pub use crate::Result;

/// Configuration of the NaN-boxing layout
pub use crate::EncodingConfig;

// ================================================================================================
// Values
// ================================================================================================

/// The 64-bit value type and its accepted input shapes
pub use crate::int64::{Int64, Int64Source};

// ================================================================================================
// Bit Reinterpretation
// ================================================================================================

/// Scratch region, element types and the shared conversion helpers
pub use crate::bitview::{
    double_to_words, words_to_double, BitView, ElementWidth, ScratchElement,
};

// ================================================================================================
// Memory Primitive Boundary
// ================================================================================================

/// Float slot channel and the address conversions built on it
pub use crate::primitives::{leak_address, plant_address, DoubleSlots};
