// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

//! # quadword
//!
//! Exact 64-bit values for exploit development against engines whose only numeric type is
//! an IEEE-754 double. A double holds 53 bits of integer precision, which is not enough for
//! a pointer; `quadword` keeps every value as two 32-bit halves and moves bit patterns in
//! and out of doubles by reinterpretation instead of conversion.
//!
//! ## Features
//!
//! - **Exact arithmetic** - Carry-propagating add and subtract on two 32-bit halves
//! - **Bit reinterpretation** - Bytes, words and doubles over one 8 byte scratch region
//! - **Flexible parsing** - Numbers, exact integers, hex and decimal strings, byte/word/double sequences
//! - **Engine encodings** - Small-integer tags, pointer tags and NaN-boxing, validated in both directions
//!
//! ## Quick Start
//!
//! ```rust
//! use quadword::prelude::*;
//!
//! // An object address leaked through a float-typed slot
//! let leaked = Int64::from_double(6.9495320262103e-310);
//! println!("object at {leaked}");
//!
//! // Point into the object and smuggle the address back out as a double
//! let butterfly = leaked.add(&Int64::new(0x8, 0));
//! let slot_value = butterfly.to_double();
//! assert_eq!(Int64::from_double(slot_value), butterfly);
//!
//! // Forge a JavaScriptCore boxed value
//! let boxed = Int64::new(0x0000_0000, 0x0001_0000).encode_nan_boxed()?;
//! assert_eq!(boxed, 0.0);
//! # Ok::<(), quadword::Error>(())
//! ```
//!
//! ## Modules
//!
//! - [`bitview`] - The scratch region and its typed views
//! - [`int64`] - The value type, its parsing, arithmetic and encodings
//! - [`config`] - NaN-boxing layout configuration
//! - [`primitives`] - Boundary to float-slot memory primitives
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T>`] with the crate-wide [`Error`]. Every error
//! is an input validation failure; arithmetic never fails.
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade and never installs a logger. Source dispatch
//! is logged at `trace`, lossy number conversions at `debug`.

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

#[macro_use]
pub(crate) mod error;

/// Shared functionality which is used in unit-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use quadword::prelude::*;
///
/// let value = Int64::from_source("0x41424344")?;
/// assert_eq!(value.low(), 0x4142_4344);
/// # Ok::<(), quadword::Error>(())
/// ```
pub mod prelude;

/// Bit-exact reinterpretation over an 8 byte scratch region
///
/// # Key Types
///
/// - [`crate::bitview::BitView`] - The region with its byte, word and double accessors
/// - [`crate::bitview::ScratchElement`] - Element types that can be loaded and stored
/// - [`crate::bitview::ElementWidth`] - The supported element widths
///
/// # Main Functions
///
/// - [`crate::bitview::double_to_words`] - Split a double into its two halves
/// - [`crate::bitview::words_to_double`] - Join two halves into a double
pub mod bitview;

/// Configuration of the NaN-boxing layout
pub mod config;

/// The 64-bit value type
///
/// See [`crate::Int64`] for construction, arithmetic, comparison and formatting, and
/// [`crate::int64::Int64Source`] for the accepted input shapes.
pub mod int64;

/// Boundary to float-slot memory primitives
pub mod primitives;

/// `quadword` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `quadword` Error type
///
/// # Examples
///
/// ```rust
/// use quadword::{Error, Int64};
///
/// match Int64::new(0, 1).encode_small_integer() {
///     Ok(tagged) => println!("tagged: {tagged}"),
///     Err(Error::NotSmallIntegerEncodable(value)) => println!("{value} is too wide"),
///     Err(e) => println!("Error: {e}"),
/// }
/// ```
pub use error::Error;

/// The 64-bit value type, see [`int64::Int64`].
pub use int64::Int64;

/// NaN-boxing layout, see [`config::EncodingConfig`].
pub use config::EncodingConfig;
