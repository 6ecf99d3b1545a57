use thiserror::Error;

use crate::int64::Int64;

macro_rules! unrepresentable {
    // Single string version
    ($msg:expr) => {
        crate::Error::UnrepresentableInput {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::UnrepresentableInput {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Every failure in this crate is a synchronous input validation failure. Nothing is
/// transient and nothing is worth retrying: the caller handed in a value that cannot be
/// represented or encoded in the requested form. Arithmetic never fails.
///
/// # Error Categories
///
/// ## Scratch Buffer Errors
/// - [`Error::UnsupportedElementWidth`] - Element type is not 1, 4 or 8 bytes wide
/// - [`Error::OutOfBounds`] - Source or destination does not fit
/// - [`Error::UnalignedOffset`] - Byte offset is not a multiple of the element width
///
/// ## Parsing Errors
/// - [`Error::StringTooLong`] - More than 16 hex digits
/// - [`Error::UnrepresentableInput`] - Input shape or content can not become a 64-bit value
///
/// ## Encoding Errors
/// - [`Error::NotSmallIntegerEncodable`] - Upper half is not zero
/// - [`Error::NotSmallIntegerTagged`] - Lower half is not the zero tag
/// - [`Error::ValueNotEncodable`] - Upper half is outside the NaN-box tag range
///
/// # Examples
///
/// ```rust
/// use quadword::{Error, Int64};
///
/// match "0x11223344556677889".parse::<Int64>() {
///     Ok(value) => println!("parsed {value}"),
///     Err(Error::StringTooLong(digits)) => eprintln!("{digits} digits is too many"),
///     Err(e) => eprintln!("Other error: {e}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// An element type other than 1, 4 or 8 bytes was used with the scratch region.
    ///
    /// The associated value is the rejected width in bytes.
    #[error("Unsupported element width - {0} bytes (expected 1, 4 or 8)")]
    UnsupportedElementWidth(usize),

    /// A read or write would have crossed the end of a buffer.
    ///
    /// Raised when a source sequence spans more than the 8 byte scratch region, or when
    /// an 8 byte pattern does not fit into a destination at the requested offset.
    #[error("Out of Bound access would have occurred!")]
    OutOfBounds,

    /// The byte offset of a store is not aligned to the element width of the buffer.
    #[error("Offset {offset} is not aligned to the {width} byte element width")]
    UnalignedOffset {
        /// The requested byte offset
        offset: usize,
        /// The element width of the destination buffer
        width: usize,
    },

    /// A hex literal carried more than 16 digits.
    ///
    /// The associated value is the number of digits found after the radix marker.
    #[error("Hex string has {0} digits, at most 16 fit into 64 bits")]
    StringTooLong(usize),

    /// The input could not be turned into a 64-bit value.
    ///
    /// # Fields
    ///
    /// * `message` - Description of what could not be represented
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Unrepresentable - {file}:{line}: {message}")]
    UnrepresentableInput {
        /// The message to be printed for the UnrepresentableInput error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// A small-integer encoding was requested for a value whose upper half is not zero.
    #[error("{0} does not fit into a small integer (upper half must be zero)")]
    NotSmallIntegerEncodable(Int64),

    /// A small-integer decoding was requested for a value whose lower half is not zero.
    #[error("{0} is not a tagged small integer (lower half must be zero)")]
    NotSmallIntegerTagged(Int64),

    /// The upper half lies outside the tag range a NaN-boxed value may occupy.
    #[error("{0} can not be NaN-boxed, upper half is outside the encodable range")]
    ValueNotEncodable(Int64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrepresentable_records_location() {
        let err = unrepresentable!("bad input {}", 42);
        match err {
            Error::UnrepresentableInput {
                message,
                file,
                line,
            } => {
                assert_eq!(message, "bad input 42");
                assert!(file.ends_with("error.rs"));
                assert!(line > 0);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn display_includes_value() {
        let err = Error::NotSmallIntegerEncodable(Int64::new(0, 1));
        assert_eq!(
            err.to_string(),
            "0x0000000100000000 does not fit into a small integer (upper half must be zero)"
        );
    }
}
