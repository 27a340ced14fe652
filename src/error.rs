//! Error types for the driver
//!
//! This module defines error types for configuration building ([`BuilderError`])
//! and display operations ([`Error`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display operations
//!
//! ## Example
//!
//! ```
//! use pcf8566::{Builder, BuilderError};
//!
//! // Address does not fit in 7 bits
//! let result = Builder::new().address(0xFC).build();
//! assert!(matches!(result, Err(BuilderError::InvalidAddress(0xFC))));
//! ```

use crate::config::MAX_ADDRESS;
use crate::interface::DisplayInterface;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying bus error.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Bus transport error
    ///
    /// The single write transaction failed (device not present, arbitration
    /// lost, short write). Wraps the error from the [`DisplayInterface`]
    /// implementation.
    Interface(I::Error),
    /// Character slot outside the display
    ///
    /// Only returned by [`Display::try_set_char`](crate::Display::try_set_char);
    /// [`Display::set_char`](crate::Display::set_char) ignores such slots.
    InvalidCharacter {
        /// Slot requested
        index: usize,
        /// Number of slots on the display
        count: usize,
    },
    /// Text has more glyphs than there are digit slots
    TextTooLong {
        /// Maximum number of glyphs
        max: usize,
        /// Number of glyphs provided
        provided: usize,
    },
    /// Byte has no seven-segment representation
    UnsupportedGlyph(u8),
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
            Self::InvalidCharacter { index, count } => {
                write!(f, "Invalid character slot {index} (display has {count})")
            }
            Self::TextTooLong { max, provided } => {
                write!(f, "Text too long: {provided} glyphs, max {max}")
            }
            Self::UnsupportedGlyph(byte) => write!(f, "Unsupported glyph: {byte:#04x}"),
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the display is opened.
#[derive(Debug, PartialEq)]
pub enum BuilderError {
    /// I2C address does not fit in 7 bits
    InvalidAddress(u8),
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidAddress(address) => write!(
                f,
                "Invalid I2C address {address:#04x} (max {MAX_ADDRESS:#04x})"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}
