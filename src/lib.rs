//! PCF8566 Segment LCD Driver
//!
//! A driver for the PCF8566 segment LCD controller wired to a seven-slot
//! glass (six seven-segment digits with decimal points plus an `A` / `D` /
//! `-` indicator), driven in four-backplane mode over I2C.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - Segment flags to display RAM mapping for the wired glass
//! - Whole-display updates in a single I2C transaction
//! - ASCII text and indicator helpers
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::i2c::{I2c, Operation, SevenBitAddress};
//! use pcf8566::{Builder, Display, I2cInterface, glyph};
//!
//! # struct MockI2c;
//! # impl embedded_hal::i2c::ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c<SevenBitAddress> for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: u8,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # let mut bus = MockI2c;
//! let config = match Builder::new().address(0x3E).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//! let mut display = match Display::open(I2cInterface::new(&mut bus), config) {
//!     Ok(display) => display,
//!     Err(_) => return,
//! };
//!
//! display.clear();
//! display.set_char(0, glyph::DIGITS[4]);
//! display.set_char(1, glyph::DIGITS[2] | 0x80);
//! let _ = display.update();
//!
//! let _bus = display.close().release();
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// PCF8566 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Display RAM image and wire frame
pub mod frame;
/// Seven-segment glyph patterns
pub mod glyph;
/// Hardware interface abstraction
pub mod interface;
/// Segment to display RAM mapping
pub mod segment;

pub use command::Bias;
pub use config::{Builder, Config, DEFAULT_ADDRESS};
pub use display::Display;
pub use error::{BuilderError, Error};
pub use frame::{FRAME_SIZE, Header, RAM_SIZE, RamImage};
pub use glyph::Indicator;
pub use interface::{DisplayInterface, I2cInterface};
pub use segment::{NUM_CHARS, Segment, bit_position};
