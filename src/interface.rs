//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`I2cInterface`]
//! struct for communicating with the PCF8566 controller over I2C.
//!
//! ## Hardware Requirements
//!
//! The PCF8566 only needs the I2C bus (SDA + SCL). The protocol is
//! write-only: every operation is a single write transaction, nothing is
//! read back.
//!
//! ## Borrowing the Bus
//!
//! embedded-hal implements [`I2c`] for `&mut T`, so a shared bus can be
//! lent to the driver and used again once the display is closed.
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::i2c::{I2c, Operation, SevenBitAddress};
//! use pcf8566::{DisplayInterface, I2cInterface};
//! # use core::convert::Infallible;
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
//! let mut interface = I2cInterface::new(&mut bus);
//!
//! // Mode set: enable display, four backplanes
//! let _ = interface.write(0x3E, &[0x48]);
//! ```

use core::fmt::Debug;
use embedded_hal::i2c::I2c;

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Trait for the bus transport to the PCF8566 controller
///
/// This trait abstracts over different hardware implementations, allowing
/// the [`Display`](crate::display::Display) to work with any transport that
/// can perform one write transaction to a device address.
///
/// ## Implementing
///
/// For most cases, use the provided [`I2cInterface`] struct. Implement this
/// trait directly for transports that are not embedded-hal I2C buses, or to
/// record traffic in tests.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Write `bytes` to the device at `address` as one transaction
    ///
    /// The transaction must be all-or-nothing from the caller's view: either
    /// every byte was acknowledged or an error is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the device does not acknowledge, arbitration is
    /// lost, or the bus fails.
    fn write(&mut self, address: u8, bytes: &[u8]) -> InterfaceResult<(), Self::Error>;
}

/// Hardware interface implementation for PCF8566
///
/// Implements [`DisplayInterface`] for embedded-hal v1.0 I2C buses.
///
/// ## Type Parameters
///
/// * `I2C` - I2C bus implementing [`I2c`], or `&mut` to one
pub struct I2cInterface<I2C> {
    /// I2C bus used for all transactions
    i2c: I2C,
}

impl<I2C> I2cInterface<I2C>
where
    I2C: I2c,
{
    /// Create a new I2cInterface
    pub fn new(i2c: I2C) -> Self {
        Self { i2c }
    }

    /// Release the underlying bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> DisplayInterface for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn write(&mut self, address: u8, bytes: &[u8]) -> InterfaceResult<(), Self::Error> {
        self.i2c.write(address, bytes)
    }
}
