//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the [`I2cInterface`] struct
//! for communicating with the SSD1306 controller over I2C.
//!
//! ## Bus Framing
//!
//! The SSD1306 is write-only over I2C. Every operation is one write transaction:
//! - **Command**: `START, address, 0x00, byte, STOP`
//! - **Data**: `START, address, 0x40, byte 0 .. byte N-1, STOP`
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_hal::i2c::{ErrorType, I2c, Operation};
//! use ssd1306::{DisplayInterface, I2cInterface};
//! # use core::convert::Infallible;
//! # struct MockI2c;
//! # impl ErrorType for MockI2c { type Error = Infallible; }
//! # impl I2c for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: u8,
//! #         _operations: &mut [Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! let mut bus = MockI2c;
//! // Borrow the bus; it stays owned by the caller
//! let mut interface = I2cInterface::new(&mut bus, 0x3C);
//!
//! // Display off
//! let _ = interface.send_command(0xAE);
//!
//! // Write three columns of pixel data
//! let _ = interface.send_data(&[0xFF, 0x00, 0xFF]);
//! ```

use core::fmt::Debug;
use embedded_hal::i2c::{I2c, Operation};

use crate::command::{CONTROL_COMMAND, CONTROL_DATA};

type InterfaceResult<T, E> = core::result::Result<T, E>;

/// Trait for the transport to an SSD1306 controller
///
/// This trait abstracts over the bus, allowing the
/// [`Display`](crate::display::Display) to work with any implementation that
/// frames bytes the way the controller expects.
///
/// ## Implementing
///
/// For I2C, use the provided [`I2cInterface`]. Implement this trait on your
/// own type for other transports or for recording bus traffic in tests.
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send one command-mode byte to the controller
    ///
    /// The implementation must send exactly one command control byte followed
    /// by `command`, inside a single bus transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transaction fails.
    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error>;

    /// Send data bytes to display RAM
    ///
    /// The implementation must send the data control byte once, followed by
    /// every byte of `data`, inside a single bus transaction. An empty slice
    /// still produces a transaction carrying just the control byte.
    ///
    /// # Errors
    ///
    /// Returns an error if the bus transaction fails. The controller may have
    /// received part of the data.
    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error>;
}

/// I2C interface implementation for SSD1306
///
/// Implements [`DisplayInterface`] for any embedded-hal v1.0 [`I2c`] bus.
/// Since embedded-hal implements [`I2c`] for `&mut T`, passing `&mut bus`
/// leaves ownership of the bus with the caller.
#[derive(Debug)]
pub struct I2cInterface<I2C> {
    /// I2C bus
    i2c: I2C,
    /// 7-bit device address
    address: u8,
}

impl<I2C> I2cInterface<I2C>
where
    I2C: I2c,
{
    /// Create a new I2cInterface
    ///
    /// # Arguments
    ///
    /// * `i2c` - I2C bus (owned, or `&mut` to a caller-owned bus)
    /// * `address` - 7-bit device address, usually [`DEFAULT_ADDRESS`](crate::config::DEFAULT_ADDRESS)
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Get the device address
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Consume the interface and return the bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> DisplayInterface for I2cInterface<I2C>
where
    I2C: I2c,
{
    type Error = I2C::Error;

    fn send_command(&mut self, command: u8) -> InterfaceResult<(), Self::Error> {
        self.i2c.write(self.address, &[CONTROL_COMMAND, command])
    }

    fn send_data(&mut self, data: &[u8]) -> InterfaceResult<(), Self::Error> {
        // Adjacent writes are sent without a repeated START, so the controller
        // sees one transaction: control byte then payload.
        self.i2c.transaction(
            self.address,
            &mut [Operation::Write(&[CONTROL_DATA]), Operation::Write(data)],
        )
    }
}
