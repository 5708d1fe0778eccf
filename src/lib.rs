//! SSD1306 OLED Display Driver
//!
//! A driver for the SSD1306 monochrome OLED controller on a two-wire (I2C) bus.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - Configurable geometry (128x32, 128x64, or any size up to 128x64)
//! - Horizontal addressing with column/page windows for partial updates
//! - Optional charge pump step for externally powered panels
//! - Full-frame or page-by-page clearing
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::i2c::{ErrorType, I2c, Operation};
//! use ssd1306::{Builder, Dimensions, Display};
//!
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
//! # let mut i2c = MockI2c;
//! let config = match Builder::new().dimensions(Dimensions::DISPLAY_128X32).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = Display::new_i2c(&mut i2c, config);
//! let _ = display.init();
//!
//! // Fill an 11-column, 2-page window with lit pixels
//! let _ = display.set_column_address(10, 20);
//! let _ = display.set_page_address(1, 2);
//! let _ = display.send_buffer(&[0xFF; 22]);
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// SSD1306 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Hardware interface abstraction
pub mod interface;
/// Controller initialization sequence
pub mod sequence;

#[cfg(test)]
mod mock;

pub use command::Command;
pub use config::{Builder, ClearMode, Config, DEFAULT_ADDRESS, Dimensions, MAX_COLUMNS, MAX_PAGES};
pub use display::Display;
pub use error::{BuilderError, Error};
pub use interface::{DisplayInterface, I2cInterface};
