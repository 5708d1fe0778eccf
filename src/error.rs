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
//! The driver performs no recovery of its own. A failed bus transaction aborts
//! the operation in progress and leaves the controller in an unspecified state;
//! re-running [`Display::init`](crate::Display::init) is the usual way back.
//!
//! ## Example
//!
//! ```
//! use ssd1306::{Builder, BuilderError, Dimensions};
//!
//! // Too many pages
//! let result = Dimensions::new(128, 9);
//! assert!(matches!(result, Err(BuilderError::InvalidDimensions { .. })));
//!
//! // 8-bit address
//! let result = Builder::new().address(0x80).build();
//! assert!(matches!(result, Err(BuilderError::InvalidAddress(0x80))));
//! ```

use crate::interface::DisplayInterface;

/// Maximum number of columns (segment outputs) driven by the SSD1306
pub const MAX_COLUMNS: u8 = 128;

/// Maximum number of 8-row pages (64 common outputs) driven by the SSD1306
pub const MAX_PAGES: u8 = 8;

/// Errors that can occur when talking to the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying bus error.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (I2C)
    ///
    /// Wraps the underlying bus error from the [`DisplayInterface`] implementation,
    /// e.g. address not acknowledged or arbitration loss.
    Interface(I::Error),
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
#[derive(Debug, PartialEq, Eq)]
pub enum BuilderError {
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Number of columns requested
        columns: u8,
        /// Number of pages requested
        pages: u8,
    },
    /// Device address does not fit in 7 bits
    InvalidAddress(u8),
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidDimensions { columns, pages } => write!(
                f,
                "Invalid dimensions {columns} columns x {pages} pages (max {MAX_COLUMNS}x{MAX_PAGES}, both non-zero)"
            ),
            Self::InvalidAddress(address) => {
                write!(f, "Invalid I2C address {address:#04x} (must be 7-bit)")
            }
        }
    }
}

impl core::error::Error for BuilderError {}
