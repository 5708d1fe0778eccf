//! SSD1306 command definitions
//!
//! This module defines the control bytes and command opcodes used to drive the
//! SSD1306 OLED controller over I2C.
//!
//! ## Transaction Structure
//!
//! Every I2C write transaction to the controller follows the pattern:
//! 1. START + 7-bit device address (write)
//! 2. One control byte ([`CONTROL_COMMAND`] or [`CONTROL_DATA`])
//! 3. Payload bytes
//! 4. STOP
//!
//! A command that takes parameters is not sent as one transaction. The opcode
//! and each parameter byte are sent as separate command transactions, in order;
//! the controller decides from its own state whether a byte is an opcode or a
//! parameter. [`Command`] captures that pairing so call sites never have to.
//!
//! ## Example
//!
//! ```
//! use ssd1306::command::{self, Command};
//!
//! let contrast = Command::with_param(command::SET_CONTRAST, 0xCF);
//! assert_eq!(contrast.opcode(), 0x81);
//! assert_eq!(contrast.params(), &[0xCF]);
//! ```

// Control bytes

/// Control byte selecting command mode (0x00)
///
/// The byte following it in the same transaction is an opcode or parameter.
pub const CONTROL_COMMAND: u8 = 0x00;

/// Control byte selecting data mode (0x40)
///
/// All bytes following it in the same transaction are written to display RAM.
pub const CONTROL_DATA: u8 = 0x40;

// Fundamental commands

/// Display off / sleep (0xAE)
pub const DISPLAY_OFF: u8 = 0xAE;

/// Display on (0xAF)
pub const DISPLAY_ON: u8 = 0xAF;

/// Contrast control (0x81)
///
/// Requires 1 parameter: contrast value, 0x00..=0xFF.
pub const SET_CONTRAST: u8 = 0x81;

/// Resume to RAM content display (0xA4)
///
/// Disables the "entire display on" test mode.
pub const DISPLAY_ALL_ON_RESUME: u8 = 0xA4;

/// Normal display polarity (0xA6)
pub const NORMAL_DISPLAY: u8 = 0xA6;

/// Inverted display polarity (0xA7)
pub const INVERT_DISPLAY: u8 = 0xA7;

// Addressing commands

/// Set memory addressing mode (0x20)
///
/// Requires 1 parameter. Only [`MEMORY_MODE_HORIZONTAL`] is used by this driver.
pub const MEMORY_MODE: u8 = 0x20;

/// Horizontal addressing: column auto-increments, then wraps to the next page
pub const MEMORY_MODE_HORIZONTAL: u8 = 0x00;

/// Set column address window (0x21)
///
/// Requires 2 parameters: start column, end column (inclusive).
pub const COLUMN_ADDRESS: u8 = 0x21;

/// Set page address window (0x22)
///
/// Requires 2 parameters: start page, end page (inclusive).
pub const PAGE_ADDRESS: u8 = 0x22;

// Hardware configuration commands

/// Set display start line (0x40 | line)
///
/// The line number (0..=63) is OR-ed into the opcode itself.
pub const SET_START_LINE: u8 = 0x40;

/// Start line 0: no vertical scroll of display RAM
pub const START_LINE_TOP: u8 = SET_START_LINE;

/// Segment re-map base opcode (0xA0)
///
/// OR with 0x01 to map column 127 to SEG0.
pub const SEG_REMAP: u8 = 0xA0;

/// Segment re-map with column 127 mapped to SEG0 (0xA1)
pub const SEG_REMAP_MIRRORED: u8 = 0xA1;

/// Set multiplex ratio (0xA8)
///
/// Requires 1 parameter: number of active rows minus one.
pub const SET_MULTIPLEX: u8 = 0xA8;

/// COM output scan direction: remapped, COM[N-1] to COM0 (0xC8)
pub const COM_SCAN_DEC: u8 = 0xC8;

/// Set display offset (0xD3)
///
/// Requires 1 parameter: vertical shift, 0..=63.
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;

/// Set COM pins hardware configuration (0xDA)
///
/// Requires 1 parameter. 0x02 is sequential, 0x12 is alternative.
pub const SET_COM_PINS: u8 = 0xDA;

// Timing and driving commands

/// Set display clock divide ratio / oscillator frequency (0xD5)
///
/// Requires 1 parameter: high nibble oscillator frequency, low nibble divide ratio.
pub const SET_DISPLAY_CLOCK: u8 = 0xD5;

/// Set pre-charge period (0xD9)
///
/// Requires 1 parameter: high nibble phase 2, low nibble phase 1.
pub const SET_PRECHARGE: u8 = 0xD9;

/// Set VCOMH deselect level (0xDB)
///
/// Requires 1 parameter.
pub const SET_VCOM_DETECT: u8 = 0xDB;

/// Charge pump setting (0x8D)
///
/// Requires 1 parameter: [`CHARGE_PUMP_ENABLE`] or [`CHARGE_PUMP_DISABLE`].
pub const CHARGE_PUMP: u8 = 0x8D;

/// Charge pump parameter: enable internal regulator
pub const CHARGE_PUMP_ENABLE: u8 = 0x14;

/// Charge pump parameter: disable internal regulator (external VCC)
pub const CHARGE_PUMP_DISABLE: u8 = 0x10;

/// Maximum number of parameter bytes carried by a single [`Command`]
pub const MAX_PARAMS: usize = 2;

/// A controller opcode together with the parameter bytes that must follow it
///
/// Each byte (opcode first, then parameters in order) is delivered as its own
/// command transaction by [`Display::command`](crate::Display::command).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Command {
    opcode: u8,
    params: [u8; MAX_PARAMS],
    param_count: u8,
}

impl Command {
    /// A command with no parameters
    pub const fn new(opcode: u8) -> Self {
        Self {
            opcode,
            params: [0; MAX_PARAMS],
            param_count: 0,
        }
    }

    /// A command followed by one parameter byte
    pub const fn with_param(opcode: u8, param: u8) -> Self {
        Self {
            opcode,
            params: [param, 0],
            param_count: 1,
        }
    }

    /// A command followed by two parameter bytes
    pub const fn with_params(opcode: u8, first: u8, second: u8) -> Self {
        Self {
            opcode,
            params: [first, second],
            param_count: 2,
        }
    }

    /// The opcode byte
    pub const fn opcode(&self) -> u8 {
        self.opcode
    }

    /// The parameter bytes, in transmission order
    pub fn params(&self) -> &[u8] {
        &self.params[..self.param_count as usize]
    }

    /// Number of command transactions needed to deliver this command
    pub fn transaction_count(&self) -> usize {
        1 + self.param_count as usize
    }
}
