//! Display configuration types and builder
//!
//! A [`Config`] is fixed for the lifetime of a [`Display`](crate::Display);
//! geometry is never changed at runtime. The defaults reproduce the reference
//! 128x32 panel: address 0x3C, internal charge pump, sequential COM pins.

pub use crate::error::{BuilderError, MAX_COLUMNS, MAX_PAGES};

/// Default 7-bit I2C address of the controller
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Display geometry in columns and 8-row pages
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    /// Number of columns (width in pixels)
    pub columns: u8,
    /// Number of pages (height in pixels / 8)
    pub pages: u8,
}

impl Dimensions {
    /// 128x32 panel (4 pages), the default geometry
    pub const DISPLAY_128X32: Self = Self {
        columns: 128,
        pages: 4,
    };

    /// 128x64 panel (8 pages)
    pub const DISPLAY_128X64: Self = Self {
        columns: 128,
        pages: 8,
    };

    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - columns == 0 or columns > MAX_COLUMNS
    /// - pages == 0 or pages > MAX_PAGES
    pub fn new(columns: u8, pages: u8) -> Result<Self, BuilderError> {
        if columns == 0 || columns > MAX_COLUMNS || pages == 0 || pages > MAX_PAGES {
            return Err(BuilderError::InvalidDimensions { columns, pages });
        }
        Ok(Self { columns, pages })
    }

    /// Height in pixel rows
    pub fn rows(&self) -> u8 {
        self.pages * 8
    }

    /// Multiplex ratio parameter (active rows minus one)
    pub fn multiplex_ratio(&self) -> u8 {
        self.rows() - 1
    }

    /// Index of the last column
    pub fn last_column(&self) -> u8 {
        self.columns - 1
    }

    /// Index of the last page
    pub fn last_page(&self) -> u8 {
        self.pages - 1
    }

    /// Size in bytes of a buffer covering the whole display
    ///
    /// One byte holds 8 vertically stacked pixels of one column in one page.
    pub fn buffer_size(&self) -> usize {
        self.columns as usize * self.pages as usize
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::DISPLAY_128X32
    }
}

/// How [`Display::clear`](crate::Display::clear) streams zeros to the panel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClearMode {
    /// One full-screen window and one transfer of the whole frame
    #[default]
    FullFrame,
    /// One window and one transfer per page, top to bottom
    ///
    /// Only a single page row of zeros is ever held in memory.
    PerPage,
}

/// Display configuration
///
/// This struct holds all configurable parameters for the SSD1306 controller.
/// Use `Builder` to create a Config.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// 7-bit I2C device address
    pub address: u8,
    /// Display dimensions
    pub dimensions: Dimensions,
    /// Clock divide ratio / oscillator frequency byte
    pub clock_divide: u8,
    /// Whether to enable the internal charge pump during initialization
    pub charge_pump: bool,
    /// COM pins hardware configuration byte
    pub com_pins: u8,
    /// Contrast applied during initialization
    pub contrast: u8,
    /// Pre-charge period byte
    pub precharge: u8,
    /// VCOMH deselect level byte
    pub vcomh: u8,
    /// Strategy used to blank the display
    pub clear_mode: ClearMode,
}

impl Default for Config {
    fn default() -> Self {
        Builder::new().into_config()
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use ssd1306::{Builder, Dimensions};
///
/// let config = match Builder::new()
///     .dimensions(Dimensions::DISPLAY_128X64)
///     .com_pins(0x12)
///     .build()
/// {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.dimensions.multiplex_ratio(), 0x3F);
/// ```
#[must_use]
pub struct Builder {
    /// 7-bit I2C device address
    address: u8,
    /// Display dimensions
    dimensions: Dimensions,
    /// Clock divide ratio / oscillator frequency byte
    clock_divide: u8,
    /// Whether to enable the internal charge pump
    charge_pump: bool,
    /// COM pins hardware configuration byte
    com_pins: u8,
    /// Contrast applied during initialization
    contrast: u8,
    /// Pre-charge period byte
    precharge: u8,
    /// VCOMH deselect level byte
    vcomh: u8,
    /// Strategy used to blank the display
    clear_mode: ClearMode,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            dimensions: Dimensions::DISPLAY_128X32,
            // Recommended oscillator frequency, divide ratio 1
            clock_divide: 0x80,
            charge_pump: true,
            // Matches 128x32 panel layout
            com_pins: 0x02,
            contrast: 0xCF,
            // Phase 1 = 1 DCLK, phase 2 = 15 DCLK
            precharge: 0xF1,
            vcomh: 0x40,
            clear_mode: ClearMode::FullFrame,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the 7-bit I2C device address
    pub fn address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    /// Set display dimensions
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = dims;
        self
    }

    /// Set clock divide ratio / oscillator frequency
    pub fn clock_divide(mut self, value: u8) -> Self {
        self.clock_divide = value;
        self
    }

    /// Enable or disable the internal charge pump step
    ///
    /// Panels powered from an external VCC supply must disable it.
    pub fn charge_pump(mut self, enabled: bool) -> Self {
        self.charge_pump = enabled;
        self
    }

    /// Set COM pins hardware configuration
    pub fn com_pins(mut self, value: u8) -> Self {
        self.com_pins = value;
        self
    }

    /// Set initial contrast
    pub fn contrast(mut self, value: u8) -> Self {
        self.contrast = value;
        self
    }

    /// Set pre-charge period
    pub fn precharge(mut self, value: u8) -> Self {
        self.precharge = value;
        self
    }

    /// Set VCOMH deselect level
    pub fn vcomh(mut self, value: u8) -> Self {
        self.vcomh = value;
        self
    }

    /// Set the clear strategy
    pub fn clear_mode(mut self, mode: ClearMode) -> Self {
        self.clear_mode = mode;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidAddress` if the address does not fit in 7 bits,
    /// or `BuilderError::InvalidDimensions` if the dimensions were built by hand
    /// outside the bounds enforced by [`Dimensions::new`].
    pub fn build(self) -> Result<Config, BuilderError> {
        if self.address > 0x7F {
            return Err(BuilderError::InvalidAddress(self.address));
        }
        Dimensions::new(self.dimensions.columns, self.dimensions.pages)?;
        Ok(self.into_config())
    }

    fn into_config(self) -> Config {
        Config {
            address: self.address,
            dimensions: self.dimensions,
            clock_divide: self.clock_divide,
            charge_pump: self.charge_pump,
            com_pins: self.com_pins,
            contrast: self.contrast,
            precharge: self.precharge,
            vcomh: self.vcomh,
            clear_mode: self.clear_mode,
        }
    }
}
