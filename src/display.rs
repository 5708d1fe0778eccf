//! Core display operations

use embedded_hal::i2c::I2c;
use log::{debug, trace};

use crate::command::{
    COLUMN_ADDRESS, Command, DISPLAY_OFF, DISPLAY_ON, INVERT_DISPLAY, NORMAL_DISPLAY,
    PAGE_ADDRESS, SET_CONTRAST,
};
use crate::config::{ClearMode, Config, Dimensions, MAX_COLUMNS, MAX_PAGES};
use crate::error::Error;
use crate::interface::{DisplayInterface, I2cInterface};
use crate::sequence::init_sequence;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Zeros for the largest frame the controller can address
static ZERO_FRAME: [u8; MAX_COLUMNS as usize * MAX_PAGES as usize] =
    [0; MAX_COLUMNS as usize * MAX_PAGES as usize];

/// Core display driver for SSD1306
///
/// Holds no display state of its own: every operation is a blocking sequence
/// of bus transactions against the controller. Callers sharing one bus between
/// tasks must provide their own mutual exclusion.
///
/// ## Pixel Buffer Layout
///
/// Buffers passed to [`send_buffer`](Self::send_buffer) are page-major: byte
/// `page * width + column` holds 8 vertically stacked pixels, LSB on top.
/// The controller fills the current column/page window in that order.
#[derive(Debug)]
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
}

impl<I2C> Display<I2cInterface<I2C>>
where
    I2C: I2c,
{
    /// Create a Display on an I2C bus at the configured address
    ///
    /// ```rust,no_run
    /// use embedded_hal::i2c::{ErrorType, I2c, Operation};
    /// use ssd1306::{Config, Display};
    /// # use core::convert::Infallible;
    /// # struct MockI2c;
    /// # impl ErrorType for MockI2c { type Error = Infallible; }
    /// # impl I2c for MockI2c {
    /// #     fn transaction(
    /// #         &mut self,
    /// #         _address: u8,
    /// #         _operations: &mut [Operation<'_>],
    /// #     ) -> Result<(), Self::Error> {
    /// #         Ok(())
    /// #     }
    /// # }
    /// let mut bus = MockI2c;
    /// let mut display = Display::new_i2c(&mut bus, Config::default());
    /// let _ = display.init();
    /// ```
    pub fn new_i2c(i2c: I2C, config: Config) -> Self {
        let interface = I2cInterface::new(i2c, config.address);
        Self::new(interface, config)
    }
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    ///
    /// No bus traffic is generated until [`init`](Self::init) is called.
    pub fn new(interface: I, config: Config) -> Self {
        Self { interface, config }
    }

    /// Bring the controller from reset to a configured, blank, displaying state
    ///
    /// Sends the full initialization sequence followed by [`clear`](Self::clear).
    /// Safe to repeat: each call emits the identical byte sequence.
    ///
    /// # Errors
    ///
    /// Stops at the first failed transaction. The controller is then in an
    /// unspecified state and the whole sequence should be run again.
    pub fn init(&mut self) -> DisplayResult<I> {
        debug!(
            "ssd1306: init {}x{} at {:#04x}",
            self.config.dimensions.columns,
            self.config.dimensions.rows(),
            self.config.address
        );
        for cmd in init_sequence(&self.config) {
            self.command(cmd)?;
        }
        self.clear()?;
        debug!("ssd1306: init complete");
        Ok(())
    }

    /// Send a single command-mode byte (opcode or parameter) in its own transaction
    pub fn send_command(&mut self, byte: u8) -> DisplayResult<I> {
        self.interface.send_command(byte).map_err(Error::Interface)
    }

    /// Send a command and its parameters, one transaction per byte
    pub fn command(&mut self, cmd: Command) -> DisplayResult<I> {
        trace!("ssd1306: command {:#04x} {:02x?}", cmd.opcode(), cmd.params());
        self.send_command(cmd.opcode())?;
        for &param in cmd.params() {
            self.send_command(param)?;
        }
        Ok(())
    }

    /// Set the column window (inclusive) for the next buffer transfer
    ///
    /// Values are forwarded verbatim; keeping `start <= end < width` is the
    /// caller's responsibility.
    pub fn set_column_address(&mut self, start: u8, end: u8) -> DisplayResult<I> {
        self.command(Command::with_params(COLUMN_ADDRESS, start, end))
    }

    /// Set the page window (inclusive) for the next buffer transfer
    ///
    /// Values are forwarded verbatim; keeping `start <= end < pages` is the
    /// caller's responsibility.
    pub fn set_page_address(&mut self, start: u8, end: u8) -> DisplayResult<I> {
        self.command(Command::with_params(PAGE_ADDRESS, start, end))
    }

    /// Stream `buffer` into the current window as one data transaction
    ///
    /// The controller auto-increments column then page. The buffer length
    /// should equal the window size; extra bytes wrap to the window start.
    ///
    /// # Errors
    ///
    /// A failure mid-transfer leaves the window partially written.
    pub fn send_buffer(&mut self, buffer: &[u8]) -> DisplayResult<I> {
        self.interface.send_data(buffer).map_err(Error::Interface)
    }

    /// Blank the whole display
    ///
    /// Uses the configured [`ClearMode`]: either a single full-screen transfer,
    /// or one single-page window and transfer per page.
    pub fn clear(&mut self) -> DisplayResult<I> {
        let dims = self.config.dimensions;
        debug!("ssd1306: clear ({:?})", self.config.clear_mode);
        match self.config.clear_mode {
            ClearMode::FullFrame => {
                self.set_column_address(0, dims.last_column())?;
                self.set_page_address(0, dims.last_page())?;
                self.send_buffer(&ZERO_FRAME[..dims.buffer_size()])?;
            }
            ClearMode::PerPage => {
                for page in 0..dims.pages {
                    self.set_column_address(0, dims.last_column())?;
                    self.set_page_address(page, page)?;
                    self.send_buffer(&ZERO_FRAME[..dims.columns as usize])?;
                }
            }
        }
        Ok(())
    }

    /// Turn the panel on or off
    ///
    /// Display RAM is retained while off.
    pub fn set_display_on(&mut self, on: bool) -> DisplayResult<I> {
        self.send_command(if on { DISPLAY_ON } else { DISPLAY_OFF })
    }

    /// Set contrast (0x00..=0xFF)
    pub fn set_contrast(&mut self, contrast: u8) -> DisplayResult<I> {
        self.command(Command::with_param(SET_CONTRAST, contrast))
    }

    /// Invert pixel polarity (lit pixels for cleared RAM bits)
    pub fn set_inverted(&mut self, inverted: bool) -> DisplayResult<I> {
        self.send_command(if inverted {
            INVERT_DISPLAY
        } else {
            NORMAL_DISPLAY
        })
    }

    /// Get display dimensions
    pub fn dimensions(&self) -> &Dimensions {
        &self.config.dimensions
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Consume the driver and return the interface
    pub fn release(self) -> I {
        self.interface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Builder;
    use crate::mock::{RecordingBus, RecordingInterface, Transfer};
    use alloc::vec;
    use alloc::vec::Vec;

    /// Command bytes emitted by `init` before the clear
    const INIT_COMMANDS: [u8; 25] = [
        0xAE, 0xD5, 0x80, 0xA8, 0x1F, 0xD3, 0x00, 0x40, 0x8D, 0x14, 0x20, 0x00, 0xA1, 0xC8, 0xDA,
        0x02, 0x81, 0xCF, 0xD9, 0xF1, 0xDB, 0x40, 0xA4, 0xA6, 0xAF,
    ];

    fn command(byte: u8) -> Transfer {
        Transfer {
            address: 0x3C,
            bytes: vec![0x00, byte],
        }
    }

    fn data(payload: &[u8]) -> Transfer {
        let mut bytes = vec![0x40];
        bytes.extend_from_slice(payload);
        Transfer {
            address: 0x3C,
            bytes,
        }
    }

    /// Expected transfers for a full-screen clear of the default panel
    fn clear_transfers() -> Vec<Transfer> {
        let mut expected: Vec<Transfer> = [0x21, 0, 127, 0x22, 0, 3]
            .into_iter()
            .map(command)
            .collect();
        expected.push(data(&[0u8; 512]));
        expected
    }

    fn init_transfers() -> Vec<Transfer> {
        let mut expected: Vec<Transfer> = INIT_COMMANDS.into_iter().map(command).collect();
        expected.extend(clear_transfers());
        expected
    }

    fn test_display(bus: &mut RecordingBus) -> Display<I2cInterface<&mut RecordingBus>> {
        Display::new_i2c(bus, Config::default())
    }

    #[test]
    fn test_init_emits_reference_sequence() {
        let mut bus = RecordingBus::new();
        test_display(&mut bus).init().unwrap();
        assert_eq!(bus.transfers, init_transfers());
    }

    #[test]
    fn test_every_command_is_its_own_transaction() {
        let mut bus = RecordingBus::new();
        test_display(&mut bus).init().unwrap();
        for transfer in bus.transfers.iter().filter(|t| t.bytes[0] == 0x00) {
            assert_eq!(transfer.bytes.len(), 2);
        }
    }

    #[test]
    fn test_init_twice_repeats_identical_bytes() {
        let mut bus = RecordingBus::new();
        let mut display = test_display(&mut bus);
        display.init().unwrap();
        display.init().unwrap();

        let once = init_transfers();
        assert_eq!(bus.transfers.len(), once.len() * 2);
        assert_eq!(&bus.transfers[..once.len()], once.as_slice());
        assert_eq!(&bus.transfers[once.len()..], once.as_slice());
    }

    #[test]
    fn test_init_without_charge_pump() {
        let mut bus = RecordingBus::new();
        let config = Builder::new().charge_pump(false).build().unwrap();
        Display::new_i2c(&mut bus, config).init().unwrap();

        let commands = bus.command_bytes();
        assert_eq!(&commands[..8], &INIT_COMMANDS[..8]);
        assert_eq!(&commands[8..23], &INIT_COMMANDS[10..]);
    }

    #[test]
    fn test_init_128x64() {
        let mut bus = RecordingBus::new();
        let config = Builder::new()
            .dimensions(Dimensions::DISPLAY_128X64)
            .build()
            .unwrap();
        Display::new_i2c(&mut bus, config).init().unwrap();

        let commands = bus.command_bytes();
        assert_eq!(&commands[3..5], &[0xA8, 0x3F]);
        assert_eq!(&commands[commands.len() - 6..], &[0x21, 0, 127, 0x22, 0, 7]);
        assert_eq!(bus.data_transfers(), vec![&[0u8; 1024][..]]);
    }

    #[test]
    fn test_init_stops_at_first_failure() {
        let mut bus = RecordingBus::failing_after(3);
        let result = test_display(&mut bus).init();
        assert!(matches!(result, Err(Error::Interface(RecordingBus::ERROR))));
        assert_eq!(bus.command_bytes(), vec![0xAE, 0xD5, 0x80]);
    }

    #[test]
    fn test_send_buffer_failure_is_returned() {
        let mut bus = RecordingBus::failing_after(0);
        let result = test_display(&mut bus).send_buffer(&[0xFF; 22]);
        assert!(matches!(result, Err(Error::Interface(RecordingBus::ERROR))));
        assert!(bus.transfers.is_empty());
    }

    #[test]
    fn test_clear_full_frame_fails_on_data_transfer() {
        // Both windows go out, the frame transfer is refused
        let mut bus = RecordingBus::failing_after(6);
        let result = test_display(&mut bus).clear();
        assert!(matches!(result, Err(Error::Interface(RecordingBus::ERROR))));
        assert_eq!(bus.command_bytes(), vec![0x21, 0, 127, 0x22, 0, 3]);
        assert!(bus.data_transfers().is_empty());
    }

    #[test]
    fn test_clear_per_page_stops_at_failed_page() {
        let mut bus = RecordingBus::failing_after(10);
        let config = Builder::new()
            .clear_mode(ClearMode::PerPage)
            .build()
            .unwrap();
        let result = Display::new_i2c(&mut bus, config).clear();
        assert!(matches!(result, Err(Error::Interface(RecordingBus::ERROR))));

        // Page 0 complete, page 1 column window sent, page 1 page window refused
        assert_eq!(bus.transfers.len(), 10);
        assert_eq!(bus.data_transfers(), vec![&[0u8; 128][..]]);
        assert_eq!(
            bus.command_bytes(),
            vec![0x21, 0, 127, 0x22, 0, 0, 0x21, 0, 127]
        );
    }

    #[test]
    fn test_init_through_plain_interface() {
        let mut display = Display::new(RecordingInterface::default(), Config::default());
        display.init().unwrap();
        let interface = display.release();

        assert_eq!(&interface.commands[..INIT_COMMANDS.len()], &INIT_COMMANDS);
        assert_eq!(
            &interface.commands[INIT_COMMANDS.len()..],
            &[0x21, 0, 127, 0x22, 0, 3]
        );
        assert_eq!(interface.data, vec![vec![0u8; 512]]);
    }

    #[test]
    fn test_window_commands() {
        let mut bus = RecordingBus::new();
        let mut display = test_display(&mut bus);
        display.set_column_address(10, 20).unwrap();
        display.set_page_address(1, 2).unwrap();

        let expected: Vec<Transfer> = [0x21, 10, 20, 0x22, 1, 2]
            .into_iter()
            .map(command)
            .collect();
        assert_eq!(bus.transfers, expected);
    }

    #[test]
    fn test_window_values_are_not_validated() {
        let mut bus = RecordingBus::new();
        let mut display = test_display(&mut bus);
        display.set_column_address(200, 5).unwrap();
        assert_eq!(bus.command_bytes(), vec![0x21, 200, 5]);
    }

    #[test]
    fn test_send_buffer_lengths() {
        for len in [0usize, 1, 512] {
            let mut bus = RecordingBus::new();
            let payload = vec![0x5Au8; len];
            test_display(&mut bus).send_buffer(&payload).unwrap();
            assert_eq!(bus.transfers, vec![data(&payload)]);
        }
    }

    #[test]
    fn test_clear_full_frame() {
        let mut bus = RecordingBus::new();
        test_display(&mut bus).clear().unwrap();
        assert_eq!(bus.transfers, clear_transfers());
    }

    #[test]
    fn test_clear_per_page() {
        let mut bus = RecordingBus::new();
        let config = Builder::new()
            .clear_mode(ClearMode::PerPage)
            .build()
            .unwrap();
        Display::new_i2c(&mut bus, config).clear().unwrap();

        let mut expected = Vec::new();
        for page in 0..4u8 {
            expected.extend([0x21, 0, 127, 0x22, page, page].into_iter().map(command));
            expected.push(data(&[0u8; 128]));
        }
        assert_eq!(bus.transfers, expected);
    }

    #[test]
    fn test_end_to_end_partial_update() {
        let mut bus = RecordingBus::new();
        let mut display = test_display(&mut bus);
        display.init().unwrap();
        display.set_column_address(10, 20).unwrap();
        display.set_page_address(1, 2).unwrap();
        display.send_buffer(&[0xFF; 22]).unwrap();

        let mut expected = init_transfers();
        expected.extend([0x21, 10, 20, 0x22, 1, 2].into_iter().map(command));
        expected.push(data(&[0xFF; 22]));
        assert_eq!(bus.transfers, expected);
    }

    #[test]
    fn test_power_contrast_and_inversion() {
        let mut bus = RecordingBus::new();
        let mut display = test_display(&mut bus);
        display.set_display_on(false).unwrap();
        display.set_display_on(true).unwrap();
        display.set_contrast(0x10).unwrap();
        display.set_inverted(true).unwrap();
        display.set_inverted(false).unwrap();
        assert_eq!(
            bus.command_bytes(),
            vec![0xAE, 0xAF, 0x81, 0x10, 0xA7, 0xA6]
        );
    }

    #[test]
    fn test_custom_address_used_for_all_transactions() {
        let mut bus = RecordingBus::new();
        let config = Builder::new().address(0x3D).build().unwrap();
        Display::new_i2c(&mut bus, config).init().unwrap();
        assert!(bus.transfers.iter().all(|t| t.address == 0x3D));
    }

    #[test]
    fn test_release_returns_interface() {
        let display = Display::new_i2c(RecordingBus::new(), Config::default());
        assert_eq!(display.dimensions(), &Dimensions::DISPLAY_128X32);
        assert_eq!(display.config().address, 0x3C);
        let bus = display.release().release();
        assert!(bus.transfers.is_empty());
    }
}
