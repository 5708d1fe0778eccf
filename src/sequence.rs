//! Controller initialization sequence
//!
//! The SSD1306 comes out of reset with the panel off and most registers in an
//! unknown state. [`init_sequence`] yields the fixed, ordered list of commands
//! that brings it to a configured, displaying state. Order matters: the charge
//! pump must be running before the display is switched on.
//!
//! The final step of initialization, blanking display RAM, is not a command
//! and is performed by [`Display::init`](crate::Display::init) after this
//! sequence has been sent.

use crate::command::{
    CHARGE_PUMP, CHARGE_PUMP_ENABLE, COM_SCAN_DEC, Command, DISPLAY_ALL_ON_RESUME, DISPLAY_OFF,
    DISPLAY_ON, MEMORY_MODE, MEMORY_MODE_HORIZONTAL, NORMAL_DISPLAY, SEG_REMAP_MIRRORED,
    SET_COM_PINS, SET_CONTRAST, SET_DISPLAY_CLOCK, SET_DISPLAY_OFFSET, SET_MULTIPLEX,
    SET_PRECHARGE, SET_VCOM_DETECT, START_LINE_TOP,
};
use crate::config::Config;

/// Build the ordered initialization command list for `config`
///
/// The charge pump step is present only when [`Config::charge_pump`] is set.
///
/// ```
/// use ssd1306::{Config, sequence::init_sequence};
///
/// let config = Config::default();
/// let first = init_sequence(&config).next().map(|cmd| cmd.opcode());
/// assert_eq!(first, Some(0xAE));
/// assert_eq!(init_sequence(&config).count(), 16);
/// ```
pub fn init_sequence(config: &Config) -> impl Iterator<Item = Command> + use<> {
    let head = [
        Command::new(DISPLAY_OFF),
        Command::with_param(SET_DISPLAY_CLOCK, config.clock_divide),
        Command::with_param(SET_MULTIPLEX, config.dimensions.multiplex_ratio()),
        Command::with_param(SET_DISPLAY_OFFSET, 0x00),
        Command::new(START_LINE_TOP),
    ];

    let charge_pump = config
        .charge_pump
        .then_some(Command::with_param(CHARGE_PUMP, CHARGE_PUMP_ENABLE));

    let tail = [
        Command::with_param(MEMORY_MODE, MEMORY_MODE_HORIZONTAL),
        // Segment re-map and COM scan direction follow how the panel is mounted
        Command::new(SEG_REMAP_MIRRORED),
        Command::new(COM_SCAN_DEC),
        Command::with_param(SET_COM_PINS, config.com_pins),
        Command::with_param(SET_CONTRAST, config.contrast),
        Command::with_param(SET_PRECHARGE, config.precharge),
        Command::with_param(SET_VCOM_DETECT, config.vcomh),
        Command::new(DISPLAY_ALL_ON_RESUME),
        Command::new(NORMAL_DISPLAY),
        Command::new(DISPLAY_ON),
    ];

    head.into_iter().chain(charge_pump).chain(tail)
}
