//! Character LCD drivers
//!
//! HD44780 command set as used by the Grove LCD RGB backlight module.

pub mod grove;

pub use grove::GroveLcd;

/// I2C address of the LCD controller
pub const LCD_ADDRESS: u8 = 0x3E;
/// I2C address of the backlight chip
pub const RGB_ADDRESS: u8 = 0x62;

/// Control byte: a command follows
pub const CONTROL_COMMAND: u8 = 0x80;
/// Control byte: display data follows
pub const CONTROL_DATA: u8 = 0x40;

pub const CMD_CLEAR: u8 = 0x01;
pub const CMD_HOME: u8 = 0x02;
/// Entry mode: left to right, no display shift
pub const CMD_ENTRY_MODE: u8 = 0x06;
/// Display on, cursor off, blink off
pub const CMD_DISPLAY_ON: u8 = 0x0C;
/// Shift the display left (text moves left)
pub const CMD_SHIFT_LEFT: u8 = 0x18;
/// Shift the display right (text moves right)
pub const CMD_SHIFT_RIGHT: u8 = 0x1C;
/// Function set: two lines, 5x8 font
pub const CMD_FUNCTION_SET: u8 = 0x28;
/// Set CGRAM address, low bits are slot * 8
pub const CMD_SET_CGRAM: u8 = 0x40;
/// Set DDRAM address, low bits are the address
pub const CMD_SET_DDRAM: u8 = 0x80;

/// DDRAM address of the second line
pub const LINE_TWO: u8 = 0x40;

/// Backlight registers
pub const REG_MODE1: u8 = 0x00;
pub const REG_MODE2: u8 = 0x01;
pub const REG_BLUE: u8 = 0x02;
pub const REG_GREEN: u8 = 0x03;
pub const REG_RED: u8 = 0x04;
pub const REG_OUTPUT: u8 = 0x08;
