//! Firmata Protocol
//!
//! The board runs StandardFirmata; the host drives every pin and the I2C
//! bus through it. This crate encodes the host's requests and parses the
//! board's reports. It is `no_std` and allocation free.
//!
//! # Protocol Overview
//!
//! Firmata is MIDI shaped: command bytes have the high bit set, data bytes
//! carry 7 bits each.
//! ```text
//! ┌──────────────┬────────┬────────┐
//! │ CMD | chan   │ LSB7   │ MSB7   │   digital port / analog value
//! └──────────────┴────────┴────────┘
//! ┌──────┬─────────┬──────────────────┬──────┐
//! │ 0xF0 │ SUBCMD  │ 7-bit payload... │ 0xF7 │   sysex
//! └──────┴─────────┴──────────────────┴──────┘
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod messages;
pub mod parser;
pub mod requests;

pub use messages::{BoardMessage, MAX_SYSEX_SIZE, MAX_TEXT_LEN};
pub use parser::{MessageParser, ParseError};
pub use requests::{EncodeError, PinMode, Request, MAX_I2C_WRITE, MAX_REQUEST_SIZE};

/// Digital port message (host ↔ board), low nibble is the port
pub const DIGITAL_MESSAGE: u8 = 0x90;
/// Analog value report (board → host), low nibble is the channel
pub const ANALOG_MESSAGE: u8 = 0xE0;
/// Enable/disable analog reporting, low nibble is the channel
pub const REPORT_ANALOG: u8 = 0xC0;
/// Enable/disable digital port reporting, low nibble is the port
pub const REPORT_DIGITAL: u8 = 0xD0;
/// Start of a sysex message
pub const START_SYSEX: u8 = 0xF0;
/// Set the mode of a pin
pub const SET_PIN_MODE: u8 = 0xF4;
/// Set a single digital pin value
pub const SET_DIGITAL_PIN_VALUE: u8 = 0xF5;
/// End of a sysex message
pub const END_SYSEX: u8 = 0xF7;
/// Protocol version report / query
pub const PROTOCOL_VERSION: u8 = 0xF9;
/// Reset the board to its power-on state
pub const SYSTEM_RESET: u8 = 0xFF;

/// Sysex: NUL-free string sent by the firmware
pub const STRING_DATA: u8 = 0x71;
/// Sysex: I2C read/write request
pub const I2C_REQUEST: u8 = 0x76;
/// Sysex: I2C read reply
pub const I2C_REPLY: u8 = 0x77;
/// Sysex: I2C configuration
pub const I2C_CONFIG: u8 = 0x78;
/// Sysex: firmware name and version
pub const REPORT_FIRMWARE: u8 = 0x79;
/// Sysex: analog sampling interval
pub const SAMPLING_INTERVAL: u8 = 0x7A;

/// Port number holding a digital pin
pub const fn port_of(pin: u8) -> u8 {
    pin / 8
}

/// Bit of a digital pin inside its port mask
pub const fn bit_of(pin: u8) -> u8 {
    pin % 8
}

/// Split a value into the two 7-bit bytes Firmata sends (LSB first)
pub const fn split_7bit(value: u16) -> [u8; 2] {
    [(value & 0x7F) as u8, ((value >> 7) & 0x7F) as u8]
}

/// Join two 7-bit bytes (LSB first) into a value
pub const fn join_7bit(lsb: u8, msb: u8) -> u16 {
    (lsb as u16 & 0x7F) | ((msb as u16 & 0x7F) << 7)
}
