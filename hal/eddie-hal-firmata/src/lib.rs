//! Firmata backend of the Eddie HAL
//!
//! The board runs stock StandardFirmata; every pin and the I2C bus are
//! driven from the host over the serial link. This crate provides:
//!
//! - Serial port access (termios raw mode, implements the UART traits)
//! - A request writer shared by the I2C bus and output pins
//! - A reader turning the board's reports into pin events
//!
//! ```text
//!  host                                   board
//! ┌───────────────┐   requests (0xF4…)   ┌──────────────────┐
//! │ FirmataLink   │ ───────────────────▶ │ StandardFirmata  │
//! │ BoardReader   │ ◀─────────────────── │                  │
//! └───────────────┘  reports (0x90,0xE0) └──────────────────┘
//! ```

#![deny(unsafe_code)]

pub mod board;
pub mod error;
pub mod link;
pub mod serial;

pub use board::{BoardReader, PinEvent};
pub use error::LinkError;
pub use link::{BoardSetup, FirmataI2c, FirmataLink, FirmataPin, SharedLink};
pub use serial::SerialPort;
