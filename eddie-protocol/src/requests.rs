//! Host → board requests

use heapless::Vec;

use crate::{
    split_7bit, END_SYSEX, I2C_CONFIG, I2C_REQUEST, REPORT_ANALOG, REPORT_DIGITAL,
    REPORT_FIRMWARE, SAMPLING_INTERVAL, SET_DIGITAL_PIN_VALUE, SET_PIN_MODE, START_SYSEX,
    SYSTEM_RESET,
};

/// Largest I2C payload sent in one request
///
/// StandardFirmata buffers 64 sysex bytes and `Wire` 32 bytes; 16 data
/// bytes (32 on the wire) stays clear of both.
pub const MAX_I2C_WRITE: usize = 16;

/// Largest encoded request (an I2C write of [`MAX_I2C_WRITE`] bytes)
pub const MAX_REQUEST_SIZE: usize = 5 + 2 * MAX_I2C_WRITE;

/// Highest pin number addressable with a 7-bit data byte
const MAX_PIN: u8 = 0x7F;

/// Highest port / analog channel addressable in a command nibble
const MAX_CHANNEL: u8 = 0x0F;

/// Errors that can occur while encoding a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EncodeError {
    /// Pin, port or channel out of range
    InvalidPin,
    /// I2C address is not a 7-bit address
    InvalidAddress,
    /// I2C payload exceeds [`MAX_I2C_WRITE`]
    PayloadTooLarge,
    /// Buffer too small for encoding
    BufferTooSmall,
}

/// Pin modes understood by StandardFirmata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    Input,
    Output,
    Analog,
    Pwm,
    Servo,
    I2c,
    InputPullup,
}

impl PinMode {
    /// Wire format value
    pub fn to_byte(self) -> u8 {
        match self {
            PinMode::Input => 0x00,
            PinMode::Output => 0x01,
            PinMode::Analog => 0x02,
            PinMode::Pwm => 0x03,
            PinMode::Servo => 0x04,
            PinMode::I2c => 0x06,
            PinMode::InputPullup => 0x0B,
        }
    }
}

/// Requests sent from the host to the board
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Request<'a> {
    /// Configure a pin
    SetPinMode { pin: u8, mode: PinMode },
    /// Drive a single digital output
    SetDigitalPin { pin: u8, high: bool },
    /// Start or stop reporting a digital port
    ReportDigitalPort { port: u8, enable: bool },
    /// Start or stop reporting an analog channel
    ReportAnalog { channel: u8, enable: bool },
    /// Set the analog sampling interval
    SamplingInterval { ms: u16 },
    /// Enable the I2C bridge
    I2cConfig { delay_us: u16 },
    /// Write bytes to an I2C device (7-bit addressing)
    I2cWrite { address: u8, data: &'a [u8] },
    /// Ask for the firmware name and version
    QueryFirmware,
    /// Reset the board
    SystemReset,
}

impl<'a> Request<'a> {
    /// Encode this request into a byte buffer
    ///
    /// Returns the number of bytes written
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, EncodeError> {
        let mut out: Vec<u8, MAX_REQUEST_SIZE> = Vec::new();
        self.write_into(&mut out)?;

        if buffer.len() < out.len() {
            return Err(EncodeError::BufferTooSmall);
        }
        buffer[..out.len()].copy_from_slice(&out);
        Ok(out.len())
    }

    /// Encode this request into a heapless Vec
    pub fn encode_to_vec(&self) -> Result<Vec<u8, MAX_REQUEST_SIZE>, EncodeError> {
        let mut out = Vec::new();
        self.write_into(&mut out)?;
        Ok(out)
    }

    fn write_into(&self, out: &mut Vec<u8, MAX_REQUEST_SIZE>) -> Result<(), EncodeError> {
        match *self {
            Request::SetPinMode { pin, mode } => {
                check_pin(pin)?;
                push_all(out, &[SET_PIN_MODE, pin, mode.to_byte()])
            }
            Request::SetDigitalPin { pin, high } => {
                check_pin(pin)?;
                push_all(out, &[SET_DIGITAL_PIN_VALUE, pin, u8::from(high)])
            }
            Request::ReportDigitalPort { port, enable } => {
                check_channel(port)?;
                push_all(out, &[REPORT_DIGITAL | port, u8::from(enable)])
            }
            Request::ReportAnalog { channel, enable } => {
                check_channel(channel)?;
                push_all(out, &[REPORT_ANALOG | channel, u8::from(enable)])
            }
            Request::SamplingInterval { ms } => {
                let [lsb, msb] = split_7bit(ms);
                push_all(out, &[START_SYSEX, SAMPLING_INTERVAL, lsb, msb, END_SYSEX])
            }
            Request::I2cConfig { delay_us } => {
                let [lsb, msb] = split_7bit(delay_us);
                push_all(out, &[START_SYSEX, I2C_CONFIG, lsb, msb, END_SYSEX])
            }
            Request::I2cWrite { address, data } => {
                if address > 0x7F {
                    return Err(EncodeError::InvalidAddress);
                }
                if data.len() > MAX_I2C_WRITE {
                    return Err(EncodeError::PayloadTooLarge);
                }
                // Second byte: R/W mode bits 3-4 = 00 (write), 7-bit address mode
                push_all(out, &[START_SYSEX, I2C_REQUEST, address, 0x00])?;
                for &byte in data {
                    push_all(out, &split_7bit(u16::from(byte)))?;
                }
                push_all(out, &[END_SYSEX])
            }
            Request::QueryFirmware => push_all(out, &[START_SYSEX, REPORT_FIRMWARE, END_SYSEX]),
            Request::SystemReset => push_all(out, &[SYSTEM_RESET]),
        }
    }
}

fn check_pin(pin: u8) -> Result<(), EncodeError> {
    if pin > MAX_PIN {
        return Err(EncodeError::InvalidPin);
    }
    Ok(())
}

fn check_channel(channel: u8) -> Result<(), EncodeError> {
    if channel > MAX_CHANNEL {
        return Err(EncodeError::InvalidPin);
    }
    Ok(())
}

fn push_all(out: &mut Vec<u8, MAX_REQUEST_SIZE>, bytes: &[u8]) -> Result<(), EncodeError> {
    out.extend_from_slice(bytes)
        .map_err(|_| EncodeError::BufferTooSmall)
}
