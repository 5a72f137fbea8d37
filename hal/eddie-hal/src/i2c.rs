//! I2C bus abstractions
//!
//! The LCD controller and its RGB backlight chip are write-only devices,
//! so the bus trait only covers master writes.

/// I2C bus master
pub trait I2cBus {
    /// Error type for I2C operations
    type Error;

    /// Write data to a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;

    /// Largest payload a single [`I2cBus::write`] accepts
    ///
    /// Buses behind a bridge (Firmata sysex, Arduino `Wire`) carry a much
    /// smaller buffer than a native peripheral.
    fn max_write_len(&self) -> usize {
        usize::MAX
    }
}

/// I2C configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    /// Delay the bridge waits between a write and a read, in microseconds
    pub read_delay_us: u16,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self { read_delay_us: 0 }
    }
}
