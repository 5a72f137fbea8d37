//! LED indicator
//!
//! Drives the "missed" LED through a digital output pin.

use eddie_core::traits::{Indicator, IndicatorError};
use eddie_hal::OutputPin;

/// LED on a digital output
///
/// The pin can be configured as active-high (default) or active-low.
pub struct Led<P> {
    pin: P,
    /// If true, LED on = pin low
    inverted: bool,
    /// Current logical state
    on: bool,
}

impl<P: OutputPin> Led<P> {
    /// Create a new LED driver
    ///
    /// The pin is not written until the first `on`/`off`.
    pub fn new(pin: P, inverted: bool) -> Self {
        Self {
            pin,
            inverted,
            on: false,
        }
    }

    /// Create a new LED driver with active-high output
    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    fn set(&mut self, on: bool) -> Result<(), IndicatorError> {
        self.pin
            .set_state(on != self.inverted)
            .map_err(|_| IndicatorError::Communication)?;
        self.on = on;
        Ok(())
    }
}

impl<P: OutputPin> Indicator for Led<P> {
    fn on(&mut self) -> Result<(), IndicatorError> {
        self.set(true)
    }

    fn off(&mut self) -> Result<(), IndicatorError> {
        self.set(false)
    }

    fn is_on(&self) -> bool {
        self.on
    }
}
