//! "Missed" indicator trait

use core::fmt;

/// Errors that can occur driving an indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorError {
    /// Link to the output failed
    Communication,
}

impl fmt::Display for IndicatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndicatorError::Communication => f.write_str("indicator communication failed"),
        }
    }
}

/// On/off indicator (an LED) lit while an item is flagged as missed
pub trait Indicator {
    /// Turn the indicator on
    fn on(&mut self) -> Result<(), IndicatorError>;

    /// Turn the indicator off
    fn off(&mut self) -> Result<(), IndicatorError>;

    /// Check if the indicator is on
    fn is_on(&self) -> bool;
}
