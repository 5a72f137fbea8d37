//! GPIO pin abstractions
//!
//! Pins on the board are reached through a transport that can fail, so
//! unlike a memory-mapped register every operation returns a `Result`.

/// Digital output pin
pub trait OutputPin {
    /// Error type for pin operations
    type Error;

    /// Drive the pin high (logic 1)
    fn set_high(&mut self) -> Result<(), Self::Error>;

    /// Drive the pin low (logic 0)
    fn set_low(&mut self) -> Result<(), Self::Error>;

    /// Drive the pin to a specific level
    fn set_state(&mut self, high: bool) -> Result<(), Self::Error> {
        if high {
            self.set_high()
        } else {
            self.set_low()
        }
    }

    /// Level last written to the pin
    fn is_set_high(&self) -> bool;

    /// Inverse of [`OutputPin::is_set_high`]
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pin {
        high: bool,
        writes: u8,
    }

    impl OutputPin for Pin {
        type Error = ();

        fn set_high(&mut self) -> Result<(), ()> {
            self.high = true;
            self.writes += 1;
            Ok(())
        }

        fn set_low(&mut self) -> Result<(), ()> {
            self.high = false;
            self.writes += 1;
            Ok(())
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    #[test]
    fn test_set_state_dispatches() {
        let mut pin = Pin {
            high: false,
            writes: 0,
        };

        pin.set_state(true).unwrap();
        assert!(pin.is_set_high());

        pin.set_state(false).unwrap();
        assert!(pin.is_set_low());
        assert_eq!(pin.writes, 2);
    }
}
