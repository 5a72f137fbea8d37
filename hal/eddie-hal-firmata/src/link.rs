//! Request side of the board link
//!
//! One writer serializes every request. The LCD's I2C bus and the LED pin
//! are handles onto that writer; all of them live on the controller's
//! thread.

use std::cell::RefCell;
use std::rc::Rc;

use eddie_hal::i2c::I2cConfig;
use eddie_hal::{I2cBus, OutputPin, UartTx};
use eddie_protocol::{port_of, PinMode, Request, MAX_I2C_WRITE};
use tracing::debug;

use crate::error::LinkError;

/// Default analog sampling interval of StandardFirmata
pub const DEFAULT_SAMPLING_INTERVAL_MS: u16 = 19;

/// Pin configuration applied once the board is up
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardSetup {
    /// Digital inputs and their mode (`Input` or `InputPullup`)
    pub inputs: Vec<(u8, PinMode)>,
    /// Digital outputs
    pub outputs: Vec<u8>,
    /// Analog channels to report
    pub analog: Vec<u8>,
    /// Analog sampling interval
    pub sampling_interval_ms: u16,
    /// I2C bridge configuration, `None` leaves I2C disabled
    pub i2c: Option<I2cConfig>,
}

/// Encodes requests onto a UART
pub struct FirmataLink<T> {
    tx: T,
}

impl<T> FirmataLink<T>
where
    T: UartTx<Error = std::io::Error>,
{
    pub fn new(tx: T) -> Self {
        Self { tx }
    }

    /// Encode and send one request
    pub fn send(&mut self, request: &Request<'_>) -> Result<(), LinkError> {
        let bytes = request.encode_to_vec()?;
        self.tx.write_blocking(&bytes)?;
        self.tx.flush()?;
        Ok(())
    }

    /// Ask the board for its firmware name and version
    pub fn query_firmware(&mut self) -> Result<(), LinkError> {
        self.send(&Request::QueryFirmware)
    }

    /// Apply pin modes, reporting and the I2C bridge
    pub fn configure(&mut self, setup: &BoardSetup) -> Result<(), LinkError> {
        for &(pin, mode) in &setup.inputs {
            self.send(&Request::SetPinMode { pin, mode })?;
        }
        for &pin in &setup.outputs {
            self.send(&Request::SetPinMode {
                pin,
                mode: PinMode::Output,
            })?;
        }

        let mut ports: Vec<u8> = setup.inputs.iter().map(|&(pin, _)| port_of(pin)).collect();
        ports.sort_unstable();
        ports.dedup();
        for port in ports {
            self.send(&Request::ReportDigitalPort { port, enable: true })?;
        }

        if !setup.analog.is_empty() {
            self.send(&Request::SamplingInterval {
                ms: setup.sampling_interval_ms,
            })?;
        }
        for &channel in &setup.analog {
            self.send(&Request::ReportAnalog {
                channel,
                enable: true,
            })?;
        }

        if let Some(i2c) = setup.i2c {
            self.send(&Request::I2cConfig {
                delay_us: i2c.read_delay_us,
            })?;
        }

        debug!(?setup, "board configured");
        Ok(())
    }

    /// Share the link between device handles
    pub fn into_shared(self) -> SharedLink<T> {
        SharedLink(Rc::new(RefCell::new(self)))
    }
}

/// Shared handle to a [`FirmataLink`]
pub struct SharedLink<T>(Rc<RefCell<FirmataLink<T>>>);

impl<T> Clone for SharedLink<T> {
    fn clone(&self) -> Self {
        SharedLink(Rc::clone(&self.0))
    }
}

impl<T> SharedLink<T>
where
    T: UartTx<Error = std::io::Error>,
{
    /// Send a request through the shared writer
    pub fn send(&self, request: &Request<'_>) -> Result<(), LinkError> {
        self.0
            .try_borrow_mut()
            .map_err(|_| LinkError::Busy)?
            .send(request)
    }

    /// I2C bus bridged through the board
    pub fn i2c(&self) -> FirmataI2c<T> {
        FirmataI2c { link: self.clone() }
    }

    /// Digital output on `pin`
    pub fn output_pin(&self, pin: u8) -> FirmataPin<T> {
        FirmataPin {
            link: self.clone(),
            pin,
            high: false,
        }
    }
}

/// I2C bus over Firmata sysex
pub struct FirmataI2c<T> {
    link: SharedLink<T>,
}

impl<T> I2cBus for FirmataI2c<T>
where
    T: UartTx<Error = std::io::Error>,
{
    type Error = LinkError;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), LinkError> {
        self.link.send(&Request::I2cWrite { address, data })
    }

    fn max_write_len(&self) -> usize {
        MAX_I2C_WRITE
    }
}

/// Digital output pin driven with set-digital-pin-value
pub struct FirmataPin<T> {
    link: SharedLink<T>,
    pin: u8,
    high: bool,
}

impl<T> OutputPin for FirmataPin<T>
where
    T: UartTx<Error = std::io::Error>,
{
    type Error = LinkError;

    fn set_high(&mut self) -> Result<(), LinkError> {
        self.link.send(&Request::SetDigitalPin {
            pin: self.pin,
            high: true,
        })?;
        self.high = true;
        Ok(())
    }

    fn set_low(&mut self) -> Result<(), LinkError> {
        self.link.send(&Request::SetDigitalPin {
            pin: self.pin,
            high: false,
        })?;
        self.high = false;
        Ok(())
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// UART writing into a shared buffer
    #[derive(Clone, Default)]
    struct MemoryUart {
        pub written: Rc<RefCell<Vec<u8>>>,
        pub fail: bool,
    }

    impl UartTx for MemoryUart {
        type Error = std::io::Error;

        fn write_blocking(&mut self, data: &[u8]) -> Result<(), std::io::Error> {
            if self.fail {
                return Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "unplugged"));
            }
            self.written.borrow_mut().extend_from_slice(data);
            Ok(())
        }

        fn flush(&mut self) -> Result<(), std::io::Error> {
            Ok(())
        }
    }

    #[test]
    fn test_configure() {
        let uart = MemoryUart::default();
        let mut link = FirmataLink::new(uart.clone());

        link.configure(&BoardSetup {
            inputs: vec![(7, PinMode::Input), (2, PinMode::Input)],
            outputs: vec![8],
            analog: vec![2],
            sampling_interval_ms: DEFAULT_SAMPLING_INTERVAL_MS,
            i2c: Some(I2cConfig::default()),
        })
        .unwrap();

        assert_eq!(
            *uart.written.borrow(),
            [
                0xF4, 7, 0x00, // button
                0xF4, 2, 0x00, // touch
                0xF4, 8, 0x01, // led
                0xD0, 1, // both inputs on port 0
                0xF0, 0x7A, 19, 0, 0xF7, // sampling interval
                0xC2, 1, // rotary
                0xF0, 0x78, 0, 0, 0xF7, // i2c config
            ]
        );
    }

    #[test]
    fn test_i2c_and_pin_share_writer() {
        let uart = MemoryUart::default();
        let shared = FirmataLink::new(uart.clone()).into_shared();

        let mut bus = shared.i2c();
        let mut led = shared.output_pin(8);
        assert_eq!(bus.max_write_len(), 16);

        bus.write(0x62, &[0x04, 0xFF]).unwrap();
        led.set_high().unwrap();
        assert!(led.is_set_high());

        assert_eq!(
            *uart.written.borrow(),
            [0xF0, 0x76, 0x62, 0x00, 0x04, 0x00, 0x7F, 0x01, 0xF7, 0xF5, 8, 1]
        );
    }

    #[test]
    fn test_write_failure_surfaces() {
        let uart = MemoryUart {
            fail: true,
            ..Default::default()
        };
        let shared = FirmataLink::new(uart).into_shared();
        let mut led = shared.output_pin(8);

        assert!(matches!(led.set_high(), Err(LinkError::Io(_))));
        assert!(!led.is_set_high());
    }

    #[test]
    fn test_oversized_i2c_write_rejected() {
        let shared = FirmataLink::new(MemoryUart::default()).into_shared();
        let mut bus = shared.i2c();
        let data = [0u8; 17];
        assert!(matches!(bus.write(0x3E, &data), Err(LinkError::Encode(_))));
    }
}
