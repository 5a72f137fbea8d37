//! Configuration model

use eddie_core::controller::{DEFAULT_DEAD_ZONE, Greeting};
use eddie_core::policy::DEFAULT_SENTENCE_AFTER;
use eddie_core::ControllerConfig;
use eddie_display::Rgb;
use eddie_hal::i2c::I2cConfig;
use eddie_hal::UartConfig;
use eddie_hal_firmata::link::DEFAULT_SAMPLING_INTERVAL_MS;
use eddie_hal_firmata::BoardSetup;
use eddie_protocol::PinMode;
use serde::Deserialize;

use super::ConfigError;

/// Highest pin number Firmata can address
const MAX_DIGITAL_PIN: u8 = 127;

/// Highest analog channel Firmata can report
const MAX_ANALOG_CHANNEL: u8 = 15;

/// Complete runtime configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub serial: SerialSection,
    pub pins: PinSection,
    pub controller: ControllerSection,
    pub greeting: GreetingSection,
}

/// `[serial]`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SerialSection {
    pub port: String,
    pub baud: u32,
}

impl Default for SerialSection {
    fn default() -> Self {
        Self {
            port: "/dev/cu.usbmodem1411".to_string(),
            baud: UartConfig::default().baudrate,
        }
    }
}

/// `[pins]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PinSection {
    /// Advance button (digital)
    pub advance: u8,
    /// Touch sensor (digital)
    pub mark_missed: u8,
    /// Rotary sensor (analog channel)
    pub rotary: u8,
    /// LED (digital)
    pub indicator: u8,
    pub buttons_active_low: bool,
    pub indicator_inverted: bool,
}

impl Default for PinSection {
    fn default() -> Self {
        Self {
            advance: 7,
            mark_missed: 2,
            rotary: 2,
            indicator: 8,
            buttons_active_low: false,
            indicator_inverted: false,
        }
    }
}

/// `[controller]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ControllerSection {
    pub dead_zone: u16,
    pub sentence_after: u16,
}

impl Default for ControllerSection {
    fn default() -> Self {
        Self {
            dead_zone: DEFAULT_DEAD_ZONE,
            sentence_after: DEFAULT_SENTENCE_AFTER,
        }
    }
}

/// `[greeting]`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GreetingSection {
    pub name: String,
    pub color: [u8; 3],
}

impl Default for GreetingSection {
    fn default() -> Self {
        let greeting = Greeting::default();
        Self {
            name: greeting.name.to_string(),
            color: [greeting.color.r, greeting.color.g, greeting.color.b],
        }
    }
}

impl Config {
    /// Check pin numbers and the greeting text
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.serial.port.is_empty() {
            return Err(ConfigError::NoPort);
        }
        if self.serial.baud == 0 {
            return Err(ConfigError::ZeroBaud);
        }

        let digital = [
            ("advance", self.pins.advance),
            ("mark_missed", self.pins.mark_missed),
            ("indicator", self.pins.indicator),
        ];
        for (i, &(name, pin)) in digital.iter().enumerate() {
            if pin > MAX_DIGITAL_PIN {
                return Err(ConfigError::PinOutOfRange { name, pin });
            }
            if let Some(&(other, _)) = digital[..i].iter().find(|&&(_, p)| p == pin) {
                return Err(ConfigError::SharedPin {
                    pin,
                    first: other,
                    second: name,
                });
            }
        }
        if self.pins.rotary > MAX_ANALOG_CHANNEL {
            return Err(ConfigError::AnalogOutOfRange(self.pins.rotary));
        }

        self.greeting().render().map_err(ConfigError::Greeting)?;
        Ok(())
    }

    pub fn uart(&self) -> UartConfig {
        UartConfig {
            baudrate: self.serial.baud,
            ..UartConfig::default()
        }
    }

    /// Pin modes and reporting for the board
    pub fn board_setup(&self) -> BoardSetup {
        let input_mode = if self.pins.buttons_active_low {
            PinMode::InputPullup
        } else {
            PinMode::Input
        };
        BoardSetup {
            inputs: vec![
                (self.pins.advance, input_mode),
                (self.pins.mark_missed, input_mode),
            ],
            outputs: vec![self.pins.indicator],
            analog: vec![self.pins.rotary],
            sampling_interval_ms: DEFAULT_SAMPLING_INTERVAL_MS,
            i2c: Some(I2cConfig::default()),
        }
    }

    pub fn controller(&self) -> ControllerConfig {
        ControllerConfig {
            dead_zone: self.controller.dead_zone,
            sentence_after: self.controller.sentence_after,
        }
    }

    pub fn greeting(&self) -> Greeting<'_> {
        Greeting {
            name: &self.greeting.name,
            color: Rgb::from(self.greeting.color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_hardware_wiring() {
        let config = Config::default();
        assert_eq!(config.pins.advance, 7);
        assert_eq!(config.pins.mark_missed, 2);
        assert_eq!(config.pins.rotary, 2);
        assert_eq!(config.pins.indicator, 8);
        assert_eq!(config.serial.baud, 57_600);
        assert_eq!(config.controller(), ControllerConfig::default());
        assert_eq!(config.greeting(), Greeting::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_board_setup() {
        let mut config = Config::default();
        config.pins.buttons_active_low = true;

        let setup = config.board_setup();
        assert_eq!(
            setup.inputs,
            [(7, PinMode::InputPullup), (2, PinMode::InputPullup)]
        );
        assert_eq!(setup.outputs, [8]);
        assert_eq!(setup.analog, [2]);
        assert!(setup.i2c.is_some());
    }

    #[test]
    fn test_shared_digital_pin_rejected() {
        let mut config = Config::default();
        config.pins.indicator = 7;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SharedPin {
                pin: 7,
                first: "advance",
                second: "indicator"
            })
        ));
    }

    #[test]
    fn test_out_of_range_pins_rejected() {
        let mut config = Config::default();
        config.pins.mark_missed = 200;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PinOutOfRange { pin: 200, .. })
        ));

        let mut config = Config::default();
        config.pins.rotary = 16;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::AnalogOutOfRange(16))
        ));
    }

    #[test]
    fn test_serial_checks() {
        let mut config = Config::default();
        config.serial.baud = 0;
        assert!(matches!(config.validate(), Err(ConfigError::ZeroBaud)));

        config.serial.port.clear();
        assert!(matches!(config.validate(), Err(ConfigError::NoPort)));
    }

    #[test]
    fn test_unrenderable_greeting_rejected() {
        let mut config = Config::default();
        config.greeting.name = "Zoë 🙂".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Greeting(_))));
    }
}
