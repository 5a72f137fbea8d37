//! Configuration loading
//!
//! Reads the file given on the command line, or the embedded default, and
//! validates the result.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use eddie_core::VocabularyError;
use tracing::{debug, info};

use super::model::Config;

/// Embedded default configuration (compiled into the binary)
pub const EMBEDDED_CONFIG: &str = include_str!("../../eddie.toml");

/// Configuration errors; all are fatal before start-up
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("no serial port configured (set serial.port or pass --port)")]
    NoPort,

    #[error("serial.baud must be greater than zero")]
    ZeroBaud,

    #[error("pins.{name} = {pin} is beyond the last Firmata pin")]
    PinOutOfRange { name: &'static str, pin: u8 },

    #[error("pins.{first} and pins.{second} both use pin {pin}")]
    SharedPin {
        pin: u8,
        first: &'static str,
        second: &'static str,
    },

    #[error("pins.rotary = {0} is not an analog channel (0-15)")]
    AnalogOutOfRange(u8),

    #[error("greeting cannot be shown: {0}")]
    Greeting(VocabularyError),
}

/// Load configuration from `path`, or the embedded default
///
/// Validation runs after any command-line overrides, see [`Config::validate`].
pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
    let config = match path {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            let config = parse(&text)?;
            info!(path = %path.display(), "loaded configuration");
            config
        }
        None => {
            let config = parse(EMBEDDED_CONFIG)?;
            info!("using embedded configuration");
            config
        }
    };
    log_config_summary(&config);
    Ok(config)
}

/// Parse TOML text into a configuration
pub fn parse(text: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(text)?)
}

fn log_config_summary(config: &Config) {
    debug!(port = %config.serial.port, baud = config.serial.baud, "serial");
    debug!(
        advance = config.pins.advance,
        mark_missed = config.pins.mark_missed,
        rotary = config.pins.rotary,
        indicator = config.pins.indicator,
        "pins"
    );
    debug!(
        dead_zone = config.controller.dead_zone,
        sentence_after = config.controller.sentence_after,
        "controller"
    );
}
