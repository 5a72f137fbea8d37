//! Configuration loading and parsing
//!
//! The default configuration is eddie.toml, compiled in. A file given on
//! the command line replaces it; keys it leaves out keep their defaults.

pub mod loader;
pub mod model;

pub use loader::{load, ConfigError, EMBEDDED_CONFIG};
pub use model::{Config, ControllerSection, GreetingSection, PinSection, SerialSection};
