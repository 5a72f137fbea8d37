//! Driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in eddie-core and eddie-display, written against the eddie-hal traits:
//!
//! - Grove LCD RGB backlight display (I2C)
//! - LED indicator (digital output)
//! - Button edge detector and rotary change filter (input events)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod input;
pub mod lcd;
pub mod led;

pub use input::{Button, Rotary};
pub use lcd::GroveLcd;
pub use led::Led;
