//! Input drivers
//!
//! Turn raw pin levels and analog readings into router events.

pub mod button;
pub mod rotary;

pub use button::Button;
pub use rotary::Rotary;
