//! Hardware abstraction traits
//!
//! The display trait lives in `eddie-display`; the remaining outputs the
//! controller drives are defined here.

pub mod indicator;

pub use indicator::{Indicator, IndicatorError};
