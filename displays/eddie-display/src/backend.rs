//! Display backend trait
//!
//! Defines the interface the controller renders through.

use core::fmt;

use crate::color::Rgb;
use crate::glyph::Glyph;

/// Display errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with the display
    Communication,
    /// Custom glyph slot outside 0..8
    InvalidGlyphSlot,
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayError::Communication => f.write_str("display communication failed"),
            DisplayError::InvalidGlyphSlot => f.write_str("invalid custom glyph slot"),
        }
    }
}

/// Direction of a one-column display shift
///
/// Named after the content revealed: `Right` moves the text left so the
/// columns past the right edge come into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScrollDirection {
    Left,
    Right,
}

impl ScrollDirection {
    /// Direction for a move from `old` to `new`, `None` if equal
    pub fn between(old: i32, new: i32) -> Option<Self> {
        match new.cmp(&old) {
            core::cmp::Ordering::Greater => Some(ScrollDirection::Right),
            core::cmp::Ordering::Less => Some(ScrollDirection::Left),
            core::cmp::Ordering::Equal => None,
        }
    }
}

/// Character display trait
///
/// Provides a hardware-agnostic interface to an HD44780-compatible text
/// display with an RGB backlight. Text is raw display bytes: values 0..8
/// select the custom glyphs, everything else indexes the character ROM.
pub trait CharacterDisplay {
    /// Clear the display and return the cursor home
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Return the cursor home and undo any scrolling
    fn home(&mut self) -> Result<(), DisplayError>;

    /// Set the backlight color
    fn set_color(&mut self, color: Rgb) -> Result<(), DisplayError>;

    /// Write bytes at the cursor
    ///
    /// A `b'\n'` moves the cursor to the start of the second line.
    fn write(&mut self, bytes: &[u8]) -> Result<(), DisplayError>;

    /// Shift the visible window one column
    fn scroll(&mut self, direction: ScrollDirection) -> Result<(), DisplayError>;

    /// Load a custom glyph into `slot` (0..8)
    fn define_glyph(&mut self, slot: u8, glyph: &Glyph) -> Result<(), DisplayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_between() {
        assert_eq!(ScrollDirection::between(0, 10), Some(ScrollDirection::Right));
        assert_eq!(ScrollDirection::between(10, 0), Some(ScrollDirection::Left));
        assert_eq!(ScrollDirection::between(3, 3), None);
    }
}
