//! Character display abstraction for Eddie
//!
//! This crate provides:
//! - `CharacterDisplay` trait for HD44780-style text displays with an RGB
//!   backlight (the Grove LCD RGB today)
//! - `Rgb` backlight colors
//! - The eight custom glyph bitmaps loaded into CGRAM at start-up
//!
//! # Geometry
//!
//! The panel shows 16x2 characters but each line holds 40 characters of
//! DDRAM; scrolling shifts the visible window over them.

#![no_std]

pub mod backend;
pub mod color;
pub mod glyph;

// Re-export key types
pub use backend::{CharacterDisplay, DisplayError, ScrollDirection};
pub use color::Rgb;
pub use glyph::{Glyph, GLYPHS, GLYPH_COUNT};

/// Display lines
pub const ROWS: usize = 2;

/// DDRAM characters per line
pub const LINE_CAPACITY: usize = 40;

/// Characters the display can hold at once
pub const DDRAM_CAPACITY: usize = ROWS * LINE_CAPACITY;
