//! Backlight colors

/// RGB backlight color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Neutral color left on the panel at shutdown
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Backlight off
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    /// Color of the start-up greeting
    pub const GREETING: Rgb = Rgb::new(20, 255, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}
