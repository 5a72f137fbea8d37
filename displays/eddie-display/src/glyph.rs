//! Custom glyphs
//!
//! The HD44780 character ROM has no Spanish accents, so they live in the
//! eight CGRAM slots. Each glyph is 8 rows of 5 pixels (low bits).

/// 5x8 glyph bitmap, one byte per row
pub type Glyph = [u8; 8];

/// Number of CGRAM slots
pub const GLYPH_COUNT: usize = 8;

pub const SLOT_HEART: u8 = 0;
pub const SLOT_E_ACUTE: u8 = 1;
pub const SLOT_N_TILDE: u8 = 2;
pub const SLOT_O_ACUTE: u8 = 3;
pub const SLOT_I_ACUTE: u8 = 4;
pub const SLOT_A_ACUTE: u8 = 5;
pub const SLOT_SMILEY: u8 = 6;
pub const SLOT_U_ACUTE: u8 = 7;

pub const HEART: Glyph = [0x00, 0x0A, 0x1F, 0x1F, 0x0E, 0x04, 0x00, 0x00];
pub const SMILEY: Glyph = [0x00, 0x0A, 0x0A, 0x00, 0x11, 0x0E, 0x00, 0x00];
pub const E_ACUTE: Glyph = [0x02, 0x04, 0x0E, 0x11, 0x1F, 0x10, 0x0E, 0x00];
pub const N_TILDE: Glyph = [0x0D, 0x12, 0x00, 0x16, 0x19, 0x11, 0x11, 0x00];
pub const O_ACUTE: Glyph = [0x02, 0x04, 0x0E, 0x11, 0x11, 0x11, 0x0E, 0x00];
pub const I_ACUTE: Glyph = [0x02, 0x04, 0x00, 0x0C, 0x04, 0x04, 0x0E, 0x00];
pub const A_ACUTE: Glyph = [0x02, 0x04, 0x0E, 0x01, 0x0F, 0x11, 0x0F, 0x00];
pub const U_ACUTE: Glyph = [0x02, 0x04, 0x11, 0x11, 0x11, 0x13, 0x0D, 0x00];

/// CGRAM contents, indexed by slot
pub const GLYPHS: [Glyph; GLYPH_COUNT] = [
    HEART, E_ACUTE, N_TILDE, O_ACUTE, I_ACUTE, A_ACUTE, SMILEY, U_ACUTE,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_match_table() {
        assert_eq!(GLYPHS[SLOT_HEART as usize], HEART);
        assert_eq!(GLYPHS[SLOT_SMILEY as usize], SMILEY);
        assert_eq!(GLYPHS[SLOT_N_TILDE as usize], N_TILDE);
        assert_eq!(GLYPHS[SLOT_U_ACUTE as usize], U_ACUTE);
    }

    #[test]
    fn test_glyphs_are_5_pixels_wide() {
        for glyph in GLYPHS.iter() {
            assert!(glyph.iter().all(|row| row & !0x1F == 0));
        }
    }
}
