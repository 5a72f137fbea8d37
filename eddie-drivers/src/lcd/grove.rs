//! Grove LCD RGB backlight driver
//!
//! Two I2C devices on one bus: an HD44780-compatible text controller and a
//! PCA9633-style LED driver for the backlight.

use eddie_display::{CharacterDisplay, DisplayError, Glyph, Rgb, ScrollDirection, GLYPH_COUNT};
use eddie_hal::I2cBus;
use embedded_hal::delay::DelayNs;

use super::{
    CMD_CLEAR, CMD_DISPLAY_ON, CMD_ENTRY_MODE, CMD_FUNCTION_SET, CMD_HOME, CMD_SET_CGRAM,
    CMD_SET_DDRAM, CMD_SHIFT_LEFT, CMD_SHIFT_RIGHT, CONTROL_COMMAND, CONTROL_DATA, LCD_ADDRESS,
    LINE_TWO, REG_BLUE, REG_GREEN, REG_MODE1, REG_MODE2, REG_OUTPUT, REG_RED, RGB_ADDRESS,
};

/// Power-on settle time before the first command
const POWER_ON_DELAY_US: u32 = 50_000;
/// Wait between the repeated function-set commands
const FUNCTION_SET_DELAY_US: u32 = 4_500;
/// Execution time of clear and home
const CLEAR_DELAY_US: u32 = 2_000;

/// Largest data chunk per bus write (the control byte takes one)
const MAX_CHUNK: usize = 31;

/// Grove LCD RGB driver
pub struct GroveLcd<B, D> {
    bus: B,
    delay: D,
}

impl<B: I2cBus, D: DelayNs> GroveLcd<B, D> {
    /// Create a new driver
    ///
    /// Call [`GroveLcd::init`] before use.
    pub fn new(bus: B, delay: D) -> Self {
        Self { bus, delay }
    }

    /// Run the HD44780 initialization sequence and enable the backlight
    pub fn init(&mut self) -> Result<(), DisplayError> {
        self.delay.delay_us(POWER_ON_DELAY_US);

        // Function set three times, per the datasheet's init-by-instruction
        for _ in 0..3 {
            self.command(CMD_FUNCTION_SET)?;
            self.delay.delay_us(FUNCTION_SET_DELAY_US);
        }
        self.command(CMD_DISPLAY_ON)?;
        self.clear()?;
        self.command(CMD_ENTRY_MODE)?;

        self.set_register(REG_MODE1, 0x00)?;
        self.set_register(REG_MODE2, 0x00)?;
        // All LEDs under PWM control
        self.set_register(REG_OUTPUT, 0xAA)
    }

    fn command(&mut self, command: u8) -> Result<(), DisplayError> {
        self.bus
            .write(LCD_ADDRESS, &[CONTROL_COMMAND, command])
            .map_err(|_| DisplayError::Communication)
    }

    fn data(&mut self, bytes: &[u8]) -> Result<(), DisplayError> {
        let chunk_len = self.bus.max_write_len().saturating_sub(1).clamp(1, MAX_CHUNK);
        let mut frame = [0u8; MAX_CHUNK + 1];
        frame[0] = CONTROL_DATA;

        for chunk in bytes.chunks(chunk_len) {
            frame[1..=chunk.len()].copy_from_slice(chunk);
            self.bus
                .write(LCD_ADDRESS, &frame[..=chunk.len()])
                .map_err(|_| DisplayError::Communication)?;
        }
        Ok(())
    }

    fn set_register(&mut self, register: u8, value: u8) -> Result<(), DisplayError> {
        self.bus
            .write(RGB_ADDRESS, &[register, value])
            .map_err(|_| DisplayError::Communication)
    }
}

impl<B: I2cBus, D: DelayNs> CharacterDisplay for GroveLcd<B, D> {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.command(CMD_CLEAR)?;
        self.delay.delay_us(CLEAR_DELAY_US);
        Ok(())
    }

    fn home(&mut self) -> Result<(), DisplayError> {
        self.command(CMD_HOME)?;
        self.delay.delay_us(CLEAR_DELAY_US);
        Ok(())
    }

    fn set_color(&mut self, color: Rgb) -> Result<(), DisplayError> {
        self.set_register(REG_RED, color.r)?;
        self.set_register(REG_GREEN, color.g)?;
        self.set_register(REG_BLUE, color.b)
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), DisplayError> {
        let mut lines = bytes.split(|&b| b == b'\n');
        if let Some(first) = lines.next() {
            self.data(first)?;
        }
        for line in lines {
            self.command(CMD_SET_DDRAM | LINE_TWO)?;
            self.data(line)?;
        }
        Ok(())
    }

    fn scroll(&mut self, direction: ScrollDirection) -> Result<(), DisplayError> {
        let command = match direction {
            // Reveal the columns past the right edge
            ScrollDirection::Right => CMD_SHIFT_LEFT,
            ScrollDirection::Left => CMD_SHIFT_RIGHT,
        };
        self.command(command)
    }

    fn define_glyph(&mut self, slot: u8, glyph: &Glyph) -> Result<(), DisplayError> {
        if usize::from(slot) >= GLYPH_COUNT {
            return Err(DisplayError::InvalidGlyphSlot);
        }
        self.command(CMD_SET_CGRAM | (slot << 3))?;
        self.data(glyph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eddie_display::glyph::HEART;

    /// Records every bus write
    #[derive(Default)]
    struct RecordingBus {
        writes: Vec<(u8, Vec<u8>)>,
        max_write: usize,
        fail: bool,
    }

    impl I2cBus for RecordingBus {
        type Error = ();

        fn write(&mut self, address: u8, data: &[u8]) -> Result<(), ()> {
            if self.fail {
                return Err(());
            }
            assert!(data.len() <= self.max_write_len());
            self.writes.push((address, data.to_vec()));
            Ok(())
        }

        fn max_write_len(&self) -> usize {
            if self.max_write == 0 {
                usize::MAX
            } else {
                self.max_write
            }
        }
    }

    /// Records requested delays in microseconds
    #[derive(Default)]
    struct RecordingDelay {
        total_us: u64,
    }

    impl DelayNs for RecordingDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_us += u64::from(ns) / 1_000;
        }

        fn delay_us(&mut self, us: u32) {
            self.total_us += u64::from(us);
        }
    }

    fn lcd(max_write: usize) -> GroveLcd<RecordingBus, RecordingDelay> {
        GroveLcd::new(
            RecordingBus {
                max_write,
                ..Default::default()
            },
            RecordingDelay::default(),
        )
    }

    #[test]
    fn test_init_sequence() {
        let mut lcd = lcd(0);
        lcd.init().unwrap();

        let writes = &lcd.bus.writes;
        let lcd_commands: Vec<u8> = writes
            .iter()
            .filter(|(addr, _)| *addr == LCD_ADDRESS)
            .map(|(_, data)| data[1])
            .collect();
        assert_eq!(lcd_commands, [0x28, 0x28, 0x28, 0x0C, 0x01, 0x06]);

        let rgb: Vec<&[u8]> = writes
            .iter()
            .filter(|(addr, _)| *addr == RGB_ADDRESS)
            .map(|(_, data)| data.as_slice())
            .collect();
        assert_eq!(rgb, [&[0x00, 0x00][..], &[0x01, 0x00][..], &[0x08, 0xAA][..]]);

        // 50 ms + 3 * 4.5 ms + 2 ms for the clear
        assert_eq!(lcd.delay.total_us, 65_500);
    }

    #[test]
    fn test_set_color() {
        let mut lcd = lcd(0);
        lcd.set_color(Rgb::new(20, 255, 0)).unwrap();
        assert_eq!(
            lcd.bus.writes,
            [
                (RGB_ADDRESS, vec![0x04, 20]),
                (RGB_ADDRESS, vec![0x03, 255]),
                (RGB_ADDRESS, vec![0x02, 0]),
            ]
        );
    }

    #[test]
    fn test_write_moves_to_line_two_on_newline() {
        let mut lcd = lcd(0);
        lcd.write(b"Hola\nfun").unwrap();
        assert_eq!(
            lcd.bus.writes,
            [
                (LCD_ADDRESS, b"\x40Hola".to_vec()),
                (LCD_ADDRESS, vec![0x80, 0xC0]),
                (LCD_ADDRESS, b"\x40fun".to_vec()),
            ]
        );
    }

    #[test]
    fn test_write_is_chunked_to_bus_limit() {
        // Firmata bridge limit: 16 bytes per write, one of them the control byte
        let mut lcd = lcd(16);
        let text = [b'a'; 40];
        lcd.write(&text).unwrap();

        let sizes: Vec<usize> = lcd.bus.writes.iter().map(|(_, d)| d.len()).collect();
        assert_eq!(sizes, [16, 16, 11]);
        assert!(lcd.bus.writes.iter().all(|(_, d)| d[0] == CONTROL_DATA));
    }

    #[test]
    fn test_scroll_commands() {
        let mut lcd = lcd(0);
        lcd.scroll(ScrollDirection::Right).unwrap();
        lcd.scroll(ScrollDirection::Left).unwrap();
        assert_eq!(
            lcd.bus.writes,
            [(LCD_ADDRESS, vec![0x80, 0x18]), (LCD_ADDRESS, vec![0x80, 0x1C])]
        );
    }

    #[test]
    fn test_define_glyph() {
        let mut lcd = lcd(0);
        lcd.define_glyph(6, &HEART).unwrap();

        assert_eq!(lcd.bus.writes[0], (LCD_ADDRESS, vec![0x80, 0x70]));
        let mut expected = vec![CONTROL_DATA];
        expected.extend_from_slice(&HEART);
        assert_eq!(lcd.bus.writes[1], (LCD_ADDRESS, expected));

        assert_eq!(
            lcd.define_glyph(8, &HEART),
            Err(DisplayError::InvalidGlyphSlot)
        );
    }

    #[test]
    fn test_bus_failure_maps_to_communication() {
        let mut lcd = lcd(0);
        lcd.bus.fail = true;
        assert_eq!(lcd.clear(), Err(DisplayError::Communication));
        assert_eq!(lcd.write(b"gato"), Err(DisplayError::Communication));
    }
}
