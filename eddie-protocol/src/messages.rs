//! Board → host messages

use heapless::{String, Vec};

use crate::{join_7bit, REPORT_FIRMWARE, STRING_DATA};

/// Maximum sysex payload kept by the parser (StandardFirmata's buffer size)
pub const MAX_SYSEX_SIZE: usize = 64;

/// Maximum decoded text length (firmware name, string data)
pub const MAX_TEXT_LEN: usize = MAX_SYSEX_SIZE / 2;

/// Messages reported by the board
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BoardMessage {
    /// Levels of the eight pins of a digital port (bit n = pin port*8+n)
    DigitalPort { port: u8, levels: u8 },
    /// 14-bit analog reading
    Analog { channel: u8, value: u16 },
    /// Protocol version, sent by the firmware on start-up
    ProtocolVersion { major: u8, minor: u8 },
    /// Firmware name and version
    Firmware {
        major: u8,
        minor: u8,
        name: String<MAX_TEXT_LEN>,
    },
    /// Free text from the firmware (usually an error report)
    StringData(String<MAX_TEXT_LEN>),
    /// Any other sysex message, payload still 7-bit encoded
    Sysex {
        command: u8,
        payload: Vec<u8, MAX_SYSEX_SIZE>,
    },
}

impl BoardMessage {
    /// Build a message from a complete sysex body (command + payload)
    pub(crate) fn from_sysex(command: u8, payload: &[u8]) -> Self {
        match command {
            REPORT_FIRMWARE if payload.len() >= 2 => BoardMessage::Firmware {
                major: payload[0],
                minor: payload[1],
                name: decode_text(&payload[2..]),
            },
            STRING_DATA => BoardMessage::StringData(decode_text(payload)),
            _ => {
                let mut kept = Vec::new();
                // Parser never hands over more than MAX_SYSEX_SIZE bytes
                let _ = kept.extend_from_slice(&payload[..payload.len().min(MAX_SYSEX_SIZE)]);
                BoardMessage::Sysex {
                    command,
                    payload: kept,
                }
            }
        }
    }

    /// Level of `pin` if this message reports its port
    pub fn digital_level(&self, pin: u8) -> Option<bool> {
        match *self {
            BoardMessage::DigitalPort { port, levels } if crate::port_of(pin) == port => {
                Some(levels & (1 << crate::bit_of(pin)) != 0)
            }
            _ => None,
        }
    }
}

/// Decode text sent as pairs of 7-bit bytes
///
/// Non-ASCII characters are replaced by `?`; text beyond the capacity is
/// dropped.
fn decode_text(payload: &[u8]) -> String<MAX_TEXT_LEN> {
    let mut text = String::new();
    for pair in payload.chunks_exact(2) {
        let code = join_7bit(pair[0], pair[1]);
        let ch = match u8::try_from(code) {
            Ok(byte) if byte.is_ascii() => byte as char,
            _ => '?',
        };
        if text.push(ch).is_err() {
            break;
        }
    }
    text
}
