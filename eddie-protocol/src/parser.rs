//! Streaming parser for board → host messages

use heapless::Vec;

use crate::messages::{BoardMessage, MAX_SYSEX_SIZE};
use crate::{join_7bit, ANALOG_MESSAGE, DIGITAL_MESSAGE, END_SYSEX, PROTOCOL_VERSION, START_SYSEX};

/// Errors that can occur during parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Sysex body longer than [`MAX_SYSEX_SIZE`]
    SysexOverflow,
    /// Sysex with no command byte
    EmptySysex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// Waiting for a command byte; stray data bytes are dropped
    WaitingForCommand,
    /// Collecting the data bytes of a fixed-size message
    ReadingData,
    /// Collecting a sysex body until END_SYSEX
    ReadingSysex,
}

/// State machine for parsing the board's byte stream
#[derive(Debug, Clone)]
pub struct MessageParser {
    state: ParseState,
    command: u8,
    expected: usize,
    buffer: Vec<u8, MAX_SYSEX_SIZE>,
}

impl Default for MessageParser {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self {
            state: ParseState::WaitingForCommand,
            command: 0,
            expected: 0,
            buffer: Vec::new(),
        }
    }

    /// Reset the parser state
    pub fn reset(&mut self) {
        self.state = ParseState::WaitingForCommand;
        self.command = 0;
        self.expected = 0;
        self.buffer.clear();
    }

    /// Feed a single byte to the parser
    ///
    /// Returns `Ok(Some(message))` when a complete message is parsed,
    /// `Ok(None)` when more bytes are needed, or `Err` on a malformed
    /// sysex. The parser is ready for the next message either way.
    pub fn feed(&mut self, byte: u8) -> Result<Option<BoardMessage>, ParseError> {
        if byte & 0x80 != 0 {
            return self.command_byte(byte);
        }

        match self.state {
            ParseState::WaitingForCommand => Ok(None),
            ParseState::ReadingSysex => {
                if self.buffer.push(byte).is_err() {
                    self.reset();
                    return Err(ParseError::SysexOverflow);
                }
                Ok(None)
            }
            ParseState::ReadingData => {
                // Capacity is far above the two bytes a message needs
                let _ = self.buffer.push(byte);
                if self.buffer.len() < self.expected {
                    return Ok(None);
                }
                let message = self.finish_fixed();
                self.reset();
                Ok(message)
            }
        }
    }

    /// Feed multiple bytes, calling `on_message` for each complete message
    ///
    /// Parse errors are passed to `on_error` and parsing continues.
    pub fn feed_bytes(
        &mut self,
        bytes: &[u8],
        mut on_message: impl FnMut(BoardMessage),
        mut on_error: impl FnMut(ParseError),
    ) {
        for &byte in bytes {
            match self.feed(byte) {
                Ok(Some(message)) => on_message(message),
                Ok(None) => {}
                Err(e) => on_error(e),
            }
        }
    }

    fn command_byte(&mut self, byte: u8) -> Result<Option<BoardMessage>, ParseError> {
        match byte {
            START_SYSEX => {
                self.reset();
                self.state = ParseState::ReadingSysex;
                Ok(None)
            }
            END_SYSEX => {
                if self.state != ParseState::ReadingSysex {
                    self.reset();
                    return Ok(None);
                }
                let result = match self.buffer.split_first() {
                    Some((&command, payload)) => Ok(Some(BoardMessage::from_sysex(command, payload))),
                    None => Err(ParseError::EmptySysex),
                };
                self.reset();
                result
            }
            PROTOCOL_VERSION => {
                self.start_fixed(byte, 2);
                Ok(None)
            }
            _ => {
                match byte & 0xF0 {
                    DIGITAL_MESSAGE | ANALOG_MESSAGE => self.start_fixed(byte, 2),
                    // Host-bound traffic never carries other commands; drop them
                    _ => self.reset(),
                }
                Ok(None)
            }
        }
    }

    fn start_fixed(&mut self, command: u8, expected: usize) {
        self.reset();
        self.command = command;
        self.expected = expected;
        self.state = ParseState::ReadingData;
    }

    fn finish_fixed(&self) -> Option<BoardMessage> {
        let (lsb, msb) = (self.buffer[0], self.buffer[1]);
        let channel = self.command & 0x0F;

        if self.command == PROTOCOL_VERSION {
            return Some(BoardMessage::ProtocolVersion {
                major: lsb,
                minor: msb,
            });
        }

        match self.command & 0xF0 {
            DIGITAL_MESSAGE => Some(BoardMessage::DigitalPort {
                port: channel,
                levels: lsb | ((msb & 0x01) << 7),
            }),
            ANALOG_MESSAGE => Some(BoardMessage::Analog {
                channel,
                value: join_7bit(lsb, msb),
            }),
            _ => None,
        }
    }
}
