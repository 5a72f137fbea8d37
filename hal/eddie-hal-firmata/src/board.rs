//! Report side of the board link
//!
//! Reads the board's byte stream, parses it and turns port and analog
//! reports into per-pin events. Everything else is handed over untouched.

use eddie_hal::UartRx;
use eddie_protocol::{BoardMessage, MessageParser};
use tracing::{trace, warn};

use crate::error::LinkError;

/// Digital ports tracked for change detection
const PORTS: usize = 16;

/// A change reported by the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinEvent {
    /// Digital input level changed (or was reported for the first time)
    Digital { pin: u8, high: bool },
    /// Analog reading
    Analog { channel: u8, value: u16 },
}

/// Reader for the board → host direction
pub struct BoardReader<R> {
    rx: R,
    parser: MessageParser,
    ports: [Option<u8>; PORTS],
}

impl<R> BoardReader<R>
where
    R: UartRx<Error = std::io::Error>,
{
    pub fn new(rx: R) -> Self {
        Self {
            rx,
            parser: MessageParser::new(),
            ports: [None; PORTS],
        }
    }

    /// Block for the next chunk of bytes and dispatch what it completes
    ///
    /// Returns the number of bytes consumed, or [`LinkError::Closed`] once
    /// the board goes away.
    pub fn read(
        &mut self,
        mut on_event: impl FnMut(PinEvent),
        mut on_message: impl FnMut(BoardMessage),
    ) -> Result<usize, LinkError> {
        let mut buf = [0u8; 64];
        let n = self.rx.read_blocking(&mut buf)?;
        if n == 0 {
            return Err(LinkError::Closed);
        }

        let Self { parser, ports, .. } = self;
        parser.feed_bytes(
            &buf[..n],
            |message| match message {
                BoardMessage::DigitalPort { port, levels } => {
                    port_changes(ports, port, levels, &mut on_event)
                }
                BoardMessage::Analog { channel, value } => {
                    on_event(PinEvent::Analog { channel, value })
                }
                other => on_message(other),
            },
            |e| warn!(?e, "dropped malformed board message"),
        );
        trace!(bytes = n, "board data");
        Ok(n)
    }
}

/// Emit a digital event for each pin whose level differs from the last report
fn port_changes(
    ports: &mut [Option<u8>; PORTS],
    port: u8,
    levels: u8,
    on_event: &mut impl FnMut(PinEvent),
) {
    let Some(slot) = ports.get_mut(usize::from(port)) else {
        return;
    };
    let changed = match *slot {
        Some(previous) => previous ^ levels,
        None => 0xFF,
    };
    *slot = Some(levels);

    for bit in 0..8u8 {
        if changed & (1 << bit) != 0 {
            on_event(PinEvent::Digital {
                pin: port * 8 + bit,
                high: levels & (1 << bit) != 0,
            });
        }
    }
}
