//! Board reader thread
//!
//! Blocks on the serial port, decodes the board's reports and fans pin
//! events out to the input tasks.

use std::thread::{self, JoinHandle};

use eddie_hal_firmata::{BoardReader, PinEvent, SerialPort};
use eddie_protocol::BoardMessage;
use embassy_futures::select::{select, Either};
use embassy_time::{with_timeout, Duration};
use tracing::{debug, error, info, trace, warn};

use crate::channels::{
    Flag, ADVANCE_LEVELS, BOARD_READY, LINK_DOWN, MARK_LEVELS, ROTARY_READING,
};
use crate::config::PinSection;
use crate::error::HostError;

/// Where a pin event goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Advance(bool),
    Mark(bool),
    Rotary(u16),
}

/// Pin to input-source mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinRoutes {
    pub advance: u8,
    pub mark_missed: u8,
    pub rotary: u8,
}

impl From<&PinSection> for PinRoutes {
    fn from(pins: &PinSection) -> Self {
        Self {
            advance: pins.advance,
            mark_missed: pins.mark_missed,
            rotary: pins.rotary,
        }
    }
}

impl PinRoutes {
    /// Input source for an event, `None` for pins nobody listens to
    pub fn route(&self, event: PinEvent) -> Option<Route> {
        match event {
            PinEvent::Digital { pin, high } if pin == self.advance => Some(Route::Advance(high)),
            PinEvent::Digital { pin, high } if pin == self.mark_missed => Some(Route::Mark(high)),
            PinEvent::Analog { channel, value } if channel == self.rotary => {
                Some(Route::Rotary(value))
            }
            _ => None,
        }
    }
}

/// How the wait for the board ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handshake {
    Ready,
    Quit,
}

/// Wait for the firmware report unless a quit comes first
///
/// A quit arriving after the board is ready stays on the lane for the
/// controller loop.
pub async fn wait_for_board(
    quit: &Flag,
    ready: &Flag,
    timeout: Duration,
) -> Result<Handshake, HostError> {
    match select(quit.wait(), with_timeout(timeout, ready.wait())).await {
        Either::First(()) => Ok(Handshake::Quit),
        Either::Second(Ok(())) => Ok(Handshake::Ready),
        Either::Second(Err(_)) => Err(HostError::BoardTimeout(timeout.as_secs())),
    }
}

/// Start the reader on its own thread
pub fn spawn_reader(port: SerialPort, routes: PinRoutes) -> Result<JoinHandle<()>, HostError> {
    thread::Builder::new()
        .name("board-reader".into())
        .spawn(move || run(BoardReader::new(port), routes))
        .map_err(|source| HostError::Thread {
            name: "board-reader",
            source,
        })
}

fn run(mut reader: BoardReader<SerialPort>, routes: PinRoutes) {
    info!("board reader started");
    loop {
        let result = reader.read(|event| forward(&routes, event), handle_message);
        if let Err(e) = result {
            error!(%e, "board link down");
            LINK_DOWN.signal(());
            return;
        }
    }
}

fn forward(routes: &PinRoutes, event: PinEvent) {
    let Some(route) = routes.route(event) else {
        return;
    };
    trace!(?route, "pin event");

    match route {
        Route::Advance(high) => {
            if ADVANCE_LEVELS.try_send(high).is_err() {
                warn!("advance input backed up, dropping level");
            }
        }
        Route::Mark(high) => {
            if MARK_LEVELS.try_send(high).is_err() {
                warn!("touch input backed up, dropping level");
            }
        }
        Route::Rotary(value) => ROTARY_READING.signal(value),
    }
}

fn handle_message(message: BoardMessage) {
    match message {
        BoardMessage::Firmware { major, minor, name } => {
            info!(%name, major, minor, "board firmware");
            BOARD_READY.signal(());
        }
        BoardMessage::ProtocolVersion { major, minor } => {
            debug!(major, minor, "firmata protocol version");
        }
        BoardMessage::StringData(text) => warn!(%text, "board message"),
        other => trace!(?other, "unhandled board message"),
    }
}
