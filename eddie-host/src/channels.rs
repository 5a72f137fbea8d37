//! Inter-task communication channels
//!
//! Static embassy-sync primitives shared by the board-reader thread, the
//! signal thread, the input tasks and the controller loop.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, TrySendError};
use embassy_sync::signal::Signal;

use eddie_core::{Command, CommandSink, ShutdownCoordinator};

/// Command queue capacity
pub const COMMAND_QUEUE_SIZE: usize = 16;

/// Signal with no payload
pub type Flag = Signal<CriticalSectionRawMutex, ()>;

/// The controller's command queue
pub type CommandChannel = Channel<CriticalSectionRawMutex, Command, COMMAND_QUEUE_SIZE>;

/// Channel capacity for button levels
const LEVEL_CHANNEL_SIZE: usize = 8;

/// Commands for the controller, in arrival order
pub static COMMANDS: CommandChannel = Channel::new();

/// Priority lane for `Quit`, drained before the queue
pub static QUIT: Flag = Signal::new();

/// Board reported its firmware and is ready for configuration
pub static BOARD_READY: Flag = Signal::new();

/// Board link failed or closed
pub static LINK_DOWN: Flag = Signal::new();

/// Advance button pin levels
pub static ADVANCE_LEVELS: Channel<CriticalSectionRawMutex, bool, LEVEL_CHANNEL_SIZE> =
    Channel::new();

/// Touch sensor pin levels
pub static MARK_LEVELS: Channel<CriticalSectionRawMutex, bool, LEVEL_CHANNEL_SIZE> =
    Channel::new();

/// Latest rotary reading; a newer one replaces an unread one
pub static ROTARY_READING: Signal<CriticalSectionRawMutex, u16> = Signal::new();

/// Latches the first termination signal
pub static SHUTDOWN: ShutdownCoordinator = ShutdownCoordinator::new();

/// What the controller loop listens to
#[derive(Clone, Copy)]
pub struct Inbox<'a> {
    pub quit: &'a Flag,
    pub link_down: &'a Flag,
    pub commands: &'a CommandChannel,
}

impl Inbox<'static> {
    /// The process-wide queue and lanes
    pub fn global() -> Self {
        Self {
            quit: &QUIT,
            link_down: &LINK_DOWN,
            commands: &COMMANDS,
        }
    }
}

/// Producer handle onto [`COMMANDS`]
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandQueue;

impl CommandSink for CommandQueue {
    async fn send(&self, command: Command) {
        COMMANDS.send(command).await;
    }

    fn try_send(&self, command: Command) -> Result<(), Command> {
        COMMANDS
            .try_send(command)
            .map_err(|e| match e {
                TrySendError::Full(command) => command,
            })
    }
}
