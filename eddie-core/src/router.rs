//! Input event router
//!
//! Translates each hardware event into exactly one command and hands it to
//! the command queue. Translation has no side effect beyond the enqueue.

use crate::command::Command;

/// Raw events from the input drivers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// Advance button pressed
    AdvancePressed,
    /// Touch sensor pressed
    MarkPressed,
    /// Rotary sensor moved to a new raw position
    RotaryMoved(u16),
}

impl From<InputEvent> for Command {
    fn from(event: InputEvent) -> Self {
        match event {
            InputEvent::AdvancePressed => Command::Advance,
            InputEvent::MarkPressed => Command::MarkMissed,
            // Raw reading; the controller computes the delta
            InputEvent::RotaryMoved(reading) => Command::Scroll(reading),
        }
    }
}

/// Producer side of the command queue
#[allow(async_fn_in_trait)]
pub trait CommandSink {
    /// Enqueue, waiting for room
    async fn send(&self, command: Command);

    /// Enqueue if there is room, handing the command back otherwise
    fn try_send(&self, command: Command) -> Result<(), Command>;
}

/// What happened to a routed event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dispatch {
    /// Command is in the queue
    Queued(Command),
    /// Queue was full and the command may be dropped
    Dropped(Command),
}

/// Routes input events into a command sink
pub struct Router<S> {
    sink: S,
}

impl<S: CommandSink> Router<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Route one event
    ///
    /// Scroll commands never wait: a newer reading supersedes a dropped one.
    /// Button commands wait for room; the consumer always drains.
    pub async fn dispatch(&self, event: InputEvent) -> Dispatch {
        let command = Command::from(event);
        if command.is_droppable() {
            match self.sink.try_send(command) {
                Ok(()) => Dispatch::Queued(command),
                Err(command) => Dispatch::Dropped(command),
            }
        } else {
            self.sink.send(command).await;
            Dispatch::Queued(command)
        }
    }
}
