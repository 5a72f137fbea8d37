//! State machine definition

use super::events::Event;

/// Controller states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Before the first command
    #[default]
    Idle,
    /// An item is on the display
    Rendering,
    /// Running the shutdown sequence
    ShuttingDown,
    /// Shutdown done, the process is about to exit
    Stopped,
}

impl State {
    /// Check if this state still applies input commands
    pub fn accepts_commands(&self) -> bool {
        matches!(self, State::Idle | State::Rendering)
    }

    /// Check if this is a terminal state
    pub fn is_terminal(&self) -> bool {
        matches!(self, State::ShuttingDown | State::Stopped)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use State::*;

        match (self, event) {
            (Idle, Rendered) | (Rendering, Rendered) => Rendering,
            (Idle, QuitReceived) | (Rendering, QuitReceived) => ShuttingDown,
            (ShuttingDown, ShutdownComplete) => Stopped,

            // Default: stay in current state
            _ => self,
        }
    }
}
