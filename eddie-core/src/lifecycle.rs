//! Shutdown coordination
//!
//! Termination signals are turned into a single `Quit`. Later signals are
//! ignored once shutdown has started.

use core::sync::atomic::{AtomicBool, Ordering};

use crate::command::Command;

/// Process termination signals the coordinator listens for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TerminationSignal {
    Interrupt,
    Terminate,
    HangUp,
    Quit,
}

/// Latches the first termination signal
#[derive(Debug, Default)]
pub struct ShutdownCoordinator {
    initiated: AtomicBool,
}

impl ShutdownCoordinator {
    pub const fn new() -> Self {
        Self {
            initiated: AtomicBool::new(false),
        }
    }

    /// Handle a signal, returning the `Quit` to enqueue on the first one
    pub fn on_signal(&self, _signal: TerminationSignal) -> Option<Command> {
        if self.initiated.swap(true, Ordering::AcqRel) {
            None
        } else {
            Some(Command::Quit)
        }
    }

    /// Check if shutdown has started
    pub fn is_initiated(&self) -> bool {
        self.initiated.load(Ordering::Acquire)
    }
}
