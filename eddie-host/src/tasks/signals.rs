//! Termination signal listener
//!
//! A blocking signal-hook iterator on its own thread. The first signal
//! raises the `Quit` lane; later ones are only logged.

use std::thread::{self, JoinHandle};

use signal_hook::consts::{SIGHUP, SIGINT, SIGQUIT, SIGTERM};
use signal_hook::iterator::Signals;
use tracing::{debug, info};

use eddie_core::{Command, ShutdownCoordinator, TerminationSignal};

use crate::channels::QUIT;
use crate::error::HostError;

/// Signals that stop the program
pub const TERMINATION_SIGNALS: [i32; 4] = [SIGINT, SIGTERM, SIGHUP, SIGQUIT];

/// Map a raw signal number
pub fn termination_signal(raw: i32) -> Option<TerminationSignal> {
    match raw {
        SIGINT => Some(TerminationSignal::Interrupt),
        SIGTERM => Some(TerminationSignal::Terminate),
        SIGHUP => Some(TerminationSignal::HangUp),
        SIGQUIT => Some(TerminationSignal::Quit),
        _ => None,
    }
}

/// Register the handlers and start the listener thread
pub fn spawn_signal_listener(
    coordinator: &'static ShutdownCoordinator,
) -> Result<JoinHandle<()>, HostError> {
    let thread_error = |source| HostError::Thread {
        name: "signal",
        source,
    };
    let mut signals = Signals::new(TERMINATION_SIGNALS).map_err(thread_error)?;

    thread::Builder::new()
        .name("signal".into())
        .spawn(move || {
            for raw in signals.forever() {
                let Some(signal) = termination_signal(raw) else {
                    continue;
                };
                match coordinator.on_signal(signal) {
                    Some(Command::Quit) => {
                        info!(?signal, "shutting down");
                        QUIT.signal(());
                    }
                    _ => debug!(?signal, "shutdown already in progress"),
                }
            }
        })
        .map_err(thread_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_mapping() {
        assert_eq!(
            termination_signal(SIGINT),
            Some(TerminationSignal::Interrupt)
        );
        assert_eq!(
            termination_signal(SIGTERM),
            Some(TerminationSignal::Terminate)
        );
        assert_eq!(termination_signal(SIGHUP), Some(TerminationSignal::HangUp));
        assert_eq!(termination_signal(SIGQUIT), Some(TerminationSignal::Quit));
        assert_eq!(termination_signal(signal_hook::consts::SIGUSR1), None);
    }
}
