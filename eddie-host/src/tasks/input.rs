//! Input tasks
//!
//! One task per input source. Each runs its driver over the levels or
//! readings forwarded by the board reader and routes the resulting events
//! into the command queue.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use tracing::{debug, trace};

use eddie_core::{Dispatch, Router};
use eddie_drivers::{Button, Rotary};

use crate::channels::{CommandQueue, ROTARY_READING};

/// Button task: press edges become commands
pub async fn button_task<const N: usize>(
    levels: &'static Channel<CriticalSectionRawMutex, bool, N>,
    mut button: Button,
) {
    let router = Router::new(CommandQueue);
    loop {
        let high = levels.receive().await;
        if let Some(event) = button.update(high) {
            debug!(?event, "button pressed");
            router.dispatch(event).await;
        }
    }
}

/// Rotary task: changed readings become scroll commands
pub async fn rotary_task(mut rotary: Rotary) {
    let router = Router::new(CommandQueue);
    loop {
        let reading = ROTARY_READING.wait().await;
        let Some(event) = rotary.update(reading) else {
            continue;
        };
        if let Dispatch::Dropped(command) = router.dispatch(event).await {
            trace!(?command, "command queue full, scroll dropped");
        }
    }
}
