//! Controller loop
//!
//! The single consumer of the command queue. Owns the controller and runs
//! it until `Quit` or a fatal error.

use embassy_futures::select::{select3, Either3};
use embedded_hal_async::delay::DelayNs;
use rand::RngCore;
use tracing::{debug, info, trace, warn};

use eddie_core::{Command, Controller, Indicator, Outcome, Reason};
use eddie_display::CharacterDisplay;

use crate::channels::Inbox;
use crate::error::HostError;

/// Apply commands until `Quit`, then run the shutdown sequence
///
/// A shutdown that fails part way is logged and still counts as a clean
/// exit. A lost board link ends the loop without shutting down.
pub async fn controller_task<D, I, R, Dl>(
    controller: &mut Controller<D, I, R>,
    inbox: Inbox<'_>,
    mut delay: Dl,
) -> Result<(), HostError>
where
    D: CharacterDisplay,
    I: Indicator,
    R: RngCore,
    Dl: DelayNs,
{
    info!("controller running");

    loop {
        // Polled in order: a pending quit wins over queued commands
        let command = match select3(
            inbox.quit.wait(),
            inbox.link_down.wait(),
            inbox.commands.receive(),
        )
        .await
        {
            Either3::First(()) => Command::Quit,
            Either3::Second(()) => return Err(HostError::LinkLost),
            Either3::Third(command) => command,
        };
        trace!(?command, "command");

        let outcome = controller.apply(command)?;
        log_outcome(controller, &outcome);
        if outcome == Outcome::QuitRequested {
            break;
        }
    }

    shutdown(controller, &mut delay).await;
    Ok(())
}

async fn shutdown<D, I, R, Dl>(controller: &mut Controller<D, I, R>, delay: &mut Dl)
where
    D: CharacterDisplay,
    I: Indicator,
    R: RngCore,
    Dl: DelayNs,
{
    match controller.shutdown(delay).await {
        Ok(()) => info!("display released"),
        Err(e) => warn!(%e, "shutdown sequence incomplete"),
    }
}

fn log_outcome<D, I, R>(controller: &Controller<D, I, R>, outcome: &Outcome)
where
    D: CharacterDisplay,
    I: Indicator,
    R: RngCore,
{
    let session = controller.session();
    match outcome {
        Outcome::Rendered(selection) => {
            if selection.reason == Reason::Repeat {
                warn!(
                    text = selection.item.text,
                    "only one distinct word, showing it again"
                );
            }
            info!(
                text = selection.item.text,
                kind = ?selection.item.kind,
                reason = ?selection.reason,
                counter = session.advance_counter,
                "shown"
            );
        }
        Outcome::Marked { item: Some(item) } => {
            info!(text = item.text, counter = session.advance_counter, "marked missed");
        }
        Outcome::Marked { item: None } => debug!("mark before anything was shown"),
        Outcome::Scrolled(direction) => {
            debug!(?direction, position = session.scroll_position, "scrolled");
        }
        Outcome::ScrollFailed { direction, error } => {
            warn!(?direction, %error, "scroll step failed");
        }
        Outcome::Ignored => trace!("ignored"),
        Outcome::QuitRequested => info!("quit"),
    }
}
