//! Events that trigger state transitions

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// An item was drawn on the display
    Rendered,
    /// A quit command was dequeued
    QuitReceived,
    /// The shutdown sequence finished
    ShutdownComplete,
}
