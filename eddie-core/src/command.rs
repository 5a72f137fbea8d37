//! Commands consumed by the controller

/// A request for the controller, applied one at a time in arrival order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Show the next item
    Advance,
    /// Flag the current item for replay
    MarkMissed,
    /// New raw rotary reading
    Scroll(u16),
    /// Run the shutdown sequence
    Quit,
}

impl Command {
    /// Whether the command may be dropped when the queue is full
    ///
    /// A newer reading supersedes a dropped scroll.
    pub fn is_droppable(&self) -> bool {
        matches!(self, Command::Scroll(_))
    }

    /// Whether the command bypasses the queue
    pub fn is_priority(&self) -> bool {
        matches!(self, Command::Quit)
    }
}
