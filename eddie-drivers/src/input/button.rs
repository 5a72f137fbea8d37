//! Push button edge detector

use eddie_core::router::InputEvent;

/// Push button on a digital input
///
/// Emits its event once per press, on the released → pressed edge.
#[derive(Debug, Clone, Copy)]
pub struct Button {
    event: InputEvent,
    /// If true, pressed = pin low
    active_low: bool,
    pressed: bool,
}

impl Button {
    /// Create a button emitting `event` on each press
    pub fn new(event: InputEvent, active_low: bool) -> Self {
        Self {
            event,
            active_low,
            pressed: false,
        }
    }

    /// Feed the current pin level
    ///
    /// Repeated reports of the same level are ignored.
    pub fn update(&mut self, level_high: bool) -> Option<InputEvent> {
        let pressed = level_high != self.active_low;
        let edge = pressed && !self.pressed;
        self.pressed = pressed;
        edge.then_some(self.event)
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }
}
