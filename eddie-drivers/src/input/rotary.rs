//! Rotary angle sensor change filter

use eddie_core::router::InputEvent;

/// Rotary angle sensor on an analog input
///
/// Emits the raw reading whenever it changes. Dead-zone filtering is the
/// controller's job.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rotary {
    last: Option<u16>,
}

impl Rotary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a new analog reading
    pub fn update(&mut self, value: u16) -> Option<InputEvent> {
        if self.last == Some(value) {
            return None;
        }
        self.last = Some(value);
        Some(InputEvent::RotaryMoved(value))
    }

    /// Last reading seen
    pub fn position(&self) -> Option<u16> {
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emits_on_change_only() {
        let mut rotary = Rotary::new();
        assert_eq!(rotary.update(512), Some(InputEvent::RotaryMoved(512)));
        assert_eq!(rotary.update(512), None);
        assert_eq!(rotary.update(513), Some(InputEvent::RotaryMoved(513)));
        assert_eq!(rotary.position(), Some(513));
    }
}
