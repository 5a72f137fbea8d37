//! Session state
//!
//! A single value owned by the controller. Inputs never touch it; they
//! only enqueue commands.

use crate::vocabulary::{Item, ItemKind};

/// An item flagged for replay and the counter value it was flagged at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MissedItem {
    pub item: Item,
    pub position: u16,
}

/// Mutable state of one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Session {
    /// Item on the display, `None` before the first render
    pub current: Option<Item>,
    /// Last word shown; sentences leave it alone
    pub last_word: Option<Item>,
    /// Item waiting for replay
    pub missed: Option<MissedItem>,
    /// Advances since the last sentence
    pub advance_counter: u16,
    /// Last rotary reading that produced a scroll step
    pub scroll_position: u16,
    /// Set once the first item has been rendered
    pub displaying: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the missed item if the counter has come back to its position
    pub fn take_due_replay(&mut self) -> Option<Item> {
        match self.missed {
            Some(missed) if missed.position == self.advance_counter => {
                self.missed = None;
                Some(missed.item)
            }
            _ => None,
        }
    }

    /// Record a rendered item
    pub fn show(&mut self, item: Item) {
        self.current = Some(item);
        if item.kind == ItemKind::Word {
            self.last_word = Some(item);
        }
    }

    /// Flag the last word for replay at the current counter value
    ///
    /// A sentence on the display does not count; the word before it is
    /// flagged. Returns the flagged item, `None` if no word has been shown.
    pub fn mark_last_word(&mut self) -> Option<Item> {
        let item = self.last_word?;
        self.missed = Some(MissedItem {
            item,
            position: self.advance_counter,
        });
        Some(item)
    }
}
