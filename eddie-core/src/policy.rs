//! Selection policy
//!
//! Picks what the display shows next. Rules, in priority order:
//!
//! 1. A missed item whose recorded position equals the advance counter is
//!    replayed, once.
//! 2. Past the sentence threshold the counter resets and a random sentence
//!    is shown.
//! 3. Otherwise a random word different from the last word shown.
//!
//! The random source is injected so runs can be replayed from a seed.

use core::fmt;

use eddie_display::Rgb;
use rand::{Rng, RngCore};

use crate::session::Session;
use crate::vocabulary::{Item, Vocabulary};

/// Advances shown as words before a sentence is inserted
pub const DEFAULT_SENTENCE_AFTER: u16 = 10;

/// Errors from the selection policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PolicyError {
    /// The only distinct word is already on the display
    NoAlternative { word: Item },
}

impl fmt::Display for PolicyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyError::NoAlternative { word } => {
                write!(f, "no word other than {:?} to show", word.text)
            }
        }
    }
}

/// Why an item was selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Reason {
    /// Replay of a missed item
    Replay,
    /// Periodic sentence
    Sentence,
    /// Random word
    Word,
    /// The sole word, shown again
    Repeat,
}

/// A selected item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Selection {
    pub item: Item,
    pub reason: Reason,
}

/// Selection policy over a vocabulary
pub struct SelectionPolicy<R> {
    vocabulary: Vocabulary,
    rng: R,
    sentence_after: u16,
    has_alternative: bool,
}

impl<R: RngCore> SelectionPolicy<R> {
    /// Create a policy inserting a sentence after `sentence_after` words
    pub fn new(vocabulary: Vocabulary, rng: R, sentence_after: u16) -> Self {
        Self {
            vocabulary,
            rng,
            sentence_after,
            has_alternative: vocabulary.distinct_words() > 1,
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Select the next item, updating the replay and counter state
    ///
    /// The caller increments the advance counter before calling.
    pub fn next(&mut self, session: &mut Session) -> Result<Selection, PolicyError> {
        if let Some(item) = session.take_due_replay() {
            return Ok(Selection {
                item,
                reason: Reason::Replay,
            });
        }

        if session.advance_counter > self.sentence_after {
            session.advance_counter = 0;
            return Ok(Selection {
                item: self.random_sentence(),
                reason: Reason::Sentence,
            });
        }

        let item = self.random_word_except(session.last_word)?;
        Ok(Selection {
            item,
            reason: Reason::Word,
        })
    }

    /// Random backlight color for feedback
    pub fn random_color(&mut self) -> Rgb {
        Rgb::new(self.rng.gen(), self.rng.gen(), self.rng.gen())
    }

    // Both lists are non-empty, so the ranges are never empty
    fn random_sentence(&mut self) -> Item {
        let index = self.rng.gen_range(0..self.vocabulary.sentence_count());
        self.vocabulary.sentence_at(index)
    }

    fn random_word(&mut self) -> Item {
        let index = self.rng.gen_range(0..self.vocabulary.word_count());
        self.vocabulary.word_at(index)
    }

    fn random_word_except(&mut self, last: Option<Item>) -> Result<Item, PolicyError> {
        if !self.has_alternative {
            let word = self.random_word();
            return match last {
                Some(shown) if shown == word => Err(PolicyError::NoAlternative { word }),
                _ => Ok(word),
            };
        }

        // Terminates: at least two distinct words exist
        loop {
            let word = self.random_word();
            if Some(word) != last {
                return Ok(word);
            }
        }
    }
}
