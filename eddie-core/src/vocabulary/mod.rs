//! Vocabulary store
//!
//! Immutable word and sentence lists, plus the transform from item text to
//! the bytes sent to the display.

pub mod spanish;

use core::fmt;

use eddie_display::glyph::{
    SLOT_A_ACUTE, SLOT_E_ACUTE, SLOT_I_ACUTE, SLOT_N_TILDE, SLOT_O_ACUTE, SLOT_U_ACUTE,
};
use eddie_display::DDRAM_CAPACITY;
use heapless::Vec;

/// Display bytes of a rendered item
pub type RenderedText = Vec<u8, DDRAM_CAPACITY>;

/// Kind of vocabulary item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ItemKind {
    Word,
    Sentence,
}

/// A word or sentence
///
/// Items have no identity beyond their text and kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Item {
    pub text: &'static str,
    pub kind: ItemKind,
}

impl Item {
    pub const fn word(text: &'static str) -> Self {
        Self {
            text,
            kind: ItemKind::Word,
        }
    }

    pub const fn sentence(text: &'static str) -> Self {
        Self {
            text,
            kind: ItemKind::Sentence,
        }
    }
}

/// Errors building a vocabulary or rendering text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum VocabularyError {
    /// Word list is empty
    NoWords,
    /// Sentence list is empty
    NoSentences,
    /// Character with no glyph and no single-byte code
    UnsupportedCharacter(char),
    /// Rendered text does not fit in display memory
    TooLong { len: usize },
}

impl fmt::Display for VocabularyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VocabularyError::NoWords => f.write_str("word list is empty"),
            VocabularyError::NoSentences => f.write_str("sentence list is empty"),
            VocabularyError::UnsupportedCharacter(c) => {
                write!(f, "character {:?} cannot be shown on the display", c)
            }
            VocabularyError::TooLong { len } => write!(
                f,
                "text renders to {} characters, display holds {}",
                len, DDRAM_CAPACITY
            ),
        }
    }
}

/// Custom glyph slot for an accented character
///
/// Unmapped characters return `None` and pass through unchanged.
pub fn remap(c: char) -> Option<u8> {
    match c {
        'é' => Some(SLOT_E_ACUTE),
        'ñ' => Some(SLOT_N_TILDE),
        'ó' => Some(SLOT_O_ACUTE),
        'í' => Some(SLOT_I_ACUTE),
        'á' => Some(SLOT_A_ACUTE),
        'ú' => Some(SLOT_U_ACUTE),
        _ => None,
    }
}

/// Render text to display bytes
///
/// Mapped characters become their glyph slot, the rest their raw byte.
pub fn render(text: &str) -> Result<RenderedText, VocabularyError> {
    let mut out = RenderedText::new();
    for c in text.chars() {
        let byte = match remap(c) {
            Some(slot) => slot,
            None => u8::try_from(u32::from(c))
                .map_err(|_| VocabularyError::UnsupportedCharacter(c))?,
        };
        out.push(byte).map_err(|_| VocabularyError::TooLong {
            len: text.chars().count(),
        })?;
    }
    Ok(out)
}

/// Validated, immutable word and sentence lists
#[derive(Debug, Clone, Copy)]
pub struct Vocabulary {
    words: &'static [&'static str],
    sentences: &'static [&'static str],
}

impl Vocabulary {
    /// Build a vocabulary, checking every item can be rendered
    pub fn new(
        words: &'static [&'static str],
        sentences: &'static [&'static str],
    ) -> Result<Self, VocabularyError> {
        if words.is_empty() {
            return Err(VocabularyError::NoWords);
        }
        if sentences.is_empty() {
            return Err(VocabularyError::NoSentences);
        }
        for text in words.iter().chain(sentences.iter()) {
            render(text)?;
        }
        Ok(Self { words, sentences })
    }

    /// The built-in Spanish lists
    pub fn spanish() -> Result<Self, VocabularyError> {
        Self::new(spanish::WORDS, spanish::SENTENCES)
    }

    /// Words in table order
    pub fn words(&self) -> impl ExactSizeIterator<Item = Item> + '_ {
        self.words.iter().map(|&text| Item::word(text))
    }

    /// Sentences in table order
    pub fn sentences(&self) -> impl ExactSizeIterator<Item = Item> + '_ {
        self.sentences.iter().map(|&text| Item::sentence(text))
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn sentence_count(&self) -> usize {
        self.sentences.len()
    }

    /// Word at `index`; panics past [`Vocabulary::word_count`]
    pub fn word_at(&self, index: usize) -> Item {
        Item::word(self.words[index])
    }

    /// Sentence at `index`; panics past [`Vocabulary::sentence_count`]
    pub fn sentence_at(&self, index: usize) -> Item {
        Item::sentence(self.sentences[index])
    }

    /// Number of distinct word texts
    pub fn distinct_words(&self) -> usize {
        self.words
            .iter()
            .enumerate()
            .filter(|&(i, text)| !self.words[..i].contains(text))
            .count()
    }

    /// Render an item of this vocabulary
    pub fn render(&self, item: &Item) -> Result<RenderedText, VocabularyError> {
        render(item.text)
    }
}
