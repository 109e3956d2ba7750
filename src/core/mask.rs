//! Per-position reveal state of the secret word
//!
//! Each slot is either blank or holds the letter of the secret word at that
//! position. A mask never holds a letter the secret word does not have at the
//! same position.

use super::SecretWord;

/// Reveal state of a secret word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask(Vec<Option<char>>);

impl Mask {
    /// Glyph used to render a blank slot
    pub const BLANK: char = '_';

    /// Create an all-blank mask for `word`
    #[must_use]
    pub fn blank(word: &SecretWord) -> Self {
        Self(vec![None; word.len()])
    }

    /// Number of slots
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Letter at `position`, or `None` while the slot is blank
    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Option<char> {
        self.0.get(position).copied().flatten()
    }

    /// Check whether the slot at `position` is still blank
    #[inline]
    #[must_use]
    pub fn is_blank(&self, position: usize) -> bool {
        matches!(self.0.get(position), Some(None))
    }

    /// Number of blank slots left
    #[must_use]
    pub fn blanks(&self) -> usize {
        self.0.iter().filter(|slot| slot.is_none()).count()
    }

    /// True once every slot has been revealed
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }

    /// Reveal a single position, copying the letter from `word`
    ///
    /// Returns true if the slot was blank before.
    pub fn reveal_at(&mut self, word: &SecretWord, position: usize) -> bool {
        if !self.is_blank(position) {
            return false;
        }
        self.0[position] = Some(word.char_at(position));
        true
    }

    /// Reveal every still-blank occurrence of `letter`
    ///
    /// Returns the number of newly revealed slots (0 when the letter is absent
    /// or all of its slots were already shown).
    pub fn reveal_letter(&mut self, word: &SecretWord, letter: char) -> usize {
        word.positions_of(letter)
            .iter()
            .filter(|&&position| self.reveal_at(word, position))
            .count()
    }

    /// Iterate over the slots in order
    pub fn slots(&self) -> impl Iterator<Item = Option<char>> + '_ {
        self.0.iter().copied()
    }

    /// Render as space-separated uppercase letters and blanks, e.g. `A _ _ L E`
    #[must_use]
    pub fn to_display_string(&self) -> String {
        self.0
            .iter()
            .map(|slot| slot.unwrap_or(Self::BLANK).to_ascii_uppercase().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
