//! Secret word representation
//!
//! A `SecretWord` stores the word to guess along with letter position indices
//! so a guess can reveal every occurrence at once.

use rustc_hash::FxHashMap;
use std::fmt;
use thiserror::Error;

/// Shortest word the game can be played with
pub const MIN_WORD_LENGTH: usize = 4;

/// Longest word the game can be played with
pub const MAX_WORD_LENGTH: usize = 14;

/// The word a round is played against
///
/// Always lowercase ASCII, between [`MIN_WORD_LENGTH`] and [`MAX_WORD_LENGTH`]
/// letters long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretWord {
    text: String,
    char_positions: FxHashMap<char, Vec<usize>>,
}

/// Error type for invalid secret words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be {MIN_WORD_LENGTH}-{MAX_WORD_LENGTH} letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    InvalidCharacters,
}

impl SecretWord {
    /// Create a new secret word from a string
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is outside the supported range
    /// - Contains anything but ASCII letters
    ///
    /// # Examples
    /// ```
    /// use hangman::core::SecretWord;
    ///
    /// let word = SecretWord::new("Apple").unwrap();
    /// assert_eq!(word.text(), "apple");
    ///
    /// assert!(SecretWord::new("cat").is_err());
    /// assert!(SecretWord::new("b00k").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into().trim().to_lowercase();

        if !text.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordError::InvalidCharacters);
        }

        // ASCII only from here on, so byte length == letter count
        if !(MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&text.len()) {
            return Err(WordError::InvalidLength(text.len()));
        }

        let mut char_positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
        for (i, ch) in text.chars().enumerate() {
            char_positions.entry(ch).or_default().push(i);
        }

        Ok(Self {
            text,
            char_positions,
        })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// True only for an empty word, which `new` never builds
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= self.len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> char {
        char::from(self.text.as_bytes()[position])
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: char) -> bool {
        self.char_positions.contains_key(&letter)
    }

    /// Get all positions where a letter appears
    ///
    /// Returns an empty slice if the letter doesn't appear.
    #[inline]
    pub fn positions_of(&self, letter: char) -> &[usize] {
        self.char_positions
            .get(&letter)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
