//! Offline word table
//!
//! Words grouped by length, used whenever the remote service can't deliver.

use super::FALLBACK_WORDS;
use crate::core::{MAX_WORD_LENGTH, MIN_WORD_LENGTH};
use rand::Rng;
use rand::prelude::IndexedRandom;

/// In-memory words bucketed by length
#[derive(Debug, Clone)]
pub struct LocalWords {
    // Index = word length
    buckets: Vec<Vec<&'static str>>,
}

impl LocalWords {
    /// Build the table from the embedded word list
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_slice(FALLBACK_WORDS)
    }

    /// Build a table from arbitrary words
    ///
    /// Entries outside the supported length range or with anything but ASCII
    /// letters are skipped.
    #[must_use]
    pub fn from_slice(words: &[&'static str]) -> Self {
        let mut buckets = vec![Vec::new(); MAX_WORD_LENGTH + 1];
        for &word in words {
            let valid = (MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&word.len())
                && word.chars().all(|c| c.is_ascii_lowercase());
            if valid {
                buckets[word.len()].push(word);
            }
        }
        Self { buckets }
    }

    /// All words of `length` letters (empty if none)
    #[must_use]
    pub fn bucket(&self, length: usize) -> &[&'static str] {
        self.buckets.get(length).map(Vec::as_slice).unwrap_or_default()
    }

    /// Lengths with at least one word
    pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.buckets
            .iter()
            .enumerate()
            .filter(|(_, bucket)| !bucket.is_empty())
            .map(|(length, _)| length)
    }

    /// Pick a word of `length` letters uniformly at random
    pub fn pick<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> Option<&'static str> {
        self.bucket(length).choose(rng).copied()
    }
}

impl Default for LocalWords {
    fn default() -> Self {
        Self::embedded()
    }
}
