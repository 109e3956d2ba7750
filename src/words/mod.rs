//! Word sources for hangman
//!
//! The game asks a [`WordSource`] for a word of a given length. The standard
//! source tries the remote word service once and falls back to the embedded
//! table on any failure.

mod embedded;
pub mod local;
pub mod remote;

pub use embedded::{FALLBACK_WORDS, FALLBACK_WORDS_COUNT};
pub use local::LocalWords;
pub use remote::{HttpLookup, LookupError, Offline, RemoteLookup};

use crate::core::{MAX_WORD_LENGTH, MIN_WORD_LENGTH, SecretWord};
use rand::Rng;
use rand::rngs::ThreadRng;
use thiserror::Error;
use tracing::{debug, warn};

/// Why no word could be supplied
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordSourceError {
    #[error("length must be between {MIN_WORD_LENGTH} and {MAX_WORD_LENGTH}, got {0}")]
    InvalidLength(usize),
    #[error("no words available for length {0}")]
    NoWordsForLength(usize),
}

/// Supplies secret words by length
pub trait WordSource {
    /// Produce a word of exactly `length` letters
    ///
    /// # Errors
    /// Returns `WordSourceError` when the length is unsupported or no word of
    /// that length can be found.
    fn fetch(&mut self, length: usize) -> Result<SecretWord, WordSourceError>;
}

/// Remote lookup first, local table second
pub struct FallbackWordSource<L: RemoteLookup, R: Rng = ThreadRng> {
    remote: L,
    local: LocalWords,
    rng: R,
}

impl<L: RemoteLookup> FallbackWordSource<L> {
    /// Create a source backed by `remote` and the embedded table
    #[must_use]
    pub fn new(remote: L) -> Self {
        Self::with_rng(remote, LocalWords::embedded(), rand::rng())
    }
}

impl<L: RemoteLookup, R: Rng> FallbackWordSource<L, R> {
    /// Create a source with an explicit table and random generator
    pub const fn with_rng(remote: L, local: LocalWords, rng: R) -> Self {
        Self { remote, local, rng }
    }

    /// Pick from the local table only
    ///
    /// # Errors
    /// Returns `WordSourceError::NoWordsForLength` if the table has no bucket
    /// for `length`.
    pub fn fetch_local(&mut self, length: usize) -> Result<SecretWord, WordSourceError> {
        self.local
            .pick(length, &mut self.rng)
            .and_then(|word| SecretWord::new(word).ok())
            .ok_or(WordSourceError::NoWordsForLength(length))
    }
}

impl<L: RemoteLookup, R: Rng> WordSource for FallbackWordSource<L, R> {
    fn fetch(&mut self, length: usize) -> Result<SecretWord, WordSourceError> {
        if !(MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&length) {
            return Err(WordSourceError::InvalidLength(length));
        }

        match self.remote.lookup(length) {
            Ok(word) => match SecretWord::new(word) {
                Ok(secret) if secret.len() == length => {
                    debug!(length, "using word from remote service");
                    return Ok(secret);
                }
                Ok(secret) => {
                    warn!(
                        length,
                        word = %secret,
                        "remote word has the wrong length, using local table"
                    );
                }
                Err(e) => warn!(length, error = %e, "remote word rejected, using local table"),
            },
            Err(LookupError::Disabled) => debug!(length, "remote lookup disabled"),
            Err(e) => debug!(length, error = %e, "remote lookup failed, using local table"),
        }

        self.fetch_local(length)
    }
}
