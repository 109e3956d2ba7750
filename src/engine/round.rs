//! State of a single hangman round
//!
//! A round owns the secret word, the mask, the guess history and the attempt
//! budget. It moves from `InProgress` to exactly one of `Won`, `Lost` or
//! `Aborted` and rejects further guesses after that.

use crate::core::{Difficulty, Mask, SecretWord};
use rand::Rng;
use rand::seq::index;
use std::collections::BTreeSet;
use thiserror::Error;

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won,
    Lost,
    /// The player typed the quit token; not counted as a loss
    Aborted,
}

impl Status {
    /// True for `Won`, `Lost` and `Aborted`
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Annotation for the most recent guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    /// Revealed at least one new position
    Correct,
    /// Revealed nothing new; one attempt spent
    Incorrect,
    /// Letter was guessed before; nothing changed
    AlreadyGuessed,
}

/// Guessing into a round that has already ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("the round is over ({status:?})")]
pub struct RoundError {
    pub status: Status,
}

/// One round of hangman
#[derive(Debug, Clone)]
pub struct Round {
    difficulty: Difficulty,
    secret: SecretWord,
    mask: Mask,
    attempts_used: u32,
    attempts_max: u32,
    guessed: BTreeSet<char>,
    correct: BTreeSet<char>,
    incorrect: BTreeSet<char>,
    status: Status,
    last_guess: Option<(char, Feedback)>,
}

impl Round {
    /// Start a round for `difficulty`, revealing a random set of hint positions
    ///
    /// The hint count is drawn uniformly from the difficulty's hint range and
    /// clamped to the word length; positions are sampled without replacement.
    pub fn new<R: Rng>(secret: SecretWord, difficulty: Difficulty, rng: &mut R) -> Self {
        let profile = difficulty.profile();
        let hints = rng.random_range(profile.hint_range()).min(secret.len());
        let positions = index::sample(rng, secret.len(), hints).into_vec();

        Self::with_hints(secret, difficulty, profile.max_attempts, &positions)
    }

    /// Start a round with explicit hint positions and attempt budget
    ///
    /// Positions past the end of the word are ignored.
    #[must_use]
    pub fn with_hints(
        secret: SecretWord,
        difficulty: Difficulty,
        attempts_max: u32,
        hint_positions: &[usize],
    ) -> Self {
        let mut mask = Mask::blank(&secret);
        let mut correct = BTreeSet::new();

        for &position in hint_positions.iter().filter(|&&p| p < secret.len()) {
            mask.reveal_at(&secret, position);
            correct.insert(secret.char_at(position));
        }

        let mut round = Self {
            difficulty,
            secret,
            mask,
            attempts_used: 0,
            attempts_max,
            guessed: BTreeSet::new(),
            correct,
            incorrect: BTreeSet::new(),
            status: Status::InProgress,
            last_guess: None,
        };
        round.update_status();
        round
    }

    /// Apply a letter guess
    ///
    /// # Errors
    /// Returns `RoundError` if the round has already finished; the round is
    /// left untouched.
    pub fn guess(&mut self, letter: char) -> Result<Feedback, RoundError> {
        if self.status.is_finished() {
            return Err(RoundError {
                status: self.status,
            });
        }

        let letter = letter.to_ascii_lowercase();

        let feedback = if !self.guessed.insert(letter) {
            Feedback::AlreadyGuessed
        } else if self.mask.reveal_letter(&self.secret, letter) > 0 {
            self.correct.insert(letter);
            Feedback::Correct
        } else {
            // Also reached for a letter that only sits in hint-revealed slots
            self.incorrect.insert(letter);
            self.attempts_used += 1;
            Feedback::Incorrect
        };

        self.last_guess = Some((letter, feedback));
        self.update_status();
        Ok(feedback)
    }

    /// End the round at the player's request
    ///
    /// No effect on a round that is already finished.
    pub fn abort(&mut self) {
        if !self.status.is_finished() {
            self.status = Status::Aborted;
        }
    }

    // Won is checked before Lost
    fn update_status(&mut self) {
        if self.mask.is_complete() {
            self.status = Status::Won;
        } else if self.attempts_used >= self.attempts_max {
            self.status = Status::Lost;
        }
    }

    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub const fn secret(&self) -> &SecretWord {
        &self.secret
    }

    #[must_use]
    pub const fn mask(&self) -> &Mask {
        &self.mask
    }

    #[must_use]
    pub const fn attempts_used(&self) -> u32 {
        self.attempts_used
    }

    #[must_use]
    pub const fn attempts_max(&self) -> u32 {
        self.attempts_max
    }

    #[must_use]
    pub const fn attempts_left(&self) -> u32 {
        self.attempts_max.saturating_sub(self.attempts_used)
    }

    #[must_use]
    pub const fn guessed_letters(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    /// Letters known to be in the word (hints and correct guesses)
    #[must_use]
    pub const fn correct_letters(&self) -> &BTreeSet<char> {
        &self.correct
    }

    #[must_use]
    pub const fn incorrect_letters(&self) -> &BTreeSet<char> {
        &self.incorrect
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub const fn last_guess(&self) -> Option<(char, Feedback)> {
        self.last_guess
    }
}
