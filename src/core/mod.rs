//! Core domain types for hangman
//!
//! This module contains the fundamental domain types with no I/O.
//! All types here are pure and testable.

mod difficulty;
mod guess;
mod mask;
mod word;

pub use difficulty::{Difficulty, DifficultyProfile};
pub use guess::{Guess, GuessError, QUIT_TOKENS, is_quit_token};
pub use mask::Mask;
pub use word::{MAX_WORD_LENGTH, MIN_WORD_LENGTH, SecretWord, WordError};
