//! Parsing raw guess-prompt input

use thiserror::Error;

/// Words that end the current operation at any prompt
pub const QUIT_TOKENS: [&str; 2] = ["quit", "exit"];

/// Check whether `input` is one of the quit tokens (case-insensitive)
#[must_use]
pub fn is_quit_token(input: &str) -> bool {
    let input = input.trim();
    QUIT_TOKENS.iter().any(|token| input.eq_ignore_ascii_case(token))
}

/// A validated entry at the guess prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guess {
    /// A single lowercase ASCII letter
    Letter(char),
    /// The player asked to leave the round
    Quit,
}

/// Why a guess-prompt entry was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Please enter only one letter!")]
    NotSingleCharacter,
    #[error("Please enter a valid letter!")]
    NotALetter,
}

impl Guess {
    /// Parse a line typed at the guess prompt
    ///
    /// # Errors
    /// Returns `GuessError` when the input is neither a quit token nor a
    /// single ASCII letter.
    ///
    /// # Examples
    /// ```
    /// use hangman::core::Guess;
    ///
    /// assert_eq!(Guess::parse(" E "), Ok(Guess::Letter('e')));
    /// assert_eq!(Guess::parse("EXIT"), Ok(Guess::Quit));
    /// assert!(Guess::parse("ab").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, GuessError> {
        if is_quit_token(input) {
            return Ok(Self::Quit);
        }

        let mut chars = input.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_alphabetic() => Ok(Self::Letter(c.to_ascii_lowercase())),
            (Some(_), None) => Err(GuessError::NotALetter),
            _ => Err(GuessError::NotSingleCharacter),
        }
    }
}
