//! Hangman
//!
//! A terminal hangman game with three difficulty levels, remote word lookup
//! with an embedded fallback table, and optional accounts that keep win/loss
//! statistics in a JSON file.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{Difficulty, Guess, SecretWord};
//! use hangman::engine::{Feedback, Round, Status};
//!
//! let secret = SecretWord::new("apple").unwrap();
//! let mut round = Round::with_hints(secret, Difficulty::Beginner, 6, &[0, 1, 4]);
//! assert_eq!(round.mask().to_display_string(), "A P _ _ E");
//!
//! assert_eq!(round.guess('l'), Ok(Feedback::Correct));
//! assert_eq!(round.guess('p'), Ok(Feedback::Correct));
//! assert_eq!(round.status(), Status::Won);
//! assert_eq!(Guess::parse("quit"), Ok(Guess::Quit));
//! ```

// Core domain types
pub mod core;

// Secret word sources
pub mod words;

// Round state machine
pub mod engine;

// Persisted player accounts
pub mod accounts;

// Terminal output formatting
pub mod output;

// Interactive menus and prompts
pub mod shell;
