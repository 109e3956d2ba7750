//! Hangman game engine
//!
//! [`Round`] holds the state of one round and its guess transitions;
//! [`Game`] drives the round lifecycle and reports results through the
//! [`OutcomeRecorder`] seam.

mod game;
mod recorder;
mod round;

pub use game::{Game, GameError, Turn};
pub use recorder::{OutcomeRecorder, StatsUpdate, Untracked};
pub use round::{Feedback, Round, RoundError, Status};
