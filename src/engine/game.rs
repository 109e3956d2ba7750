//! Round lifecycle driver
//!
//! `Game` moves through `Setup -> InProgress -> {Won, Lost, Aborted}` and back
//! to `Setup` on reset. It fetches the secret word, applies guesses and
//! reports wins and losses to an [`OutcomeRecorder`] exactly once per round.

use super::recorder::{OutcomeRecorder, StatsUpdate};
use super::round::{Feedback, Round, RoundError, Status};
use crate::core::{Difficulty, Guess};
use crate::words::{WordSource, WordSourceError};
use rand::Rng;
use rand::rngs::ThreadRng;
use thiserror::Error;
use tracing::{debug, info};

/// Errors from driving the round lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("no round has been started")]
    NotStarted,
    #[error("a round is already in progress")]
    RoundInProgress,
    #[error(transparent)]
    RoundOver(#[from] RoundError),
    #[error("could not pick a word: {0}")]
    Words(#[from] WordSourceError),
}

/// Result of one entry at the guess prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    /// `None` when the player quit
    pub feedback: Option<Feedback>,
    /// Round status after the entry
    pub status: Status,
    /// Set on the entry that ended the round in a win or loss
    pub stats: Option<StatsUpdate>,
}

/// Hangman game engine
pub struct Game<W: WordSource, R: Rng = ThreadRng> {
    words: W,
    rng: R,
    round: Option<Round>,
}

impl<W: WordSource> Game<W> {
    /// Create an engine drawing words from `words`
    #[must_use]
    pub fn new(words: W) -> Self {
        Self::with_rng(words, rand::rng())
    }
}

impl<W: WordSource, R: Rng> Game<W, R> {
    /// Create an engine with an explicit random generator
    pub const fn with_rng(words: W, rng: R) -> Self {
        Self {
            words,
            rng,
            round: None,
        }
    }

    /// Leave `Setup`: pick a word length for `difficulty`, fetch a word and
    /// reveal the starting hints
    ///
    /// A finished round is replaced; call [`Game::reset`] for clarity anyway.
    ///
    /// # Errors
    /// - `GameError::RoundInProgress` if the current round hasn't ended
    /// - `GameError::Words` if no word could be supplied
    pub fn start(&mut self, difficulty: Difficulty) -> Result<&Round, GameError> {
        if self
            .round
            .as_ref()
            .is_some_and(|round| !round.status().is_finished())
        {
            return Err(GameError::RoundInProgress);
        }

        let lengths = difficulty.profile().word_lengths;
        let length = lengths[self.rng.random_range(0..lengths.len())];
        let secret = self.words.fetch(length)?;

        let round = Round::new(secret, difficulty, &mut self.rng);
        info!(
            %difficulty,
            length,
            hints = round.mask().len() - round.mask().blanks(),
            "round started"
        );
        Ok(self.round.insert(round))
    }

    /// Apply one validated entry from the guess prompt
    ///
    /// Quitting aborts the round without consuming an attempt. When a guess
    /// ends the round in a win or a loss, `recorder` is told about it.
    ///
    /// # Errors
    /// - `GameError::NotStarted` before [`Game::start`]
    /// - `GameError::RoundOver` once the round has ended
    pub fn play<O: OutcomeRecorder>(
        &mut self,
        guess: Guess,
        mut recorder: O,
    ) -> Result<Turn, GameError> {
        let round = self.round.as_mut().ok_or(GameError::NotStarted)?;

        let feedback = match guess {
            Guess::Quit => {
                if round.status().is_finished() {
                    return Err(RoundError {
                        status: round.status(),
                    }
                    .into());
                }
                round.abort();
                None
            }
            Guess::Letter(letter) => Some(round.guess(letter)?),
        };

        let status = round.status();
        debug!(?feedback, ?status, attempts_used = round.attempts_used(), "guess applied");

        let stats = match status {
            Status::Won | Status::Lost => {
                let won = status == Status::Won;
                info!(won, attempts_used = round.attempts_used(), "round finished");
                Some(recorder.record(won))
            }
            Status::Aborted => {
                info!("round aborted");
                None
            }
            Status::InProgress => None,
        };

        Ok(Turn {
            feedback,
            status,
            stats,
        })
    }

    /// Drop the current round and return to `Setup`
    pub fn reset(&mut self) {
        self.round = None;
    }

    /// The current round, if one has been started
    #[must_use]
    pub const fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// True while no round has been started since the last reset
    #[must_use]
    pub const fn is_setup(&self) -> bool {
        self.round.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SecretWord;
    use crate::engine::recorder::Untracked;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Always supplies the same word, whatever length is asked for
    struct FixedWord(&'static str);

    impl WordSource for FixedWord {
        fn fetch(&mut self, _length: usize) -> Result<SecretWord, WordSourceError> {
            Ok(SecretWord::new(self.0).unwrap())
        }
    }

    struct NoWords;

    impl WordSource for NoWords {
        fn fetch(&mut self, length: usize) -> Result<SecretWord, WordSourceError> {
            Err(WordSourceError::NoWordsForLength(length))
        }
    }

    #[derive(Default)]
    struct Tally {
        wins: u32,
        losses: u32,
    }

    impl OutcomeRecorder for Tally {
        fn record(&mut self, won: bool) -> StatsUpdate {
            if won {
                self.wins += 1;
            } else {
                self.losses += 1;
            }
            StatsUpdate::Saved
        }
    }

    fn game(word: &'static str) -> Game<FixedWord, StdRng> {
        Game::with_rng(FixedWord(word), StdRng::seed_from_u64(17))
    }

    #[test]
    fn starts_in_setup() {
        let mut game = game("apple");
        assert!(game.is_setup());
        assert_eq!(
            game.play(Guess::Letter('a'), Untracked),
            Err(GameError::NotStarted)
        );
    }

    #[test]
    fn start_reveals_hints() {
        let mut game = game("apple");
        let round = game.start(Difficulty::Beginner).unwrap();
        assert_eq!(round.mask().blanks(), 2);
        assert_eq!(round.status(), Status::InProgress);
        assert!(!game.is_setup());
    }

    #[test]
    fn cannot_start_twice() {
        let mut game = game("apple");
        game.start(Difficulty::Beginner).unwrap();
        assert_eq!(
            game.start(Difficulty::Beginner).unwrap_err(),
            GameError::RoundInProgress
        );
    }

    #[test]
    fn word_source_errors_surface() {
        let mut game = Game::with_rng(NoWords, StdRng::seed_from_u64(1));
        assert!(matches!(
            game.start(Difficulty::Professional),
            Err(GameError::Words(WordSourceError::NoWordsForLength(13 | 14)))
        ));
        assert!(game.is_setup());
    }

    #[test]
    fn win_is_recorded_once() {
        let mut game = game("book");
        game.start(Difficulty::Intermediate).unwrap();
        let mut tally = Tally::default();

        let mut last = None;
        for letter in ['b', 'o', 'k'] {
            if game.round().unwrap().status().is_finished() {
                break;
            }
            last = Some(game.play(Guess::Letter(letter), &mut tally).unwrap());
        }

        let last = last.unwrap();
        assert_eq!(last.status, Status::Won);
        assert_eq!(last.stats, Some(StatsUpdate::Saved));
        assert_eq!(tally.wins, 1);
        assert_eq!(tally.losses, 0);

        assert!(game.play(Guess::Letter('z'), &mut tally).is_err());
        assert_eq!(tally.wins, 1);
    }

    #[test]
    fn loss_is_recorded() {
        let mut game = game("book");
        game.start(Difficulty::Professional).unwrap();
        let mut tally = Tally::default();

        for letter in ['v', 'w', 'x'] {
            let turn = game.play(Guess::Letter(letter), &mut tally).unwrap();
            assert_eq!(turn.status, Status::InProgress);
            assert_eq!(turn.stats, None);
        }
        let turn = game.play(Guess::Letter('z'), &mut tally).unwrap();
        assert_eq!(turn.status, Status::Lost);
        assert_eq!(tally.losses, 1);
    }

    #[test]
    fn quit_aborts_without_recording() {
        let mut game = game("book");
        game.start(Difficulty::Beginner).unwrap();
        let mut tally = Tally::default();

        let turn = game.play(Guess::Quit, &mut tally).unwrap();
        assert_eq!(turn.status, Status::Aborted);
        assert_eq!(turn.feedback, None);
        assert_eq!(turn.stats, None);
        assert_eq!(tally.wins + tally.losses, 0);
        assert_eq!(game.round().unwrap().attempts_used(), 0);
    }

    #[test]
    fn untracked_play_reports_not_tracked() {
        let mut game = game("book");
        game.start(Difficulty::Professional).unwrap();
        let mut turn = None;
        for letter in ['v', 'w', 'x', 'z'] {
            turn = Some(game.play(Guess::Letter(letter), Untracked).unwrap());
        }
        assert_eq!(turn.unwrap().stats, Some(StatsUpdate::NotTracked));
    }

    #[test]
    fn reset_returns_to_setup() {
        let mut game = game("book");
        game.start(Difficulty::Beginner).unwrap();
        game.play(Guess::Quit, Untracked).unwrap();
        game.reset();
        assert!(game.is_setup());
        assert!(game.round().is_none());

        let round = game.start(Difficulty::Beginner).unwrap();
        assert!(round.guessed_letters().is_empty());
        assert_eq!(round.attempts_used(), 0);
    }
}
