//! Round and game behaviour driven through the public API.

use hangman::core::{Difficulty, Guess, SecretWord};
use hangman::engine::{Feedback, Game, Round, Status, Untracked};
use hangman::words::{
    FALLBACK_WORDS, FallbackWordSource, LocalWords, LookupError, RemoteLookup, WordSource,
    WordSourceError,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Hands out the same word whatever length is requested
struct FixedWord(&'static str);

impl WordSource for FixedWord {
    fn fetch(&mut self, _length: usize) -> Result<SecretWord, WordSourceError> {
        Ok(SecretWord::new(self.0).unwrap())
    }
}

/// A word service that is always down
struct Unreachable;

impl RemoteLookup for Unreachable {
    fn lookup(&self, _length: usize) -> Result<String, LookupError> {
        Err(LookupError::Empty)
    }
}

#[test]
fn apple_is_won_without_spending_attempts() {
    for seed in 0..20 {
        let mut game = Game::with_rng(FixedWord("apple"), StdRng::seed_from_u64(seed));
        let round = game.start(Difficulty::Beginner).unwrap();
        assert_eq!(round.mask().len(), 5);
        assert_eq!(round.mask().blanks(), 2, "exactly 3 of 5 positions hinted");

        for letter in ['a', 'p', 'l', 'e'] {
            let round = game.round().unwrap();
            if round.status().is_finished() {
                break;
            }
            let has_blank = round
                .secret()
                .positions_of(letter)
                .iter()
                .any(|&p| round.mask().is_blank(p));
            if has_blank {
                let turn = game.play(Guess::Letter(letter), Untracked).unwrap();
                assert_eq!(turn.feedback, Some(Feedback::Correct));
            }
        }

        let round = game.round().unwrap();
        assert_eq!(round.status(), Status::Won);
        assert_eq!(round.attempts_used(), 0);
    }
}

#[test]
fn book_repeated_miss_counts_once() {
    let secret = SecretWord::new("book").unwrap();
    let mut round = Round::with_hints(secret, Difficulty::Beginner, 6, &[]);

    assert_eq!(round.guess('z'), Ok(Feedback::Incorrect));
    assert_eq!(round.attempts_used(), 1);
    for _ in 0..5 {
        assert_eq!(round.guess('z'), Ok(Feedback::AlreadyGuessed));
    }
    assert_eq!(round.attempts_used(), 1);
    assert_eq!(round.incorrect_letters().iter().filter(|&&c| c == 'z').count(), 1);
    assert_eq!(round.status(), Status::InProgress);

    for letter in ['q', 'r', 's', 't'] {
        round.guess(letter).unwrap();
        assert_eq!(round.status(), Status::InProgress);
    }
    round.guess('u').unwrap();
    assert_eq!(round.attempts_used(), 6);
    assert_eq!(round.status(), Status::Lost);
}

#[test]
fn random_play_respects_terminal_invariants() {
    let mut alphabet: Vec<char> = ('a'..='z').collect();

    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let source = FallbackWordSource::with_rng(
            Unreachable,
            LocalWords::embedded(),
            StdRng::seed_from_u64(seed),
        );
        let mut game = Game::with_rng(source, StdRng::seed_from_u64(seed ^ 0xfeed));
        let difficulty = Difficulty::ALL[(seed % 3) as usize];
        game.start(difficulty).unwrap();

        alphabet.shuffle(&mut rng);
        // Guess every letter twice so repeats are exercised too
        for &letter in alphabet.iter().chain(alphabet.iter()) {
            let round = game.round().unwrap();
            if round.status().is_finished() {
                break;
            }
            let before = round.attempts_used();
            let repeat = round.guessed_letters().contains(&letter);

            let turn = game.play(Guess::Letter(letter), Untracked).unwrap();
            let round = game.round().unwrap();
            if repeat {
                assert_eq!(turn.feedback, Some(Feedback::AlreadyGuessed));
                assert_eq!(round.attempts_used(), before);
            }
            assert!(round.attempts_used() <= round.attempts_max());
        }

        let round = game.round().unwrap();
        match round.status() {
            Status::Won => {
                assert!(round.mask().is_complete());
                assert!(round.attempts_used() <= round.attempts_max());
            }
            Status::Lost => {
                assert_eq!(round.attempts_used(), round.attempts_max());
                assert!(round.mask().blanks() > 0);
            }
            other => panic!("round left unfinished: {other:?}"),
        }

        for (position, slot) in round.mask().slots().enumerate() {
            if let Some(c) = slot {
                assert_eq!(c, round.secret().char_at(position));
            }
        }
        for &c in round.correct_letters() {
            assert!(round.secret().has_letter(c));
        }
    }
}

#[test]
fn fallback_only_yields_requested_length() {
    let mut source =
        FallbackWordSource::with_rng(Unreachable, LocalWords::embedded(), StdRng::seed_from_u64(5));

    for length in (4..=7).chain(10..=14) {
        for _ in 0..25 {
            let word = source.fetch(length).unwrap();
            assert_eq!(word.len(), length);
            assert!(FALLBACK_WORDS.contains(&word.text()));
        }
    }
    for length in [8, 9] {
        assert_eq!(
            source.fetch(length).unwrap_err(),
            WordSourceError::NoWordsForLength(length)
        );
    }
    for length in [0, 3, 15] {
        assert_eq!(
            source.fetch(length).unwrap_err(),
            WordSourceError::InvalidLength(length)
        );
    }
}
