//! Difficulty levels and their round settings
//!
//! Each level is a row in a static table: which word lengths it draws from,
//! how many failed guesses the player may make and how many letters are shown
//! before the first guess.

use std::fmt;
use std::ops::RangeInclusive;

/// Round settings for one difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyProfile {
    /// Lengths a secret word is drawn from, picked uniformly
    pub word_lengths: &'static [usize],
    /// Attempts before the round is lost
    pub max_attempts: u32,
    /// Smallest number of letters revealed up front
    pub min_hints: usize,
    /// Largest number of letters revealed up front
    pub max_hints: usize,
}

impl DifficultyProfile {
    /// Hint counts the round may start with
    #[must_use]
    pub const fn hint_range(&self) -> RangeInclusive<usize> {
        self.min_hints..=self.max_hints
    }
}

const BEGINNER: DifficultyProfile = DifficultyProfile {
    word_lengths: &[5, 6, 7],
    max_attempts: 6,
    min_hints: 3,
    max_hints: 3,
};

const INTERMEDIATE: DifficultyProfile = DifficultyProfile {
    word_lengths: &[10, 11, 12],
    max_attempts: 5,
    min_hints: 2,
    max_hints: 2,
};

const PROFESSIONAL: DifficultyProfile = DifficultyProfile {
    word_lengths: &[13, 14],
    max_attempts: 4,
    min_hints: 0,
    max_hints: 1,
};

/// Difficulty chosen at the start of every round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Professional,
}

impl Difficulty {
    /// All levels in menu order
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Professional];

    /// Settings table row for this level
    #[must_use]
    pub const fn profile(self) -> &'static DifficultyProfile {
        match self {
            Self::Beginner => &BEGINNER,
            Self::Intermediate => &INTERMEDIATE,
            Self::Professional => &PROFESSIONAL,
        }
    }

    /// Parse a menu choice ("1".."3")
    #[must_use]
    pub fn from_menu_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(Self::Beginner),
            "2" => Some(Self::Intermediate),
            "3" => Some(Self::Professional),
            _ => None,
        }
    }

    /// Position in the difficulty menu (1-based)
    #[must_use]
    pub const fn menu_number(self) -> usize {
        match self {
            Self::Beginner => 1,
            Self::Intermediate => 2,
            Self::Professional => 3,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Professional => "professional",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
