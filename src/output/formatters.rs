//! Formatting utilities for terminal output

use super::art::{GALLOWS, HEART};
use crate::core::Difficulty;
use std::collections::BTreeSet;

/// Pick the gallows drawing for the attempts spent so far
///
/// Scaled so the full figure appears exactly when the budget runs out,
/// whatever the budget is.
#[must_use]
pub fn gallows_stage(attempts_used: u32, attempts_max: u32) -> &'static str {
    let last = GALLOWS.len() - 1;
    if attempts_max == 0 {
        return GALLOWS[last];
    }
    let used = attempts_used.min(attempts_max) as usize;
    GALLOWS[used * last / attempts_max as usize]
}

/// `Attempts Left: 3 💖💖💖`
#[must_use]
pub fn hearts(attempts_left: u32) -> String {
    format!(
        "Attempts Left: {attempts_left} {}",
        HEART.repeat(attempts_left as usize)
    )
}

/// Sorted uppercase letters separated by spaces, e.g. `A E P`
#[must_use]
pub fn letter_list(letters: &BTreeSet<char>) -> String {
    letters
        .iter()
        .map(|c| c.to_ascii_uppercase().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Emoji badge shown next to a difficulty name
#[must_use]
pub const fn level_emoji(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Beginner => "🌱",
        Difficulty::Intermediate => "🔥",
        Difficulty::Professional => "💀",
    }
}

/// Word-length summary for menus, e.g. `5-7` or `13-14`
#[must_use]
pub fn length_range(lengths: &[usize]) -> String {
    match (lengths.iter().min(), lengths.iter().max()) {
        (Some(min), Some(max)) if min == max => min.to_string(),
        (Some(min), Some(max)) => format!("{min}-{max}"),
        _ => String::from("?"),
    }
}

/// Hint-count summary, e.g. `3` or `0-1`
#[must_use]
pub fn hint_range(min: usize, max: usize) -> String {
    if min == max {
        min.to_string()
    } else {
        format!("{min}-{max}")
    }
}

/// `s` for anything but one
#[must_use]
pub const fn plural(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}
