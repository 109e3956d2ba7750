//! Screen rendering
//!
//! Every function here turns engine or account state into text. Nothing is
//! printed and nothing is decided; the shell writes the strings out.

use super::art::{
    BEGINNER_WIN, CORRECT, DIFFICULTY_BANNER, INCORRECT, INTERMEDIATE_WIN, LOSE_BANNER,
    PROFESSIONAL_WIN, REPEATED, TARGET, THINKING, WELCOME_BANNER,
};
use super::formatters::{
    gallows_stage, hearts, hint_range, length_range, letter_list, level_emoji, plural,
};
use crate::accounts::Account;
use crate::core::Difficulty;
use crate::engine::{Feedback, Round, StatsUpdate, Status};
use colored::Colorize;
use std::fmt::Write;

const RULE_WIDTH: usize = 50;

fn rule() -> String {
    "─".repeat(RULE_WIDTH)
}

/// Opening screen shown before the name prompt
#[must_use]
pub fn render_welcome() -> String {
    format!(
        "{}\n\nGuess the secret word one letter at a time before the gallows fill up.\nType 'quit' or 'exit' at any prompt to leave.\n",
        WELCOME_BANNER.bright_cyan().bold()
    )
}

/// Main menu, greeting the player and showing who is signed in
#[must_use]
pub fn render_main_menu(player_name: &str, signed_in: Option<&str>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n👋 Hello, {}!", player_name.bright_yellow().bold());
    if let Some(username) = signed_in {
        let _ = writeln!(out, "🔐 Signed in as {}", username.green());
    }
    let _ = writeln!(out, "{}", rule().cyan());
    let _ = writeln!(out, "  1. 🎲 Quick Game (stats not saved)");
    let _ = writeln!(out, "  2. 🔑 Login");
    let _ = writeln!(out, "  3. 📝 Register");
    let _ = writeln!(out, "  4. 🚪 Quit");
    let _ = writeln!(out, "{}", rule().cyan());
    out
}

/// Difficulty menu built from the difficulty table
#[must_use]
pub fn render_difficulty_menu() -> String {
    let mut out = format!("\n{}\n\n", DIFFICULTY_BANNER.bright_magenta().bold());
    for difficulty in Difficulty::ALL {
        let profile = difficulty.profile();
        let (min_hints, max_hints) = (profile.min_hints, profile.max_hints);
        let _ = writeln!(
            out,
            "  {}. {} {:<13} {} letters, {} attempts, {} hint{}",
            difficulty.menu_number(),
            level_emoji(difficulty),
            difficulty.name().bold(),
            length_range(profile.word_lengths),
            profile.max_attempts,
            hint_range(min_hints, max_hints),
            plural(max_hints),
        );
    }
    out
}

/// Stats panel for a signed-in player
#[must_use]
pub fn render_stats(username: &str, account: &Account) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", rule().blue());
    let _ = writeln!(out, "📊 Stats for {}", username.bright_yellow().bold());
    let _ = writeln!(out, "   Games played: {}", account.plays);
    let _ = writeln!(out, "   Wins:         {}", account.wins.to_string().green());
    let _ = writeln!(out, "   Losses:       {}", account.losses.to_string().red());
    let _ = writeln!(out, "   Win rate:     {:.1}%", account.win_rate());
    let _ = writeln!(out, "{}", rule().blue());
    out
}

/// Summary shown once a round has been set up
#[must_use]
pub fn render_briefing(round: &Round) -> String {
    let difficulty = round.difficulty();
    let hints = round.mask().len() - round.mask().blanks();
    format!(
        "\n{} Starting {} level!\n   Word length: {} letters\n   You have {} attempts\n   {} letter{} revealed as hint{}\n",
        level_emoji(difficulty),
        difficulty.name().to_uppercase().bold(),
        round.secret().len(),
        round.attempts_max(),
        hints,
        plural(hints),
        plural(hints),
    )
}

/// Annotation for the previous guess
#[must_use]
pub fn render_feedback(letter: char, feedback: Feedback) -> String {
    let letter = letter.to_ascii_uppercase();
    match feedback {
        Feedback::Correct => format!("{CORRECT} Good guess! '{letter}' is in the word.")
            .green()
            .to_string(),
        Feedback::Incorrect => format!("{INCORRECT} Sorry, '{letter}' doesn't reveal anything.")
            .red()
            .to_string(),
        Feedback::AlreadyGuessed => format!("{REPEATED} You already guessed '{letter}'.")
            .yellow()
            .to_string(),
    }
}

/// Game board: gallows, hearts, last guess, letter lists and the masked word
///
/// `player` adds the signed-in player's running stats to the header.
#[must_use]
pub fn render_round(round: &Round, player: Option<(&str, &Account)>) -> String {
    let difficulty = round.difficulty();
    let mut out = String::new();

    let _ = write!(
        out,
        "{} {} level",
        level_emoji(difficulty),
        difficulty.name().bold()
    );
    if let Some((username, account)) = player {
        let _ = write!(
            out,
            "  |  {} ({}W / {}L)",
            username.bright_yellow(),
            account.wins,
            account.losses
        );
    }
    out.push('\n');

    let _ = writeln!(
        out,
        "{}",
        gallows_stage(round.attempts_used(), round.attempts_max())
    );
    let _ = writeln!(out, "\n{}", hearts(round.attempts_left()));

    if let Some((letter, feedback)) = round.last_guess() {
        let _ = writeln!(out, "{}", render_feedback(letter, feedback));
    }

    let _ = writeln!(
        out,
        "{CORRECT} Correct letters:   {}",
        letter_list(round.correct_letters()).green()
    );
    let _ = writeln!(
        out,
        "{INCORRECT} Incorrect letters: {}",
        letter_list(round.incorrect_letters()).red()
    );
    let _ = writeln!(
        out,
        "\n{TARGET} Word: {}\n",
        round.mask().to_display_string().bright_white().bold()
    );
    out
}

/// End screen for a finished round; empty while the round is still running
#[must_use]
pub fn render_outcome(round: &Round) -> String {
    let word = round.secret().text().to_uppercase();
    match round.status() {
        Status::Won => {
            let banner = match round.difficulty() {
                Difficulty::Beginner => BEGINNER_WIN,
                Difficulty::Intermediate => INTERMEDIATE_WIN,
                Difficulty::Professional => PROFESSIONAL_WIN,
            };
            let guesses = round.guessed_letters().len();
            format!(
                "\n{}\n\n{TARGET} The word was: {}\n   Completed in {guesses} guess{} with {} attempt{} to spare\n",
                banner.green().bold(),
                word.bright_yellow().bold(),
                if guesses == 1 { "" } else { "es" },
                round.attempts_left(),
                plural(round.attempts_left() as usize),
            )
        }
        Status::Lost => format!(
            "{}\n\n{}\n\n{TARGET} The word was: {}\n",
            gallows_stage(round.attempts_used(), round.attempts_max()),
            LOSE_BANNER.red().bold(),
            word.bright_yellow().bold(),
        ),
        Status::Aborted => format!(
            "\n{THINKING} Round abandoned. The word was: {}\n",
            word.bright_yellow()
        ),
        Status::InProgress => String::new(),
    }
}

/// Report on whether a finished round reached the account file
#[must_use]
pub fn render_stats_update(update: &StatsUpdate) -> String {
    match update {
        StatsUpdate::Saved => "💾 Stats saved.".green().to_string(),
        StatsUpdate::NotTracked => "ℹ️  Quick game: stats are not tracked."
            .dimmed()
            .to_string(),
        StatsUpdate::Failed(reason) => format!("⚠️  Could not save stats: {reason}")
            .yellow()
            .to_string(),
    }
}
