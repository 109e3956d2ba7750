//! Round loop: difficulty selection, guessing, end screen, play again

use super::prompt::Prompter;
use super::session::Session;
use crate::core::{Difficulty, Guess};
use crate::engine::{Game, Status};
use crate::output::art::THINKING;
use crate::output::{
    render_briefing, render_difficulty_menu, render_outcome, render_round, render_stats,
    render_stats_update,
};
use crate::words::WordSource;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::warn;

/// Play rounds until the player declines another or quits mid-round
///
/// # Errors
/// Returns an error only if the terminal fails.
pub fn play_rounds<R, W, S, G>(
    prompter: &mut Prompter<R, W>,
    session: &mut Session,
    game: &mut Game<S, G>,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    S: WordSource,
    G: Rng,
{
    if session.current().is_some() {
        prompter.say("🏆 Your progress will be tracked!")?;
    } else {
        prompter.say("🔒 Login to track your progress and statistics!")?;
    }
    if !prompter.pause("Press Enter to start your adventure...")? {
        return Ok(());
    }

    loop {
        prompter.clear()?;
        let Some(difficulty) = choose_difficulty(prompter, session)? else {
            return Ok(());
        };

        game.reset();
        match game.start(difficulty) {
            Ok(round) => prompter.say(render_briefing(round))?,
            Err(e) => {
                warn!(error = %e, "could not start round");
                prompter.say(format!("❌ Could not start the game: {e}").red())?;
                return Ok(());
            }
        }
        prompter.say("💡 Tip: Type 'quit' or 'exit' anytime to quit the game")?;
        if !prompter.pause("Press Enter to begin...")? {
            game.reset();
            prompter.say("🚪 Back to the main menu.")?;
            return Ok(());
        }

        if guess_loop(prompter, session, game)? == Status::Aborted {
            prompter.say("🚪 Back to the main menu.")?;
            return Ok(());
        }
        if !play_again(prompter)? {
            return Ok(());
        }
    }
}

fn choose_difficulty<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    session: &Session,
) -> Result<Option<Difficulty>> {
    prompter.say(render_difficulty_menu())?;
    if let Some((username, account)) = session.current() {
        prompter.say(render_stats(username, account))?;
    }

    loop {
        let Some(choice) = prompter.ask("Enter your choice (1-3)")? else {
            return Ok(None);
        };
        match Difficulty::from_menu_choice(&choice) {
            Some(difficulty) => return Ok(Some(difficulty)),
            None => prompter.say("Invalid choice. Please enter 1, 2, or 3.".red())?,
        }
    }
}

/// Run the guess prompt until the round ends; returns how it ended
fn guess_loop<R, W, S, G>(
    prompter: &mut Prompter<R, W>,
    session: &mut Session,
    game: &mut Game<S, G>,
) -> Result<Status>
where
    R: BufRead,
    W: Write,
    S: WordSource,
    G: Rng,
{
    let mut notice: Option<String> = None;

    loop {
        let Some(round) = game.round() else {
            return Ok(Status::Aborted);
        };
        prompter.clear()?;
        prompter.say(render_round(round, session.current()))?;
        if let Some(notice) = notice.take() {
            prompter.say(notice)?;
        }

        let guess = match prompter
            .get_user_input(&format!("{THINKING} Guess a letter (or type 'quit'/'exit' to quit)"))?
        {
            None => Guess::Quit,
            Some(line) => match Guess::parse(&line) {
                Ok(guess) => guess,
                Err(e) => {
                    notice = Some(format!("⚠️  {e}").yellow().to_string());
                    continue;
                }
            },
        };

        let turn = game.play(guess, &mut *session)?;
        if !turn.status.is_finished() {
            continue;
        }

        let Some(round) = game.round() else {
            return Ok(turn.status);
        };
        prompter.clear()?;
        prompter.say(render_outcome(round))?;
        if let Some(update) = &turn.stats {
            prompter.say(render_stats_update(update))?;
        }
        if turn.status != Status::Aborted {
            if let Some((username, account)) = session.current() {
                prompter.say(render_stats(username, account))?;
            }
        }
        return Ok(turn.status);
    }
}

fn play_again<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<bool> {
    loop {
        let Some(answer) = prompter.ask("\n🎮 Do you want to play again? (y/n)")? else {
            return Ok(false);
        };
        match answer.to_lowercase().as_str() {
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => prompter.say("Please enter 'y' or 'n'.".red())?,
        }
    }
}
