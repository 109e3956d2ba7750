//! Login and registration screens
//!
//! Both loop until they succeed or the player types the quit token, which
//! returns `false` so the caller can go back to the main menu.

use super::prompt::Prompter;
use super::session::Session;
use crate::accounts::{AuthError, MIN_PASSWORD_LENGTH, generate_password, validate_password};
use crate::output::render_stats;
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Ask for credentials until they check out, then bind the account
///
/// # Errors
/// Returns an error only if the terminal fails.
pub fn login<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    session: &mut Session,
) -> Result<bool> {
    prompter.say("\n==== 🔑 LOGIN ====".bright_cyan().bold())?;

    loop {
        let Some(username) = prompter.ask("Enter username (or 'quit'/'exit' to return)")? else {
            return Ok(false);
        };
        if username.is_empty() {
            prompter.say(AuthError::EmptyUsername.to_string().red())?;
            continue;
        }
        if !session.store().exists(&username) {
            prompter.say(AuthError::UnknownUser(username).to_string().red())?;
            continue;
        }

        let Some(password) = prompter.ask("Enter password")? else {
            return Ok(false);
        };

        match session.store().login(&username, &password) {
            Ok(account) => {
                prompter.say(format!("\n✅ Login successful! Welcome back, {username}!").green())?;
                prompter.say(render_stats(&username, &account))?;
                session.bind(username, account);
                return Ok(true);
            }
            Err(e) => prompter.say(format!("{e} Please try again.").red())?,
        }
    }
}

/// Create an account, choosing or generating a password, then bind it
///
/// # Errors
/// Returns an error only if the terminal fails.
pub fn register<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    session: &mut Session,
) -> Result<bool> {
    prompter.say("\n==== 📝 REGISTRATION ====".bright_cyan().bold())?;

    loop {
        let Some(username) = prompter.ask("Enter username (or 'quit'/'exit' to return)")? else {
            return Ok(false);
        };
        if username.is_empty() {
            prompter.say(AuthError::EmptyUsername.to_string().red())?;
            continue;
        }
        if session.store().exists(&username) {
            prompter.say(AuthError::UsernameTaken(username).to_string().red())?;
            continue;
        }

        let Some(password) = choose_password(prompter)? else {
            return Ok(false);
        };

        match session.store().register(&username, &password) {
            Ok(account) => {
                prompter.say(
                    format!("\n🎉 Registration successful! Welcome, {username}!").green(),
                )?;
                prompter.say(render_stats(&username, &account))?;
                session.bind(username, account);
                return Ok(true);
            }
            Err(e) => prompter.say(format!("❌ {e}").red())?,
        }
    }
}

fn choose_password<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<Option<String>> {
    prompter.say("\nPassword Options:")?;
    prompter.say("  1. Auto-generate password")?;
    prompter.say(format!(
        "  2. Enter password manually (minimum {MIN_PASSWORD_LENGTH} characters, 1 uppercase, 1 number)"
    ))?;

    loop {
        let Some(choice) = prompter.ask("Choose option (1 or 2)")? else {
            return Ok(None);
        };
        match choice.as_str() {
            "1" => {
                let password = generate_password(&mut rand::rng(), MIN_PASSWORD_LENGTH);
                prompter.say(format!(
                    "🔐 Your auto-generated password is: {}",
                    password.bright_yellow().bold()
                ))?;
                prompter.say("Please save this password somewhere safe!")?;
                return Ok(Some(password));
            }
            "2" => return enter_password(prompter),
            _ => prompter.say("Invalid choice. Please enter 1 or 2.".red())?,
        }
    }
}

fn enter_password<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<Option<String>> {
    loop {
        let Some(password) = prompter.ask(&format!(
            "Enter your password (min {MIN_PASSWORD_LENGTH} chars, 1 uppercase, 1 number)"
        ))?
        else {
            return Ok(None);
        };
        match validate_password(&password) {
            Ok(()) => {
                prompter.say("✅ Password accepted!".green())?;
                return Ok(Some(password));
            }
            Err(e) => prompter.say(format!("⚠️  {e} Please try again.").yellow())?,
        }
    }
}
