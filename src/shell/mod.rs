//! Interactive terminal shell
//!
//! Welcome screen, main menu, account screens and the round loop. The shell
//! is generic over its reader and writer so it can run against stdin/stdout
//! or a script.

pub mod auth;
pub mod play;
pub mod prompt;
pub mod session;
pub mod spinner;

pub use prompt::Prompter;
pub use session::{Session, title_case};
pub use spinner::SpinnerLookup;

use crate::accounts::{AccountStore, DEFAULT_ACCOUNTS_FILE};
use crate::engine::Game;
use crate::output::{render_main_menu, render_welcome};
use crate::words::remote::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
use crate::words::{FallbackWordSource, HttpLookup, Offline, RemoteLookup, WordSource};
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use rand::rngs::ThreadRng;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

/// Settings for a terminal session
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Account file location
    pub accounts: PathBuf,
    /// Remote word service URL
    pub endpoint: String,
    /// Upper bound on one remote lookup
    pub timeout: Duration,
    /// Skip the remote lookup and use the embedded table only
    pub offline: bool,
    /// Clear the screen between frames
    pub clear_screen: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            accounts: PathBuf::from(DEFAULT_ACCOUNTS_FILE),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
            offline: false,
            clear_screen: true,
        }
    }
}

/// Run the game on the process's own terminal
///
/// # Errors
/// Returns an error if stdin or stdout becomes unusable.
pub fn run_terminal(config: &ShellConfig) -> Result<()> {
    if config.offline {
        launch(config, Offline)
    } else {
        let lookup = HttpLookup::new(config.endpoint.clone(), config.timeout);
        launch(config, SpinnerLookup::new(lookup))
    }
}

fn launch<L: RemoteLookup>(config: &ShellConfig, remote: L) -> Result<()> {
    info!(
        accounts = %config.accounts.display(),
        offline = config.offline,
        "starting session"
    );
    let prompter = Prompter::new(io::stdin().lock(), io::stdout().lock(), config.clear_screen);
    let session = Session::new(AccountStore::new(&config.accounts));
    let game = Game::new(FallbackWordSource::new(remote));
    Shell::new(prompter, session, game).run()
}

/// Main menu driver
pub struct Shell<R, W, S: WordSource, G: Rng = ThreadRng> {
    prompter: Prompter<R, W>,
    session: Session,
    game: Game<S, G>,
}

impl<R: BufRead, W: Write, S: WordSource, G: Rng> Shell<R, W, S, G> {
    pub const fn new(prompter: Prompter<R, W>, session: Session, game: Game<S, G>) -> Self {
        Self {
            prompter,
            session,
            game,
        }
    }

    /// Greet the player, then serve the main menu until they quit
    ///
    /// # Errors
    /// Returns an error if the terminal fails.
    pub fn run(&mut self) -> Result<()> {
        self.prompter.clear()?;
        self.prompter.say(render_welcome())?;

        let Some(name) = self.prompter.ask("Enter your name")? else {
            self.prompter.say("Goodbye!")?;
            return Ok(());
        };
        if !name.is_empty() {
            self.session.set_player_name(&name);
        }
        self.prompter.say(
            format!("====== Welcome {} ======", self.session.player_name())
                .bright_green()
                .bold(),
        )?;

        loop {
            let signed_in = self.session.current().map(|(username, _)| username);
            self.prompter
                .say(render_main_menu(self.session.player_name(), signed_in))?;

            let Some(choice) = self.prompter.ask("Enter your choice (1-4)")? else {
                return self.farewell();
            };

            let ready = match choice.as_str() {
                "1" => {
                    self.session.unbind();
                    true
                }
                "2" => auth::login(&mut self.prompter, &mut self.session)?,
                "3" => auth::register(&mut self.prompter, &mut self.session)?,
                "4" => return self.farewell(),
                _ => {
                    self.prompter
                        .say("Invalid choice. Please select a valid option (1-4).".red())?;
                    false
                }
            };

            if ready {
                play::play_rounds(&mut self.prompter, &mut self.session, &mut self.game)?;
            }
        }
    }

    fn farewell(&mut self) -> Result<()> {
        if let Some((username, _)) = self.session.current() {
            let line = format!("👋 Goodbye, {username}! Your stats have been saved.");
            self.prompter.say(line)?;
        } else {
            let line = format!("👋 Good bye! {}", self.session.player_name());
            self.prompter.say(line)?;
        }
        self.prompter.say("🎪 See you next time, champion!")
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Tear down the shell and give back the output sink
    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }
}
