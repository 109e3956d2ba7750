//! Hangman - CLI
//!
//! Interactive hangman with optional accounts and persistent statistics.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use hangman::accounts::{AccountStore, DEFAULT_ACCOUNTS_FILE};
use hangman::output::render_stats;
use hangman::shell::{ShellConfig, run_terminal};
use hangman::words::remote::DEFAULT_ENDPOINT;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "The ultimate hangman challenge, in your terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Account file location
    #[arg(short, long, global = true, default_value = DEFAULT_ACCOUNTS_FILE)]
    accounts: PathBuf,

    /// Remote word service URL
    #[arg(long, global = true, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Seconds to wait for the word service before using the built-in words
    #[arg(short, long, global = true, default_value = "7")]
    timeout: u64,

    /// Never contact the word service
    #[arg(long, global = true)]
    offline: bool,

    /// Don't clear the screen between frames
    #[arg(long, global = true)]
    no_clear: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the interactive game (default)
    Play,

    /// Show the saved statistics for an account
    Stats {
        /// Account to show
        username: String,
    },
}

impl Cli {
    fn shell_config(&self) -> ShellConfig {
        ShellConfig {
            accounts: self.accounts.clone(),
            endpoint: self.endpoint.clone(),
            timeout: Duration::from_secs(self.timeout),
            offline: self.offline,
            clear_screen: !self.no_clear,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = cli.shell_config();

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_terminal(&config).context("terminal session failed"),
        Commands::Stats { username } => run_stats_command(&config, &username),
    }
}

fn run_stats_command(config: &ShellConfig, username: &str) -> Result<()> {
    let store = AccountStore::new(&config.accounts);
    let Some(account) = store.get(username) else {
        bail!(
            "user '{username}' not found in {}",
            store.path().display()
        );
    };
    print!("{}", render_stats(username, &account));
    Ok(())
}
