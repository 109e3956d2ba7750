//! File-backed account storage
//!
//! All accounts live in one JSON object keyed by username. Every write
//! rewrites the whole file. There is no locking: two processes sharing a file
//! can overwrite each other's updates.

use super::password::{PasswordError, validate_password};
use super::record::Account;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Default account file, relative to the working directory
pub const DEFAULT_ACCOUNTS_FILE: &str = "users.json";

/// All accounts keyed by username
pub type Accounts = BTreeMap<String, Account>;

/// Persistence failures
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("user '{0}' not found")]
    NotFound(String),
    #[error("could not write {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },
    #[error("could not encode accounts: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Registration and login failures
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Username cannot be empty.")]
    EmptyUsername,
    #[error("Username '{0}' already exists. Please choose a different username.")]
    UsernameTaken(String),
    #[error("Username '{0}' not found. Please check your username or register first.")]
    UnknownUser(String),
    #[error("Invalid password.")]
    WrongPassword,
    #[error(transparent)]
    WeakPassword(#[from] PasswordError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Parse account-file contents, never failing
///
/// A document that isn't a JSON object yields no accounts. Entries whose value
/// isn't an object are skipped; fields inside a record are coerced by
/// [`Account`]'s lenient deserialization.
#[must_use]
pub fn parse_accounts(contents: &str) -> Accounts {
    let document: Value = match serde_json::from_str(contents) {
        Ok(document) => document,
        Err(e) => {
            warn!(error = %e, "account file is not valid JSON, starting empty");
            return Accounts::new();
        }
    };

    let Value::Object(entries) = document else {
        warn!("account file is not a JSON object, starting empty");
        return Accounts::new();
    };

    entries
        .into_iter()
        .filter_map(|(username, value)| {
            if !value.is_object() {
                warn!(%username, "invalid record, skipping (kept in file)");
                return None;
            }
            match serde_json::from_value::<Account>(value) {
                Ok(account) => Some((username, account)),
                Err(e) => {
                    warn!(%username, error = %e, "unreadable record, skipping");
                    None
                }
            }
        })
        .collect()
}

/// Account storage backed by a single JSON file
#[derive(Debug, Clone)]
pub struct AccountStore {
    path: PathBuf,
}

impl AccountStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every account
    ///
    /// A missing file is an empty store. Read or parse problems are logged and
    /// also give an empty store.
    #[must_use]
    pub fn load(&self) -> Accounts {
        match fs::read_to_string(&self.path) {
            Ok(contents) => parse_accounts(&contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no account file yet");
                Accounts::new()
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "could not read account file");
                Accounts::new()
            }
        }
    }

    /// Replace the file with `accounts`
    ///
    /// Entries that [`AccountStore::load`] skipped because they aren't
    /// records are written back unchanged.
    ///
    /// # Errors
    /// Returns `StoreError` if encoding or writing fails.
    pub fn save(&self, accounts: &Accounts) -> Result<(), StoreError> {
        let mut document = self.skipped_entries();
        for (username, account) in accounts {
            document.insert(username.clone(), serde_json::to_value(account)?);
        }
        let json = serde_json::to_string_pretty(&document)?;
        fs::write(&self.path, json).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), count = accounts.len(), "accounts saved");
        Ok(())
    }

    fn skipped_entries(&self) -> Map<String, Value> {
        let Ok(contents) = fs::read_to_string(&self.path) else {
            return Map::new();
        };
        match serde_json::from_str(&contents) {
            Ok(Value::Object(entries)) => entries
                .into_iter()
                .filter(|(_, value)| !value.is_object())
                .collect(),
            _ => Map::new(),
        }
    }

    /// Look up a single account
    #[must_use]
    pub fn get(&self, username: &str) -> Option<Account> {
        self.load().remove(username)
    }

    /// Count one finished round for `username` and persist
    ///
    /// Increments `plays` and exactly one of `wins`/`losses`.
    ///
    /// # Errors
    /// - `StoreError::NotFound` if the user doesn't exist
    /// - `StoreError::Io` / `StoreError::Encode` if saving fails
    pub fn update_stats(&self, username: &str, won: bool) -> Result<Account, StoreError> {
        let mut accounts = self.load();
        let account = accounts
            .get_mut(username)
            .ok_or_else(|| StoreError::NotFound(username.to_string()))?;
        account.record(won);
        let updated = account.clone();

        self.save(&accounts)?;
        info!(%username, won, plays = updated.plays, "stats updated");
        Ok(updated)
    }

    /// Create a new account with zeroed stats
    ///
    /// # Errors
    /// Returns `AuthError` for an empty or taken username, a password that
    /// breaks the policy, or a failed save.
    pub fn register(&self, username: &str, password: &str) -> Result<Account, AuthError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AuthError::EmptyUsername);
        }

        let mut accounts = self.load();
        if accounts.contains_key(username) {
            return Err(AuthError::UsernameTaken(username.to_string()));
        }
        validate_password(password)?;

        let account = Account::new(password);
        accounts.insert(username.to_string(), account.clone());
        self.save(&accounts)?;

        info!(%username, "account registered");
        Ok(account)
    }

    /// Check credentials and return the stored account
    ///
    /// # Errors
    /// Returns `AuthError::UnknownUser` or `AuthError::WrongPassword`.
    pub fn login(&self, username: &str, password: &str) -> Result<Account, AuthError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AuthError::EmptyUsername);
        }

        let account = self
            .get(username)
            .ok_or_else(|| AuthError::UnknownUser(username.to_string()))?;

        if !account.password_matches(password) {
            info!(%username, "failed login");
            return Err(AuthError::WrongPassword);
        }

        info!(%username, "logged in");
        Ok(account)
    }

    /// Check whether `username` is registered
    #[must_use]
    pub fn exists(&self, username: &str) -> bool {
        self.load().contains_key(username.trim())
    }
}

impl Default for AccountStore {
    fn default() -> Self {
        Self::new(DEFAULT_ACCOUNTS_FILE)
    }
}
