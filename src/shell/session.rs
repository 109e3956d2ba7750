//! Who is playing, and which account (if any) their rounds count toward

use crate::accounts::{Account, AccountStore};
use crate::engine::{OutcomeRecorder, StatsUpdate};
use tracing::{info, warn};

/// Shell context shared by every screen
#[derive(Debug)]
pub struct Session {
    player_name: String,
    store: AccountStore,
    current: Option<(String, Account)>,
}

impl Session {
    #[must_use]
    pub fn new(store: AccountStore) -> Self {
        Self {
            player_name: String::from("Player"),
            store,
            current: None,
        }
    }

    #[must_use]
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn set_player_name(&mut self, name: &str) {
        self.player_name = title_case(name);
    }

    #[must_use]
    pub const fn store(&self) -> &AccountStore {
        &self.store
    }

    /// Make `username` the account that finished rounds are credited to
    pub fn bind(&mut self, username: impl Into<String>, account: Account) {
        let username = username.into();
        info!(%username, "account bound to session");
        self.current = Some((username, account));
    }

    /// Play on without an account
    pub fn unbind(&mut self) {
        if let Some((username, _)) = self.current.take() {
            info!(%username, "account unbound from session");
        }
    }

    /// The bound account and its last known stats
    #[must_use]
    pub fn current(&self) -> Option<(&str, &Account)> {
        self.current
            .as_ref()
            .map(|(username, account)| (username.as_str(), account))
    }
}

impl OutcomeRecorder for Session {
    fn record(&mut self, won: bool) -> StatsUpdate {
        let Some((username, account)) = self.current.as_mut() else {
            return StatsUpdate::NotTracked;
        };

        match self.store.update_stats(username, won) {
            Ok(updated) => {
                *account = updated;
                StatsUpdate::Saved
            }
            Err(e) => {
                warn!(%username, error = %e, "could not save stats");
                StatsUpdate::Failed(e.to_string())
            }
        }
    }
}

/// `"ada lovelace"` -> `"Ada Lovelace"`
#[must_use]
pub fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
