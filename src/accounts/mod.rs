//! Player accounts
//!
//! Registration, login and per-player win/loss counters persisted to a JSON
//! file.

pub mod password;
mod record;
mod store;

pub use password::{MIN_PASSWORD_LENGTH, PasswordError, generate_password, validate_password};
pub use record::{Account, coerce_count, coerce_text};
pub use store::{
    AccountStore, Accounts, AuthError, DEFAULT_ACCOUNTS_FILE, StoreError, parse_accounts,
};
