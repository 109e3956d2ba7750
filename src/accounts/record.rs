//! Persisted per-player record
//!
//! The account file is hand-editable JSON, so every field is read leniently:
//! missing fields default, wrong-typed fields are coerced or zeroed. That
//! coercion happens here, at the deserialization boundary, and nowhere else.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One player's credentials and results
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    #[serde(default, deserialize_with = "lenient_text")]
    pub password: String,
    #[serde(default, deserialize_with = "lenient_count")]
    pub wins: u32,
    #[serde(default, deserialize_with = "lenient_count")]
    pub losses: u32,
    #[serde(default, deserialize_with = "lenient_count")]
    pub plays: u32,
}

impl Account {
    /// Fresh account with zeroed stats
    #[must_use]
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
            ..Self::default()
        }
    }

    /// Count one finished round; `plays` always moves with `wins` or `losses`
    pub fn record(&mut self, won: bool) {
        self.plays = self.plays.saturating_add(1);
        if won {
            self.wins = self.wins.saturating_add(1);
        } else {
            self.losses = self.losses.saturating_add(1);
        }
    }

    /// Percentage of plays that were wins (0 with no plays)
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.plays == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.plays) * 100.0
        }
    }

    /// Check a login attempt; an account with no stored password never matches
    #[must_use]
    pub fn password_matches(&self, attempt: &str) -> bool {
        !self.password.is_empty() && self.password == attempt
    }
}

/// Coerce any JSON value to a counter
///
/// Integers are clamped to `0..=u32::MAX`, floats truncated, integer strings
/// parsed, booleans map to 1/0, everything else is 0.
#[must_use]
pub fn coerce_count(value: &Value) -> u32 {
    match value {
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                u32::try_from(u).unwrap_or(u32::MAX)
            } else if let Some(f) = n.as_f64() {
                // Negative and NaN saturate to 0
                f as u32
            } else {
                0
            }
        }
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_or(0, |i| u32::try_from(i.max(0)).unwrap_or(u32::MAX)),
        Value::Bool(b) => u32::from(*b),
        Value::Null | Value::Array(_) | Value::Object(_) => 0,
    }
}

/// Coerce any JSON value to a password string
///
/// Strings pass through, numbers are stringified, everything else is empty.
#[must_use]
pub fn coerce_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

fn lenient_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    Value::deserialize(deserializer).map(|value| coerce_count(&value))
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Value::deserialize(deserializer).map(|value| coerce_text(&value))
}
