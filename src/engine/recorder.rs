//! Reporting finished rounds to whoever keeps score

/// How a finished round was counted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsUpdate {
    /// Stats were written for the bound account
    Saved,
    /// No account is bound; the round is not tracked
    NotTracked,
    /// An account is bound but the update could not be persisted
    Failed(String),
}

/// Receives the result of every round that ends in a win or a loss
///
/// Aborted rounds are never reported.
pub trait OutcomeRecorder {
    /// Record one finished round
    fn record(&mut self, won: bool) -> StatsUpdate;
}

/// Recorder for play without an account
#[derive(Debug, Clone, Copy, Default)]
pub struct Untracked;

impl OutcomeRecorder for Untracked {
    fn record(&mut self, _won: bool) -> StatsUpdate {
        StatsUpdate::NotTracked
    }
}

impl<T: OutcomeRecorder + ?Sized> OutcomeRecorder for &mut T {
    fn record(&mut self, won: bool) -> StatsUpdate {
        (**self).record(won)
    }
}
