//! Progress feedback while the remote word service is queried

use crate::words::{LookupError, RemoteLookup};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Wraps a lookup with a terminal spinner
///
/// indicatif draws to stderr and stays hidden when stderr isn't a terminal.
#[derive(Debug, Clone)]
pub struct SpinnerLookup<L> {
    inner: L,
}

impl<L: RemoteLookup> SpinnerLookup<L> {
    pub const fn new(inner: L) -> Self {
        Self { inner }
    }
}

impl<L: RemoteLookup> RemoteLookup for SpinnerLookup<L> {
    fn lookup(&self, length: usize) -> Result<String, LookupError> {
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(format!("Picking a {length}-letter word..."));
        spinner.enable_steady_tick(Duration::from_millis(80));

        let result = self.inner.lookup(length);
        spinner.finish_and_clear();
        result
    }
}
