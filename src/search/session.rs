//! Debounced, last-writer-wins search session for the search UI.
//!
//! Every call to [`SearchSession::input`] bumps a generation counter. A
//! [`SearchTicket`] carries the generation it was issued for; both the
//! debounce wait and the result application compare it against the current
//! generation, so superseded keystrokes never reach the backend and stale
//! responses never overwrite newer results.
//!
//! The session does not own a timer or a runtime: callers pass the sleep
//! function (`gloo_timers` in the browser, `tokio::time` in tests).

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::models::search::SearchResult;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// What the search UI displays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchSnapshot {
    pub query: String,
    pub loading: bool,
    pub results: Vec<SearchResult>,
}

impl SearchSnapshot {
    /// True when a non-blank query finished with no results.
    pub fn is_empty_result(&self) -> bool {
        !self.loading && !self.query.trim().is_empty() && self.results.is_empty()
    }
}

/// A pending search for one generation of the query text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    query: String,
}

#[derive(Debug, Default)]
struct SessionState {
    generation: u64,
    snapshot: SearchSnapshot,
}

/// Shared search UI state. Cheap to clone; clones share state.
#[derive(Debug, Clone, Default)]
pub struct SearchSession {
    state: Arc<Mutex<SessionState>>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Record new query text.
    ///
    /// Returns a ticket to run when the text is non-blank. Blank text clears
    /// the results immediately and returns `None`.
    pub fn input(&self, text: &str) -> Option<SearchTicket> {
        let mut state = self.lock();
        state.generation += 1;
        state.snapshot.query = text.to_string();

        if text.trim().is_empty() {
            state.snapshot.loading = false;
            state.snapshot.results.clear();
            return None;
        }

        state.snapshot.loading = true;
        Some(SearchTicket {
            generation: state.generation,
            query: text.to_string(),
        })
    }

    /// Search the current text again, superseding any outstanding ticket.
    /// `None` when the text is blank.
    pub fn refresh(&self) -> Option<SearchTicket> {
        let text = self.lock().snapshot.query.clone();
        self.input(&text)
    }

    pub fn is_current(&self, ticket: &SearchTicket) -> bool {
        self.lock().generation == ticket.generation
    }

    /// Publish `results` if `ticket` is still the latest. Returns whether
    /// they were applied.
    pub fn apply(&self, ticket: &SearchTicket, results: Vec<SearchResult>) -> bool {
        let mut state = self.lock();
        if state.generation != ticket.generation {
            return false;
        }

        state.snapshot.results = results;
        state.snapshot.loading = false;
        true
    }

    /// Wait out the debounce delay, then search and publish.
    ///
    /// `search` is only invoked when no newer input arrived during `delay`.
    /// Returns whether results were applied.
    pub async fn run<S, SF, F, FF>(
        &self,
        ticket: SearchTicket,
        delay: Duration,
        sleep: S,
        search: F,
    ) -> bool
    where
        S: FnOnce(Duration) -> SF,
        SF: Future<Output = ()>,
        F: FnOnce(String) -> FF,
        FF: Future<Output = Vec<SearchResult>>,
    {
        sleep(delay).await;
        if !self.is_current(&ticket) {
            return false;
        }

        let results = search(ticket.query.clone()).await;
        let applied = self.apply(&ticket, results);
        if !applied {
            tracing::debug!(
                generation = ticket.generation,
                "Discarding results of a superseded search"
            );
        }
        applied
    }

    pub fn snapshot(&self) -> SearchSnapshot {
        self.lock().snapshot.clone()
    }

    /// Reset to an empty session and invalidate all outstanding tickets.
    pub fn close(&self) {
        let mut state = self.lock();
        state.generation += 1;
        state.snapshot = SearchSnapshot::default();
    }
}
