//! Search session - query state, fetch scheduling and response sequencing
//!
//! Owns the search text and the displayed result list. A fetch is issued at
//! mount and whenever the query differs from the one last requested; repeated
//! update passes with the same query never issue more requests. Every request
//! carries a sequence number and only the response to the latest request is
//! applied.

use tracing::{debug, error};

use crate::api::{FetchError, SystemRecord};

/// Outcome of the most recent search request
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchStatus {
    /// Nothing issued yet
    #[default]
    Idle,
    /// Latest request still in flight
    Loading,
    /// Latest request succeeded
    Loaded,
    /// Latest request failed
    Failed(FetchError),
}

/// A search request that has been scheduled but not yet settled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub seq: u64,
    pub query: String,
}

/// What happened to a settled response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// Result list replaced with this many records
    Replaced(usize),
    /// Error recorded, result list kept
    Failed,
    /// Error recorded, result list cleared
    Cleared,
    /// Response belonged to a superseded request
    Stale,
}

/// Search view state
#[derive(Debug, Default)]
pub struct SearchSession {
    query: String,
    results: Vec<SystemRecord>,
    status: FetchStatus,
    next_seq: u64,
    latest_seq: Option<u64>,
    /// Query of the last issued request; `None` until mount
    requested_query: Option<String>,
}

impl SearchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[SystemRecord] {
        &self.results
    }

    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }

    /// Sequence number of the most recently issued request
    pub fn latest_seq(&self) -> Option<u64> {
        self.latest_seq
    }

    /// Set the search text as typed, without trimming
    pub fn update_search_text(&mut self, value: impl Into<String>) {
        self.query = value.into();
    }

    /// Fetch reaction, run after every update pass
    ///
    /// Returns a ticket when the query has changed since the last request
    /// or when nothing has been requested yet.
    pub fn poll_fetch(&mut self) -> Option<FetchTicket> {
        if self.requested_query.as_deref() == Some(self.query.as_str()) {
            return None;
        }
        Some(self.issue())
    }

    /// Force a new request for the current query
    pub fn retry(&mut self) -> FetchTicket {
        self.issue()
    }

    fn issue(&mut self) -> FetchTicket {
        self.next_seq += 1;
        let seq = self.next_seq;
        self.latest_seq = Some(seq);
        self.requested_query = Some(self.query.clone());
        self.status = FetchStatus::Loading;
        FetchTicket {
            seq,
            query: self.query.clone(),
        }
    }

    /// Apply a settled response
    pub fn apply(&mut self, seq: u64, outcome: Result<Vec<SystemRecord>, FetchError>) -> Applied {
        if self.latest_seq != Some(seq) {
            debug!(
                "Discarding stale search response #{} (latest #{:?})",
                seq, self.latest_seq
            );
            return Applied::Stale;
        }

        match outcome {
            Ok(systems) => {
                let count = systems.len();
                self.results = systems;
                self.status = FetchStatus::Loaded;
                Applied::Replaced(count)
            }
            Err(e) => {
                error!("Search request #{} failed: {}", seq, e);
                let applied = if matches!(e, FetchError::Decode(_)) {
                    self.results.clear();
                    Applied::Cleared
                } else {
                    Applied::Failed
                };
                self.status = FetchStatus::Failed(e);
                applied
            }
        }
    }
}
