//! Poll store - client-side copy of the poll collection plus the last error
//!
//! The server owns vote counts. Every mutation here is a single replace or
//! merge of the sequence; nothing is recomputed locally.

use std::sync::Arc;

use chrono::{DateTime, Local};

use crate::error::PollError;
use crate::models::Poll;

#[derive(Debug, Default)]
pub struct PollStore {
    polls: Vec<Arc<Poll>>,
    error: Option<PollError>,
    last_refreshed: Option<DateTime<Local>>,
}

impl PollStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn polls(&self) -> &[Arc<Poll>] {
        &self.polls
    }

    pub fn error(&self) -> Option<PollError> {
        self.error
    }

    pub fn last_refreshed(&self) -> Option<DateTime<Local>> {
        self.last_refreshed
    }

    pub fn get(&self, index: usize) -> Option<&Arc<Poll>> {
        self.polls.get(index)
    }

    /// Successful refresh: the response replaces the whole sequence.
    ///
    /// Overlapping refreshes are not sequenced, so the last one to arrive wins.
    pub fn apply_fetched(&mut self, polls: Vec<Poll>) {
        self.polls = polls.into_iter().map(Arc::new).collect();
        self.error = None;
        self.last_refreshed = Some(Local::now());
    }

    /// Successful create: newest poll goes first
    pub fn apply_created(&mut self, poll: Poll) {
        self.polls.insert(0, Arc::new(poll));
        self.error = None;
    }

    /// Successful vote: swap in the server's copy of the matching poll only.
    ///
    /// Returns false when no stored poll has that id (it may have disappeared
    /// in a refresh); the error is cleared either way.
    pub fn apply_voted(&mut self, poll: Poll) -> bool {
        self.error = None;
        match self.polls.iter_mut().find(|p| p.id == poll.id) {
            Some(slot) => {
                *slot = Arc::new(poll);
                true
            }
            None => false,
        }
    }

    /// Failure of any kind leaves the sequence as it was
    pub fn apply_failed(&mut self, kind: PollError) {
        self.error = Some(kind);
    }
}
