//! Queue snapshot derived from the full record set.

use crate::request::domain::{
    DisplayStatus, RecordedStatus, Request, RequestContent, RequestId, RequestStatus,
    RequesterName,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Number of requests per status.
///
/// Requests whose stored status is unrecognized count only towards
/// `total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct StatusCounts {
    /// Requests in [`RequestStatus::Pending`].
    pub pending: usize,
    /// Requests in [`RequestStatus::InProgress`].
    pub in_progress: usize,
    /// Requests in [`RequestStatus::Completed`].
    pub completed: usize,
    /// All requests.
    pub total: usize,
}

impl StatusCounts {
    /// Returns the count for one status.
    #[must_use]
    pub const fn of(&self, status: RequestStatus) -> usize {
        match status {
            RequestStatus::Pending => self.pending,
            RequestStatus::InProgress => self.in_progress,
            RequestStatus::Completed => self.completed,
        }
    }

    fn record(&mut self, status: &RecordedStatus) {
        self.total += 1;
        match status.known() {
            Some(RequestStatus::Pending) => self.pending += 1,
            Some(RequestStatus::InProgress) => self.in_progress += 1,
            Some(RequestStatus::Completed) => self.completed += 1,
            None => {}
        }
    }
}

/// A request positioned in the queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueueEntry {
    /// One-based position in submission order.
    pub ordinal: usize,
    /// Request identifier.
    pub id: RequestId,
    /// Submitter label.
    pub name: RequesterName,
    /// Request body.
    pub content: RequestContent,
    /// Status as rendered for display.
    pub status: DisplayStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Read-only view of the queue at the time of a fetch.
///
/// A snapshot is never a source of truth: every mutation is followed by a
/// fresh fetch and a new snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueueSnapshot {
    counts: StatusCounts,
    entries: Vec<QueueEntry>,
}

impl QueueSnapshot {
    /// Projects a record set into a snapshot.
    ///
    /// Entries are ordered by creation time, then by identifier, regardless
    /// of the order `records` arrive in. The input is not modified.
    #[must_use]
    pub fn project(records: &[Request]) -> Self {
        let mut ordered: Vec<&Request> = records.iter().collect();
        ordered.sort_by_key(|request| request.submission_key());

        let mut counts = StatusCounts::default();
        let entries = ordered
            .into_iter()
            .enumerate()
            .map(|(index, request)| {
                counts.record(request.status());
                QueueEntry {
                    ordinal: index + 1,
                    id: request.id(),
                    name: request.name().clone(),
                    content: request.content().clone(),
                    status: DisplayStatus::from(request.status()),
                    created_at: request.created_at(),
                    updated_at: request.updated_at(),
                }
            })
            .collect();

        Self { counts, entries }
    }

    /// Returns the per-status counts.
    #[must_use]
    pub const fn counts(&self) -> StatusCounts {
        self.counts
    }

    /// Returns entries oldest first.
    #[must_use]
    pub fn entries(&self) -> &[QueueEntry] {
        &self.entries
    }

    /// Returns entries newest first, keeping their submission ordinals.
    pub fn newest_first(&self) -> impl Iterator<Item = &QueueEntry> {
        self.entries.iter().rev()
    }

    /// Finds the entry for a request.
    #[must_use]
    pub fn entry(&self, id: RequestId) -> Option<&QueueEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the queue holds no requests.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
