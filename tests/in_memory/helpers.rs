//! Shared test helpers for in-memory queue integration tests.

use crate::test_helpers::FixedClock;
use intake::request::{
    adapters::memory::InMemoryRequestStore,
    domain::Request,
    projection::QueueSnapshot,
    services::{QueueAdminService, SubmissionService},
};
use rstest::fixture;
use std::sync::Arc;

/// Submission and administration services sharing one in-memory store.
pub struct QueueHarness {
    /// Submission workflow.
    pub submission: SubmissionService<InMemoryRequestStore<FixedClock>>,
    /// Status and deletion controller.
    pub admin: QueueAdminService<InMemoryRequestStore<FixedClock>>,
}

impl QueueHarness {
    /// Submits a request, failing the test on error.
    ///
    /// # Errors
    ///
    /// Returns an error if the submission is rejected.
    pub async fn submit(&self, name: &str, content: &str) -> eyre::Result<Request> {
        Ok(self.submission.submit(name, content).await?)
    }

    /// Fetches the queue, failing the test on error.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch fails.
    pub async fn fetch(&self) -> eyre::Result<QueueSnapshot> {
        Ok(self.admin.fetch_queue().await?)
    }
}

/// Provides services over a fresh fixed-clock in-memory store for each test.
#[fixture]
pub fn harness() -> QueueHarness {
    let store = Arc::new(InMemoryRequestStore::with_clock(Arc::new(
        FixedClock::default(),
    )));
    QueueHarness {
        submission: SubmissionService::new(Arc::clone(&store)),
        admin: QueueAdminService::new(store),
    }
}

/// Returns entry names in queue order.
#[must_use]
pub fn queue_names(snapshot: &QueueSnapshot) -> Vec<String> {
    snapshot
        .entries()
        .iter()
        .map(|entry| entry.name.as_str().to_owned())
        .collect()
}
