//! Shared world state for request queue BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use crate::test_helpers::FixedClock;
use intake::request::{
    adapters::memory::InMemoryRequestStore,
    domain::{Request, RequestId},
    projection::QueueSnapshot,
    services::{QueueAdminError, QueueAdminService, SubmissionError, SubmissionService},
};
use rstest::fixture;

/// Scenario world for request queue behaviour tests.
pub struct QueueWorld {
    pub submission: SubmissionService<InMemoryRequestStore<FixedClock>>,
    pub admin: QueueAdminService<InMemoryRequestStore<FixedClock>>,
    pub submitted: HashMap<String, RequestId>,
    pub last_submission: Option<Result<Request, SubmissionError>>,
    pub last_admin_result: Option<Result<QueueSnapshot, QueueAdminError>>,
}

impl QueueWorld {
    /// Creates a world over an empty in-memory store.
    ///
    /// The store clock never advances, so every submission in a scenario
    /// shares one creation instant.
    #[must_use]
    pub fn new() -> Self {
        let store = Arc::new(InMemoryRequestStore::with_clock(Arc::new(
            FixedClock::default(),
        )));
        Self {
            submission: SubmissionService::new(Arc::clone(&store)),
            admin: QueueAdminService::new(store),
            submitted: HashMap::new(),
            last_submission: None,
            last_admin_result: None,
        }
    }

    /// Returns the identifier recorded for a requester's submission.
    pub fn submitted_id(&self, name: &str) -> Result<RequestId, eyre::Report> {
        self.submitted
            .get(name)
            .copied()
            .ok_or_else(|| eyre::eyre!("no submission recorded for {name}"))
    }

    /// Submits a request and records the result.
    pub fn submit(&mut self, name: &str, content: &str) {
        let result = run_async(self.submission.submit(name, content));
        if let Ok(ref created) = result {
            self.submitted.insert(name.to_owned(), created.id());
        }
        self.last_submission = Some(result);
    }
}

impl Default for QueueWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> QueueWorld {
    QueueWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
