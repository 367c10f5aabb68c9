//! In-memory record store for tests and local runs.

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::request::{
    domain::{NewRequest, PersistedRequestData, Request, RequestId, RequestStatus},
    ports::{RequestStore, RequestStoreError, RequestStoreResult, SubmissionOrder},
};

/// Thread-safe in-memory request store.
///
/// Timestamps come from the injected clock. Identifiers are time-ordered,
/// so records stamped with the same instant still list in insert order.
pub struct InMemoryRequestStore<C = DefaultClock>
where
    C: Clock + Send + Sync,
{
    state: Arc<RwLock<HashMap<RequestId, Request>>>,
    clock: Arc<C>,
}

impl InMemoryRequestStore<DefaultClock> {
    /// Creates an empty store using the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(DefaultClock))
    }
}

impl Default for InMemoryRequestStore<DefaultClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> InMemoryRequestStore<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty store using the given clock.
    #[must_use]
    pub fn with_clock(clock: Arc<C>) -> Self {
        Self {
            state: Arc::new(RwLock::new(HashMap::new())),
            clock,
        }
    }
}

impl<C> Clone for InMemoryRequestStore<C>
where
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            clock: Arc::clone(&self.clock),
        }
    }
}

fn lock_error(err: impl ToString) -> RequestStoreError {
    RequestStoreError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl<C> RequestStore for InMemoryRequestStore<C>
where
    C: Clock + Send + Sync + 'static,
{
    async fn insert(&self, request: &NewRequest) -> RequestStoreResult<Request> {
        let mut state = self.state.write().map_err(lock_error)?;
        // Drawn under the write lock so identifier order matches insert order.
        let id = RequestId::new();

        let timestamp = self.clock.utc();
        let stored = Request::from_persisted(PersistedRequestData {
            id,
            name: request.name().clone(),
            content: request.content().clone(),
            status: request.status().into(),
            created_at: timestamp,
            updated_at: timestamp,
        });
        state.insert(id, stored.clone());
        Ok(stored)
    }

    async fn list_all(&self, order: SubmissionOrder) -> RequestStoreResult<Vec<Request>> {
        let state = self.state.read().map_err(lock_error)?;
        let mut requests: Vec<Request> = state.values().cloned().collect();
        match order {
            SubmissionOrder::OldestFirst => requests.sort_by_key(Request::submission_key),
            SubmissionOrder::NewestFirst => {
                requests.sort_by_key(|request| (Reverse(request.created_at()), request.id()));
            }
        }
        Ok(requests)
    }

    async fn update_status(&self, id: RequestId, status: RequestStatus) -> RequestStoreResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let request = state.get_mut(&id).ok_or(RequestStoreError::NotFound(id))?;
        request.set_status(status, self.clock.utc());
        Ok(())
    }

    async fn delete(&self, id: RequestId) -> RequestStoreResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        state
            .remove(&id)
            .map(|_| ())
            .ok_or(RequestStoreError::NotFound(id))
    }
}
