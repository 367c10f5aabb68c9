//! Record store port for request persistence.

use crate::request::domain::{NewRequest, Request, RequestId, RequestStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for record store operations.
pub type RequestStoreResult<T> = Result<T, RequestStoreError>;

/// Direction in which [`RequestStore::list_all`] orders records by
/// creation time. Records created at the same instant are ordered by
/// identifier ascending in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionOrder {
    /// Oldest submission first.
    #[default]
    OldestFirst,
    /// Newest submission first.
    NewestFirst,
}

/// Durable request record store.
///
/// Writes are per-record; the contract offers no transactions, locking or
/// version checks. Concurrent writers resolve as last write wins.
#[async_trait]
pub trait RequestStore: Send + Sync {
    /// Inserts a new request, assigning its identifier and timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`RequestStoreError::Persistence`] when the store rejects the
    /// write. No record exists afterwards in that case.
    async fn insert(&self, request: &NewRequest) -> RequestStoreResult<Request>;

    /// Returns every stored request in the given creation order.
    ///
    /// # Errors
    ///
    /// Returns [`RequestStoreError::Persistence`] when the read fails.
    async fn list_all(&self, order: SubmissionOrder) -> RequestStoreResult<Vec<Request>>;

    /// Sets the status of a request and refreshes its `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`RequestStoreError::NotFound`] when no request has the given
    /// identifier.
    async fn update_status(&self, id: RequestId, status: RequestStatus) -> RequestStoreResult<()>;

    /// Permanently removes a request.
    ///
    /// # Errors
    ///
    /// Returns [`RequestStoreError::NotFound`] when no request has the given
    /// identifier, including one that was already deleted.
    async fn delete(&self, id: RequestId) -> RequestStoreResult<()>;
}

/// Errors returned by record store implementations.
#[derive(Debug, Clone, Error)]
pub enum RequestStoreError {
    /// The request was not found.
    #[error("request not found: {0}")]
    NotFound(RequestId),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl RequestStoreError {
    /// Wraps a data-quality or deserialization error from persisted rows.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }

    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
