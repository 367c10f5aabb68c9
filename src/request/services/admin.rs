//! Service layer for administrator queue triage.
//!
//! Every successful mutation is followed by a full re-fetch of the record
//! set, and the returned [`QueueSnapshot`] is projected from that fetch.
//! Nothing is patched into a previously fetched snapshot.

use crate::request::{
    domain::{ParseRequestStatusError, RequestId, RequestStatus},
    ports::{RequestStore, RequestStoreError, SubmissionOrder},
    projection::QueueSnapshot,
};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Administrator operations on the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminAction {
    /// Loading the queue.
    FetchQueue,
    /// Changing a request's status.
    SetStatus,
    /// Deleting a request.
    Delete,
}

impl AdminAction {
    /// Returns the notice shown after the action succeeds, if any.
    #[must_use]
    pub const fn success_notice(self) -> Option<&'static str> {
        match self {
            Self::FetchQueue => None,
            Self::SetStatus => Some("Request status updated successfully"),
            Self::Delete => Some("Request deleted successfully"),
        }
    }

    /// Returns the generic notice shown after the action fails.
    #[must_use]
    pub const fn failure_notice(self) -> &'static str {
        match self {
            Self::FetchQueue => "Failed to load requests",
            Self::SetStatus => "Failed to update request status",
            Self::Delete => "Failed to delete request",
        }
    }

    const fn as_str(self) -> &'static str {
        match self {
            Self::FetchQueue => "fetch_queue",
            Self::SetStatus => "set_status",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for AdminAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Service-level errors for queue administration.
#[derive(Debug, Error)]
pub enum QueueAdminError {
    /// No request exists with the given identifier.
    #[error("request {0} not found")]
    NotFound(RequestId),
    /// The requested status is not one of the valid statuses.
    #[error(transparent)]
    InvalidStatus(#[from] ParseRequestStatusError),
    /// The record store failed.
    #[error(transparent)]
    Store(RequestStoreError),
}

impl From<RequestStoreError> for QueueAdminError {
    fn from(err: RequestStoreError) -> Self {
        match err {
            RequestStoreError::NotFound(id) => Self::NotFound(id),
            other => Self::Store(other),
        }
    }
}

/// Result type for queue administration operations.
pub type QueueAdminResult<T> = Result<T, QueueAdminError>;

/// Fetches the queue and applies administrator status changes and
/// deletions.
///
/// Concurrent administrators are not serialized: two writers racing on the
/// same request resolve as last write wins at the store.
pub struct QueueAdminService<S>
where
    S: RequestStore,
{
    store: Arc<S>,
}

impl<S> Clone for QueueAdminService<S>
where
    S: RequestStore,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S> QueueAdminService<S>
where
    S: RequestStore,
{
    /// Creates a new queue administration service.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Fetches every request and projects the queue.
    ///
    /// # Errors
    ///
    /// Returns [`QueueAdminError::Store`] when the store read fails.
    pub async fn fetch_queue(&self) -> QueueAdminResult<QueueSnapshot> {
        let records = self
            .store
            .list_all(SubmissionOrder::OldestFirst)
            .await
            .inspect_err(|err| log_failure(AdminAction::FetchQueue, err))?;
        let snapshot = QueueSnapshot::project(&records);
        debug!(total = snapshot.counts().total, "queue fetched");
        Ok(snapshot)
    }

    /// Moves a request to `status` and returns the re-fetched queue.
    ///
    /// Setting the status a request already has succeeds and only refreshes
    /// its `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`QueueAdminError::NotFound`] when no request has the given
    /// identifier, or [`QueueAdminError::Store`] when the update or the
    /// follow-up fetch fails. After a store failure the caller must fetch
    /// again to learn the persisted status.
    pub async fn set_status(
        &self,
        id: RequestId,
        status: RequestStatus,
    ) -> QueueAdminResult<QueueSnapshot> {
        self.store
            .update_status(id, status)
            .await
            .inspect_err(|err| log_failure(AdminAction::SetStatus, err))?;
        info!(request_id = %id, status = %status, "request status updated");
        self.fetch_queue().await
    }

    /// Parses `status` from its storage form and applies it.
    ///
    /// # Errors
    ///
    /// Returns [`QueueAdminError::InvalidStatus`] when `status` is not a
    /// valid status, otherwise the errors of [`Self::set_status`].
    pub async fn set_status_str(
        &self,
        id: RequestId,
        status: &str,
    ) -> QueueAdminResult<QueueSnapshot> {
        let parsed = RequestStatus::try_from(status).inspect_err(|err| {
            warn!(request_id = %id, error = %err, "status update rejected");
        })?;
        self.set_status(id, parsed).await
    }

    /// Permanently deletes a request and returns the re-fetched queue.
    ///
    /// # Errors
    ///
    /// Returns [`QueueAdminError::NotFound`] when no request has the given
    /// identifier, including a request deleted earlier, or
    /// [`QueueAdminError::Store`] when the delete or the follow-up fetch
    /// fails.
    pub async fn delete(&self, id: RequestId) -> QueueAdminResult<QueueSnapshot> {
        self.store
            .delete(id)
            .await
            .inspect_err(|err| log_failure(AdminAction::Delete, err))?;
        info!(request_id = %id, "request deleted");
        self.fetch_queue().await
    }
}

fn log_failure(action: AdminAction, err: &RequestStoreError) {
    warn!(%action, error = %err, "queue administration failed");
}
