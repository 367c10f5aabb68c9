//! Service layer for submitting new requests.

use crate::request::{
    domain::{NewRequest, Request, RequestDomainError},
    ports::{RequestStore, RequestStoreError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Notice shown to the submitter when a field is blank.
pub const MISSING_FIELDS_NOTICE: &str = "Please fill in all fields";

/// Notice shown to the submitter when the store rejects the request.
pub const SUBMISSION_FAILED_NOTICE: &str = "Failed to submit request. Please try again.";

/// Service-level errors for request submission.
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// Name or content was empty after trimming.
    #[error(transparent)]
    Validation(#[from] RequestDomainError),
    /// The record store failed to persist the request.
    #[error(transparent)]
    Store(#[from] RequestStoreError),
}

impl SubmissionError {
    /// Returns the notice to show the submitter.
    #[must_use]
    pub const fn user_notice(&self) -> &'static str {
        match self {
            Self::Validation(_) => MISSING_FIELDS_NOTICE,
            Self::Store(_) => SUBMISSION_FAILED_NOTICE,
        }
    }
}

/// Result type for submission operations.
pub type SubmissionResult<T> = Result<T, SubmissionError>;

/// Validates submissions and inserts them as pending requests.
///
/// Identical submissions are not deduplicated and failed inserts are not
/// retried.
pub struct SubmissionService<S>
where
    S: RequestStore,
{
    store: Arc<S>,
}

impl<S> Clone for SubmissionService<S>
where
    S: RequestStore,
{
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S> SubmissionService<S>
where
    S: RequestStore,
{
    /// Creates a new submission service.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Submits a request on behalf of `name`.
    ///
    /// Both fields are trimmed before they are stored.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError::Validation`] when either field is blank,
    /// without touching the store, or [`SubmissionError::Store`] when the
    /// insert fails.
    pub async fn submit(
        &self,
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> SubmissionResult<Request> {
        let new_request = NewRequest::from_raw(name, content).inspect_err(|err| {
            warn!(error = %err, "rejected request submission");
        })?;

        let created = self
            .store
            .insert(&new_request)
            .await
            .inspect_err(|err| warn!(error = %err, "failed to store request submission"))?;
        info!(
            request_id = %created.id(),
            requester = %created.name(),
            "request submitted"
        );
        Ok(created)
    }
}
