//! Request record and submission payload.

use super::{
    RecordedStatus, RequestContent, RequestDomainError, RequestId, RequestStatus, RequesterName,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Validated submission waiting to be inserted.
///
/// The store assigns the identifier and both timestamps on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRequest {
    name: RequesterName,
    content: RequestContent,
    status: RequestStatus,
}

impl NewRequest {
    /// Creates a submission in the initial [`RequestStatus::Pending`] status.
    #[must_use]
    pub const fn new(name: RequesterName, content: RequestContent) -> Self {
        Self {
            name,
            content,
            status: RequestStatus::Pending,
        }
    }

    /// Validates raw submission text.
    ///
    /// # Errors
    ///
    /// Returns [`RequestDomainError::EmptyRequesterName`] or
    /// [`RequestDomainError::EmptyRequestContent`] when either field is
    /// empty after trimming. The name is checked first.
    pub fn from_raw(
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self, RequestDomainError> {
        let requester = RequesterName::new(name)?;
        let body = RequestContent::new(content)?;
        Ok(Self::new(requester, body))
    }

    /// Returns the requester name.
    #[must_use]
    pub const fn name(&self) -> &RequesterName {
        &self.name
    }

    /// Returns the request content.
    #[must_use]
    pub const fn content(&self) -> &RequestContent {
        &self.content
    }

    /// Returns the status the record is inserted with.
    #[must_use]
    pub const fn status(&self) -> RequestStatus {
        self.status
    }
}

/// A request record as held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    id: RequestId,
    name: RequesterName,
    content: RequestContent,
    status: RecordedStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedRequestData {
    /// Persisted request identifier.
    pub id: RequestId,
    /// Persisted requester name.
    pub name: RequesterName,
    /// Persisted request content.
    pub content: RequestContent,
    /// Persisted status, possibly unrecognized.
    pub status: RecordedStatus,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Request {
    /// Reconstructs a request from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedRequestData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            content: data.content,
            status: data.status,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the request identifier.
    #[must_use]
    pub const fn id(&self) -> RequestId {
        self.id
    }

    /// Returns the requester name.
    #[must_use]
    pub const fn name(&self) -> &RequesterName {
        &self.name
    }

    /// Returns the request content.
    #[must_use]
    pub const fn content(&self) -> &RequestContent {
        &self.content
    }

    /// Returns the status as recorded by the store.
    #[must_use]
    pub const fn status(&self) -> &RecordedStatus {
        &self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Key defining submission order: creation time, then identifier.
    #[must_use]
    pub const fn submission_key(&self) -> (DateTime<Utc>, RequestId) {
        (self.created_at, self.id)
    }

    /// Moves the request to `status` and stamps `updated_at`.
    ///
    /// This is the whole transition function: statuses form a flat set, so
    /// every target is accepted from every status, including the current
    /// one and any unrecognized stored value.
    pub fn set_status(&mut self, status: RequestStatus, updated_at: DateTime<Utc>) {
        self.status = RecordedStatus::Known(status);
        self.updated_at = updated_at;
    }
}
