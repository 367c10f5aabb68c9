//! Identifier and validated text types for the request domain.

use super::RequestDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier for a request record.
///
/// Identifiers are UUIDv7 values drawn from a process-wide monotonic
/// source, so within one process a later insert always sorts after an
/// earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(Uuid);

impl RequestId {
    /// Creates a new time-ordered request identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Creates a request identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Uuid> for RequestId {
    fn as_ref(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Free-text label identifying who submitted a request.
///
/// This is not an account: two submissions with the same name are unrelated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct RequesterName(String);

impl RequesterName {
    /// Creates a requester name, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`RequestDomainError::EmptyRequesterName`] when the value is
    /// empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, RequestDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(RequestDomainError::EmptyRequesterName);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RequesterName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for RequesterName {
    type Error = RequestDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RequesterName> for String {
    fn from(value: RequesterName) -> Self {
        value.0
    }
}

impl fmt::Display for RequesterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Body of a request as written by the submitter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct RequestContent(String);

impl RequestContent {
    /// Creates request content, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`RequestDomainError::EmptyRequestContent`] when the value is
    /// empty after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, RequestDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(RequestDomainError::EmptyRequestContent);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the content as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RequestContent {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for RequestContent {
    type Error = RequestDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RequestContent> for String {
    fn from(value: RequestContent) -> Self {
        value.0
    }
}

impl fmt::Display for RequestContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
