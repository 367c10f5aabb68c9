//! Request triage status and its read-side representations.

use super::ParseRequestStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Triage stage of a request.
///
/// Transitions are unrestricted: an administrator may move a request from
/// any status to any other status, including back to [`Self::Pending`] or
/// straight to [`Self::Completed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    /// Request has been submitted and not yet picked up.
    Pending,
    /// Request is being worked on.
    InProgress,
    /// Request has been fulfilled.
    Completed,
}

impl RequestStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 3] = [Self::Pending, Self::InProgress, Self::Completed];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }

    /// Returns the human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for RequestStatus {
    type Error = ParseRequestStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseRequestStatusError(value.to_owned())),
        }
    }
}

/// Status as read back from the record store.
///
/// The store is expected to hold only [`RequestStatus`] values, but rows
/// written by other clients may carry anything. Reads keep the raw value
/// instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordedStatus {
    /// One of the three valid statuses.
    Known(RequestStatus),
    /// A value outside the status set, kept verbatim.
    Unrecognized(String),
}

impl RecordedStatus {
    /// Parses a persisted status string, keeping unrecognized values.
    #[must_use]
    pub fn from_stored(value: &str) -> Self {
        RequestStatus::try_from(value)
            .map_or_else(|_| Self::Unrecognized(value.to_owned()), Self::Known)
    }

    /// Returns the valid status, if any.
    #[must_use]
    pub const fn known(&self) -> Option<RequestStatus> {
        match self {
            Self::Known(status) => Some(*status),
            Self::Unrecognized(_) => None,
        }
    }
}

impl From<RequestStatus> for RecordedStatus {
    fn from(status: RequestStatus) -> Self {
        Self::Known(status)
    }
}

impl PartialEq<RequestStatus> for RecordedStatus {
    fn eq(&self, other: &RequestStatus) -> bool {
        self.known() == Some(*other)
    }
}

impl fmt::Display for RecordedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(status) => fmt::Display::fmt(status, f),
            Self::Unrecognized(raw) => f.write_str(raw),
        }
    }
}

/// Status as presented in the queue view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayStatus {
    /// Rendered from [`RequestStatus::Pending`].
    Pending,
    /// Rendered from [`RequestStatus::InProgress`].
    InProgress,
    /// Rendered from [`RequestStatus::Completed`].
    Completed,
    /// Rendered from any unrecognized stored value.
    Unknown,
}

impl DisplayStatus {
    /// Returns the human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => RequestStatus::Pending.label(),
            Self::InProgress => RequestStatus::InProgress.label(),
            Self::Completed => RequestStatus::Completed.label(),
            Self::Unknown => "Unknown",
        }
    }
}

impl From<&RecordedStatus> for DisplayStatus {
    fn from(status: &RecordedStatus) -> Self {
        match status.known() {
            Some(RequestStatus::Pending) => Self::Pending,
            Some(RequestStatus::InProgress) => Self::InProgress,
            Some(RequestStatus::Completed) => Self::Completed,
            None => Self::Unknown,
        }
    }
}
