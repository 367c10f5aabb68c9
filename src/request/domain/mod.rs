//! Domain model for the request lifecycle.
//!
//! Requests are created pending, moved freely between statuses by an
//! administrator, and removed only by explicit deletion.

mod error;
mod ids;
mod request;
mod status;

pub use error::{ParseRequestStatusError, RequestDomainError};
pub use ids::{RequestContent, RequestId, RequesterName};
pub use request::{NewRequest, PersistedRequestData, Request};
pub use status::{DisplayStatus, RecordedStatus, RequestStatus};
