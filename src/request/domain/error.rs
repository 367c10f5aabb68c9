//! Error types for request domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain request values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RequestDomainError {
    /// The requester name is empty after trimming.
    #[error("requester name must not be empty")]
    EmptyRequesterName,

    /// The request content is empty after trimming.
    #[error("request content must not be empty")]
    EmptyRequestContent,
}

/// Error returned while parsing request statuses from input or persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown request status: {0}")]
pub struct ParseRequestStatusError(pub String);
