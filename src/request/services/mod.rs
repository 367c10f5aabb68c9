//! Application services for the request queue.

mod access;
mod admin;
mod submission;

pub use access::{AccessDecision, AdminAccess};
pub use admin::{AdminAction, QueueAdminError, QueueAdminResult, QueueAdminService};
pub use submission::{
    MISSING_FIELDS_NOTICE, SUBMISSION_FAILED_NOTICE, SubmissionError, SubmissionResult,
    SubmissionService,
};
