//! Port contracts for the request queue.
//!
//! Ports define infrastructure-agnostic interfaces used by request services.

pub mod gate;
pub mod store;

pub use gate::AdminGate;
pub use store::{RequestStore, RequestStoreError, RequestStoreResult, SubmissionOrder};
