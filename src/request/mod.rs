//! Request intake and triage queue.
//!
//! End users submit a request with a display name; an administrator fetches
//! the queue, moves requests between statuses, and deletes them. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The pure queue projection in [`projection`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod projection;
pub mod services;

#[cfg(test)]
mod tests;
