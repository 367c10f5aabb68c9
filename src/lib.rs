//! Intake: request submission and triage queue.
//!
//! End users submit a free-text request under a display name. An
//! administrator reviews the queue in submission order, moves requests
//! between `pending`, `in_progress` and `completed`, and deletes them.
//!
//! # Architecture
//!
//! Intake follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, access gate)
//!
//! # Modules
//!
//! - [`request`]: Request lifecycle, queue projection and services
//! - [`config`]: Runtime configuration for the `intake` binary

pub mod config;
pub mod request;
