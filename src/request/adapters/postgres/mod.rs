//! `PostgreSQL` adapters for request persistence.

mod models;
mod schema;
mod store;

pub use store::{PostgresRequestStore, RequestPgPool, connect_pool};
