//! In-memory adapters for the request queue.

mod store;

pub use store::InMemoryRequestStore;
