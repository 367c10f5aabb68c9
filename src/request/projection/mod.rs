//! Pure projection of the record set into a display-ready queue.

mod snapshot;

pub use snapshot::{QueueEntry, QueueSnapshot, StatusCounts};
