//! Unit tests for the request queue.
