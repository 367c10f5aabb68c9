//! Adapter implementations for request queue ports.

pub mod gate;
pub mod memory;
pub mod postgres;
