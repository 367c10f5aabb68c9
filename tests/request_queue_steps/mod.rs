//! Step definitions for request queue BDD scenarios.

pub mod world;
